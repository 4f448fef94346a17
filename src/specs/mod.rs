// src/specs/mod.rs
//! # Page "specs" for the registry lookup page
//!
//! Everything that knows *what the CNE answer page says* lives here, and nothing
//! else does. The query client hands over the page's visible text (see
//! `core::html::page_text`) and gets back either a terminal verdict or a parsed
//! registered record.
//!
//! ## What lives here
//! - **Marker rules** (`markers`): the ordered list of sentences that identify a
//!   non-registered outcome, as per-instance configuration.
//! - **Classification** (`classify`): walks the rules in order, extracts objection
//!   reasons with a regex and decides deceased vs. disabled.
//! - **Layout** (`layout`): the registered-voter page parser, behind `PageLayout`.
//!
//! ## What does **not** live here
//! - Networking, status codes, retries (`query`, `core::net`).
//! - Files, batches, progress (`batch`, `file`, `import`).
//!
//! ## Conventions & invariants
//! - Input text is already whitespace-collapsed; adjacent HTML text nodes are fused.
//! - Rule order is fixed: not-registered, not-exists, objection. First match wins.
//! - An objection without an extractable reason is an error, never a fallthrough.
//! - The positional layout depends on the heading order of the live page. If the
//!   page changes, swap the `PageLayout`, not the classifier.
pub mod classify;
pub mod layout;
pub mod markers;

pub use classify::{Classifier, Verdict};
pub use layout::{PageLayout, PositionalLayout};
pub use markers::{MarkerRule, RuleKind};
