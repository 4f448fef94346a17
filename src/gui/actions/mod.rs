// src/gui/actions/mod.rs
//
// Button actions. Layout stays in components; the work happens here.

mod copy;
mod export;
mod import;
mod query;

pub use copy::copy;
pub use export::export;
pub use import::import;
pub use query::{entries_from_text, query};
