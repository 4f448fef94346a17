// src/specs/classify.rs
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::Status;
use crate::core::sanitize::title_case;
use super::markers::{self, MarkerRule, RuleKind};

static OBJECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(markers::OBJECTION_PATTERN).expect("objection pattern compiles"));

// "(1)", "(12)" annotations trailing an objection reason
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("annotation pattern compiles"));

/// What the page text says, before any field parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Final answer; the record carries no descriptive fields.
    Terminal(Status),
    /// No marker matched: parse the page as a registered voter.
    Registered,
}

/// Ordered marker rules plus the objection sub-pattern. Each client owns one.
#[derive(Clone, Debug)]
pub struct Classifier {
    rules: Vec<MarkerRule>,
    objection: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: markers::default_rules(),
            objection: OBJECTION_RE.clone(),
        }
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[MarkerRule] {
        &self.rules
    }

    pub fn marker(&self, kind: RuleKind) -> Option<&str> {
        self.rules.iter().find(|r| r.kind == kind).map(|r| r.marker.as_str())
    }

    /// Replace the sentence for one rule; evaluation order does not change.
    pub fn set_marker(&mut self, kind: RuleKind, marker: impl Into<String>) {
        let marker = marker.into();
        match self.rules.iter_mut().find(|r| r.kind == kind) {
            Some(rule) => rule.marker = marker,
            None => self.rules.push(MarkerRule { kind, marker }),
        }
    }

    /// The pattern must have one capture group around the reason.
    pub fn set_objection_pattern(&mut self, pattern: &str) -> Result<()> {
        self.objection = Regex::new(pattern)?;
        Ok(())
    }

    pub fn objection_pattern(&self) -> &str {
        self.objection.as_str()
    }

    /// Walk the rules in order; first marker found in `text` decides.
    pub fn classify(&self, identifier: &str, text: &str) -> Result<Verdict> {
        for rule in &self.rules {
            if rule.marker.is_empty() || !text.contains(&rule.marker) {
                continue;
            }
            debug!("Classify: {} matched {}", identifier, rule.kind.name());
            return match rule.kind {
                RuleKind::NotRegistered => Ok(Verdict::Terminal(Status::NotRegistered)),
                RuleKind::NotExists     => Ok(Verdict::Terminal(Status::NotExists)),
                RuleKind::Objection     => self.classify_objection(identifier, text),
            };
        }
        Ok(Verdict::Registered)
    }

    fn classify_objection(&self, identifier: &str, text: &str) -> Result<Verdict> {
        match self.objection_reason(text) {
            Some(reason) if reason == markers::DECEASED_REASON => {
                Ok(Verdict::Terminal(Status::Deceased))
            }
            Some(reason) => {
                debug!("Classify: {} objection reason {:?}", identifier, reason);
                Ok(Verdict::Terminal(Status::Disabled))
            }
            None => {
                warn!("Classify: {} has an objection marker but no readable reason", identifier);
                Err(Error::ClassificationAmbiguity { identifier: s!(identifier) })
            }
        }
    }

    /// Cleaned objection reason ("FALLECIDO (1)" → "Fallecido"); `None` when the
    /// pattern does not match or leaves nothing behind.
    pub fn objection_reason(&self, text: &str) -> Option<String> {
        let caps = self.objection.captures(text)?;
        let raw = caps.get(1)?.as_str().trim();
        let cleaned = ANNOTATION_RE.replace_all(raw, "");
        let reason = title_case(&cleaned).trim().to_string();
        if reason.is_empty() { None } else { Some(reason) }
    }
}
