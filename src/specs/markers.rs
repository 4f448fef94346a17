// src/specs/markers.rs

/// Live page sentences, as they appear in the fused page text.
pub const NOT_REGISTERED: &str =
    "Esta cédula de identidad no se encuentra inscrito en el Registro Electoral";
pub const NOT_EXISTS: &str =
    "Esta cédula de identidad no se encuentra inscrita en el Registro Electoral";
pub const OBJECTION: &str =
    "Esta cédula de identidad presenta una objeción por lo que no podrá ejercer su derecho al voto";

/// Captures the objection reason between its label and the description label.
pub const OBJECTION_PATTERN: &str = r"Objeción:(.*?)Descripción";

/// Normalized objection reason that means the voter is dead.
pub const DECEASED_REASON: &str = "Fallecido";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NotRegistered,
    NotExists,
    Objection,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::NotRegistered => "NOT_REGISTER",
            RuleKind::NotExists     => "NOT_EXISTS",
            RuleKind::Objection     => "OBJECTION",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerRule {
    pub kind: RuleKind,
    pub marker: String,
}

/// Rules in evaluation order.
pub fn default_rules() -> Vec<MarkerRule> {
    vec![
        MarkerRule { kind: RuleKind::NotRegistered, marker: s!(NOT_REGISTERED) },
        MarkerRule { kind: RuleKind::NotExists,     marker: s!(NOT_EXISTS) },
        MarkerRule { kind: RuleKind::Objection,     marker: s!(OBJECTION) },
    ]
}
