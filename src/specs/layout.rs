// src/specs/layout.rs
use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};
use crate::record::{Enrollment, Record};

/// Turns the text of a registered-voter page into a record.
pub trait PageLayout {
    fn parse(&self, identifier: &str, text: &str) -> Result<Record>;
}

/// Headings and page boilerplate that get cut out, in replacement order.
pub const HEADINGS: [&str; 11] = [
    "Cédula:",
    "Nombre:",
    "Estado:",
    "Municipio:",
    "Parroquia:",
    "Centro:",
    "Dirección:",
    "Registro Electoral",
    "Impresión de Consulta de Datos",
    "SERVICIO ELECTORAL",
    "Registro ElectoralCorte",
];

const SEP: char = '|';

// Segment index → field. 0 is whatever precedes the first heading,
// 1 is the cédula as displayed (the request identifier is kept instead).
const IX_NAME: usize = 2;
const IX_STATE: usize = 3;
const IX_MUNICIPALITY: usize = 4;
const IX_PARISH: usize = 5;
const IX_FACILITY: usize = 6;
const IX_ADDRESS: usize = 7;

/// The CNE page as of today: fields are whatever sits between consecutive headings.
///
/// Positional by construction. A page that adds, drops or reorders a heading
/// shifts every field after it; a page that is too short is rejected with
/// `Error::UnexpectedLayout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalLayout;

impl PositionalLayout {
    pub fn segments(text: &str) -> Vec<String> {
        let mut content = s!(text);
        for h in HEADINGS {
            content = content.replace(h, "|");
        }
        content
            .trim()
            .split(SEP)
            .map(normalize_ws)
            .collect()
    }
}

impl PageLayout for PositionalLayout {
    fn parse(&self, identifier: &str, text: &str) -> Result<Record> {
        let seg = Self::segments(text);
        if seg.len() <= IX_ADDRESS {
            return Err(Error::UnexpectedLayout {
                identifier: s!(identifier),
                expected: IX_ADDRESS + 1,
                found: seg.len(),
            });
        }
        Ok(Record::registered(identifier, Enrollment {
            full_name: seg[IX_NAME].clone(),
            state: seg[IX_STATE].clone(),
            municipality: seg[IX_MUNICIPALITY].clone(),
            parish: seg[IX_PARISH].clone(),
            facility: seg[IX_FACILITY].clone(),
            address: seg[IX_ADDRESS].clone(),
        }))
    }
}
