// src/record.rs
//! Canonical query result and the closed set of outcome codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::title_case;

/// Outcome of a registry lookup. Codes are fixed; files and the GUI show them as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    Registered,
    Deceased,
    Disabled,
    Abroad,
    NoResponse,
    NotRegistered,
    NotExists,
}

/// Code → human text. Anything not listed renders as "Sin Respuesta".
static STATUS_TEXT: &[(u16, &str)] = &[
    (100, "Inscrito"),
    (120, "Fallecido"),
    (130, "Inhabilitado"),
    (170, "Fuera del País"),
    (900, "Cédula no inscrita"),
    (950, "Cédula No existe"),
];

const NO_RESPONSE_TEXT: &str = "Sin Respuesta";

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Registered,
        Status::Deceased,
        Status::Disabled,
        Status::Abroad,
        Status::NoResponse,
        Status::NotRegistered,
        Status::NotExists,
    ];

    pub fn code(self) -> u16 {
        match self {
            Status::Registered    => 100,
            Status::Deceased      => 120,
            Status::Disabled      => 130,
            Status::Abroad        => 170,
            Status::NoResponse    => 500,
            Status::NotRegistered => 900,
            Status::NotExists     => 950,
        }
    }

    pub fn from_code(code: u16) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn text(self) -> &'static str {
        status_text(self.code())
    }

    pub fn is_terminal(self) -> bool {
        self != Status::NoResponse
    }
}

/// Text for a raw code, including codes outside the enumeration.
pub fn status_text(code: u16) -> &'static str {
    STATUS_TEXT
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, t)| *t)
        .unwrap_or(NO_RESPONSE_TEXT)
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        s.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = String;
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Status::from_code(code).ok_or_else(|| format!("unknown status code {code}"))
    }
}

/// Descriptive fields of a registered voter, in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enrollment {
    pub full_name: String,
    pub state: String,
    pub municipality: String,
    pub parish: String,
    pub facility: String,
    pub address: String,
}

/// One normalized registry answer.
///
/// Fields are private: the identifier is fixed at construction and the descriptive
/// fields only exist on registered records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    cedula: String,
    status: Status,
    full_name: Option<String>,
    facility: Option<String>,
    state: Option<String>,
    municipality: Option<String>,
    parish: Option<String>,
    address: Option<String>,
}

pub const RECORD_HEADERS: [&str; 8] = [
    "Cédula",
    "Cod.",
    "Nombre y Apellido",
    "Centro",
    "Estado",
    "Municipio",
    "Parroquia",
    "Dirección",
];

impl Record {
    /// Fresh record for a pending query.
    pub fn new(identifier: &str) -> Self {
        Self::with_status(identifier, Status::NoResponse)
    }

    /// Record without descriptive fields (every non-registered outcome).
    pub fn with_status(identifier: &str, status: Status) -> Self {
        Self {
            cedula: identifier.to_uppercase(),
            status,
            full_name: None,
            facility: None,
            state: None,
            municipality: None,
            parish: None,
            address: None,
        }
    }

    pub fn registered(identifier: &str, e: Enrollment) -> Self {
        Self {
            cedula: identifier.to_uppercase(),
            status: Status::Registered,
            full_name: titled(&e.full_name),
            facility: titled(&e.facility),
            state: titled(&e.state),
            municipality: titled(&e.municipality),
            parish: titled(&e.parish),
            address: titled(&e.address),
        }
    }

    pub fn cedula(&self) -> &str { &self.cedula }
    pub fn status(&self) -> Status { self.status }
    pub fn status_text(&self) -> &'static str { self.status.text() }
    pub fn full_name(&self) -> Option<&str> { self.full_name.as_deref() }
    pub fn facility(&self) -> Option<&str> { self.facility.as_deref() }
    pub fn state(&self) -> Option<&str> { self.state.as_deref() }
    pub fn municipality(&self) -> Option<&str> { self.municipality.as_deref() }
    pub fn parish(&self) -> Option<&str> { self.parish.as_deref() }
    pub fn address(&self) -> Option<&str> { self.address.as_deref() }

    /// Positional row: cédula, code, name, facility, state, municipality, parish, address.
    /// Absent fields become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            self.cedula.clone(),
            self.status.code().to_string(),
            opt(&self.full_name),
            opt(&self.facility),
            opt(&self.state),
            opt(&self.municipality),
            opt(&self.parish),
            opt(&self.address),
        ]
    }
}

fn titled(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(title_case(s)) }
}
