// src/dni.rs
//! Identifier normalizer: free-form cédula input → `(nationality, number)`.

use std::fmt;

use crate::core::sanitize::{alnum_only, digits_only};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nationality {
    /// Venezuelan
    #[default]
    V,
    /// Foreign resident
    E,
}

impl Nationality {
    /// Exactly `E` (any case) is foreign; everything else, empty or padded
    /// included, is `V`.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("e") { Nationality::E } else { Nationality::V }
    }

    pub fn as_str(self) -> &'static str {
        match self { Nationality::V => "V", Nationality::E => "E" }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized national ID. `number` holds digits only and may be empty for
/// garbage input; the batch runner rejects those when coercing to an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dni {
    pub nationality: Nationality,
    pub number: String,
}

impl Dni {
    /// Canonical token, "V-12000000".
    pub fn token(&self) -> String {
        format!("{}-{}", self.nationality, self.number)
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.nationality, self.number)
    }
}

/// Raw input accepted by [`format_dni`].
#[derive(Clone, Copy, Debug)]
pub enum RawDni<'a> {
    Number(u64),
    Text(&'a str),
}

impl From<u64> for RawDni<'_> {
    fn from(n: u64) -> Self { RawDni::Number(n) }
}

impl<'a> From<&'a str> for RawDni<'a> {
    fn from(s: &'a str) -> Self { RawDni::Text(s) }
}

impl<'a> From<&'a String> for RawDni<'a> {
    fn from(s: &'a String) -> Self { RawDni::Text(s.as_str()) }
}

/// Normalize `12000000`, `"12000000"`, `"V12000000"`, `"V-12000000"`, `"E-12.000.000"`.
pub fn format_dni<'a>(raw: impl Into<RawDni<'a>>) -> Dni {
    match raw.into() {
        RawDni::Number(n) => Dni { nationality: Nationality::V, number: n.to_string() },
        RawDni::Text(s) if s.contains('-') => separate_dni(s),
        RawDni::Text(s) => {
            let clean = alnum_only(s);
            let lower = clean.to_lowercase();
            let has_v = lower.contains('v');
            let has_e = lower.contains('e');

            if !has_v && !has_e {
                return Dni { nationality: Nationality::V, number: digits_only(&clean) };
            }
            // Leading letter is the nationality; stray letters elsewhere are dropped.
            let mut chars = clean.chars();
            chars.next();
            Dni {
                nationality: if has_e { Nationality::E } else { Nationality::V },
                number: digits_only(chars.as_str()),
            }
        }
    }
}

/// "E-12.000.000" → `E`, "12000000". Splits on the first dash only.
pub fn separate_dni(s: &str) -> Dni {
    let (nat, num) = s.split_once('-').unwrap_or(("", s));
    Dni {
        nationality: Nationality::parse(&nat.to_uppercase()),
        number: digits_only(num),
    }
}

/// One-call token form, used by the importers.
pub fn format_dni_to_str<'a>(raw: impl Into<RawDni<'a>>) -> String {
    format_dni(raw).token()
}
