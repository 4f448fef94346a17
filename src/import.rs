// src/import.rs
//! Identifier import from TXT, CSV, JSON and XLSX files. Every reader returns
//! "N-DIGITS" tokens ready for [`crate::batch::Batch::process`].

use std::fs;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::sanitize::digits_only;
use crate::csv::parse_rows;
use crate::dni::format_dni_to_str;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportFormat {
    Txt,
    Csv,
    Json,
    Xlsx,
}

impl ImportFormat {
    pub const ALL: [ImportFormat; 4] = [
        ImportFormat::Txt,
        ImportFormat::Csv,
        ImportFormat::Json,
        ImportFormat::Xlsx,
    ];

    pub fn ext(&self) -> &'static str {
        match self {
            ImportFormat::Txt  => "txt",
            ImportFormat::Csv  => "csv",
            ImportFormat::Json => "json",
            ImportFormat::Xlsx => "xlsx",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim().trim_start_matches('.').to_ascii_lowercase();
        ImportFormat::ALL.into_iter().find(|f| f.ext() == n)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_name(ext).ok_or_else(|| Error::UnknownFormat(s!(ext)))
    }
}

/// Reader settings that only some formats look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    /// TXT: first line is a header.
    pub has_header: bool,
    /// CSV: field delimiter.
    pub delimiter: char,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { has_header: true, delimiter: ',' }
    }
}

/// Read tokens from `path`; `format: None` picks the reader by file extension.
pub fn read_tokens(path: &Path, format: Option<ImportFormat>, opts: ImportOptions) -> Result<Vec<String>> {
    let format = match format {
        Some(f) => f,
        None => ImportFormat::from_path(path)?,
    };
    let tokens = match format {
        ImportFormat::Txt  => read_txt(path, opts.has_header)?,
        ImportFormat::Csv  => read_csv(path, opts.delimiter)?,
        ImportFormat::Json => read_json(path)?,
        ImportFormat::Xlsx => read_xlsx(path)?,
    };
    info!("Import: {:?} {} → {} identifiers", format, path.display(), tokens.len());
    Ok(tokens)
}

fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Two or more values: nationality + number; one value: any accepted form.
fn token_from_values(values: &[String]) -> Option<String> {
    match values {
        [] => None,
        [one] => Some(format_dni_to_str(one)),
        [nat, num, ..] => Some(format!("{}-{}", nat.trim(), digits_only(num))),
    }
}

pub fn read_txt(path: &Path, has_header: bool) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(text
        .trim_start_matches('\u{feff}')
        .lines()
        .skip(usize::from(has_header))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format_dni_to_str(l))
        .collect())
}

/// First row is always the header.
pub fn read_csv(path: &Path, delimiter: char) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(parse_rows(&text, delimiter)
        .into_iter()
        .skip(1)
        .filter_map(|row| token_from_values(&row))
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonNumber {
    Int(u64),
    Text(String),
}

#[derive(Deserialize)]
struct JsonEntry {
    nacionalidad: String,
    cedula: JsonNumber,
}

pub fn read_json(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    let entries: Vec<JsonEntry> = serde_json::from_str(&text)?;
    Ok(entries
        .into_iter()
        .map(|e| {
            let number = match e.cedula {
                JsonNumber::Int(n) => n.to_string(),
                JsonNumber::Text(s) => digits_only(&s),
            };
            format!("{}-{}", e.nacionalidad.trim().to_uppercase(), number)
        })
        .collect())
}

/// Cell as text. Whole numbers lose the `.0` a float cell would print with.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::Float(f) if f.fract() == 0.0 && *f >= 0.0 => format!("{}", *f as u64),
        Data::Int(n) => n.to_string(),
        other => other.to_string(),
    };
    if text.trim().is_empty() { None } else { Some(text) }
}

/// First worksheet; header row skipped; empty cells dropped.
pub fn read_xlsx(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        debug!("Import: {} has no worksheets", path.display());
        return Ok(Vec::new());
    };
    let range = range?;

    Ok(range
        .rows()
        .skip(1)
        .filter_map(|row| {
            let values: Vec<String> = row.iter().filter_map(cell_text).collect();
            token_from_values(&values)
        })
        .collect())
}
