// src/file.rs
//! Export of query results. Every writer consumes the record's positional row
//! (cédula, code, name, facility, state, municipality, parish, address).

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::error::{Error, Result};
use crate::record::{RECORD_HEADERS, Record};

/// Write `records` to `export.out_path()` in the chosen format.
/// Creates the target directory when missing. Returns the path written.
pub fn write_export(export: &ExportOptions, records: &[Record]) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, records)?;
    fs::write(&path, contents)?;
    info!("Export: {:?} rows={} → {}", export.format, records.len(), path.display());
    Ok(path)
}

/// Render `records` as the file body for `export.format` (also used by Copy).
pub fn to_export_string(export: &ExportOptions, records: &[Record]) -> Result<String> {
    Ok(match export.format {
        ExportFormat::Txt  => to_txt(records),
        ExportFormat::Json => to_json(records)?,
        ExportFormat::Py   => to_py(records),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delimiter().unwrap_or(',');
            let headers = export.include_headers.then(|| strings_of(&RECORD_HEADERS));
            let rows: Vec<Vec<String>> = records.iter().map(Record::to_row).collect();
            rows_to_string(headers.as_deref(), &rows, sep)
        }
    })
}

fn strings_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s!(*s)).collect()
}

fn or_none(v: Option<&str>) -> &str {
    v.unwrap_or("None")
}

/// One `key=value` line per record.
pub fn to_txt(records: &[Record]) -> String {
    let mut out = s!();
    for r in records {
        let _ = writeln!(
            out,
            "cedula={}, status={}, status_text={}, nombre y apellido={}, centro={}, estado={}, municipio={}, parroquia={}, direccion={}",
            r.cedula(),
            r.status().code(),
            r.status_text(),
            or_none(r.full_name()),
            or_none(r.facility()),
            or_none(r.state()),
            or_none(r.municipality()),
            or_none(r.parish()),
            or_none(r.address()),
        );
    }
    out
}

pub fn to_json(records: &[Record]) -> Result<String> {
    let mut s = serde_json::to_string_pretty(records)?;
    s.push('\n');
    Ok(s)
}

/// Generated Python module holding the records as `ResponseData(...)` literals.
pub fn to_py(records: &[Record]) -> String {
    let mut out = s!("#! /usr/bin/env python3\n#  -*- coding: utf-8 -*-\n");
    out.push_str("# GENERATED BY cne_scrape\n\n");
    out.push_str("from pyElectoral import ResponseData\n\n");
    out.push_str("DATA: list = [\n");
    for r in records {
        let _ = writeln!(
            out,
            "   ResponseData(cedula={}, status={}, nombre_apellido={}, centro={}, estado={}, municipio={}, parroquia={}, direccion={}), ",
            py_str(Some(r.cedula())),
            r.status().code(),
            py_str(r.full_name()),
            py_str(r.facility()),
            py_str(r.state()),
            py_str(r.municipality()),
            py_str(r.parish()),
            py_str(r.address()),
        );
    }
    out.push_str("]\n");
    out
}

/// Python literal: single-quoted string or `None`.
fn py_str(v: Option<&str>) -> String {
    match v {
        None => s!("None"),
        Some(s) => {
            let mut lit = String::with_capacity(s.len() + 2);
            lit.push('\'');
            for ch in s.chars() {
                match ch {
                    '\\' => lit.push_str("\\\\"),
                    '\'' => lit.push_str("\\'"),
                    '\n' => lit.push_str("\\n"),
                    c => lit.push(c),
                }
            }
            lit.push('\'');
            lit
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Enrollment, Status};

    fn sample() -> Vec<Record> {
        vec![
            Record::registered("V-12000000", Enrollment {
                full_name: s!("ANA O'NEIL"),
                state: s!("EDO. ZULIA"),
                municipality: s!("MP. MARACAIBO"),
                parish: s!("PQ. OLEGARIO VILLALOBOS"),
                facility: s!("ESCUELA BOLIVAR"),
                address: s!("AV. 5, CALLE 72"),
            }),
            Record::with_status("E-84000000", Status::NotExists),
        ]
    }

    #[test]
    fn txt_prints_none_for_absent_fields() {
        let txt = to_txt(&sample());
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("cedula=V-12000000, status=100, status_text=Inscrito, nombre y apellido=Ana O'Neil"));
        assert_eq!(
            lines[1],
            "cedula=E-84000000, status=950, status_text=Cédula No existe, nombre y apellido=None, centro=None, estado=None, municipio=None, parroquia=None, direccion=None"
        );
    }

    #[test]
    fn csv_has_header_and_quotes() {
        let opts = ExportOptions::default();
        let s = to_export_string(&opts, &sample()).unwrap();
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("Cédula,Cod.,Nombre y Apellido,Centro,Estado,Municipio,Parroquia,Dirección"));
        assert_eq!(
            lines.next(),
            Some("V-12000000,100,Ana O'Neil,Escuela Bolivar,Edo. Zulia,Mp. Maracaibo,Pq. Olegario Villalobos,\"Av. 5, Calle 72\"")
        );
        assert_eq!(lines.next(), Some("E-84000000,950,,,,,,"));
    }

    #[test]
    fn py_escapes_quotes() {
        let py = to_py(&sample());
        assert!(py.contains("nombre_apellido='Ana O\\'Neil'"));
        assert!(py.contains("ResponseData(cedula='E-84000000', status=950, nombre_apellido=None"));
        assert!(py.trim_end().ends_with(']'));
    }
}
