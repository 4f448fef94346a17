// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Rows (plus optional header) as one delimited string.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let rows = parse_rows("nacionalidad,cedula\r\nV,\"12.000.000\"\r\nE,\"1,5\"\n", ',');
        assert_eq!(rows, vec![
            strings!["nacionalidad", "cedula"],
            strings!["V", "12.000.000"],
            strings!["E", "1,5"],
        ]);
    }

    #[test]
    fn strips_leading_bom() {
        let rows = parse_rows("\u{feff}nacionalidad;cedula\nV;1", ';');
        assert_eq!(rows[0], strings!["nacionalidad", "cedula"]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn drops_blank_lines() {
        let rows = parse_rows("a\n\nV,1\r\n\r\n\nE,2", ',');
        assert_eq!(rows, vec![strings!["a"], strings!["V", "1"], strings!["E", "2"]]);
        assert!(parse_rows("\n\r\n", ',').is_empty());
    }

    #[test]
    fn writes_quoted_cells() {
        let out = rows_to_string(
            Some(&strings!["A", "B"][..]),
            &[strings!["x,y", "say \"hi\""]],
            ',',
        );
        assert_eq!(out, "A,B\n\"x,y\",\"say \"\"hi\"\"\"\n");
        let tsv = rows_to_string(None, &[strings!["x,y", "z"]], '\t');
        assert_eq!(tsv, "x,y\tz\n");
    }
}
