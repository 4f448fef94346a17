// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use super::consts::*;
use crate::core::sanitize::sanitize_filename;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub base_url: String,
    /// `None` blocks until the server answers.
    pub timeout: Option<Duration>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl QueryOptions {
    /// Defaults, overridden by `CNE_URL` / `CNE_TIMEOUT_SECS` (0 = no timeout).
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(url) = std::env::var(ENV_URL) {
            if !url.trim().is_empty() {
                opts.base_url = s!(url.trim());
            }
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => opts.timeout = timeout_from_secs(secs),
                Err(_) => warn!("Config: ignoring {}={:?} (not a number)", ENV_TIMEOUT, raw),
            }
        }
        opts
    }
}

pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    if secs == 0 { None } else { Some(Duration::from_secs(secs)) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
    Py,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Txt,
        ExportFormat::Csv,
        ExportFormat::Tsv,
        ExportFormat::Json,
        ExportFormat::Py,
    ];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Txt  => "txt",
            ExportFormat::Csv  => "csv",
            ExportFormat::Tsv  => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Py   => "py",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Txt  => "TXT",
            ExportFormat::Csv  => "CSV",
            ExportFormat::Tsv  => "TSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Py   => "Python",
        }
    }

    /// Delimiter for the tabular formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim().trim_start_matches('.').to_ascii_lowercase();
        ExportFormat::ALL.into_iter().find(|f| f.ext() == n)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// "<dir>/<stem>.<ext>"; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy().into_owned();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    pub fn dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir + stem. A pasted extension picks the format when it
    /// names one; otherwise it is ignored. Spaces and odd characters in the stem
    /// are folded to `_`.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            let clean = sanitize_filename(&stem.to_string_lossy(), DEFAULT_FILE);
            self.out_path.file_stem = OsString::from(clean);
        }
        if let Some(fmt) = p.extension().and_then(|e| e.to_str()).and_then(ExportFormat::from_name) {
            self.format = fmt;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out").join("consulta.csv"));
        e.format = ExportFormat::Json;
        assert_eq!(e.out_path(), PathBuf::from("out").join("consulta.json"));
    }

    #[test]
    fn set_path_splits_dir_stem_and_format() {
        let mut e = ExportOptions::default();
        e.set_path("reports/mayo.tsv");
        assert_eq!(e.format, ExportFormat::Tsv);
        assert_eq!(e.out_path(), PathBuf::from("reports").join("mayo.tsv"));

        e.set_path("reports/junio.xyz");
        assert_eq!(e.format, ExportFormat::Tsv);
        assert_eq!(e.out_path(), PathBuf::from("reports").join("junio.tsv"));

        e.set_path("consulta mayo?.json");
        assert_eq!(e.out_path(), PathBuf::from("").join("consulta_mayo.json"));
    }

    #[test]
    fn zero_timeout_disables() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(5), Some(Duration::from_secs(5)));
    }
}
