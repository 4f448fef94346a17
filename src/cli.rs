// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::{
    batch::{Batch, Entry, skipped_inputs},
    config::options::{ExportFormat, ExportOptions, QueryOptions, timeout_from_secs},
    file,
    import::{self, ImportFormat, ImportOptions},
    progress::Progress,
    query::QueryClient,
};

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Look up cédulas in the CNE voter registry")]
pub struct Args {
    /// Identifiers: V-12000000, E12000000, 12.000.000 ...
    pub ids: Vec<String>,

    /// Read identifiers from a TXT, CSV, JSON or XLSX file
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Input format (default: from the file extension)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// TXT input has no header line
    #[arg(long)]
    pub no_header: bool,

    /// CSV input delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Lookup page URL (default: $CNE_URL or the public CNE page)
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds, 0 waits forever
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format (default: from the --out extension, else csv)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<FormatArg>,

    /// Write results to this file instead of printing a summary
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Leave the header row out of CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Debug-level entries in .store/debug.log
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Txt,
    Csv,
    Tsv,
    Json,
    Py,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Txt  => ExportFormat::Txt,
            FormatArg::Csv  => ExportFormat::Csv,
            FormatArg::Tsv  => ExportFormat::Tsv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Py   => ExportFormat::Py,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    Txt,
    Csv,
    Json,
    Xlsx,
}

impl From<InputFormatArg> for ImportFormat {
    fn from(f: InputFormatArg) -> Self {
        match f {
            InputFormatArg::Txt  => ImportFormat::Txt,
            InputFormatArg::Csv  => ImportFormat::Csv,
            InputFormatArg::Json => ImportFormat::Json,
            InputFormatArg::Xlsx => ImportFormat::Xlsx,
        }
    }
}

impl Args {
    /// Environment defaults, then flags on top.
    pub fn query_options(&self) -> QueryOptions {
        let mut opts = QueryOptions::from_env();
        if let Some(url) = &self.url {
            opts.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            opts.timeout = timeout_from_secs(secs);
        }
        opts
    }

    pub fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        if let Some(out) = &self.out {
            export.set_path(&out.to_string_lossy());
        }
        // an explicit --format wins over the extension of --out
        if let Some(f) = self.format {
            export.format = f.into();
        }
        export.include_headers = !self.no_headers;
        export
    }

    /// Positional identifiers first, then the input file's.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self.ids.iter().map(|s| Entry::new(s)).collect();
        if let Some(path) = &self.input {
            let opts = ImportOptions { has_header: !self.no_header, delimiter: self.delimiter };
            let read = import::read_tokens(path, self.input_format.map(Into::into), opts)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            entries.extend(read.into_iter().map(Entry::from_token));
        }
        Ok(entries)
    }
}

/// Terminal progress bar.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        Self { bar: ProgressBar::hidden() }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            self.bar.set_style(style.progress_chars("#>-"));
        }
        self.bar.enable_steady_tick(Duration::from_millis(120));
    }
    fn log(&mut self, msg: &str) {
        self.bar.println(msg);
    }
    fn item_done(&mut self, token: &str) {
        self.bar.set_message(s!(token));
        self.bar.inc(1);
    }
    fn item_failed(&mut self, token: &str) {
        self.bar.set_message(format!("skipped {token}"));
        self.bar.inc(1);
    }
    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

pub fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    crate::log::init(args.verbose);

    let entries = args.entries()?;
    let query = args.query_options();
    info!("CLI: count={} url={} timeout={:?}", entries.len(), query.base_url, query.timeout);

    let client = QueryClient::new(&query)?;
    let mut batch = Batch::new(client);
    let mut bar = CliProgress::new();
    let progress: Option<&mut dyn Progress> = if args.progress { Some(&mut bar) } else { None };
    let res = batch.process(&entries, progress);

    for raw in skipped_inputs(&entries, batch.errors()) {
        eprintln!("skipped: {raw}");
    }

    match &args.out {
        Some(_) => {
            if !batch.all().is_empty() {
                let path = file::write_export(&args.export_options(), batch.all())?;
                println!("Wrote {} record(s) → {}", batch.all().len(), path.display());
            }
        }
        None => {
            for r in batch.all() {
                println!(
                    "{}\t{}\t{}\t{}",
                    r.cedula(),
                    r.status().code(),
                    r.status_text(),
                    r.full_name().unwrap_or("")
                );
            }
        }
    }

    res?;
    Ok(())
}
