// src/batch.rs
//! Batch runner: a list of "N-DIGITS" tokens through one [`QueryClient`], in order.

use tracing::{error, info, warn};

use crate::core::net::{HttpTransport, Transport};
use crate::dni::format_dni_to_str;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::query::QueryClient;
use crate::record::Record;

/// Split "V-12000000" into nationality and number. Exactly one dash; the number
/// must parse as an integer.
pub fn split_token(token: &str) -> Result<(&str, u64)> {
    let mut parts = token.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(nat), Some(num), None) => num
            .trim()
            .parse::<u64>()
            .map(|n| (nat, n))
            .map_err(|_| Error::MalformedInput(s!(token))),
        _ => Err(Error::MalformedInput(s!(token))),
    }
}

/// One identifier as the user gave it, next to its "N-DIGITS" token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub raw: String,
    pub token: String,
}

impl Entry {
    /// Typed input; the token comes from [`format_dni_to_str`].
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        Self { raw: s!(raw), token: format_dni_to_str(raw) }
    }

    /// Already a token (file imports).
    pub fn from_token(token: String) -> Self {
        Self { raw: token.clone(), token }
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

/// Raw text behind each skipped token. `errors` must come from one
/// `process(entries)` run, so both lists share the same order.
pub fn skipped_inputs<'a>(entries: &'a [Entry], errors: &'a [String]) -> Vec<&'a str> {
    let mut rest = entries.iter();
    errors
        .iter()
        .map(|token| {
            rest.by_ref()
                .find(|e| e.token == *token)
                .map_or(token.as_str(), |e| e.raw.as_str())
        })
        .collect()
}

/// Results and skipped tokens of every `process` call so far.
///
/// When a connection failure aborts a run, whatever was collected before it stays
/// readable through [`Batch::all`] and [`Batch::errors`].
pub struct Batch<T: Transport = HttpTransport> {
    client: QueryClient<T>,
    results: Vec<Record>,
    errors: Vec<String>,
}

impl<T: Transport> Batch<T> {
    pub fn new(client: QueryClient<T>) -> Self {
        Self { client, results: Vec::new(), errors: Vec::new() }
    }

    /// Query every token, appending to `results` / `errors`.
    ///
    /// - empty input: `Error::EmptyBatch`, nothing is sent;
    /// - malformed token or unreadable page: token goes to `errors`, run continues;
    /// - connection failure: run stops and the error is returned.
    pub fn process<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<()> {
        if tokens.is_empty() {
            return Err(Error::EmptyBatch);
        }

        info!("Batch: Begin count={}", tokens.len());
        if let Some(p) = progress.as_deref_mut() {
            p.begin(tokens.len());
        }

        for token in tokens {
            let token = token.as_ref();
            let outcome = split_token(token)
                .and_then(|(nat, number)| self.client.query(nat, number));

            match outcome {
                Ok(record) => {
                    self.results.push(record);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(token);
                    }
                }
                Err(e) if e.is_connection() => {
                    error!("Batch: Aborted at {}: {}", token, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&e.to_string());
                        p.finish();
                    }
                    return Err(e);
                }
                Err(e) => {
                    warn!("Batch: Skipped {}: {}", token, e);
                    self.errors.push(s!(token));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(token);
                    }
                }
            }
        }

        info!("Batch: Done results={} errors={}", self.results.len(), self.errors.len());
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(())
    }

    pub fn all(&self) -> &[Record] {
        &self.results
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.results.get(ix)
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn client(&self) -> &QueryClient<T> {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut QueryClient<T> {
        &mut self.client
    }

    pub fn into_parts(self) -> (Vec<Record>, Vec<String>) {
        (self.results, self.errors)
    }
}
