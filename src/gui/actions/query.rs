// src/gui/actions/query.rs
use tracing::{error, info};

use crate::{
    batch::{Batch, Entry, skipped_inputs},
    gui::{app::App, progress::GuiProgress},
    query::QueryClient,
};

/// Identifiers from the input area: one per line, or separated by commas or
/// semicolons. Blanks inside an entry belong to it ("E 12.000.000").
pub fn entries_from_text(text: &str) -> Vec<Entry> {
    text.split(['\n', '\r', ',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Entry::new)
        .collect()
}

pub fn query(app: &mut App) {
    let entries = entries_from_text(&app.state.gui.input_text);
    info!("Query: Begin count={}", entries.len());

    let client = match QueryClient::new(&app.state.options.query) {
        Ok(c) => c,
        Err(e) => {
            error!("Query: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut batch = Batch::new(client);
    let mut prog = GuiProgress::new(app.status.clone());
    let res = batch.process(&entries, Some(&mut prog));

    // Keep whatever was collected, also after an abort.
    let (records, errors) = batch.into_parts();
    app.errors = skipped_inputs(&entries, &errors).into_iter().map(String::from).collect();
    app.records = records;

    if let Err(e) = res {
        error!("Query: {}", e);
        app.status(format!("Error: {e}"));
    }
}
