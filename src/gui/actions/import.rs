// src/gui/actions/import.rs
use std::path::Path;

use tracing::{error, info};

use crate::{
    gui::app::App,
    import::{self, ImportOptions},
};

/// Read identifiers from `gui.import_path` and append them to the input area.
pub fn import(app: &mut App) {
    let path_text = app.state.gui.import_path.trim().to_string();
    if path_text.is_empty() {
        app.status("No file to import");
        return;
    }

    let opts = ImportOptions { has_header: app.state.gui.import_has_header, ..ImportOptions::default() };
    match import::read_tokens(Path::new(&path_text), None, opts) {
        Ok(tokens) => {
            let input = &mut app.state.gui.input_text;
            if !input.is_empty() && !input.ends_with('\n') {
                input.push('\n');
            }
            for t in &tokens {
                input.push_str(t);
                input.push('\n');
            }
            info!("Import: OK {} → {} identifiers", path_text, tokens.len());
            app.status(format!("Imported {} identifier(s)", tokens.len()));
        }
        Err(e) => {
            error!("Import: Error: {}", e);
            app.status(format!("Import error: {e}"));
        }
    }
}
