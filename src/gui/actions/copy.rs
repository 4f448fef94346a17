// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match file::to_export_string(&app.state.options.export, &app.records) {
        Ok(txt) => {
            info!("Copy: rows={} format={:?}", app.records.len(), app.state.options.export.format);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
