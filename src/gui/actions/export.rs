// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.commit_out_path();

    if app.records.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    info!("Export: Begin rows={} format={:?}", app.records.len(), export.format);

    let msg = match file::write_export(export, &app.records) {
        Ok(path) => format!("Exported {} record(s) → {}", app.records.len(), path.display()),
        Err(e) => {
            error!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
