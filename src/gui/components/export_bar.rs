// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, f, f.label());
            }
        });

        if export.format != prev_fmt {
            info!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let tabular = export.format.delimiter().is_some();
        let before_headers = export.include_headers;
        ui.add_enabled(tabular, egui::Checkbox::new(&mut export.include_headers, "Include headers"));
        if export.include_headers != before_headers {
            info!("UI: Include_headers → {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) + status ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
            // a pasted extension may have switched the format
            app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        }

        ui.label(format!("Status: {}", app.status_text()));
    });

    if !app.errors.is_empty() {
        ui.label(
            egui::RichText::new(format!("Skipped: {}", app.errors.join(", ")))
                .color(egui::Color32::from_rgb(200, 120, 0)),
        );
    }
}
