// src/gui/components/input_panel.rs
//
// Left panel: identifier text area, import path and the QUERY button.

use eframe::egui;
use tracing::debug;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Cédulas");
    ui.label("One per line: V-12000000, E12000000, 12.000.000");

    ui.horizontal(|ui| {
        ui.label("File:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.import_path)
                .hint_text("ids.txt / .csv / .json / .xlsx")
                .desired_width(140.0),
        );
        if ui.button("Import").clicked() {
            actions::import(app);
        }
    });
    if ui.checkbox(&mut app.state.gui.import_has_header, "TXT has header line").changed() {
        debug!("UI: import_has_header → {}", app.state.gui.import_has_header);
    }

    ui.separator();

    let btn_h = 32.0;
    let text_h = (ui.available_height() - btn_h - 16.0).max(80.0);
    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .max_height(text_h)
        .show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), text_h],
                egui::TextEdit::multiline(&mut app.state.gui.input_text)
                    .font(egui::TextStyle::Monospace),
            );
        });

    ui.separator();

    let red = egui::Color32::from_rgb(220, 30, 30);
    let black = egui::Color32::BLACK;
    if ui
        .add_sized(
            [ui.available_width(), btn_h],
            egui::Button::new(egui::RichText::new("QUERY").color(black).strong()).fill(red),
        )
        .clicked()
    {
        actions::query(app);
    }
}
