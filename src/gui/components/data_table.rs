// src/gui/components/data_table.rs
//
// Results table. Purely a view over `app.records`.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, record::RECORD_HEADERS};

// cédula, code, name, facility, state, municipality, parish, address
const WIDTHS: [f32; 8] = [110.0, 40.0, 200.0, 200.0, 120.0, 120.0, 140.0, 260.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("results_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0);
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in RECORD_HEADERS {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.records.len(), |mut row| {
                        let rec = &app.records[row.index()];
                        for (ci, cell) in rec.to_row().into_iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                if ci == 1 {
                                    ui.label(cell).on_hover_text(rec.status_text());
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
