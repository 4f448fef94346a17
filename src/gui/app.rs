// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::info;

use crate::{
    config::{options::QueryOptions, state::AppState},
    record::Record,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.query = QueryOptions::from_env();
    eframe::run_native(
        "Consulta CNE",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // results of the last Query, in input order
    pub records: Vec<Record>,
    // tokens skipped by the last Query
    pub errors: Vec<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        info!("Init: url={} timeout={:?}", state.options.query.base_url, state.options.query.timeout);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            errors: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply a pending edit of the output field to the export options.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            info!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                crate::gui::components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
