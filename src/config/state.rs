// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw identifiers as typed or imported, one per line
    pub input_text: String,

    /// File the Import button reads from
    pub import_path: String,

    /// Import: first line of TXT files is a header
    pub import_has_header: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(),
            import_path: s!(),
            import_has_header: true,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
