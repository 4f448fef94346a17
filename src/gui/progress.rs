// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Mirrors batch progress into the status line shown under the export bar.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Querying {total} identifier(s)…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, token: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", token, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, token: &str) {
        self.failed += 1;
        self.set_status(format!("Skipped {} ({}/{})", token, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        // A connection abort already left its message via `log`.
        if self.done + self.failed < self.total {
            return;
        }
        self.set_status(format!(
            "Query complete ({} found, {} skipped)",
            self.done, self.failed
        ));
    }
}
