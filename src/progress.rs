// src/progress.rs
/// Lightweight progress reporting for batch lookups.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of identifiers in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One identifier produced a record.
    fn item_done(&mut self, _token: &str) {}

    /// One identifier was skipped as malformed.
    fn item_failed(&mut self, _token: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
