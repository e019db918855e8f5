// src/progress.rs
/// Lightweight progress reporting for the run pipeline.
/// The CLI implements this to surface status to users.
pub trait Progress {
    /// Called at the start of a stage with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record completes (e.g., a flag was written).
    fn item_done(&mut self, _name: &str) {}

    /// Called when one record could not be processed; the run continues.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
