// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape, pipeline runs).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a listing page was scraped).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit failed and was skipped.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards status lines to the log. Used by the CLI.
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        logf!("[{}/{}] {}", self.done, self.total, label);
    }

    fn item_failed(&mut self, label: &str) {
        self.done += 1;
        logw!("[{}/{}] failed: {}", self.done, self.total, label);
    }
}
