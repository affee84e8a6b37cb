// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes pipeline status into the shared label the app draws every frame.
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
        // A poisoned lock only means a previous writer panicked mid-update.
        let mut guard = self.status.lock().unwrap_or_else(|e| e.into_inner());
        *guard = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", label, self.done + self.failed, self.total));
    }

    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        self.set_status(format!("Skipped {} ({}/{})", label, self.done + self.failed, self.total));
    }

    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Pipeline complete"));
        } else {
            self.set_status(format!(
                "Pipeline complete ({} pages, {} skipped)",
                self.done, self.failed
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_pages() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut p = GuiProgress::new(status.clone());
        p.begin(3);
        p.item_done("page 1");
        assert_eq!(*status.lock().unwrap(), "Fetched page 1 (1/3)");
        p.item_failed("page 2");
        assert_eq!(*status.lock().unwrap(), "Skipped page 2 (2/3)");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Pipeline complete (1 pages, 1 skipped)");
    }
}
