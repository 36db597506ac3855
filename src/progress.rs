//! Progress bar display for provisioning

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for archive copies
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total archive count
    pub fn new(total_archives: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_archives);
        bar.set_style(style);

        Self { bar }
    }

    /// Hidden display, for quiet runs and tests
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the archive currently being copied
    pub fn update(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    /// Increment archive progress
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
