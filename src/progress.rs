//! Progress bar display for the archive walk

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for writing archive entries
pub struct ArchiveProgress {
    pb: ProgressBar,
}

impl ArchiveProgress {
    /// Create a new progress display with the total entry count
    pub fn new(total_entries: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_entries);
        pb.set_style(style);

        Self { pb }
    }

    /// Update to show the entry being written
    pub fn update_entry(&self, entry_path: &str) {
        // Truncate long paths for display
        let display_path = if entry_path.len() > 50 {
            format!("...{}", &entry_path[entry_path.len() - 47..])
        } else {
            entry_path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
