//! Progress display while solving several patterns in one run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the patterns of a run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible progress bar for `pattern_count` patterns
    pub fn new(pattern_count: usize) -> Self {
        let bar = ProgressBar::new(pattern_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(pattern_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(pattern_count as u64);
        Self { bar }
    }

    /// Show which pattern is being solved
    pub fn start_pattern(&self, pattern_id: &str) {
        self.bar.set_message(pattern_id.to_string());
    }

    /// Mark the current pattern done
    pub fn complete_pattern(&self) {
        self.bar.inc(1);
    }

    /// Number of patterns completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
