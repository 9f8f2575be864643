//! Progress bar utilities for displaying generation status

use kdam::{Animation, Bar, BarExt};

/// Configuration for creating a progress bar
pub struct ProgressBarConfig {
    pub total: usize,
    pub desc: &'static str,
    pub animation: Animation,
}

impl ProgressBarConfig {
    pub fn new(total: usize, desc: &'static str, animation: Animation) -> Self {
        Self {
            total,
            desc,
            animation,
        }
    }
}

pub fn create_progress_bar(config: ProgressBarConfig) -> Bar {
    kdam::tqdm!(
        total = config.total,
        desc = config.desc,
        animation = config.animation,
        unit = " files"
    )
}

/// Advance the bar by `n`. Display errors are ignored; the bar is cosmetic.
pub fn update_progress_bar(bar: &mut Bar, n: usize) {
    let _ = bar.update(n);
}

/// Print the bar's final state and move to a fresh line so following log lines stay readable.
pub fn finish_progress_bar(bar: &mut Bar) {
    let _ = bar.refresh();
    eprintln!();
}
