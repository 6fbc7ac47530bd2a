//! Progress display while registry lookups run
//!
//! Draws on stderr using indicatif so stdout stays clean for the report.
//! Cloning shares the underlying bar, which lets every lookup task tick it.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress reporter for registry lookups
#[derive(Clone, Default)]
pub struct LookupProgress {
    /// Shared bar; `None` when disabled or there is nothing to look up
    bar: Option<ProgressBar>,
}

impl LookupProgress {
    /// Start a bar for `total` lookups, or a silent reporter when disabled
    pub fn start(enabled: bool, total: usize) -> Self {
        if !enabled || total == 0 {
            return Self::default();
        }

        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message("Checking dependencies");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Show which package is being looked up
    pub fn lookup_started(&self, package: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Checking {}", package));
        }
    }

    /// Count one lookup as done
    pub fn lookup_finished(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
