// AI
//! 📊 progress.rs — "Loading books..." — the only placeholder the catalog ever had.
//!
//! 🚀 The load is the one async thing we do. While it runs, a spinner spins.
//! When it lands (or faceplants), the spinner says so and gets out of the way.
//!
//! ⚠️  Warning: Watching this spinner will not make the download go faster.
//! Neither will refreshing it. We've tried. Science says no.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// 🔢 Formats a number with commas for the 3 people in the audience who like readability.
/// "1000000 books" → "1,000,000 books" — you're welcome, eyes.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    // -- 🧵 pre-allocate like we know what we're doing (we do, we read the book)
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// 🌀 A spinner for the one-time load.
///
/// Hidden spinners still track elapsed time, they just don't draw. Handy for `--json`
/// output where a spinner on stderr would only confuse whoever is piping us.
pub(crate) struct LoadSpinner {
    bar: ProgressBar,
    started: Instant,
}

impl std::fmt::Debug for LoadSpinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // -- 🎭 ProgressBar is a diva and doesn't derive Debug
        f.debug_struct("LoadSpinner")
            .field("elapsed", &self.started.elapsed())
            .finish()
    }
}

impl LoadSpinner {
    /// 🚀 Start spinning with `message`. `visible = false` gives a silent spinner.
    pub(crate) fn start(message: String, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        // -- 🎨 the template is hardcoded; a bad one only costs us the default look
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self {
            bar,
            started: Instant::now(),
        }
    }

    /// ✅ Books landed. Say how many and how long it took.
    pub(crate) fn finish_loaded(&self, book_count: usize) {
        self.bar.finish_with_message(format!(
            "📚 loaded {} books in {} ms",
            format_number(book_count as u64),
            self.started.elapsed().as_millis()
        ));
    }

    /// 💀 Load failed. Clear the line; the error goes to the log, not the spinner.
    pub(crate) fn finish_failed(&self) {
        self.bar.finish_and_clear();
    }
}
