//! Progress reporting for batch uploads.

/// Progress information for a sequential upload batch.
///
/// Updated after every completed item, never mid-transfer: the batch
/// uploads one file at a time and the unit of progress is a whole file.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Items finished so far (successes and failures both count).
    pub completed: usize,
    /// Total items in the batch.
    pub total: usize,
    /// Name of the item that just finished.
    pub current: String,
}

impl BatchProgress {
    /// Create a new progress report.
    pub fn new(completed: usize, total: usize, current: impl Into<String>) -> Self {
        Self {
            completed,
            total,
            current: current.into(),
        }
    }

    /// Progress as a whole-number percentage (0 to 100).
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Check if the batch has finished.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

/// Type alias for progress callback function.
///
/// The callback observes progress after each completed item. There is
/// no cancellation channel: a started batch runs to completion.
pub type ProgressCallback = Box<dyn FnMut(&BatchProgress) + Send>;

/// Create a simple progress callback that prints a bar to stdout.
///
/// # Example
/// ```no_run
/// use vaultlib::progress::make_progress_bar;
///
/// let callback = make_progress_bar();
/// ```
pub fn make_progress_bar() -> ProgressCallback {
    Box::new(|progress: &BatchProgress| {
        let percent = progress.percent();
        let bar_width = 40usize;
        let filled = (percent as usize * bar_width) / 100;
        let empty = bar_width - filled;

        print!(
            "\r[{}{}] {}% ({}/{}) {}",
            "=".repeat(filled),
            " ".repeat(empty),
            percent,
            progress.completed,
            progress.total,
            progress.current
        );

        if progress.is_complete() {
            println!();
        }

        use std::io::Write;
        let _ = std::io::stdout().flush();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_whole_and_rounded() {
        assert_eq!(BatchProgress::new(3, 7, "a").percent(), 43);
        assert_eq!(BatchProgress::new(1, 3, "a").percent(), 33);
        assert_eq!(BatchProgress::new(2, 3, "a").percent(), 67);
        assert_eq!(BatchProgress::new(7, 7, "a").percent(), 100);
    }

    #[test]
    fn test_percent_empty_batch() {
        assert_eq!(BatchProgress::new(0, 0, "").percent(), 0);
    }

    #[test]
    fn test_is_complete() {
        assert!(!BatchProgress::new(2, 3, "a").is_complete());
        assert!(BatchProgress::new(3, 3, "a").is_complete());
    }
}
