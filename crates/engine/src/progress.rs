// crates/engine/src/progress.rs
use crate::error::EngineError;
use std::path::Path;

/// Receives per-file progress events from [`crate::run`].
///
/// `index` is 1-based. Every method has an empty default.
pub trait ProgressSink {
    fn on_file_start(&mut self, _index: usize, _total: usize, _path: &Path) {}
    fn on_file_skipped(&mut self, _path: &Path, _error: &EngineError) {}
    fn on_file_done(&mut self, _index: usize, _total: usize, _path: &Path) {}
}

/// Share of inputs finished after `index` of `total`, in hundredths of a
/// percent, rounded down.
#[must_use]
pub fn basis_points(index: usize, total: usize) -> u128 {
    if total == 0 {
        return 10_000;
    }
    index as u128 * 10_000 / total as u128
}

/// Render progress as a percentage: whole numbers without decimals, anything
/// else truncated to two. Never shows `100%` before the last input.
#[must_use]
pub fn format_percent(index: usize, total: usize) -> String {
    let bp = basis_points(index, total);
    if bp % 100 == 0 {
        format!("{}%", bp / 100)
    } else {
        format!("{}.{:02}%", bp / 100, bp % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_points() {
        assert_eq!(basis_points(1, 2), 5_000);
        assert_eq!(basis_points(2, 2), 10_000);
        assert_eq!(basis_points(0, 0), 10_000);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 2), "50%");
        assert_eq!(format_percent(2, 2), "100%");
        assert_eq!(format_percent(1, 3), "33.33%");
        assert_eq!(format_percent(2, 3), "66.66%");
        assert_eq!(format_percent(1, 8), "12.50%");
        assert_eq!(format_percent(7, 10), "70%");
    }

    #[test]
    fn test_format_percent_truncates_near_completion() {
        assert_eq!(format_percent(19_999, 20_000), "99.99%");
        assert_eq!(format_percent(199_999, 200_000), "99.99%");
    }
}
