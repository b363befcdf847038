//! Counts of emitted warning and error events

use obz_format::LogLevel;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global tally instance
static TALLY: OnceCell<EventTally> = OnceCell::new();

/// Running count of warning and error events
///
/// The resolver reports skipped boards, oversized images and dangling links
/// at warn level; the tally lets a caller tell whether a load was clean
/// without parsing log output.
#[derive(Debug, Default)]
pub struct EventTally {
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

/// Point-in-time copy of an [`EventTally`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallySnapshot {
    pub warnings: usize,
    pub errors: usize,
}

impl EventTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global tally instance
    pub fn global() -> &'static EventTally {
        TALLY.get_or_init(EventTally::new)
    }

    /// Count one event; levels below warn are ignored
    pub fn record(&self, level: LogLevel) {
        match level {
            LogLevel::Warn => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
            }
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            warnings: self.warnings(),
            errors: self.errors(),
        }
    }

    /// Counts recorded since `earlier` was taken
    pub fn since(&self, earlier: TallySnapshot) -> TallySnapshot {
        let now = self.snapshot();
        TallySnapshot {
            warnings: now.warnings.saturating_sub(earlier.warnings),
            errors: now.errors.saturating_sub(earlier.errors),
        }
    }

    pub fn reset(&self) {
        self.warnings.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
    }
}

impl TallySnapshot {
    /// No warnings and no errors
    pub fn is_clean(&self) -> bool {
        self.warnings == 0 && self.errors == 0
    }
}
