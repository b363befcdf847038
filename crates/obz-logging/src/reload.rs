//! Runtime log level changes

use obz_format::{LogLevel, ObzError, ObzResult};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, tracing_subscriber::Registry>;

/// Handle for changing the level of an installed subscriber
pub struct ReloadHandle {
    handle: Mutex<Option<FilterHandle>>,
}

impl ReloadHandle {
    /// Create an empty handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called by [`init_logging`](crate::init_logging))
    pub fn set_handle(&self, handle: FilterHandle) {
        *self.handle.lock() = Some(handle);
    }

    /// Whether a subscriber has been attached
    pub fn is_installed(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Switch the filter to a new level
    pub fn reload_level(&self, level: LogLevel) -> ObzResult<()> {
        let guard = self.handle.lock();
        let handle = guard
            .as_ref()
            .ok_or_else(|| ObzError::Config("logging not initialized".to_string()))?;

        handle
            .reload(level_filter(level))
            .map_err(|e| ObzError::Config(format!("failed to reload log level: {e}")))
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
