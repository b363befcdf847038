//! Subscriber installation and the tally layer

use crate::reload::{ReloadHandle, level_filter};
use crate::tally::EventTally;
use obz_format::LogLevel;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// Tracing layer that feeds warn and error events into an [`EventTally`]
pub struct TallyLayer {
    tally: &'static EventTally,
}

impl TallyLayer {
    /// Create a layer counting into the global tally
    pub fn new() -> Self {
        Self {
            tally: EventTally::global(),
        }
    }

    /// Create a layer counting into a specific tally
    pub fn with_tally(tally: &'static EventTally) -> Self {
        Self { tally }
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for TallyLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for TallyLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.tally
            .record(Self::convert_level(event.metadata().level()));
    }
}

/// Install the global subscriber: a reloadable level filter in front of a
/// compact stderr formatter and the global [`EventTally`].
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, reload};

    let (filter, handle) = reload::Layer::new(level_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(TallyLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle);
    true
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
