//! obz-logging - Tracing setup for obz
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber with a reloadable level
//! - [`ReloadHandle`] to change that level at runtime
//! - [`EventTally`] counts of warnings and errors emitted so far

mod layer;
mod reload;
mod tally;

pub use layer::{TallyLayer, init_logging};
pub use obz_format::LogLevel;
pub use reload::ReloadHandle;
pub use tally::{EventTally, TallySnapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{EventTally, LogLevel, ReloadHandle, init_logging};
}
