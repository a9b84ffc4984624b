//! Service Object pattern library
//!
//! Wraps one unit of business logic behind a uniform invoke / inspect
//! interface: implement [`ServiceObject`], run it through [`Invocation`],
//! then check `success()` before trusting `result()`.

pub mod config;
pub mod core;
pub mod telemetry;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use crate::core::{
    ErrorRecord, Errors, Invocation, InvocationReport, InvocationState, Result, ServiceObject,
    ServiceObjectError,
};
