//! Reusable observers for polyroot solvers.
//!
//! Both observers work with any event type, so they apply to every solver
//! that reports through [`Observer`]:
//!
//! - [`LogObserver`]: forwards each event to the `log` facade
//! - [`Recorder`]: keeps a copy of each event for later inspection
//!
//! [`Observer`]: polyroot_core::Observer

mod logging;
mod recorder;

pub use logging::LogObserver;
pub use recorder::Recorder;
