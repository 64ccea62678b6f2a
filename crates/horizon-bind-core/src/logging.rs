//! Logging facilities for Horizon Bind.
//!
//! Horizon Bind uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_bind=debug,horizon_bind_core=trace")
//!         .init();
//! }
//! ```
//!
//! Every event is emitted under one of the fixed [`targets`], so a filter can
//! single out one subsystem (for example only the list controller).

/// Span names used throughout Horizon Bind for tracing.
pub mod span_names {
    /// Controller re-synchronization span.
    pub const RESYNC: &str = "horizon_bind::resync";
    /// Pattern compilation span.
    pub const PATTERN: &str = "horizon_bind::pattern";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_bind_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_bind_core::signal";
    /// Observable collection target.
    pub const COLLECTION: &str = "horizon_bind_core::collection";
    /// List controller target.
    pub const CONTROLLER: &str = "horizon_bind::controller";
    /// Date format engine target.
    pub const FORMAT: &str = "horizon_bind::format";
    /// Settings loading target.
    pub const CONFIG: &str = "horizon_bind::config";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// Used around whole re-synchronization passes so their duration shows up
/// in span-aware subscribers.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_bind::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level event under the core target.
#[macro_export]
macro_rules! bind_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_bind_core", $($arg)*)
    };
}

/// Debug-level event under the core target.
#[macro_export]
macro_rules! bind_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_bind_core", $($arg)*)
    };
}
