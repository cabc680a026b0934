#![forbid(unsafe_code)]

//! Diagnostics macros shared by every ribbon crate.
//!
//! Call sites write `ribbon_core::debug!(..)` or `ribbon_core::debug_span!(..)`
//! and never name `tracing` directly. Building with the `tracing` feature
//! routes those calls to `tracing`; building without it swaps in macros that
//! swallow their arguments, so grid searches and relayouts cost nothing extra.
//!
//! Only the levels the ribbon actually emits are provided: `debug` for
//! structural changes (categories, placements, growth), `trace` for
//! per-request detail, `warn` for recoverable oddities, and `debug_span` to
//! group the work of one request or relayout.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Swallowed: built without `tracing`.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Swallowed: built without `tracing`.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Swallowed: built without `tracing`.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Evaluates to an inert [`SilentSpan`](crate::logging::SilentSpan).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::SilentSpan
        };
    }
}

/// Stand-in for `tracing::Span` so `span.enter()` call sites compile
/// unchanged without the feature.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpan;

#[cfg(not(feature = "tracing"))]
impl SilentSpan {
    /// Returns a guard that does nothing on drop.
    pub fn enter(&self) -> SilentGuard {
        SilentGuard
    }
}

/// Guard returned by [`SilentSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct SilentGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn disabled_macros_accept_structured_fields() {
        let rows = 6usize;
        crate::debug!(rows, "grid created");
        crate::trace!(row = 0, col = 1, "cells reserved");
        crate::warn!(title = "Home", "nothing to hide");
        let span = crate::debug_span!("request_cells", row_span = 2, mode = ?rows);
        let _guard = span.enter();
        let _ = rows;
    }
}
