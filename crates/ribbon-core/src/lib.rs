#![forbid(unsafe_code)]

//! Core: pixel geometry, the shared error taxonomy, and logging shims.

pub mod error;
pub mod geometry;
pub mod logging;

pub use error::{EntityKind, Result, RibbonError};

// Without the feature the `#[macro_export]` fallbacks already live at the root.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
