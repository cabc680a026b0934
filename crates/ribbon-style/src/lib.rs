#![forbid(unsafe_code)]

//! Style collaborators for the ribbon: colors, theme text, and icons.
//!
//! None of these affect layout geometry. The widgets crate only asks them for
//! colors, resolved icon paths, and opaque style text.

pub mod color;
pub mod icons;
pub mod stylesheet;

pub use color::{CONTEXT_COLORS, ContextPalette, Rgb};
pub use icons::{IconRegistry, IconRole};
pub use stylesheet::{StyleTarget, ThemeRegistry};
