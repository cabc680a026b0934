#![forbid(unsafe_code)]

//! Ribbon UI composition toolkit.
//!
//! This crate is the stable surface for users. It re-exports the common types
//! of the internal crates and offers a small prelude.
//!
//! # Example
//!
//! ```
//! use ribbon::prelude::*;
//!
//! let mut ribbon = RibbonBar::new();
//! let panel = ribbon
//!     .add_normal_category("Home")?
//!     .add_panel("Clipboard", true)?;
//! panel.add(Control::button("Paste"))?;
//! panel.add_small_control(Control::button("Cut").name("cut"))?;
//! panel.add_small_control(Control::button("Copy"))?;
//!
//! let cut = panel.find_control("cut").expect("named control");
//! assert_eq!((cut.row(), cut.col()), (0, 1));
//! assert_eq!(panel.grid().cols(), 2);
//! # Ok::<(), ribbon::RibbonError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use ribbon_core::geometry::{Sides, Size};
pub use ribbon_core::{EntityKind, Result, RibbonError};

// --- Layout re-exports -----------------------------------------------------

pub use ribbon_layout::{
    CellOrigin, CellRect, CellRequest, FillMode, FixedHeight, GridSpaceAllocator, PanelMetrics,
    PanelSizingPolicy, RowSpan, SizeClass, SpanClasses, large_icon_size,
};

// --- Style re-exports ------------------------------------------------------

pub use ribbon_style::{
    CONTEXT_COLORS, ContextPalette, IconRegistry, IconRole, Rgb, StyleTarget, ThemeRegistry,
};

// --- Widget re-exports -----------------------------------------------------

pub use ribbon_widgets::{
    Alignment, Category, CategoryDescriptor, CategoryLayout, CategoryStyle, ContextGroup,
    Control, ControlFactory, ControlKind, MenuBarCompat, Orientation, Panel, PanelDescriptor,
    PlacedControl, PlacementRequest, RibbonBar, RibbonConfig, RibbonDescriptor, Tab, TabBar,
    WidgetDescriptor,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, CategoryStyle, Control, ControlKind, FillMode, FixedHeight, IconRole,
        PlacementRequest, Result, Rgb, RibbonBar, RibbonConfig, RibbonDescriptor, RibbonError,
        SizeClass, StyleTarget, ThemeRegistry,
    };

    pub use crate::{core, layout, style, widgets};
}

pub use ribbon_core as core;
pub use ribbon_layout as layout;
pub use ribbon_style as style;
pub use ribbon_widgets as widgets;
