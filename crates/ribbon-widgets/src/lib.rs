#![forbid(unsafe_code)]

//! Ribbon widgets: controls, panels, categories, the tab bar, and the ribbon
//! bar that ties them together.
//!
//! Everything here is pure state. A host toolkit renders it by walking the
//! [`RibbonBar`]: the tab bar says which categories are shown, each
//! [`Panel`] says where every control sits in its grid and how tall it may
//! be.

pub mod category;
pub mod context;
pub mod control;
pub mod descriptor;
pub mod factory;
pub mod legacy;
pub mod panel;
pub mod ribbon;
pub mod tab_bar;

pub use category::{Category, CategoryLayout, CategoryStyle};
pub use context::ContextGroup;
pub use control::{
    Alignment, Control, ControlKind, GALLERY_MIN_WIDTH, Orientation, PlacementRequest,
    SEPARATOR_WIDTH,
};
pub use descriptor::{
    CategoryDescriptor, Entries, PanelDescriptor, RibbonDescriptor, WidgetDescriptor,
};
pub use factory::{BuildFn, BuiltControl, ControlFactory};
pub use legacy::MenuBarCompat;
pub use panel::{DEFAULT_FONT_PX, DEFAULT_PANEL_HEIGHT, Panel, PlacedControl};
pub use ribbon::{RibbonBar, RibbonConfig};
pub use tab_bar::{Tab, TabBar};
