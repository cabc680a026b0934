#![forbid(unsafe_code)]

//! Menu-bar operations the ribbon deliberately does not provide.
//!
//! The ribbon replaces a classic menu bar, so hosts sometimes call menu-bar
//! methods on it. Each one fails with [`RibbonError::Unsupported`] instead of
//! silently doing nothing.

use ribbon_core::{Result, RibbonError};

fn unsupported<T>(operation: &'static str) -> Result<T> {
    ribbon_core::warn!(operation, "unsupported menu bar operation");
    Err(RibbonError::Unsupported { operation })
}

/// Classic menu-bar surface. Every method fails with
/// [`RibbonError::Unsupported`].
pub trait MenuBarCompat {
    fn action_at(&self, _x: i32, _y: i32) -> Result<String> {
        unsupported("action_at")
    }

    fn action_geometry(&self, _action: &str) -> Result<(i32, i32, u16, u16)> {
        unsupported("action_geometry")
    }

    fn active_action(&self) -> Result<String> {
        unsupported("active_action")
    }

    fn add_menu(&mut self, _title: &str) -> Result<()> {
        unsupported("add_menu")
    }

    fn add_action(&mut self, _text: &str) -> Result<()> {
        unsupported("add_action")
    }

    fn add_separator(&mut self) -> Result<()> {
        unsupported("add_separator")
    }

    fn clear(&mut self) -> Result<()> {
        unsupported("clear")
    }

    fn corner_widget(&self) -> Result<String> {
        unsupported("corner_widget")
    }

    fn insert_menu(&mut self, _before: &str, _title: &str) -> Result<()> {
        unsupported("insert_menu")
    }

    fn insert_separator(&mut self, _before: &str) -> Result<()> {
        unsupported("insert_separator")
    }

    fn is_default_up(&self) -> Result<bool> {
        unsupported("is_default_up")
    }

    fn is_native_menu_bar(&self) -> Result<bool> {
        unsupported("is_native_menu_bar")
    }

    fn set_active_action(&mut self, _action: &str) -> Result<()> {
        unsupported("set_active_action")
    }

    fn set_corner_widget(&mut self, _widget: &str) -> Result<()> {
        unsupported("set_corner_widget")
    }

    fn set_default_up(&mut self, _up: bool) -> Result<()> {
        unsupported("set_default_up")
    }

    fn set_native_menu_bar(&mut self, _native: bool) -> Result<()> {
        unsupported("set_native_menu_bar")
    }
}
