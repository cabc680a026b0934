#![forbid(unsafe_code)]

//! Context groups: named sets of context categories that share a tab color
//! and are shown or hidden together.

use ribbon_style::Rgb;

use crate::tab_bar::TabBar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextGroup {
    name: String,
    color: Rgb,
    members: Vec<String>,
}

impl ContextGroup {
    pub(crate) fn new(name: impl Into<String>, color: Rgb, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            color,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Member category titles, in group order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, title: &str) -> bool {
        self.members.iter().any(|m| m == title)
    }

    /// Visible while at least one member has a tab.
    pub fn is_visible(&self, tabs: &TabBar) -> bool {
        self.members.iter().any(|m| tabs.contains(m))
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub(crate) fn remove_member(&mut self, title: &str) {
        self.members.retain(|m| m != title);
    }
}
