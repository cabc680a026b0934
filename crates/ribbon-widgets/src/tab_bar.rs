#![forbid(unsafe_code)]

//! Tab strip state: ordered tabs, per-tab color, group association, and the
//! current index.
//!
//! Removing a tab before the current one shifts the current index so it keeps
//! pointing at the same tab. Removing the current tab clears it; nothing is
//! selected until the caller picks another tab.

use std::collections::HashMap;

use ribbon_core::{EntityKind, Result, RibbonError};
use ribbon_style::Rgb;

/// One tab of the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    title: String,
    color: Option<Rgb>,
    group: Option<String>,
}

impl Tab {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Name of the context group the tab was added with.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Ordered tabs plus the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBar {
    tabs: Vec<Tab>,
    current: Option<usize>,
    associated: HashMap<String, Vec<String>>,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Index of the tab with `title`.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index_of(title).is_some()
    }

    pub fn tab_titles(&self) -> Vec<&str> {
        self.tabs.iter().map(Tab::title).collect()
    }

    /// Append a tab and return its index.
    pub fn add_tab(&mut self, title: impl Into<String>, color: Option<Rgb>) -> usize {
        self.push(title.into(), color, None)
    }

    fn push(&mut self, title: String, color: Option<Rgb>, group: Option<String>) -> usize {
        self.tabs.push(Tab {
            title,
            color,
            group,
        });
        self.tabs.len() - 1
    }

    /// Append tabs that share a color and belong to one group. Each tab
    /// remembers the other titles of the batch.
    pub fn add_associated_tabs<S: AsRef<str>>(
        &mut self,
        group: &str,
        titles: &[S],
        color: Rgb,
    ) -> Vec<usize> {
        let titles: Vec<&str> = titles.iter().map(|t| t.as_ref()).collect();
        for &title in &titles {
            let others = titles
                .iter()
                .filter(|&&t| t != title)
                .map(|&t| t.to_owned())
                .collect();
            self.associated.insert(title.to_owned(), others);
        }
        titles
            .iter()
            .map(|&t| self.push(t.to_owned(), Some(color), Some(group.to_owned())))
            .collect()
    }

    /// Titles added in the same batch as `title`.
    pub fn associated_tabs(&self, title: &str) -> &[String] {
        self.associated
            .get(title)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Remove the tab at `index`.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn remove_tab(&mut self, index: usize) -> Result<Tab> {
        if index >= self.tabs.len() {
            return Err(RibbonError::not_found(EntityKind::Tab, index.to_string()));
        }
        Ok(self.remove_at(index))
    }

    fn remove_at(&mut self, index: usize) -> Tab {
        let tab = self.tabs.remove(index);
        self.associated.remove(&tab.title);
        self.current = match self.current {
            Some(cur) if cur == index => None,
            Some(cur) if cur > index => Some(cur - 1),
            other => other,
        };
        tab
    }

    /// Remove every tab whose title is listed. Unknown titles are skipped.
    pub fn remove_associated_tabs<S: AsRef<str>>(&mut self, titles: &[S]) {
        for title in titles {
            if let Some(index) = self.index_of(title.as_ref()) {
                self.remove_at(index);
            }
        }
    }

    pub const fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    /// Select the tab at `index`.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn set_current_index(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(RibbonError::not_found(EntityKind::Tab, index.to_string()));
        }
        self.current = Some(index);
        Ok(())
    }

    /// Recolor the tab at `index`.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn set_tab_color(&mut self, index: usize, color: Option<Rgb>) -> Result<()> {
        let tab = self
            .tabs
            .get_mut(index)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Tab, index.to_string()))?;
        tab.color = color;
        Ok(())
    }

    pub fn current_tab_color(&self) -> Option<Rgb> {
        self.current_tab().and_then(Tab::color)
    }

    /// Style text for the selected tab: its color, or black.
    pub fn selected_tab_style(&self) -> String {
        let color = self.current_tab_color().unwrap_or(Rgb::BLACK);
        format!("RibbonTabBar::tab:selected {{color: {};}}", color.to_hex())
    }
}
