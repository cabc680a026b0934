#![forbid(unsafe_code)]

//! The ribbon bar: category registry plus tab visibility controller.
//!
//! # State machine
//!
//! Every category is in one of three states:
//!
//! - **Hidden**: no tab (context categories only).
//! - **Visible-Inactive**: tabbed, not the displayed page.
//! - **Visible-Active**: tabbed and displayed. At most one category is
//!   active; none is active once the active tab has been hidden or removed
//!   until the caller selects another one.
//!
//! The active category is whatever the tab bar's current tab is bound to, so
//! removing tabs in front of it never changes which category is active.
//!
//! # Failure semantics
//!
//! Every operation validates its input before mutating anything. An `Err`
//! always means the ribbon is exactly as it was before the call.
//!
//! # Example
//!
//! ```
//! use ribbon_widgets::{CategoryStyle, RibbonBar};
//! use ribbon_style::Rgb;
//!
//! let mut ribbon = RibbonBar::new();
//! ribbon.add_normal_category("Home").unwrap();
//! ribbon.add_context_category("Error", Some(Rgb::RED)).unwrap();
//! assert_eq!(ribbon.tab_bar().tab_titles(), vec!["Home"]);
//!
//! ribbon.show_context("Error").unwrap();
//! assert_eq!(ribbon.current_category().map(|c| c.title()), Some("Error"));
//!
//! ribbon.hide_context("Error").unwrap();
//! assert_eq!(ribbon.tab_bar().tab_titles(), vec!["Home"]);
//! assert_eq!(ribbon.category("Error").unwrap().style(), CategoryStyle::Context);
//! ```

use ribbon_core::geometry::Sides;
use ribbon_core::{EntityKind, Result, RibbonError};
use ribbon_layout::PanelMetrics;
use ribbon_style::{ContextPalette, IconRole, Rgb, StyleTarget};

use crate::category::{self, Category, CategoryLayout, CategoryStyle};
use crate::context::ContextGroup;
use crate::descriptor::RibbonDescriptor;
use crate::factory::ControlFactory;
use crate::legacy::MenuBarCompat;
use crate::tab_bar::TabBar;

/// Extra pixels kept below the title bar while the ribbon is collapsed.
const COLLAPSED_EXTRA_HEIGHT: u16 = 5;

/// Ribbon configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RibbonConfig {
    /// Window title shown in the title bar.
    pub title: String,
    /// Grid rows of panels created from now on.
    pub max_rows: usize,
    /// Total ribbon height in pixels.
    pub ribbon_height: u16,
    /// Height of the title bar (tabs, quick access, title).
    pub title_bar_height: u16,
    /// Margins of the ribbon's outer layout.
    pub layout_margins: Sides,
    /// Spacing between title bar and category area.
    pub layout_spacing: u16,
    /// Metrics of each panel.
    pub panel: PanelMetrics,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            title: "Ribbon Bar Title".to_owned(),
            max_rows: 6,
            ribbon_height: 150,
            title_bar_height: 30,
            layout_margins: Sides::ZERO,
            layout_spacing: 0,
            panel: PanelMetrics::default(),
        }
    }
}

impl RibbonConfig {
    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the row count of new panels.
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows.max(1);
        self
    }

    /// Set the total ribbon height.
    pub fn with_ribbon_height(mut self, height: u16) -> Self {
        self.ribbon_height = height;
        self
    }

    /// Set the title bar height.
    pub fn with_title_bar_height(mut self, height: u16) -> Self {
        self.title_bar_height = height;
        self
    }

    /// Set the outer layout margins.
    pub fn with_layout_margins(mut self, margins: impl Into<Sides>) -> Self {
        self.layout_margins = margins.into();
        self
    }

    /// Set the outer layout spacing.
    pub fn with_layout_spacing(mut self, spacing: u16) -> Self {
        self.layout_spacing = spacing;
        self
    }

    /// Set the panel metrics.
    pub fn with_panel_metrics(mut self, metrics: PanelMetrics) -> Self {
        self.panel = metrics;
        self
    }

    /// Height of the category area.
    pub fn category_height(&self) -> u16 {
        self.ribbon_height
            .saturating_sub(self.layout_spacing.saturating_mul(2))
            .saturating_sub(self.layout_margins.vertical_sum())
            .saturating_sub(self.title_bar_height)
    }

    pub fn category_layout(&self) -> CategoryLayout {
        CategoryLayout {
            max_rows: self.max_rows,
            height: self.category_height(),
            panel: self.panel,
        }
    }
}

/// Category registry and tab visibility controller.
#[derive(Debug, Clone)]
pub struct RibbonBar {
    config: RibbonConfig,
    categories: Vec<Category>,
    groups: Vec<ContextGroup>,
    tab_bar: TabBar,
    palette: ContextPalette,
    factory: ControlFactory,
    ribbon_visible: bool,
    style_sheet: String,
}

impl Default for RibbonBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RibbonBar {
    pub fn new() -> Self {
        Self::with_config(RibbonConfig::default())
    }

    pub fn with_config(config: RibbonConfig) -> Self {
        ribbon_core::debug!(
            title = %config.title,
            max_rows = config.max_rows,
            ribbon_height = config.ribbon_height,
            "ribbon created"
        );
        Self {
            config,
            categories: Vec::new(),
            groups: Vec::new(),
            tab_bar: TabBar::new(),
            palette: ContextPalette::new(),
            factory: ControlFactory::new(),
            ribbon_visible: true,
            style_sheet: String::new(),
        }
    }

    pub fn config(&self) -> &RibbonConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    pub fn factory(&self) -> &ControlFactory {
        &self.factory
    }

    /// Register extra control types for descriptors.
    pub fn factory_mut(&mut self) -> &mut ControlFactory {
        &mut self.factory
    }

    pub fn palette(&self) -> &ContextPalette {
        &self.palette
    }

    /// Row count for categories (and so panels) added from now on.
    pub fn set_maximum_rows(&mut self, rows: usize) {
        self.config.max_rows = rows.max(1);
    }

    // --- Registry ---

    fn position(&self, title: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.title() == title)
    }

    pub fn contains_category(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no category has that title.
    pub fn category(&self, title: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.title() == title)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Category, title))
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no category has that title.
    pub fn category_mut(&mut self, title: &str) -> Result<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| c.title() == title)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Category, title))
    }

    /// All categories in insertion order, tabbed or not.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Add a category.
    ///
    /// Normal categories get a tab (colored with `color`, if given) and the
    /// very first category becomes active. Context categories start hidden;
    /// without a color they take the next palette color.
    ///
    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`] if the title is taken.
    pub fn add_category(
        &mut self,
        title: &str,
        style: CategoryStyle,
        color: Option<Rgb>,
    ) -> Result<&mut Category> {
        if self.contains_category(title) {
            return Err(RibbonError::duplicate(EntityKind::Category, title));
        }
        let was_empty = self.categories.is_empty();
        let layout = self.config.category_layout();
        let category = match style {
            CategoryStyle::Normal => {
                let index = self.tab_bar.add_tab(title, color);
                if was_empty {
                    self.tab_bar.set_current_index(index)?;
                }
                Category::normal(title, layout)
            }
            CategoryStyle::Context => {
                let color = color.unwrap_or_else(|| self.palette.next_color());
                Category::context(title, color, layout)
            }
        };
        ribbon_core::debug!(title, style = ?style, "category added");
        self.categories.push(category);
        let last = self.categories.len() - 1;
        Ok(&mut self.categories[last])
    }

    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`] if the title is taken.
    pub fn add_normal_category(&mut self, title: &str) -> Result<&mut Category> {
        self.add_category(title, CategoryStyle::Normal, None)
    }

    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`] if the title is taken.
    pub fn add_context_category(&mut self, title: &str, color: Option<Rgb>) -> Result<&mut Category> {
        self.add_category(title, CategoryStyle::Context, color)
    }

    /// Add a named group of context categories sharing one color.
    ///
    /// # Errors
    ///
    /// - [`RibbonError::DuplicateKey`] if the group name or any title is taken
    ///   (or repeated).
    /// - [`RibbonError::InvalidArgument`] if `titles` is empty.
    pub fn add_context_group<S: AsRef<str>>(
        &mut self,
        name: &str,
        titles: &[S],
        color: Option<Rgb>,
    ) -> Result<&ContextGroup> {
        if self.groups.iter().any(|g| g.name() == name) {
            return Err(RibbonError::duplicate(EntityKind::ContextGroup, name));
        }
        if titles.is_empty() {
            return Err(RibbonError::invalid(format!(
                "context group '{name}' needs at least one category"
            )));
        }
        let titles: Vec<String> = titles.iter().map(|t| t.as_ref().to_owned()).collect();
        for (i, title) in titles.iter().enumerate() {
            if self.contains_category(title) || titles[..i].contains(title) {
                return Err(RibbonError::duplicate(EntityKind::Category, title.as_str()));
            }
        }

        let color = color.unwrap_or_else(|| self.palette.next_color());
        let layout = self.config.category_layout();
        self.categories.extend(
            titles
                .iter()
                .map(|title| Category::context(title.as_str(), color, layout)),
        );
        ribbon_core::debug!(group = name, members = titles.len(), "context group added");
        self.groups.push(ContextGroup::new(name, color, titles));
        let last = self.groups.len() - 1;
        Ok(&self.groups[last])
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn context_group(&self, name: &str) -> Result<&ContextGroup> {
        self.groups
            .iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| RibbonError::not_found(EntityKind::ContextGroup, name))
    }

    pub fn context_groups(&self) -> &[ContextGroup] {
        &self.groups
    }

    /// Recolor a context category (and its tab, if shown).
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown title,
    /// [`RibbonError::InvalidArgument`] for a normal category.
    pub fn set_category_color(&mut self, title: &str, color: Rgb) -> Result<()> {
        self.category_mut(title)?.set_color(color)?;
        if let Some(index) = self.tab_bar.index_of(title) {
            self.tab_bar.set_tab_color(index, Some(color))?;
        }
        Ok(())
    }

    /// Recolor a whole context group.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn set_context_group_color(&mut self, name: &str, color: Rgb) -> Result<()> {
        let members = self.context_group(name)?.members().to_vec();
        for title in &members {
            self.set_category_color(title, color)?;
        }
        if let Some(group) = self.groups.iter_mut().find(|g| g.name() == name) {
            group.set_color(color);
        }
        Ok(())
    }

    // --- Visibility ---

    fn context_category(&self, title: &str) -> Result<&Category> {
        let category = self.category(title)?;
        if !category.is_context() {
            return Err(RibbonError::invalid(format!(
                "'{title}' is a normal category and is always shown"
            )));
        }
        Ok(category)
    }

    /// Show a context category: append its tab (if it has none) and make it
    /// the active tab.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown title,
    /// [`RibbonError::InvalidArgument`] for a normal category.
    pub fn show_context(&mut self, title: &str) -> Result<()> {
        let color = self.context_category(title)?.color();
        let index = match self.tab_bar.index_of(title) {
            Some(index) => index,
            None => self.tab_bar.add_tab(title, color),
        };
        self.tab_bar.set_current_index(index)?;
        ribbon_core::debug!(title, index, "context category shown");
        Ok(())
    }

    /// Hide a context category: remove its tab. Hiding a hidden category does
    /// nothing. If it was active, no category is active afterwards.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown title,
    /// [`RibbonError::InvalidArgument`] for a normal category.
    pub fn hide_context(&mut self, title: &str) -> Result<()> {
        self.context_category(title)?;
        if let Some(index) = self.tab_bar.index_of(title) {
            self.tab_bar.remove_tab(index)?;
            ribbon_core::debug!(title, index, "context category hidden");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// See [`show_context`](Self::show_context) and
    /// [`hide_context`](Self::hide_context).
    pub fn set_context_visible(&mut self, title: &str, visible: bool) -> Result<()> {
        if visible {
            self.show_context(title)
        } else {
            self.hide_context(title)
        }
    }

    /// Show every member of a group (appending tabs for hidden members in
    /// group order) and activate the first member.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn show_context_group(&mut self, name: &str) -> Result<()> {
        let group = self.context_group(name)?;
        let hidden: Vec<&str> = group
            .members()
            .iter()
            .map(String::as_str)
            .filter(|m| !self.tab_bar.contains(m))
            .collect();
        let first = group.members().first().cloned();
        let color = group.color();
        let hidden: Vec<String> = hidden.into_iter().map(str::to_owned).collect();

        self.tab_bar.add_associated_tabs(name, &hidden, color);
        if let Some(index) = first.and_then(|t| self.tab_bar.index_of(&t)) {
            self.tab_bar.set_current_index(index)?;
        }
        ribbon_core::debug!(group = name, added = hidden.len(), "context group shown");
        Ok(())
    }

    /// Remove the tabs of every member of a group.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn hide_context_group(&mut self, name: &str) -> Result<()> {
        let members = self.context_group(name)?.members().to_vec();
        self.tab_bar.remove_associated_tabs(&members);
        ribbon_core::debug!(group = name, "context group hidden");
        Ok(())
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn set_context_group_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        if visible {
            self.show_context_group(name)
        } else {
            self.hide_context_group(name)
        }
    }

    /// Whether any member of the group has a tab.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn context_group_visible(&self, name: &str) -> Result<bool> {
        Ok(self.context_group(name)?.is_visible(&self.tab_bar))
    }

    /// Whether the category has a tab.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown title.
    pub fn category_visible(&self, title: &str) -> Result<bool> {
        self.category(title)?;
        Ok(self.tab_bar.contains(title))
    }

    // --- Selection ---

    /// Make the category bound to tab `index` active.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        self.tab_bar.set_current_index(index)?;
        ribbon_core::trace!(index, "tab selected");
        Ok(())
    }

    /// Make a tabbed category active.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown category
    /// ([`EntityKind::Category`]) or a hidden one ([`EntityKind::Tab`]).
    pub fn set_current_category(&mut self, title: &str) -> Result<()> {
        self.category(title)?;
        let index = self
            .tab_bar
            .index_of(title)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Tab, title))?;
        self.select_tab(index)
    }

    /// The active category, if any.
    pub fn current_category(&self) -> Option<&Category> {
        let tab = self.tab_bar.current_tab()?;
        self.categories.iter().find(|c| c.title() == tab.title())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.tab_bar.current_index()
    }

    /// Style text for the selected tab.
    pub fn selected_tab_style(&self) -> String {
        self.tab_bar.selected_tab_style()
    }

    // --- Removal ---

    /// Remove a category, its tab, and its group membership. A group left
    /// without members is dropped.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] for an unknown title.
    pub fn remove_category(&mut self, title: &str) -> Result<Category> {
        let position = self
            .position(title)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Category, title))?;
        if let Some(index) = self.tab_bar.index_of(title) {
            self.tab_bar.remove_tab(index)?;
        }
        for group in &mut self.groups {
            group.remove_member(title);
        }
        self.groups.retain(|g| !g.members().is_empty());
        ribbon_core::debug!(title, "category removed");
        Ok(self.categories.remove(position))
    }

    /// Remove a group and all of its member categories.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no group has that name.
    pub fn remove_context_group(&mut self, name: &str) -> Result<Vec<Category>> {
        let members = self.context_group(name)?.members().to_vec();
        self.tab_bar.remove_associated_tabs(&members);
        self.groups.retain(|g| g.name() != name);
        let (removed, kept): (Vec<Category>, Vec<Category>) = std::mem::take(&mut self.categories)
            .into_iter()
            .partition(|c| members.iter().any(|m| m == c.title()));
        self.categories = kept;
        ribbon_core::debug!(group = name, removed = removed.len(), "context group removed");
        Ok(removed)
    }

    // --- Bulk construction ---

    /// Add categories, panels, and controls from a descriptor.
    ///
    /// The whole descriptor is validated (titles, colors, control types,
    /// arguments, spans) before the first category is added. Returns the new
    /// category titles in document order.
    ///
    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`], [`RibbonError::InvalidArgument`], or
    /// [`RibbonError::InvalidSpan`]; the ribbon is unchanged in that case.
    pub fn add_categories_by(&mut self, descriptor: &RibbonDescriptor) -> Result<Vec<String>> {
        let span = ribbon_core::debug_span!(
            "add_categories_by",
            categories = descriptor.categories.len()
        );
        let _guard = span.enter();

        let mut staged = Vec::with_capacity(descriptor.categories.len());
        for (i, (title, desc)) in descriptor.categories.iter().enumerate() {
            let repeated = descriptor.categories[..i].iter().any(|(t, _)| t == title);
            if self.contains_category(title) || repeated {
                return Err(RibbonError::duplicate(EntityKind::Category, title.as_str()));
            }
            let color = desc.color.as_deref().map(parse_color).transpose()?;
            let panels = category::stage_panels(&[], self.config.max_rows, &desc.panels, &self.factory)?;
            staged.push((title.as_str(), desc.style, color, panels));
        }

        let mut titles = Vec::with_capacity(staged.len());
        for (title, style, color, panels) in staged {
            self.add_category(title, style, color)?.commit_panels(panels)?;
            titles.push(title.to_owned());
        }
        Ok(titles)
    }

    // --- Geometry ---

    pub fn ribbon_height(&self) -> u16 {
        self.config.ribbon_height
    }

    /// Change the ribbon height and relayout.
    pub fn set_ribbon_height(&mut self, height: u16) {
        self.config.ribbon_height = height;
        self.relayout();
    }

    /// Change the title bar height and relayout.
    pub fn set_title_bar_height(&mut self, height: u16) {
        self.config.title_bar_height = height;
        self.relayout();
    }

    pub fn category_height(&self) -> u16 {
        self.config.category_height()
    }

    /// Recompute the height of every category, panel, and control from the
    /// current configuration. Safe to call any number of times.
    pub fn relayout(&mut self) {
        let height = self.config.category_height();
        let span = ribbon_core::debug_span!("relayout", categories = self.categories.len(), height);
        let _guard = span.enter();
        for category in &mut self.categories {
            category.set_height(height);
        }
    }

    /// Height the ribbon occupies: the full height while expanded, the title
    /// bar plus a small strip while collapsed.
    pub fn visible_height(&self) -> u16 {
        if self.ribbon_visible {
            self.config.ribbon_height
        } else {
            self.config
                .title_bar_height
                .saturating_add(COLLAPSED_EXTRA_HEIGHT)
        }
    }

    // --- Collapse ---

    pub fn show_ribbon(&mut self) {
        if !self.ribbon_visible {
            self.ribbon_visible = true;
            ribbon_core::debug!("ribbon expanded");
        }
    }

    pub fn hide_ribbon(&mut self) {
        if self.ribbon_visible {
            self.ribbon_visible = false;
            ribbon_core::debug!("ribbon collapsed");
        }
    }

    pub fn ribbon_visible(&self) -> bool {
        self.ribbon_visible
    }

    pub fn set_ribbon_visible(&mut self, visible: bool) {
        if visible {
            self.show_ribbon();
        } else {
            self.hide_ribbon();
        }
    }

    /// Flip between expanded and collapsed.
    pub fn toggle_ribbon(&mut self) {
        self.set_ribbon_visible(!self.ribbon_visible);
    }

    /// Icon of the collapse button.
    pub fn collapse_icon(&self) -> IconRole {
        if self.ribbon_visible {
            IconRole::Up
        } else {
            IconRole::Down
        }
    }

    pub fn collapse_tool_tip(&self) -> &'static str {
        if self.ribbon_visible {
            "Collapse Ribbon"
        } else {
            "Expand Ribbon"
        }
    }

    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }
}

fn parse_color(text: &str) -> Result<Rgb> {
    Rgb::parse(text).ok_or_else(|| RibbonError::invalid(format!("unknown color '{text}'")))
}

impl StyleTarget for RibbonBar {
    fn set_style_sheet(&mut self, sheet: &str) {
        self.style_sheet = sheet.to_owned();
    }
}

impl MenuBarCompat for RibbonBar {}
