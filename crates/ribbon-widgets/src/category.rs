#![forbid(unsafe_code)]

//! Categories: the page behind one ribbon tab.
//!
//! A category owns its panels in insertion order, keyed by title. Normal
//! categories are always tabbed; context categories are tabbed only while
//! shown and carry the color of their tab.

use ribbon_core::{EntityKind, Result, RibbonError};
use ribbon_layout::{PanelMetrics, SpanClasses};
use ribbon_style::Rgb;
use serde::Deserialize;

use crate::descriptor::{Entries, PanelDescriptor};
use crate::factory::{BuiltControl, ControlFactory};
use crate::panel::{self, Panel};

/// Whether a category is always tabbed or only while shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum CategoryStyle {
    #[default]
    #[serde(alias = "normal")]
    Normal,
    #[serde(alias = "context")]
    Context,
}

/// Geometry shared by every panel of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLayout {
    /// Row count for panels added from now on.
    pub max_rows: usize,
    /// Category height in pixels.
    pub height: u16,
    /// Metrics of each panel.
    pub panel: PanelMetrics,
}

impl Default for CategoryLayout {
    fn default() -> Self {
        Self {
            max_rows: 6,
            height: 120,
            panel: PanelMetrics::default(),
        }
    }
}

/// A titled page of panels.
#[derive(Debug, Clone)]
pub struct Category {
    title: String,
    style: CategoryStyle,
    color: Option<Rgb>,
    layout: CategoryLayout,
    panels: Vec<Panel>,
}

impl Category {
    pub fn normal(title: impl Into<String>, layout: CategoryLayout) -> Self {
        Self {
            title: title.into(),
            style: CategoryStyle::Normal,
            color: None,
            layout,
            panels: Vec::new(),
        }
    }

    pub fn context(title: impl Into<String>, color: Rgb, layout: CategoryLayout) -> Self {
        Self {
            title: title.into(),
            style: CategoryStyle::Context,
            color: Some(color),
            layout,
            panels: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn style(&self) -> CategoryStyle {
        self.style
    }

    pub const fn is_context(&self) -> bool {
        matches!(self.style, CategoryStyle::Context)
    }

    /// Tab color; only context categories have one.
    pub const fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] for a normal category.
    pub fn set_color(&mut self, color: Rgb) -> Result<()> {
        if !self.is_context() {
            return Err(RibbonError::invalid(format!(
                "normal category '{}' has no color",
                self.title
            )));
        }
        self.color = Some(color);
        Ok(())
    }

    pub const fn max_rows(&self) -> usize {
        self.layout.max_rows
    }

    /// Row count for panels added after this call. Existing panels keep
    /// their grids.
    pub fn set_maximum_rows(&mut self, rows: usize) {
        self.layout.max_rows = rows.max(1);
    }

    pub const fn height(&self) -> u16 {
        self.layout.height
    }

    /// Height given to each panel.
    pub const fn panel_height(&self) -> u16 {
        self.layout.panel.panel_height(self.layout.height)
    }

    /// Resize the category and relayout every panel.
    pub fn set_height(&mut self, height: u16) {
        self.layout.height = height;
        let panel_height = self.panel_height();
        for panel in &mut self.panels {
            panel.relayout(panel_height);
        }
    }

    pub fn contains_panel(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.title() == title)
    }

    fn panel_not_found(title: &str) -> RibbonError {
        RibbonError::not_found(EntityKind::Panel, title)
    }

    /// Append a panel.
    ///
    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`] if the title is taken.
    pub fn add_panel(&mut self, title: &str, show_option_button: bool) -> Result<&mut Panel> {
        if self.contains_panel(title) {
            return Err(RibbonError::duplicate(EntityKind::Panel, title));
        }
        let panel = Panel::with_metrics(
            title,
            self.layout.max_rows,
            self.layout.panel,
            self.panel_height(),
        )
        .option_button(show_option_button);
        ribbon_core::debug!(category = %self.title, panel = title, "panel added");
        self.panels.push(panel);
        let last = self.panels.len() - 1;
        Ok(&mut self.panels[last])
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no panel has that title.
    pub fn panel(&self, title: &str) -> Result<&Panel> {
        self.panels
            .iter()
            .find(|p| p.title() == title)
            .ok_or_else(|| Self::panel_not_found(title))
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no panel has that title.
    pub fn panel_mut(&mut self, title: &str) -> Result<&mut Panel> {
        self.panels
            .iter_mut()
            .find(|p| p.title() == title)
            .ok_or_else(|| Self::panel_not_found(title))
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Remove a panel and discard it.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no panel has that title.
    pub fn remove_panel(&mut self, title: &str) -> Result<()> {
        self.take_panel(title).map(drop)
    }

    /// Remove a panel and hand it back.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if no panel has that title.
    pub fn take_panel(&mut self, title: &str) -> Result<Panel> {
        let index = self
            .position(title)
            .ok_or_else(|| Self::panel_not_found(title))?;
        Ok(self.panels.remove(index))
    }

    /// Width of the gap placed after each panel.
    pub const fn separator_width(&self) -> u16 {
        self.layout.panel.separator_width
    }

    /// Add panels (and their controls) from a descriptor.
    ///
    /// Returns the titles of the new panels. Titles, control types, and spans
    /// are all validated before the first panel is added.
    ///
    /// # Errors
    ///
    /// [`RibbonError::DuplicateKey`], [`RibbonError::InvalidArgument`], or
    /// [`RibbonError::InvalidSpan`]; the category is unchanged in that case.
    pub fn add_panels_by(
        &mut self,
        panels: &Entries<PanelDescriptor>,
        factory: &ControlFactory,
    ) -> Result<Vec<String>> {
        let staged = self.stage_panels(panels, factory)?;
        self.commit_panels(staged)
    }

    pub(crate) fn stage_panels(
        &self,
        panels: &Entries<PanelDescriptor>,
        factory: &ControlFactory,
    ) -> Result<Vec<StagedPanel>> {
        stage_panels(&self.panels, self.layout.max_rows, panels, factory)
    }

    pub(crate) fn commit_panels(&mut self, staged: Vec<StagedPanel>) -> Result<Vec<String>> {
        let mut titles = Vec::with_capacity(staged.len());
        for StagedPanel {
            title,
            show_option_button,
            controls,
        } in staged
        {
            self.add_panel(&title, show_option_button)?
                .place_built(controls)?;
            titles.push(title);
        }
        Ok(titles)
    }
}

/// A panel whose controls were built and checked but not placed yet.
#[derive(Debug)]
pub(crate) struct StagedPanel {
    title: String,
    show_option_button: bool,
    controls: Vec<(String, BuiltControl)>,
}

pub(crate) fn stage_panels(
    existing: &[Panel],
    max_rows: usize,
    panels: &Entries<PanelDescriptor>,
    factory: &ControlFactory,
) -> Result<Vec<StagedPanel>> {
    let spans = SpanClasses::for_max_rows(max_rows);
    let mut staged: Vec<StagedPanel> = Vec::with_capacity(panels.len());
    for (title, desc) in panels.iter() {
        let taken = existing.iter().any(|p| p.title() == title.as_str())
            || staged.iter().any(|s| &s.title == title);
        if taken {
            return Err(RibbonError::duplicate(EntityKind::Panel, title.as_str()));
        }
        staged.push(StagedPanel {
            title: title.clone(),
            show_option_button: desc.show_option_button,
            controls: panel::build_widgets(&desc.widgets, factory, &spans)?,
        });
    }
    Ok(staged)
}
