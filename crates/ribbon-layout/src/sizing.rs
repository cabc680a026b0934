#![forbid(unsafe_code)]

//! Pixel sizing for controls placed in a panel grid.
//!
//! All functions here are pure: given the same container metrics they always
//! produce the same heights, so re-layout on resize can call them any number
//! of times.
//!
//! ```text
//! row_height = (container - vertical_margins - title_bar - spacing * (rows - 1)) / rows
//! max_height = row_height * span + spacing * (span - 2)
//! ```

use ribbon_core::geometry::Sides;

/// Smallest share of the maximum height a fixed-height control may shrink to.
pub const MIN_FIXED_HEIGHT_RATIO: f32 = 0.4;

/// Lower bound for the icon of a large button.
pub const MIN_LARGE_ICON_SIZE: u16 = 48;

/// Requested fixed height for a control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FixedHeight {
    /// No fixed height; only the maximum height constrains the control.
    #[default]
    Off,
    /// Fix the height to the maximum allowed for the span.
    Max,
    /// `0 < v <= 1` is a share of the maximum height, `1 < v < max` an
    /// absolute pixel height, anything larger means the maximum. Zero or
    /// negative values behave like [`FixedHeight::Off`].
    Value(f32),
}

impl From<bool> for FixedHeight {
    fn from(fixed: bool) -> Self {
        if fixed {
            FixedHeight::Max
        } else {
            FixedHeight::Off
        }
    }
}

impl From<f32> for FixedHeight {
    fn from(value: f32) -> Self {
        if value > 0.0 {
            FixedHeight::Value(value)
        } else {
            FixedHeight::Off
        }
    }
}

impl FixedHeight {
    /// Resolve against the maximum height of the control's span.
    ///
    /// The result always lies in `[0.4 * max_height, max_height]`.
    #[must_use]
    pub fn resolve(self, max_height: u16) -> Option<f32> {
        let max = f32::from(max_height);
        let height = match self {
            FixedHeight::Off => return None,
            FixedHeight::Max => max,
            FixedHeight::Value(v) if v.is_nan() || v <= 0.0 => return None,
            FixedHeight::Value(v) if v <= 1.0 => (v * max).trunc(),
            FixedHeight::Value(v) if v < max => v,
            FixedHeight::Value(_) => max,
        };
        Some(height.max(MIN_FIXED_HEIGHT_RATIO * max))
    }
}

/// Height of one grid row.
///
/// Negative intermediate results clamp to zero.
#[must_use]
pub fn row_height(
    container_height: u16,
    vertical_margins: u16,
    title_bar_height: u16,
    row_spacing: u16,
    rows: usize,
) -> u16 {
    let rows = rows.max(1) as i64;
    let available = i64::from(container_height)
        - i64::from(vertical_margins)
        - i64::from(title_bar_height)
        - i64::from(row_spacing) * (rows - 1);
    clamp_px(available / rows)
}

/// Maximum height for a control spanning `span` rows.
#[must_use]
pub fn max_height(row_height: u16, row_spacing: u16, span: usize) -> u16 {
    let span = span as i64;
    clamp_px(i64::from(row_height) * span + i64::from(row_spacing) * (span - 2))
}

/// Icon size for a large button: the span height minus two text lines and
/// the menu arrow, never below [`MIN_LARGE_ICON_SIZE`].
#[must_use]
pub fn large_icon_size(max_height: u16, font_px: u16) -> u16 {
    max_height
        .saturating_sub(font_px.saturating_mul(3))
        .max(MIN_LARGE_ICON_SIZE)
}

fn clamp_px(value: i64) -> u16 {
    value.clamp(0, i64::from(u16::MAX)) as u16
}

/// Fixed pixel metrics of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMetrics {
    /// Height of the title strip below the controls.
    pub title_height: u16,
    /// Margins of the panel's outer layout.
    pub layout_margins: Sides,
    /// Spacing between the control grid and the title strip.
    pub layout_spacing: u16,
    /// Margins around the control grid.
    pub actions_margins: Sides,
    /// Vertical spacing between grid rows.
    pub row_spacing: u16,
    /// Width of the separator placed after each panel in a category.
    pub separator_width: u16,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            title_height: 15,
            layout_margins: Sides::ZERO,
            layout_spacing: 0,
            actions_margins: Sides::all(5),
            row_spacing: 0,
            separator_width: 10,
        }
    }
}

impl PanelMetrics {
    /// Everything vertical that is neither a row, the title strip, nor
    /// inter-row spacing.
    #[must_use]
    pub const fn vertical_margins(&self) -> u16 {
        self.layout_margins
            .vertical_sum()
            .saturating_add(self.layout_spacing)
            .saturating_add(self.actions_margins.vertical_sum())
    }

    /// Panel height inside a category of the given height.
    #[must_use]
    pub const fn panel_height(&self, category_height: u16) -> u16 {
        category_height
            .saturating_sub(self.layout_spacing)
            .saturating_sub(self.layout_margins.vertical_sum())
    }
}

/// Resolved pixel heights of one placed control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlHeights {
    pub max_height: u16,
    pub fixed_height: Option<f32>,
}

/// Sizing policy for one panel: its metrics plus its row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSizingPolicy {
    metrics: PanelMetrics,
    rows: usize,
}

impl PanelSizingPolicy {
    pub fn new(metrics: PanelMetrics, rows: usize) -> Self {
        Self {
            metrics,
            rows: rows.max(1),
        }
    }

    #[inline]
    pub const fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Change the title strip height.
    pub fn set_title_height(&mut self, height: u16) {
        self.metrics.title_height = height;
    }

    /// Row height for a panel of `panel_height` pixels.
    #[must_use]
    pub fn row_height(&self, panel_height: u16) -> u16 {
        row_height(
            panel_height,
            self.metrics.vertical_margins(),
            self.metrics.title_height,
            self.metrics.row_spacing,
            self.rows,
        )
    }

    /// Maximum height for a control spanning `span` rows.
    #[must_use]
    pub fn max_height(&self, panel_height: u16, span: usize) -> u16 {
        max_height(self.row_height(panel_height), self.metrics.row_spacing, span)
    }

    /// Maximum and fixed heights for a control.
    #[must_use]
    pub fn control_heights(
        &self,
        panel_height: u16,
        span: usize,
        fixed: FixedHeight,
    ) -> ControlHeights {
        let max_height = self.max_height(panel_height, span);
        ControlHeights {
            max_height,
            fixed_height: fixed.resolve(max_height),
        }
    }
}
