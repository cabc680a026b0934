#![forbid(unsafe_code)]

//! Panels: titled clusters of controls backed by one grid allocator.
//!
//! Placing a control resolves its row span against the panel's size classes,
//! asks the [`GridSpaceAllocator`] for cells, and records the pixel heights
//! computed by the [`PanelSizingPolicy`]. The record keeps the placement
//! request so [`Panel::relayout`] can recompute heights after a resize
//! without consulting any earlier result.
//!
//! Grid cells are never freed: removing a control drops its record but the
//! cells it occupied stay reserved.

use ribbon_core::{EntityKind, Result, RibbonError};
use ribbon_layout::{
    CellOrigin, CellRect, ControlHeights, FixedHeight, GridSpaceAllocator, MAX_COL_SPAN,
    PanelMetrics, PanelSizingPolicy, RowSpan, SizeClass, SpanClasses, large_icon_size,
};
use ribbon_style::IconRole;

use crate::control::{Alignment, Control, ControlKind, PlacementRequest};
use crate::descriptor::{Entries, WidgetDescriptor};
use crate::factory::{BuiltControl, ControlFactory};

/// Panel height used when a panel is created outside a category.
pub const DEFAULT_PANEL_HEIGHT: u16 = 120;

/// Pixel size of the control font, used for large-button icon sizing.
pub const DEFAULT_FONT_PX: u16 = 12;

const DEFAULT_OPTION_TOOL_TIP: &str = "Panel options";

/// A control placed in a panel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedControl {
    control: Control,
    origin: CellOrigin,
    row_span: usize,
    request: PlacementRequest,
    heights: ControlHeights,
    icon_size: Option<u16>,
}

impl PlacedControl {
    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    pub const fn row(&self) -> usize {
        self.origin.row
    }

    pub const fn col(&self) -> usize {
        self.origin.col
    }

    pub const fn row_span(&self) -> usize {
        self.row_span
    }

    pub const fn col_span(&self) -> usize {
        self.request.col_span
    }

    /// Cells reserved for the control.
    pub const fn cells(&self) -> CellRect {
        CellRect::at(self.origin, self.row_span, self.request.col_span)
    }

    pub const fn alignment(&self) -> Alignment {
        self.request.alignment
    }

    /// The request the control was placed with.
    pub const fn request(&self) -> &PlacementRequest {
        &self.request
    }

    pub const fn max_height(&self) -> u16 {
        self.heights.max_height
    }

    pub const fn fixed_height(&self) -> Option<f32> {
        self.heights.fixed_height
    }

    /// Icon size of a large button.
    pub const fn icon_size(&self) -> Option<u16> {
        self.icon_size
    }
}

/// A titled cluster of controls in one category.
#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    spans: SpanClasses,
    grid: GridSpaceAllocator,
    sizing: PanelSizingPolicy,
    height: u16,
    font_px: u16,
    show_option_button: bool,
    option_tool_tip: String,
    controls: Vec<PlacedControl>,
}

impl Panel {
    /// Panel with default metrics and height.
    pub fn new(title: impl Into<String>, max_rows: usize) -> Self {
        Self::with_metrics(title, max_rows, PanelMetrics::default(), DEFAULT_PANEL_HEIGHT)
    }

    /// Panel with explicit metrics and pixel height.
    pub fn with_metrics(
        title: impl Into<String>,
        max_rows: usize,
        metrics: PanelMetrics,
        height: u16,
    ) -> Self {
        let spans = SpanClasses::for_max_rows(max_rows);
        let rows = spans.max_rows();
        Self {
            title: title.into(),
            spans,
            grid: GridSpaceAllocator::new(rows),
            sizing: PanelSizingPolicy::new(metrics, rows),
            height,
            font_px: DEFAULT_FONT_PX,
            show_option_button: true,
            option_tool_tip: DEFAULT_OPTION_TOOL_TIP.to_owned(),
            controls: Vec::new(),
        }
    }

    /// Set whether the title strip has an option button.
    #[must_use]
    pub fn option_button(mut self, show: bool) -> Self {
        self.show_option_button = show;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub const fn max_rows(&self) -> usize {
        self.spans.max_rows()
    }

    pub const fn small_rows(&self) -> usize {
        self.spans.rows(SizeClass::Small)
    }

    pub const fn medium_rows(&self) -> usize {
        self.spans.rows(SizeClass::Medium)
    }

    pub const fn large_rows(&self) -> usize {
        self.spans.rows(SizeClass::Large)
    }

    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] unless `0 < rows <= max_rows`.
    pub fn set_small_rows(&mut self, rows: usize) -> Result<()> {
        self.spans.set_rows(SizeClass::Small, rows)
    }

    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] unless `0 < rows <= max_rows`.
    pub fn set_medium_rows(&mut self, rows: usize) -> Result<()> {
        self.spans.set_rows(SizeClass::Medium, rows)
    }

    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] unless `0 < rows <= max_rows`.
    pub fn set_large_rows(&mut self, rows: usize) -> Result<()> {
        self.spans.set_rows(SizeClass::Large, rows)
    }

    /// Row count for a requested span.
    pub const fn default_row_span(&self, span: RowSpan) -> usize {
        self.spans.resolve(span)
    }

    pub const fn span_classes(&self) -> &SpanClasses {
        &self.spans
    }

    pub fn title_height(&self) -> u16 {
        self.sizing.metrics().title_height
    }

    /// Change the title strip height and recompute control heights.
    pub fn set_title_height(&mut self, height: u16) {
        self.sizing.set_title_height(height);
        self.relayout(self.height);
    }

    pub const fn shows_option_button(&self) -> bool {
        self.show_option_button
    }

    /// Icon of the option button, if the panel has one.
    pub const fn option_icon(&self) -> Option<IconRole> {
        if self.show_option_button {
            Some(IconRole::Linking)
        } else {
            None
        }
    }

    pub fn option_tool_tip(&self) -> Option<&str> {
        self.show_option_button.then_some(self.option_tool_tip.as_str())
    }

    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] if the panel has no option button.
    pub fn set_option_tool_tip(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.show_option_button {
            return Err(RibbonError::invalid(format!(
                "panel '{}' has no option button",
                self.title
            )));
        }
        self.option_tool_tip = text.into();
        Ok(())
    }

    pub const fn font_px(&self) -> u16 {
        self.font_px
    }

    /// Change the font size used for icon sizing and recompute.
    pub fn set_font_px(&mut self, px: u16) {
        self.font_px = px;
        self.relayout(self.height);
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Height of one grid row at the current panel height.
    pub fn row_height(&self) -> u16 {
        self.sizing.row_height(self.height)
    }

    pub const fn sizing(&self) -> &PanelSizingPolicy {
        &self.sizing
    }

    pub const fn grid(&self) -> &GridSpaceAllocator {
        &self.grid
    }

    /// Height available to controls above the title strip.
    fn content_height(&self) -> u16 {
        let m = self.sizing.metrics();
        self.height
            .saturating_sub(m.title_height)
            .saturating_sub(m.layout_spacing)
            .saturating_sub(m.layout_margins.vertical_sum())
    }

    /// Row count for `request`, checked against the grid.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] if the span cannot be placed.
    pub fn check_request(&self, request: &PlacementRequest) -> Result<usize> {
        check_span(&self.spans, request)
    }

    // --- Placement ---

    /// Place a control and return its index.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] if the span does not fit the grid. The
    /// panel is unchanged in that case.
    pub fn add_control(&mut self, control: Control, request: PlacementRequest) -> Result<usize> {
        let row_span = self.check_request(&request)?;
        let origin = self.grid.request_cells(row_span, request.col_span, request.mode)?;
        let request = PlacementRequest {
            fixed_height: effective_fixed_height(control.kind(), request.fixed_height),
            ..request
        };
        let mut placed = PlacedControl {
            control,
            origin,
            row_span,
            request,
            heights: ControlHeights::default(),
            icon_size: None,
        };
        self.size_control(&mut placed);
        ribbon_core::debug!(
            panel = %self.title,
            kind = %placed.control.kind(),
            row = origin.row,
            col = origin.col,
            row_span,
            col_span = request.col_span,
            "control placed"
        );
        self.controls.push(placed);
        Ok(self.controls.len() - 1)
    }

    /// Place a control with its kind's default placement.
    pub fn add(&mut self, control: Control) -> Result<usize> {
        let request = PlacementRequest::for_kind(control.kind());
        self.add_control(control, request)
    }

    pub fn add_small_control(&mut self, control: Control) -> Result<usize> {
        self.add_sized(control, SizeClass::Small)
    }

    pub fn add_medium_control(&mut self, control: Control) -> Result<usize> {
        self.add_sized(control, SizeClass::Medium)
    }

    pub fn add_large_control(&mut self, control: Control) -> Result<usize> {
        self.add_sized(control, SizeClass::Large)
    }

    fn add_sized(&mut self, control: Control, class: SizeClass) -> Result<usize> {
        let request = PlacementRequest::for_kind(control.kind()).row_span(class);
        self.add_control(control, request)
    }

    /// Build and place every widget of a descriptor, in order.
    ///
    /// Returns `(name, index)` for each placed control. All widgets are built
    /// and their spans checked before the first one is placed.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] or [`RibbonError::InvalidSpan`] from
    /// validation; the panel is unchanged in that case.
    pub fn add_controls_by(
        &mut self,
        widgets: &Entries<WidgetDescriptor>,
        factory: &ControlFactory,
    ) -> Result<Vec<(String, usize)>> {
        let built = build_widgets(widgets, factory, &self.spans)?;
        self.place_built(built)
    }

    pub(crate) fn place_built(
        &mut self,
        built: Vec<(String, BuiltControl)>,
    ) -> Result<Vec<(String, usize)>> {
        let mut placed = Vec::with_capacity(built.len());
        for (name, BuiltControl { control, placement }) in built {
            let index = self.add_control(control.name(name.clone()), placement)?;
            placed.push((name, index));
        }
        Ok(placed)
    }

    // --- Queries ---

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn control(&self, index: usize) -> Result<&PlacedControl> {
        self.controls
            .get(index)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Control, index.to_string()))
    }

    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn control_mut(&mut self, index: usize) -> Result<&mut PlacedControl> {
        self.controls
            .get_mut(index)
            .ok_or_else(|| RibbonError::not_found(EntityKind::Control, index.to_string()))
    }

    /// First control with the given object name.
    pub fn find_control(&self, name: &str) -> Option<&PlacedControl> {
        self.controls
            .iter()
            .find(|placed| placed.control.object_name() == Some(name))
    }

    pub fn controls(&self) -> &[PlacedControl] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Remove a control record. Its grid cells stay reserved.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if `index` is out of range.
    pub fn remove_control(&mut self, index: usize) -> Result<PlacedControl> {
        if index >= self.controls.len() {
            return Err(RibbonError::not_found(
                EntityKind::Control,
                index.to_string(),
            ));
        }
        Ok(self.controls.remove(index))
    }

    // --- Layout ---

    /// Recompute every control's heights for a panel of `height` pixels.
    pub fn relayout(&mut self, height: u16) {
        self.height = height;
        let mut controls = std::mem::take(&mut self.controls);
        for placed in &mut controls {
            self.size_control(placed);
        }
        self.controls = controls;
    }

    fn size_control(&self, placed: &mut PlacedControl) {
        placed.heights =
            self.sizing
                .control_heights(self.height, placed.row_span, placed.request.fixed_height);
        placed.icon_size = (placed.control.kind().is_button()
            && placed.request.row_span == RowSpan::Class(SizeClass::Large))
        .then(|| large_icon_size(self.content_height(), self.font_px));
    }
}

/// Galleries are fixed to the full height of their span unless told otherwise.
fn effective_fixed_height(kind: ControlKind, requested: FixedHeight) -> FixedHeight {
    match (kind, requested) {
        (ControlKind::Gallery, FixedHeight::Off) => FixedHeight::Max,
        (_, fixed) => fixed,
    }
}

pub(crate) fn check_span(spans: &SpanClasses, request: &PlacementRequest) -> Result<usize> {
    let row_span = spans.resolve(request.row_span);
    if row_span == 0
        || row_span > spans.max_rows()
        || !(1..=MAX_COL_SPAN).contains(&request.col_span)
    {
        return Err(RibbonError::InvalidSpan {
            row_span,
            col_span: request.col_span,
            rows: spans.max_rows(),
        });
    }
    Ok(row_span)
}

/// Build every widget and check its span without placing anything.
pub(crate) fn build_widgets(
    widgets: &Entries<WidgetDescriptor>,
    factory: &ControlFactory,
    spans: &SpanClasses,
) -> Result<Vec<(String, BuiltControl)>> {
    widgets
        .iter()
        .map(|(name, widget)| {
            let built = factory.build(&widget.kind, &widget.args, &widget.kwargs)?;
            check_span(spans, &built.placement)?;
            Ok((name.clone(), built))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Orientation;
    use ribbon_layout::FillMode;

    fn panel() -> Panel {
        // Default metrics at 120px: row height (120 - 10 - 15) / 6 = 15.
        Panel::new("Clipboard", 6)
    }

    #[test]
    fn span_classes_follow_max_rows() {
        let p = panel();
        assert_eq!((p.small_rows(), p.medium_rows(), p.large_rows()), (2, 3, 6));
        assert_eq!(p.row_height(), 15);
        assert_eq!(p.default_row_span(RowSpan::Rows(4)), 4);
    }

    #[test]
    fn set_rows_checks_range() {
        let mut p = panel();
        p.set_small_rows(1).unwrap();
        assert_eq!(p.small_rows(), 1);
        assert!(matches!(
            p.set_medium_rows(7),
            Err(RibbonError::InvalidSpan { .. })
        ));
        assert!(p.set_large_rows(0).is_err());
    }

    #[test]
    fn oversized_col_span_is_rejected_before_placement() {
        let mut p = panel();
        let err = p
            .add_control(
                Control::label("wide"),
                PlacementRequest::new().col_span(MAX_COL_SPAN + 1),
            )
            .unwrap_err();
        assert!(matches!(err, RibbonError::InvalidSpan { .. }));
        assert!(p.is_empty());
        assert_eq!(p.grid().cols(), 1);
    }

    #[test]
    fn small_controls_stack_in_a_column() {
        let mut p = panel();
        for text in ["Cut", "Copy", "Paste"] {
            p.add_small_control(Control::button(text)).unwrap();
        }
        let origins: Vec<_> = p.controls().iter().map(|c| (c.row(), c.col())).collect();
        assert_eq!(origins, vec![(0, 0), (2, 0), (4, 0)]);
        assert_eq!(p.grid().cols(), 1);
        assert_eq!(p.control(1).unwrap().max_height(), 30);
    }

    #[test]
    fn large_button_gets_icon_size() {
        let mut p = panel();
        let i = p.add(Control::button("Open")).unwrap();
        let placed = p.control(i).unwrap();
        assert_eq!(placed.row_span(), 6);
        assert_eq!(placed.max_height(), 90);
        // content height 120 - 15 = 105, minus three 12px lines = 69
        assert_eq!(placed.icon_size(), Some(69));

        let j = p.add_small_control(Control::button("Small")).unwrap();
        assert_eq!(p.control(j).unwrap().icon_size(), None);
    }

    #[test]
    fn gallery_is_fixed_to_span_height() {
        let mut p = panel();
        let i = p.add(Control::gallery()).unwrap();
        let g = p.control(i).unwrap();
        assert_eq!(g.fixed_height(), Some(90.0));
        assert_eq!(g.control().min_width(), Some(800));
    }

    #[test]
    fn invalid_span_leaves_panel_unchanged() {
        let mut p = panel();
        p.add_small_control(Control::label("a")).unwrap();
        let err = p
            .add_control(
                Control::label("b"),
                PlacementRequest::new().row_span(RowSpan::Rows(7)),
            )
            .unwrap_err();
        assert!(matches!(err, RibbonError::InvalidSpan { rows: 6, .. }));
        assert!(
            p.add_control(Control::label("c"), PlacementRequest::new().col_span(0))
                .is_err()
        );
        assert_eq!(p.len(), 1);
        assert_eq!(p.grid().occupied_count(), 2);
    }

    #[test]
    fn relayout_is_idempotent_and_tracks_height() {
        let mut p = panel();
        p.add_control(
            Control::label("x"),
            PlacementRequest::new()
                .row_span(SizeClass::Medium)
                .fixed_height(0.5),
        )
        .unwrap();
        p.relayout(220);
        let first = p.controls().to_vec();
        p.relayout(220);
        assert_eq!(p.controls(), first.as_slice());
        // (220 - 25) / 6 = 32 -> 3 rows = 96, half = 48
        assert_eq!(first[0].max_height(), 96);
        assert_eq!(first[0].fixed_height(), Some(48.0));

        p.relayout(120);
        assert_eq!(p.control(0).unwrap().max_height(), 45);
    }

    #[test]
    fn title_height_change_relayouts() {
        let mut p = panel();
        p.add_large_control(Control::label("x")).unwrap();
        p.set_title_height(21);
        assert_eq!(p.title_height(), 21);
        // (120 - 10 - 21) / 6 = 14
        assert_eq!(p.row_height(), 14);
        assert_eq!(p.control(0).unwrap().max_height(), 84);
    }

    #[test]
    fn remove_keeps_cells_reserved() {
        let mut p = panel();
        p.add_small_control(Control::label("a")).unwrap();
        let removed = p.remove_control(0).unwrap();
        assert_eq!(removed.cells(), CellRect::new(0, 0, 2, 1));
        assert!(p.is_empty());
        assert_eq!(p.grid().occupied_count(), 2);
        assert!(matches!(
            p.remove_control(0),
            Err(RibbonError::NotFound {
                kind: EntityKind::Control,
                ..
            })
        ));
        // Next placement does not reuse the removed cells.
        p.add_small_control(Control::label("b")).unwrap();
        assert_eq!(p.control(0).unwrap().row(), 2);
    }

    #[test]
    fn row_wise_controls_share_row_zero() {
        let mut p = Panel::new("Font", 3);
        let req = PlacementRequest::new()
            .row_span(RowSpan::Rows(1))
            .col_span(2)
            .mode(FillMode::RowWise);
        p.add_control(Control::new(ControlKind::FontComboBox), req)
            .unwrap();
        p.add_control(Control::separator(Orientation::Vertical), req.col_span(1))
            .unwrap();
        let cols: Vec<_> = p.controls().iter().map(PlacedControl::col).collect();
        assert_eq!(cols, vec![0, 2]);
    }

    #[test]
    fn option_button_state() {
        let mut p = panel();
        assert_eq!(p.option_tool_tip(), Some("Panel options"));
        assert_eq!(p.option_icon(), Some(IconRole::Linking));
        p.set_option_tool_tip("More clipboard options").unwrap();
        assert_eq!(p.option_tool_tip(), Some("More clipboard options"));

        let mut bare = Panel::new("Bare", 6).option_button(false);
        assert_eq!(bare.option_tool_tip(), None);
        assert!(bare.set_option_tool_tip("x").is_err());
    }

    #[test]
    fn find_by_name() {
        let mut p = panel();
        p.add(Control::button("Paste").name("paste")).unwrap();
        assert_eq!(
            p.find_control("paste").unwrap().control().label_text(),
            Some("Paste")
        );
        assert!(p.find_control("cut").is_none());
    }
}
