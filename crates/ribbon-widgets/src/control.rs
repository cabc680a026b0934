#![forbid(unsafe_code)]

//! Control records and placement requests.
//!
//! A [`Control`] is the metadata of one leaf control (button, combo box,
//! separator, ...). It carries no drawing state; the host toolkit builds the
//! real widget from it. A [`PlacementRequest`] says how much grid space the
//! control wants inside a panel.

use std::fmt;

use ribbon_layout::{FillMode, FixedHeight, RowSpan, SizeClass};

/// Kind of leaf control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    ToggleButton,
    CheckBox,
    ComboBox,
    FontComboBox,
    LineEdit,
    TextEdit,
    PlainTextEdit,
    Label,
    ProgressBar,
    Slider,
    SpinBox,
    DoubleSpinBox,
    DateEdit,
    TimeEdit,
    DateTimeEdit,
    TableWidget,
    TreeWidget,
    ListWidget,
    CalendarWidget,
    Separator,
    Gallery,
}

impl ControlKind {
    pub const ALL: [ControlKind; 22] = [
        ControlKind::Button,
        ControlKind::ToggleButton,
        ControlKind::CheckBox,
        ControlKind::ComboBox,
        ControlKind::FontComboBox,
        ControlKind::LineEdit,
        ControlKind::TextEdit,
        ControlKind::PlainTextEdit,
        ControlKind::Label,
        ControlKind::ProgressBar,
        ControlKind::Slider,
        ControlKind::SpinBox,
        ControlKind::DoubleSpinBox,
        ControlKind::DateEdit,
        ControlKind::TimeEdit,
        ControlKind::DateTimeEdit,
        ControlKind::TableWidget,
        ControlKind::TreeWidget,
        ControlKind::ListWidget,
        ControlKind::CalendarWidget,
        ControlKind::Separator,
        ControlKind::Gallery,
    ];

    /// Dispatch name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::Button => "Button",
            ControlKind::ToggleButton => "ToggleButton",
            ControlKind::CheckBox => "CheckBox",
            ControlKind::ComboBox => "ComboBox",
            ControlKind::FontComboBox => "FontComboBox",
            ControlKind::LineEdit => "LineEdit",
            ControlKind::TextEdit => "TextEdit",
            ControlKind::PlainTextEdit => "PlainTextEdit",
            ControlKind::Label => "Label",
            ControlKind::ProgressBar => "ProgressBar",
            ControlKind::Slider => "Slider",
            ControlKind::SpinBox => "SpinBox",
            ControlKind::DoubleSpinBox => "DoubleSpinBox",
            ControlKind::DateEdit => "DateEdit",
            ControlKind::TimeEdit => "TimeEdit",
            ControlKind::DateTimeEdit => "DateTimeEdit",
            ControlKind::TableWidget => "TableWidget",
            ControlKind::TreeWidget => "TreeWidget",
            ControlKind::ListWidget => "ListWidget",
            ControlKind::CalendarWidget => "CalendarWidget",
            ControlKind::Separator => "Separator",
            ControlKind::Gallery => "Gallery",
        }
    }

    /// Row span used when the caller does not ask for one.
    #[must_use]
    pub const fn default_span(self) -> RowSpan {
        match self {
            ControlKind::Button
            | ControlKind::ToggleButton
            | ControlKind::FontComboBox
            | ControlKind::TableWidget
            | ControlKind::TreeWidget
            | ControlKind::ListWidget
            | ControlKind::CalendarWidget
            | ControlKind::Separator
            | ControlKind::Gallery => RowSpan::Class(SizeClass::Large),
            _ => RowSpan::Class(SizeClass::Small),
        }
    }

    /// Buttons get an icon size derived from the panel height when large.
    #[must_use]
    pub const fn is_button(self) -> bool {
        matches!(self, ControlKind::Button | ControlKind::ToggleButton)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of separators and sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Alignment of a control inside its grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Center,
}

impl Alignment {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "right" => Some(Alignment::Right),
            "top" => Some(Alignment::Top),
            "bottom" => Some(Alignment::Bottom),
            "center" | "centre" => Some(Alignment::Center),
            _ => None,
        }
    }
}

/// Default width of a separator placed inside a panel.
pub const SEPARATOR_WIDTH: u16 = 6;

/// Default minimum width of a gallery.
pub const GALLERY_MIN_WIDTH: u16 = 800;

/// Metadata of one leaf control.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    kind: ControlKind,
    name: Option<String>,
    text: Option<String>,
    icon: Option<String>,
    tool_tip: Option<String>,
    status_tip: Option<String>,
    shortcut: Option<String>,
    checkable: bool,
    show_text: bool,
    items: Vec<String>,
    orientation: Orientation,
    width: Option<u16>,
    minimum_width: Option<u16>,
    popup_hide_on_click: bool,
}

impl Control {
    /// Create a control of the given kind with default properties.
    pub fn new(kind: ControlKind) -> Self {
        let (width, minimum_width) = match kind {
            ControlKind::Separator => (Some(SEPARATOR_WIDTH), None),
            ControlKind::Gallery => (None, Some(GALLERY_MIN_WIDTH)),
            _ => (None, None),
        };
        Self {
            kind,
            name: None,
            text: None,
            icon: None,
            tool_tip: None,
            status_tip: None,
            shortcut: None,
            checkable: kind == ControlKind::ToggleButton,
            show_text: true,
            items: Vec::new(),
            orientation: Orientation::default(),
            width,
            minimum_width,
            popup_hide_on_click: false,
        }
    }

    /// A push button with text.
    pub fn button(text: impl Into<String>) -> Self {
        Self::new(ControlKind::Button).text(text)
    }

    /// A checkable button with text.
    pub fn toggle_button(text: impl Into<String>) -> Self {
        Self::new(ControlKind::ToggleButton).text(text)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ControlKind::Label).text(text)
    }

    pub fn combo_box<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ControlKind::ComboBox).items(items)
    }

    pub fn separator(orientation: Orientation) -> Self {
        Self::new(ControlKind::Separator).orientation(orientation)
    }

    pub fn gallery() -> Self {
        Self::new(ControlKind::Gallery)
    }

    // --- Builders ---

    /// Name used to look the control up after placement.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Icon registry key.
    #[must_use]
    pub fn icon(mut self, key: impl Into<String>) -> Self {
        self.icon = Some(key.into());
        self
    }

    #[must_use]
    pub fn tool_tip(mut self, text: impl Into<String>) -> Self {
        self.tool_tip = Some(text.into());
        self
    }

    #[must_use]
    pub fn status_tip(mut self, text: impl Into<String>) -> Self {
        self.status_tip = Some(text.into());
        self
    }

    #[must_use]
    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }

    #[must_use]
    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    /// Whether a button shows its text next to the icon.
    #[must_use]
    pub fn show_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    #[must_use]
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn minimum_width(mut self, width: u16) -> Self {
        self.minimum_width = Some(width);
        self
    }

    #[must_use]
    pub fn popup_hide_on_click(mut self, hide: bool) -> Self {
        self.popup_hide_on_click = hide;
        self
    }

    // --- Accessors ---

    pub const fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn object_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn icon_key(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn tool_tip_text(&self) -> Option<&str> {
        self.tool_tip.as_deref()
    }

    pub fn status_tip_text(&self) -> Option<&str> {
        self.status_tip.as_deref()
    }

    pub fn shortcut_keys(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    pub const fn is_checkable(&self) -> bool {
        self.checkable
    }

    pub const fn shows_text(&self) -> bool {
        self.show_text
    }

    pub fn item_list(&self) -> &[String] {
        &self.items
    }

    pub const fn control_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Fixed width, for separators.
    pub const fn fixed_width(&self) -> Option<u16> {
        self.width
    }

    pub const fn min_width(&self) -> Option<u16> {
        self.minimum_width
    }

    pub const fn hides_popup_on_click(&self) -> bool {
        self.popup_hide_on_click
    }
}

/// How much grid space a control asks for, and how to size it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub row_span: RowSpan,
    pub col_span: usize,
    pub mode: FillMode,
    pub alignment: Alignment,
    pub fixed_height: FixedHeight,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            row_span: RowSpan::default(),
            col_span: 1,
            mode: FillMode::ColumnWise,
            alignment: Alignment::Center,
            fixed_height: FixedHeight::Off,
        }
    }
}

impl PlacementRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a control kind (buttons and list-like controls are large).
    pub fn for_kind(kind: ControlKind) -> Self {
        Self {
            row_span: kind.default_span(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn row_span(mut self, span: impl Into<RowSpan>) -> Self {
        self.row_span = span.into();
        self
    }

    #[must_use]
    pub fn col_span(mut self, cols: usize) -> Self {
        self.col_span = cols;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: FillMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn fixed_height(mut self, fixed: impl Into<FixedHeight>) -> Self {
        self.fixed_height = fixed.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults() {
        assert_eq!(
            ControlKind::Button.default_span(),
            RowSpan::Class(SizeClass::Large)
        );
        assert_eq!(
            ControlKind::ComboBox.default_span(),
            RowSpan::Class(SizeClass::Small)
        );
        assert!(ControlKind::ToggleButton.is_button());
        assert!(!ControlKind::Label.is_button());
    }

    #[test]
    fn constructors_set_kind_specific_defaults() {
        let sep = Control::separator(Orientation::Horizontal);
        assert_eq!(sep.fixed_width(), Some(SEPARATOR_WIDTH));
        assert_eq!(sep.control_orientation(), Orientation::Horizontal);

        assert_eq!(Control::gallery().min_width(), Some(GALLERY_MIN_WIDTH));
        assert!(Control::toggle_button("Bold").is_checkable());
        assert!(!Control::button("Open").is_checkable());
    }

    #[test]
    fn builder_chain() {
        let c = Control::button("Save")
            .name("save")
            .icon("icons/save.png")
            .tool_tip("Save the document")
            .shortcut("Ctrl+S")
            .show_text(false);
        assert_eq!(c.object_name(), Some("save"));
        assert_eq!(c.label_text(), Some("Save"));
        assert_eq!(c.icon_key(), Some("icons/save.png"));
        assert_eq!(c.shortcut_keys(), Some("Ctrl+S"));
        assert!(!c.shows_text());
    }

    #[test]
    fn placement_defaults() {
        let req = PlacementRequest::default();
        assert_eq!(req.row_span, RowSpan::Class(SizeClass::Small));
        assert_eq!(req.col_span, 1);
        assert_eq!(req.fixed_height, FixedHeight::Off);

        let req = PlacementRequest::for_kind(ControlKind::Gallery).fixed_height(true);
        assert_eq!(req.row_span, RowSpan::Class(SizeClass::Large));
        assert_eq!(req.fixed_height, FixedHeight::Max);
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(Orientation::parse("Horizontal"), Some(Orientation::Horizontal));
        assert_eq!(Alignment::parse("LEFT"), Some(Alignment::Left));
        assert_eq!(Alignment::parse("diagonal"), None);
    }
}
