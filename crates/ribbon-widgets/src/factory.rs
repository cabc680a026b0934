#![forbid(unsafe_code)]

//! Name-to-constructor registry for controls.
//!
//! Every dispatch name (`"Button"`, `"LargeButton"`, `"HorizontalSeparator"`,
//! ...) is registered explicitly when the factory is created. A sized name
//! binds the control kind to a [`SizeClass`]; an unsized name uses the kind's
//! default span. Unknown names fail with
//! [`RibbonError::InvalidArgument`].
//!
//! Building is pure: it turns a name plus JSON arguments into a
//! [`BuiltControl`] without touching any panel, so callers can validate a
//! whole descriptor before placing anything.

use std::collections::HashMap;

use ribbon_core::{Result, RibbonError};
use ribbon_layout::{FillMode, FixedHeight, RowSpan, SizeClass};
use serde_json::Value;

use crate::control::{Alignment, Control, ControlKind, Orientation, PlacementRequest};

/// Turns positional arguments into a control of the given kind.
pub type BuildFn = fn(ControlKind, &[Value]) -> Result<Control>;

#[derive(Clone, Copy)]
struct FactoryEntry {
    kind: ControlKind,
    class: Option<SizeClass>,
    orientation: Option<Orientation>,
    build: BuildFn,
}

/// A control plus where it wants to go.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltControl {
    pub control: Control,
    pub placement: PlacementRequest,
}

/// Explicit `(size class, control kind)` registry keyed by dispatch name.
#[derive(Clone)]
pub struct ControlFactory {
    entries: HashMap<String, FactoryEntry>,
}

impl std::fmt::Debug for ControlFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlFactory")
            .field("names", &self.entries.len())
            .finish()
    }
}

impl Default for ControlFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlFactory {
    /// Factory with every built-in control kind registered.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        for kind in ControlKind::ALL {
            let build = builder_for(kind);
            factory.insert(kind.name().to_owned(), kind, None, None, build);
            for class in SizeClass::ALL {
                factory.insert(
                    format!("{}{}", class.label(), kind.name()),
                    kind,
                    Some(class),
                    None,
                    build,
                );
            }
        }
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let name = match orientation {
                Orientation::Horizontal => "HorizontalSeparator",
                Orientation::Vertical => "VerticalSeparator",
            };
            factory.insert(
                name.to_owned(),
                ControlKind::Separator,
                None,
                Some(orientation),
                build_separator,
            );
        }
        factory
    }

    /// Factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn insert(
        &mut self,
        name: String,
        kind: ControlKind,
        class: Option<SizeClass>,
        orientation: Option<Orientation>,
        build: BuildFn,
    ) {
        self.entries.insert(
            name,
            FactoryEntry {
                kind,
                class,
                orientation,
                build,
            },
        );
    }

    /// Register an additional dispatch name.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] if the name is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: ControlKind,
        class: Option<SizeClass>,
        build: BuildFn,
    ) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RibbonError::invalid(format!(
                "control type '{name}' is already registered"
            )));
        }
        self.insert(name, kind, class, None, build);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Kind and size class bound to a dispatch name.
    pub fn lookup(&self, name: &str) -> Option<(ControlKind, Option<SizeClass>)> {
        self.entries.get(name).map(|e| (e.kind, e.class))
    }

    /// Build a control from a dispatch name, positional arguments, and
    /// keyword arguments (in document order).
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] for an unknown name, arguments the
    /// kind does not take, unknown keyword names, or values of the wrong type.
    pub fn build(
        &self,
        type_name: &str,
        args: &[Value],
        kwargs: &[(String, Value)],
    ) -> Result<BuiltControl> {
        let entry = self
            .entries
            .get(type_name)
            .ok_or_else(|| RibbonError::invalid(format!("unknown control type '{type_name}'")))?;

        let mut control = (entry.build)(entry.kind, args)?;
        if let Some(orientation) = entry.orientation {
            control = control.orientation(orientation);
        }
        let mut placement = PlacementRequest::for_kind(entry.kind);
        if let Some(class) = entry.class {
            placement.row_span = RowSpan::Class(class);
        }

        for (key, value) in kwargs {
            match key.as_str() {
                "row_span" => {
                    if entry.class.is_some() {
                        return Err(RibbonError::invalid(format!(
                            "'{type_name}' already fixes the row span"
                        )));
                    }
                    placement.row_span = row_span_arg(value)?;
                }
                "col_span" => placement.col_span = usize_arg(key, value)?,
                "mode" => {
                    let name = str_arg(key, value)?;
                    placement.mode = FillMode::parse(name)
                        .ok_or_else(|| RibbonError::invalid(format!("unknown fill mode '{name}'")))?;
                }
                "alignment" => {
                    let name = str_arg(key, value)?;
                    placement.alignment = Alignment::parse(name)
                        .ok_or_else(|| RibbonError::invalid(format!("unknown alignment '{name}'")))?;
                }
                "fixed_height" => placement.fixed_height = fixed_height_arg(value)?,
                _ => control = apply_property(control, key, value)?,
            }
        }

        Ok(BuiltControl { control, placement })
    }
}

fn builder_for(kind: ControlKind) -> BuildFn {
    match kind {
        ControlKind::Button | ControlKind::ToggleButton => build_button,
        ControlKind::CheckBox | ControlKind::Label => build_text,
        ControlKind::ComboBox | ControlKind::FontComboBox | ControlKind::ListWidget => build_items,
        ControlKind::Separator => build_separator,
        _ => build_plain,
    }
}

fn build_button(kind: ControlKind, args: &[Value]) -> Result<Control> {
    let mut control = Control::new(kind);
    match args {
        [] => {}
        [text] => control = control.text(str_arg("text", text)?),
        [text, icon] => {
            control = control
                .text(str_arg("text", text)?)
                .icon(str_arg("icon", icon)?);
        }
        _ => return Err(too_many_args(kind, 2)),
    }
    Ok(control)
}

fn build_text(kind: ControlKind, args: &[Value]) -> Result<Control> {
    match args {
        [] => Ok(Control::new(kind)),
        [text] => Ok(Control::new(kind).text(str_arg("text", text)?)),
        _ => Err(too_many_args(kind, 1)),
    }
}

fn build_items(kind: ControlKind, args: &[Value]) -> Result<Control> {
    match args {
        [] => Ok(Control::new(kind)),
        [items] => Ok(Control::new(kind).items(strings_arg("items", items)?)),
        _ => Err(too_many_args(kind, 1)),
    }
}

fn build_separator(kind: ControlKind, args: &[Value]) -> Result<Control> {
    match args {
        [] => Ok(Control::new(kind)),
        [orientation] => Ok(Control::new(kind).orientation(orientation_arg(orientation)?)),
        _ => Err(too_many_args(kind, 1)),
    }
}

fn build_plain(kind: ControlKind, args: &[Value]) -> Result<Control> {
    if args.is_empty() {
        Ok(Control::new(kind))
    } else {
        Err(too_many_args(kind, 0))
    }
}

fn too_many_args(kind: ControlKind, max: usize) -> RibbonError {
    RibbonError::invalid(format!(
        "{kind} takes at most {max} positional argument(s)"
    ))
}

fn apply_property(control: Control, key: &str, value: &Value) -> Result<Control> {
    Ok(match key {
        "text" => control.text(str_arg(key, value)?),
        "icon" => control.icon(str_arg(key, value)?),
        "tooltip" | "tool_tip" => control.tool_tip(str_arg(key, value)?),
        "status_tip" | "statusTip" => control.status_tip(str_arg(key, value)?),
        "shortcut" => control.shortcut(str_arg(key, value)?),
        "checkable" => control.checkable(bool_arg(key, value)?),
        "show_text" => control.show_text(bool_arg(key, value)?),
        "items" => control.items(strings_arg(key, value)?),
        "orientation" => control.orientation(orientation_arg(value)?),
        "width" => control.width(u16_arg(key, value)?),
        "minimum_width" => control.minimum_width(u16_arg(key, value)?),
        "popup_hide_on_click" => control.popup_hide_on_click(bool_arg(key, value)?),
        _ => {
            return Err(RibbonError::invalid(format!(
                "{} does not accept '{key}'",
                control.kind()
            )));
        }
    })
}

fn type_error(key: &str, expected: &str, value: &Value) -> RibbonError {
    RibbonError::invalid(format!("'{key}' expects {expected}, got {value}"))
}

fn str_arg<'v>(key: &str, value: &'v Value) -> Result<&'v str> {
    value.as_str().ok_or_else(|| type_error(key, "a string", value))
}

fn bool_arg(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| type_error(key, "a boolean", value))
}

fn usize_arg(key: &str, value: &Value) -> Result<usize> {
    value
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| type_error(key, "a non-negative integer", value))
}

fn u16_arg(key: &str, value: &Value) -> Result<u16> {
    value
        .as_u64()
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| type_error(key, "a pixel count", value))
}

fn strings_arg(key: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| type_error(key, "a list of strings", value))?;
    items
        .iter()
        .map(|item| str_arg(key, item).map(str::to_owned))
        .collect()
}

fn orientation_arg(value: &Value) -> Result<Orientation> {
    let name = str_arg("orientation", value)?;
    Orientation::parse(name)
        .ok_or_else(|| RibbonError::invalid(format!("unknown orientation '{name}'")))
}

fn row_span_arg(value: &Value) -> Result<RowSpan> {
    if let Some(name) = value.as_str() {
        return SizeClass::parse(name)
            .map(RowSpan::Class)
            .ok_or_else(|| RibbonError::invalid(format!("unknown size class '{name}'")));
    }
    usize_arg("row_span", value).map(RowSpan::Rows)
}

fn fixed_height_arg(value: &Value) -> Result<FixedHeight> {
    match value {
        Value::Bool(fixed) => Ok(FixedHeight::from(*fixed)),
        Value::Number(n) => n
            .as_f64()
            .map(|v| FixedHeight::from(v as f32))
            .ok_or_else(|| type_error("fixed_height", "a number", value)),
        _ => Err(type_error("fixed_height", "a boolean or a number", value)),
    }
}
