#![forbid(unsafe_code)]

//! Bulk-construction descriptors.
//!
//! A descriptor is a nested JSON object that drives the imperative add
//! operations:
//!
//! ```json
//! {
//!   "Home": {
//!     "style": "Normal",
//!     "panels": {
//!       "Clipboard": {
//!         "show_option_button": true,
//!         "widgets": {
//!           "paste": { "type": "LargeButton", "args": ["Paste"] },
//!           "cut":   { "type": "SmallButton", "kwargs": { "text": "Cut" } }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Object keys keep document order: every map is read into [`Entries`], a
//! list of `(key, value)` pairs, so categories, panels, and controls are
//! created in the order they are written. `serde_json` is built with
//! `preserve_order`, so a [`Value`] handed to
//! [`RibbonDescriptor::from_value`] keeps its insertion order too.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use ribbon_core::{Result, RibbonError};
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::category::CategoryStyle;

/// Ordered `(key, value)` pairs read from a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entries<V>(pub Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Deref for Entries<V> {
    type Target = [(String, V)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> Entries<V> {
    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<V> FromIterator<(String, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(Entries(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// One control: dispatch name plus constructor arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default, alias = "arguments")]
    pub kwargs: Entries<Value>,
}

/// One panel and its controls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelDescriptor {
    #[serde(
        default = "default_true",
        alias = "showPanelOptionButton",
        alias = "show_panel_option_button"
    )]
    pub show_option_button: bool,
    #[serde(default)]
    pub widgets: Entries<WidgetDescriptor>,
}

impl Default for PanelDescriptor {
    fn default() -> Self {
        Self {
            show_option_button: true,
            widgets: Entries::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// One category and its panels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDescriptor {
    #[serde(default)]
    pub style: CategoryStyle,
    /// `#rrggbb`, `#rgb`, or a basic color name.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub panels: Entries<PanelDescriptor>,
}

/// A whole ribbon: category title to category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RibbonDescriptor {
    pub categories: Entries<CategoryDescriptor>,
}

impl RibbonDescriptor {
    /// Parse a descriptor from JSON text.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] if the text is not a well-formed
    /// descriptor.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|err| RibbonError::invalid(format!("malformed descriptor: {err}")))
    }

    /// Convert an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidArgument`] if the value is not a descriptor.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|err| RibbonError::invalid(format!("malformed descriptor: {err}")))
    }
}
