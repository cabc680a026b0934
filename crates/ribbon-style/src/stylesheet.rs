#![forbid(unsafe_code)]

//! Theme registry: accumulates opaque style text and hands it to targets.
//!
//! The registry never parses the text. Each applied source is appended to
//! the accumulated sheet and the full sheet is pushed to the target, so later
//! sources override earlier ones under the host's cascade rules. Style text
//! has no effect on layout geometry.
//!
//! # Example
//! ```
//! use ribbon_style::{StyleTarget, ThemeRegistry};
//!
//! #[derive(Default)]
//! struct Bar(String);
//!
//! impl StyleTarget for Bar {
//!     fn set_style_sheet(&mut self, sheet: &str) {
//!         self.0 = sheet.to_owned();
//!     }
//! }
//!
//! let mut themes = ThemeRegistry::new();
//! let mut bar = Bar::default();
//! themes.apply(&mut bar, "RibbonBar { background: white; }");
//! themes.apply(&mut bar, "RibbonTabBar { color: black; }");
//! assert!(bar.0.starts_with("RibbonBar"));
//! assert!(bar.0.ends_with("color: black; }"));
//! ```

use std::path::Path;

use ribbon_core::Result;

/// Something that accepts a complete style sheet.
pub trait StyleTarget {
    /// Replace the target's style sheet.
    fn set_style_sheet(&mut self, sheet: &str);
}

/// Accumulated style text plus the names of the sources it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    sheet: String,
    sources: Vec<String>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `source` to the sheet and push the whole sheet to `target`.
    pub fn apply<T: StyleTarget + ?Sized>(&mut self, target: &mut T, source: &str) {
        self.push(source, "<inline>");
        target.set_style_sheet(&self.sheet);
    }

    /// Read a style file, append it, and push the whole sheet to `target`.
    ///
    /// # Errors
    ///
    /// [`RibbonError::Io`](ribbon_core::RibbonError::Io) if the file cannot
    /// be read. The registry and target are unchanged in that case.
    pub fn apply_file<T: StyleTarget + ?Sized>(
        &mut self,
        target: &mut T,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        self.push(&text, &path.display().to_string());
        target.set_style_sheet(&self.sheet);
        Ok(())
    }

    fn push(&mut self, text: &str, origin: &str) {
        if !self.sheet.is_empty() && !self.sheet.ends_with('\n') {
            self.sheet.push('\n');
        }
        self.sheet.push_str(text);
        self.sources.push(origin.to_owned());
        ribbon_core::debug!(origin, bytes = self.sheet.len(), "style source applied");
    }

    /// The accumulated sheet.
    pub fn style_sheet(&self) -> &str {
        &self.sheet
    }

    /// Origins of applied sources, oldest first.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Forget all accumulated text.
    pub fn clear(&mut self) {
        self.sheet.clear();
        self.sources.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        sheets: Vec<String>,
    }

    impl StyleTarget for Recorder {
        fn set_style_sheet(&mut self, sheet: &str) {
            self.sheets.push(sheet.to_owned());
        }
    }

    #[test]
    fn apply_concatenates_sources() {
        let mut themes = ThemeRegistry::new();
        let mut target = Recorder::default();
        themes.apply(&mut target, "a { }");
        themes.apply(&mut target, "b { }");
        assert_eq!(target.sheets, vec!["a { }", "a { }\nb { }"]);
        assert_eq!(themes.sources().len(), 2);
    }

    #[test]
    fn apply_file_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.qss");
        std::fs::write(&path, "RibbonPanel { border: none; }\n").unwrap();

        let mut themes = ThemeRegistry::new();
        let mut target = Recorder::default();
        themes.apply_file(&mut target, &path).unwrap();
        themes.apply(&mut target, "x { }");
        assert_eq!(
            themes.style_sheet(),
            "RibbonPanel { border: none; }\nx { }"
        );
    }

    #[test]
    fn missing_file_leaves_state_unchanged() {
        let mut themes = ThemeRegistry::new();
        let mut target = Recorder::default();
        themes.apply(&mut target, "a { }");
        let err = themes
            .apply_file(&mut target, "/definitely/not/here.qss")
            .unwrap_err();
        assert!(matches!(err, ribbon_core::RibbonError::Io(_)));
        assert_eq!(themes.style_sheet(), "a { }");
        assert_eq!(target.sheets.len(), 1);
    }

    #[test]
    fn clear_resets() {
        let mut themes = ThemeRegistry::new();
        let mut target = Recorder::default();
        themes.apply(&mut target, "a { }");
        themes.clear();
        assert!(themes.style_sheet().is_empty());
        assert!(themes.sources().is_empty());
    }
}
