#![forbid(unsafe_code)]

//! Row-span size classes.
//!
//! Panels describe control heights either as an explicit row count or as one
//! of three size classes. The default row counts derive from the panel's
//! maximum row count: large spans every row, medium half of them, small a
//! third, with medium and small rounded half-to-even and clamped to at least
//! one row.

use std::fmt;

use ribbon_core::{Result, RibbonError};

/// Named control size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// All classes, smallest first.
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Display label, also used as a dispatch-name prefix.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        }
    }

    /// Parse a class name, case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Requested row span: explicit or by size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSpan {
    Rows(usize),
    Class(SizeClass),
}

impl Default for RowSpan {
    fn default() -> Self {
        RowSpan::Class(SizeClass::Small)
    }
}

impl From<usize> for RowSpan {
    fn from(rows: usize) -> Self {
        RowSpan::Rows(rows)
    }
}

impl From<SizeClass> for RowSpan {
    fn from(class: SizeClass) -> Self {
        RowSpan::Class(class)
    }
}

/// Row counts for each size class of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanClasses {
    max_rows: usize,
    small: usize,
    medium: usize,
    large: usize,
}

impl SpanClasses {
    /// Default classes for a panel with `max_rows` rows.
    pub fn for_max_rows(max_rows: usize) -> Self {
        let max_rows = max_rows.max(1);
        Self {
            max_rows,
            small: divided_rows(max_rows, 3.0),
            medium: divided_rows(max_rows, 2.0),
            large: max_rows,
        }
    }

    #[inline]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Row count for a size class.
    #[must_use]
    pub const fn rows(&self, class: SizeClass) -> usize {
        match class {
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
        }
    }

    /// Resolve a [`RowSpan`] to a row count. Explicit counts pass through
    /// unchecked; the allocator validates them.
    #[must_use]
    pub const fn resolve(&self, span: RowSpan) -> usize {
        match span {
            RowSpan::Rows(rows) => rows,
            RowSpan::Class(class) => self.rows(class),
        }
    }

    /// Override the row count of one class.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] unless `0 < rows <= max_rows`.
    pub fn set_rows(&mut self, class: SizeClass, rows: usize) -> Result<()> {
        if rows == 0 || rows > self.max_rows {
            return Err(RibbonError::InvalidSpan {
                row_span: rows,
                col_span: 1,
                rows: self.max_rows,
            });
        }
        match class {
            SizeClass::Small => self.small = rows,
            SizeClass::Medium => self.medium = rows,
            SizeClass::Large => self.large = rows,
        }
        Ok(())
    }
}

impl Default for SpanClasses {
    fn default() -> Self {
        Self::for_max_rows(6)
    }
}

fn divided_rows(max_rows: usize, divisor: f64) -> usize {
    ((max_rows as f64 / divisor).round_ties_even() as usize).max(1)
}
