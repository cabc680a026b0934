#![forbid(unsafe_code)]

//! Error taxonomy shared by every ribbon crate.
//!
//! All errors are raised synchronously by the call that detects them, before
//! that call mutates anything. Callers can therefore treat any `Err` as "no
//! state changed".

use std::fmt;

/// What kind of entity a [`RibbonError::DuplicateKey`] or
/// [`RibbonError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    ContextGroup,
    Panel,
    Tab,
    Control,
    Icon,
}

impl EntityKind {
    /// Lowercase label for messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::ContextGroup => "context group",
            Self::Panel => "panel",
            Self::Tab => "tab",
            Self::Control => "control",
            Self::Icon => "icon",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised by ribbon operations.
#[derive(Debug)]
pub enum RibbonError {
    /// A requested span does not fit the grid (row span larger than the row
    /// count, a zero span, or an oversized column span).
    InvalidSpan {
        row_span: usize,
        col_span: usize,
        rows: usize,
    },
    /// A unique title is already taken.
    DuplicateKey { kind: EntityKind, key: String },
    /// A referenced category, tab, panel, or control does not exist.
    NotFound { kind: EntityKind, key: String },
    /// Bad dispatch type, malformed descriptor, or an argument the operation
    /// cannot accept.
    InvalidArgument(String),
    /// Deliberately unimplemented legacy operation.
    Unsupported { operation: &'static str },
    /// I/O failure while reading a style source.
    Io(std::io::Error),
}

impl RibbonError {
    /// Shorthand for a `DuplicateKey` error.
    pub fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan {
                row_span,
                col_span,
                rows,
            } => write!(
                f,
                "span {row_span}x{col_span} does not fit a grid with {rows} rows"
            ),
            Self::DuplicateKey { kind, key } => write!(f, "{kind} '{key}' already exists"),
            Self::NotFound { kind, key } => write!(f, "{kind} '{key}' not found"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Unsupported { operation } => {
                write!(f, "{operation}() is not supported by the ribbon bar")
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RibbonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for ribbon APIs.
pub type Result<T> = std::result::Result<T, RibbonError>;
