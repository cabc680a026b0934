#![forbid(unsafe_code)]

//! Icon registry.
//!
//! The ribbon only asks for paths of a small set of built-in icon roles; it
//! never opens the files. Hosts register real paths once at startup.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ribbon_core::{EntityKind, Result, RibbonError};

/// Built-in icon roles used by ribbon chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRole {
    Application,
    Backward,
    Forward,
    Up,
    Down,
    More,
    Linking,
    Help,
    Undo,
    Redo,
}

impl IconRole {
    pub const ALL: [IconRole; 10] = [
        IconRole::Application,
        IconRole::Backward,
        IconRole::Forward,
        IconRole::Up,
        IconRole::Down,
        IconRole::More,
        IconRole::Linking,
        IconRole::Help,
        IconRole::Undo,
        IconRole::Redo,
    ];

    /// Registry key for the role.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            IconRole::Application => "icons/application.png",
            IconRole::Backward => "icons/backward.png",
            IconRole::Forward => "icons/forward.png",
            IconRole::Up => "icons/up.png",
            IconRole::Down => "icons/down.png",
            IconRole::More => "icons/more.png",
            IconRole::Linking => "icons/linking.png",
            IconRole::Help => "icons/help.png",
            IconRole::Undo => "icons/undo.png",
            IconRole::Redo => "icons/redo.png",
        }
    }
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key-to-path lookup for icons.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    entries: HashMap<String, PathBuf>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the path for `key`.
    pub fn register(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        let key = key.into();
        let path = path.into();
        ribbon_core::trace!(key = %key, path = %path.display(), "icon registered");
        self.entries.insert(key, path);
    }

    /// Register paths for built-in roles.
    pub fn register_roles<I, P>(&mut self, roles: I)
    where
        I: IntoIterator<Item = (IconRole, P)>,
        P: Into<PathBuf>,
    {
        for (role, path) in roles {
            self.register(role.key(), path);
        }
    }

    /// Register many `(key, path)` pairs.
    pub fn register_all<I, K, P>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<PathBuf>,
    {
        for (key, path) in entries {
            self.register(key, path);
        }
    }

    /// Path registered for `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    /// Path registered for a built-in role.
    ///
    /// # Errors
    ///
    /// [`RibbonError::NotFound`] if the host never registered the role.
    pub fn resolve_role(&self, role: IconRole) -> Result<&Path> {
        self.resolve(role.key())
            .ok_or_else(|| RibbonError::not_found(EntityKind::Icon, role.key()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
