//! Input records consumed by the layout engine

pub mod commit;
pub mod reference;

// Re-export commonly used types
pub use commit::{Commit, RawCommit};
pub use reference::{RefCategory, Reference};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A palette entry, e.g. `#FFB000`
///
/// The engine treats colors as opaque tokens; interpreting them is up to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
