use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ProductKind, StyleTag};

/// The observable result of a furniture operation.
///
/// Operations return a remark instead of printing, so callers decide where
/// the text goes and tests can inspect it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub style: StyleTag,
    pub kind: ProductKind,
    pub text: String,
}

impl Remark {
    /// Creates a remark for a piece of the given style and kind.
    pub fn new(style: StyleTag, kind: ProductKind, text: impl Into<String>) -> Self {
        Self {
            style,
            kind,
            text: text.into(),
        }
    }

    /// Returns the remark text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
