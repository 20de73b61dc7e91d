//! Style tags identifying a furniture family.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Identifies a family of furniture meant to be used together.
///
/// Adding a tag means adding a matching family factory and its three
/// variants; nothing registers families at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    ArtDeco,
    Modern,
    Victorian,
}

impl StyleTag {
    /// Every style, in declaration order.
    pub const ALL: [StyleTag; 3] = [StyleTag::ArtDeco, StyleTag::Modern, StyleTag::Victorian];

    /// Returns the machine-friendly name, e.g. `art-deco`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ArtDeco => "art-deco",
            Self::Modern => "modern",
            Self::Victorian => "victorian",
        }
    }

    /// Returns the human-readable name, e.g. `Art Deco`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArtDeco => "Art Deco",
            Self::Modern => "Modern",
            Self::Victorian => "Victorian",
        }
    }

    /// Parses a style from a slug.
    ///
    /// Matching ignores case. A single `-`, `_` or space may separate the
    /// words of a multi-word name, so `art-deco`, `Art_Deco`, `Art Deco` and
    /// `ArtDeco` all resolve. Separators inside a word (`mod-ern`) or doubled
    /// separators (`art--deco`) are rejected.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let words: Vec<String> = s
            .trim()
            .split(['-', '_', ' '])
            .map(str::to_ascii_lowercase)
            .collect();

        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        match words.as_slice() {
            ["art", "deco"] | ["artdeco"] => Ok(Self::ArtDeco),
            ["modern"] => Ok(Self::Modern),
            ["victorian"] => Ok(Self::Victorian),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
