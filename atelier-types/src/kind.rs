use serde::{Deserialize, Serialize};
use std::fmt;

/// The three furniture contracts a family provides one variant for.
///
/// This labels remarks and reports. The contracts themselves are separate
/// traits in `atelier-model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Something to sit on (a chair).
    Seatable,
    /// Something to lounge on (a sofa).
    Loungeable,
    /// Something to put things on (a coffee table).
    Surfaceable,
}

impl ProductKind {
    /// Every kind, in the order a family factory creates them.
    pub const ALL: [ProductKind; 3] = [
        ProductKind::Seatable,
        ProductKind::Loungeable,
        ProductKind::Surfaceable,
    ];

    /// Returns the everyday name of the furniture piece for this kind.
    #[must_use]
    pub const fn piece(self) -> &'static str {
        match self {
            Self::Seatable => "chair",
            Self::Loungeable => "sofa",
            Self::Surfaceable => "coffee table",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.piece())
    }
}
