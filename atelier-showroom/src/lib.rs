//! Showroom client for the Atelier furniture factories.
//!
//! The factory crate deliberately says nothing about how a family is chosen.
//! This crate is the caller that does: it maps a [`StyleTag`] to a factory,
//! assembles a matching set, and renders what the pieces have to say.

use atelier_factory::{
    ArtDecoFurnitureFactory, FamilyFactory, FurnitureSet, ModernFurnitureFactory, Remark,
    StyleTag, VictorianFurnitureFactory,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ShowroomError>;

/// Errors that can occur while rendering a tour.
#[derive(Debug, thiserror::Error)]
pub enum ShowroomError {
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Returns the factory for a style.
///
/// This is the only place a style is turned into a concrete factory.
pub fn select_factory(style: StyleTag) -> Box<dyn FamilyFactory> {
    match style {
        StyleTag::ArtDeco => Box::new(ArtDecoFurnitureFactory),
        StyleTag::Modern => Box::new(ModernFurnitureFactory),
        StyleTag::Victorian => Box::new(VictorianFurnitureFactory),
    }
}

/// Works out which styles to tour from the command-line choices.
///
/// `all` wins over `style` and yields every style in [`StyleTag::ALL`] order.
/// Otherwise `style` is parsed as a single slug.
pub fn resolve_styles(all: bool, style: &str) -> atelier_types::Result<Vec<StyleTag>> {
    if all {
        return Ok(StyleTag::ALL.to_vec());
    }
    Ok(vec![style.parse::<StyleTag>()?])
}

/// What a visitor hears when walking past one furniture set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tour {
    pub style: StyleTag,
    pub remarks: Vec<Remark>,
}

impl Tour {
    /// Assembles a set from `factory` and records its catalog.
    pub fn of(factory: &dyn FamilyFactory) -> Self {
        let set = FurnitureSet::assemble(factory);
        debug!(style = %set.style(), consistent = set.is_consistent(), "Assembled furniture set");
        Self {
            style: set.style(),
            remarks: set.catalog(),
        }
    }

    /// Tours the set for a single style.
    pub fn for_style(style: StyleTag) -> Self {
        Self::of(select_factory(style).as_ref())
    }
}

/// How tours are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// A header per style followed by one indented line per remark.
    #[default]
    Text,
    /// A pretty-printed JSON array of tours.
    Json,
}

/// Renders tours in the requested format.
pub fn render(tours: &[Tour], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tours)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, tour) in tours.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                writeln!(out, "== {} ==", tour.style)?;
                for remark in &tour.remarks {
                    writeln!(out, "  {remark}")?;
                }
            }
            Ok(out)
        }
    }
}
