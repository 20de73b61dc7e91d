//! Furniture family factories for Atelier.
//!
//! A [`FamilyFactory`] creates one chair, one sofa and one coffee table on
//! demand, and every piece it creates belongs to the same style family. Callers
//! hold a factory without knowing its concrete style and receive pieces typed
//! only by their contract (`Box<dyn Seatable>` and friends).
//!
//! # Families
//!
//! - [`ArtDecoFurnitureFactory`]
//! - [`ModernFurnitureFactory`]
//! - [`VictorianFurnitureFactory`]
//!
//! # Guarantees
//!
//! - **Family consistency**: a factory only ever creates pieces of its own
//!   [`StyleTag`], for as long as it lives.
//! - **Fresh pieces**: every creation call builds a new piece owned by the
//!   caller. Nothing is cached or shared.
//! - **No side effects**: creating a piece does not print, log, or touch
//!   shared state, so factories can be used from any thread.
//!
//! Variant types are public so they can be named, but they can only be
//! constructed by their family's factory.

mod art_deco;
mod factory;
mod modern;
mod set;
mod victorian;

pub use art_deco::{ArtDecoChair, ArtDecoCoffeeTable, ArtDecoFurnitureFactory, ArtDecoSofa};
pub use atelier_model::{Loungeable, ProductKind, Remark, Seatable, StyleTag, Surfaceable};
pub use factory::FamilyFactory;
pub use modern::{ModernChair, ModernCoffeeTable, ModernFurnitureFactory, ModernSofa};
pub use set::FurnitureSet;
pub use victorian::{
    VictorianChair, VictorianCoffeeTable, VictorianFurnitureFactory, VictorianSofa,
};
