//! Furniture contracts for Atelier.
//!
//! Defines the three independent capability traits every furniture family
//! provides one variant for:
//! - [`Seatable`] — a chair
//! - [`Loungeable`] — a sofa
//! - [`Surfaceable`] — a coffee table
//!
//! The traits share no supertrait and no state. A type implements exactly one
//! of them. Every operation is nullary, cannot fail, and reports what happened
//! as a [`Remark`] rather than writing to the console.

mod lounge;
mod seat;
mod surface;

pub use atelier_types::{ProductKind, Remark, StyleTag};
pub use lounge::Loungeable;
pub use seat::Seatable;
pub use surface::Surfaceable;
