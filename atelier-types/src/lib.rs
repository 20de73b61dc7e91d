//! Core type definitions for Atelier.
//!
//! This crate defines the small, behavior-free vocabulary shared by every
//! other crate in the workspace:
//! - Style tags identifying a furniture family
//! - Product kinds naming the three furniture contracts
//! - Remarks, the observable output of every furniture operation
//!
//! The furniture contracts themselves live in `atelier-model`; the families
//! that implement them live in `atelier-factory`.

mod kind;
mod remark;
mod style;

pub use kind::ProductKind;
pub use remark::Remark;
pub use style::StyleTag;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown style: {0:?}")]
    UnknownStyle(String),
}
