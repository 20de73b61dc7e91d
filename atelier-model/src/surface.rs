use atelier_types::{Remark, StyleTag};

/// Something you can put things on.
pub trait Surfaceable: Send + Sync {
    /// The family this table belongs to.
    fn style(&self) -> StyleTag;

    /// Describes the tabletop surface.
    fn tabletop(&self) -> Remark;

    /// Describes placing everyday items on the surface.
    fn place_items(&self) -> Remark;
}
