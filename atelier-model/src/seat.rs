use atelier_types::{Remark, StyleTag};

/// Something you can sit on.
///
/// Implementations return remarks tagged with their own [`StyleTag`] and
/// [`ProductKind::Seatable`](atelier_types::ProductKind::Seatable).
pub trait Seatable: Send + Sync {
    /// The family this chair belongs to.
    fn style(&self) -> StyleTag;

    /// Describes the chair's legs or underlying structure.
    fn has_legs(&self) -> Remark;

    /// Describes sitting on the chair.
    fn sit_on(&self) -> Remark;
}
