use atelier_types::{Remark, StyleTag};

/// Something you can stretch out on.
pub trait Loungeable: Send + Sync {
    /// The family this sofa belongs to.
    fn style(&self) -> StyleTag;

    /// Describes the sofa's upholstery and frame.
    fn upholstery(&self) -> Remark;

    /// Describes lounging on the sofa.
    fn lounge_on(&self) -> Remark;
}
