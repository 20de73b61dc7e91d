use atelier_model::{Loungeable, Seatable, StyleTag, Surfaceable};

/// Creates a matching chair, sofa and coffee table.
///
/// An implementation is bound to one [`StyleTag`] by its type. Every piece it
/// returns must report that same tag from its own `style()`, on every call,
/// for the lifetime of the factory. None of the creation methods take
/// arguments or can fail.
///
/// The trait is object safe, so a caller can pick a family once and pass
/// `&dyn FamilyFactory` around without naming the concrete style.
pub trait FamilyFactory: Send + Sync {
    /// The family every piece from this factory belongs to.
    fn style(&self) -> StyleTag;

    /// Builds a new chair of this family.
    fn create_chair(&self) -> Box<dyn Seatable>;

    /// Builds a new sofa of this family.
    fn create_sofa(&self) -> Box<dyn Loungeable>;

    /// Builds a new coffee table of this family.
    fn create_coffee_table(&self) -> Box<dyn Surfaceable>;
}

impl<F: FamilyFactory + ?Sized> FamilyFactory for &F {
    fn style(&self) -> StyleTag {
        (**self).style()
    }

    fn create_chair(&self) -> Box<dyn Seatable> {
        (**self).create_chair()
    }

    fn create_sofa(&self) -> Box<dyn Loungeable> {
        (**self).create_sofa()
    }

    fn create_coffee_table(&self) -> Box<dyn Surfaceable> {
        (**self).create_coffee_table()
    }
}

impl<F: FamilyFactory + ?Sized> FamilyFactory for Box<F> {
    fn style(&self) -> StyleTag {
        (**self).style()
    }

    fn create_chair(&self) -> Box<dyn Seatable> {
        (**self).create_chair()
    }

    fn create_sofa(&self) -> Box<dyn Loungeable> {
        (**self).create_sofa()
    }

    fn create_coffee_table(&self) -> Box<dyn Surfaceable> {
        (**self).create_coffee_table()
    }
}
