use atelier_model::{Loungeable, Remark, Seatable, StyleTag, Surfaceable};

use crate::FamilyFactory;

/// One chair, one sofa and one coffee table built by the same factory.
pub struct FurnitureSet {
    style: StyleTag,
    chair: Box<dyn Seatable>,
    sofa: Box<dyn Loungeable>,
    coffee_table: Box<dyn Surfaceable>,
}

impl FurnitureSet {
    /// Builds a full set by calling each of the factory's creation methods once.
    pub fn assemble(factory: &dyn FamilyFactory) -> Self {
        Self {
            style: factory.style(),
            chair: factory.create_chair(),
            sofa: factory.create_sofa(),
            coffee_table: factory.create_coffee_table(),
        }
    }

    /// The family of the factory that built this set.
    #[must_use]
    pub fn style(&self) -> StyleTag {
        self.style
    }

    /// The set's chair.
    pub fn chair(&self) -> &dyn Seatable {
        self.chair.as_ref()
    }

    /// The set's sofa.
    pub fn sofa(&self) -> &dyn Loungeable {
        self.sofa.as_ref()
    }

    /// The set's coffee table.
    pub fn coffee_table(&self) -> &dyn Surfaceable {
        self.coffee_table.as_ref()
    }

    /// Splits the set into its pieces, handing ownership to the caller.
    pub fn into_parts(self) -> (Box<dyn Seatable>, Box<dyn Loungeable>, Box<dyn Surfaceable>) {
        (self.chair, self.sofa, self.coffee_table)
    }

    /// Returns `true` if every piece reports the family of the factory.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.chair.style() == self.style
            && self.sofa.style() == self.style
            && self.coffee_table.style() == self.style
    }

    /// Every remark the set can make, chair first, then sofa, then table.
    /// Each piece contributes its descriptive remark before its usage remark.
    pub fn catalog(&self) -> Vec<Remark> {
        vec![
            self.chair.has_legs(),
            self.chair.sit_on(),
            self.sofa.upholstery(),
            self.sofa.lounge_on(),
            self.coffee_table.tabletop(),
            self.coffee_table.place_items(),
        ]
    }
}

impl std::fmt::Debug for FurnitureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FurnitureSet")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
