//! The Modern family: steel, glass and low, clean profiles.

use atelier_model::{Loungeable, ProductKind, Remark, Seatable, StyleTag, Surfaceable};

use crate::FamilyFactory;

const STYLE: StyleTag = StyleTag::Modern;

/// Modern chair. Built only by [`ModernFurnitureFactory`].
#[derive(Debug)]
pub struct ModernChair(());

impl Seatable for ModernChair {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn has_legs(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "Modern chair has 7 legs")
    }

    fn sit_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "We sit on the Modern chair")
    }
}

/// Modern sofa. Built only by [`ModernFurnitureFactory`].
#[derive(Debug)]
pub struct ModernSofa(());

impl Loungeable for ModernSofa {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn upholstery(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Loungeable,
            "Modern sofa has grey boucle cushions on a low steel base",
        )
    }

    fn lounge_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Loungeable, "We lounge on the Modern sofa")
    }
}

/// Modern coffee table. Built only by [`ModernFurnitureFactory`].
#[derive(Debug)]
pub struct ModernCoffeeTable(());

impl Surfaceable for ModernCoffeeTable {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn tabletop(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "Modern coffee table has a tempered glass top",
        )
    }

    fn place_items(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "We put a laptop and a mug on the Modern coffee table",
        )
    }
}

/// Creates Modern furniture.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModernFurnitureFactory;

impl FamilyFactory for ModernFurnitureFactory {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn create_chair(&self) -> Box<dyn Seatable> {
        Box::new(ModernChair(()))
    }

    fn create_sofa(&self) -> Box<dyn Loungeable> {
        Box::new(ModernSofa(()))
    }

    fn create_coffee_table(&self) -> Box<dyn Surfaceable> {
        Box::new(ModernCoffeeTable(()))
    }
}
