//! The Victorian family: carved mahogany, tufting and marble.

use atelier_model::{Loungeable, ProductKind, Remark, Seatable, StyleTag, Surfaceable};

use crate::FamilyFactory;

const STYLE: StyleTag = StyleTag::Victorian;

/// Victorian chair. Built only by [`VictorianFurnitureFactory`].
#[derive(Debug)]
pub struct VictorianChair(());

impl Seatable for VictorianChair {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn has_legs(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "This Victorian chair has 5 legs")
    }

    fn sit_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "We sit on this Victorian chair")
    }
}

/// Victorian sofa. Built only by [`VictorianFurnitureFactory`].
#[derive(Debug)]
pub struct VictorianSofa(());

impl Loungeable for VictorianSofa {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn upholstery(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Loungeable,
            "This Victorian sofa has button-tufted damask on a carved mahogany frame",
        )
    }

    fn lounge_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Loungeable, "We lounge on this Victorian sofa")
    }
}

/// Victorian coffee table. Built only by [`VictorianFurnitureFactory`].
#[derive(Debug)]
pub struct VictorianCoffeeTable(());

impl Surfaceable for VictorianCoffeeTable {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn tabletop(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "This Victorian coffee table has a veined marble top",
        )
    }

    fn place_items(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "We lay a tea service on this Victorian coffee table",
        )
    }
}

/// Creates Victorian furniture.
#[derive(Debug, Default, Clone, Copy)]
pub struct VictorianFurnitureFactory;

impl FamilyFactory for VictorianFurnitureFactory {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn create_chair(&self) -> Box<dyn Seatable> {
        Box::new(VictorianChair(()))
    }

    fn create_sofa(&self) -> Box<dyn Loungeable> {
        Box::new(VictorianSofa(()))
    }

    fn create_coffee_table(&self) -> Box<dyn Surfaceable> {
        Box::new(VictorianCoffeeTable(()))
    }
}
