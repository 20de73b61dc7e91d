//! The Art Deco family: lacquer, brass and geometric lines.

use atelier_model::{Loungeable, ProductKind, Remark, Seatable, StyleTag, Surfaceable};

use crate::FamilyFactory;

const STYLE: StyleTag = StyleTag::ArtDeco;

/// Art Deco chair. Built only by [`ArtDecoFurnitureFactory`].
#[derive(Debug)]
pub struct ArtDecoChair(());

impl Seatable for ArtDecoChair {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn has_legs(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "Art Deco chair has 3 legs")
    }

    fn sit_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Seatable, "We sit on the Art Deco chair")
    }
}

/// Art Deco sofa. Built only by [`ArtDecoFurnitureFactory`].
#[derive(Debug)]
pub struct ArtDecoSofa(());

impl Loungeable for ArtDecoSofa {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn upholstery(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Loungeable,
            "Art Deco sofa is wrapped in emerald velvet over a curved walnut frame",
        )
    }

    fn lounge_on(&self) -> Remark {
        Remark::new(STYLE, ProductKind::Loungeable, "We lounge on the Art Deco sofa")
    }
}

/// Art Deco coffee table. Built only by [`ArtDecoFurnitureFactory`].
#[derive(Debug)]
pub struct ArtDecoCoffeeTable(());

impl Surfaceable for ArtDecoCoffeeTable {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn tabletop(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "Art Deco coffee table has a mirrored top with a brass edge",
        )
    }

    fn place_items(&self) -> Remark {
        Remark::new(
            STYLE,
            ProductKind::Surfaceable,
            "We set cocktail glasses on the Art Deco coffee table",
        )
    }
}

/// Creates Art Deco furniture.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArtDecoFurnitureFactory;

impl FamilyFactory for ArtDecoFurnitureFactory {
    fn style(&self) -> StyleTag {
        STYLE
    }

    fn create_chair(&self) -> Box<dyn Seatable> {
        Box::new(ArtDecoChair(()))
    }

    fn create_sofa(&self) -> Box<dyn Loungeable> {
        Box::new(ArtDecoSofa(()))
    }

    fn create_coffee_table(&self) -> Box<dyn Surfaceable> {
        Box::new(ArtDecoCoffeeTable(()))
    }
}
