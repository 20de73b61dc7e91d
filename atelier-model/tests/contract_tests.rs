use atelier_model::{Loungeable, ProductKind, Remark, Seatable, StyleTag, Surfaceable};
use pretty_assertions::assert_eq;

// ── Test implementations ─────────────────────────────────────────

struct StoolChair;
impl Seatable for StoolChair {
    fn style(&self) -> StyleTag {
        StyleTag::Modern
    }

    fn has_legs(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Seatable, "three steel legs")
    }

    fn sit_on(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Seatable, "perched")
    }
}

struct Daybed;
impl Loungeable for Daybed {
    fn style(&self) -> StyleTag {
        StyleTag::Victorian
    }

    fn upholstery(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Loungeable, "horsehair")
    }

    fn lounge_on(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Loungeable, "reclined")
    }
}

struct Tray;
impl Surfaceable for Tray {
    fn style(&self) -> StyleTag {
        StyleTag::ArtDeco
    }

    fn tabletop(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Surfaceable, "mirrored")
    }

    fn place_items(&self) -> Remark {
        Remark::new(self.style(), ProductKind::Surfaceable, "cocktails")
    }
}

fn assert_send_sync<T: Send + Sync + ?Sized>() {}

// ── Trait objects ────────────────────────────────────────────────

#[test]
fn contracts_are_object_safe_and_thread_safe() {
    assert_send_sync::<dyn Seatable>();
    assert_send_sync::<dyn Loungeable>();
    assert_send_sync::<dyn Surfaceable>();
}

#[test]
fn seatable_through_trait_object() {
    let chair: Box<dyn Seatable> = Box::new(StoolChair);
    assert_eq!(
        chair.has_legs(),
        Remark::new(StyleTag::Modern, ProductKind::Seatable, "three steel legs")
    );
    assert_eq!(chair.sit_on().as_str(), "perched");
}

#[test]
fn loungeable_through_trait_object() {
    let sofa: Box<dyn Loungeable> = Box::new(Daybed);
    assert_eq!(sofa.style(), StyleTag::Victorian);
    assert_eq!(sofa.upholstery().kind, ProductKind::Loungeable);
    assert_eq!(sofa.lounge_on().to_string(), "reclined");
}

#[test]
fn surfaceable_through_trait_object() {
    let table: &dyn Surfaceable = &Tray;
    assert_eq!(table.tabletop().style, StyleTag::ArtDeco);
    assert_eq!(table.place_items().as_str(), "cocktails");
}

#[test]
fn operations_are_repeatable() {
    let chair = StoolChair;
    assert_eq!(chair.has_legs(), chair.has_legs());
    assert_eq!(chair.sit_on(), chair.sit_on());
}
