//! Each variant type implements exactly one furniture contract.
//!
//! `implements!` resolves at compile time: the inherent constant on `Probe<T>`
//! only exists when `T` implements the trait, otherwise lookup falls back to
//! the blanket `false`.

use atelier_factory::{
    ArtDecoChair, ArtDecoCoffeeTable, ArtDecoSofa, Loungeable, ModernChair, ModernCoffeeTable,
    ModernSofa, Seatable, Surfaceable, VictorianChair, VictorianCoffeeTable, VictorianSofa,
};

macro_rules! implements {
    ($ty:ty: $tr:path) => {{
        #[allow(dead_code)]
        trait Fallback {
            const IMPLS: bool = false;
        }
        impl<T: ?Sized> Fallback for T {}

        #[allow(dead_code)]
        struct Probe<T: ?Sized>(std::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $tr> Probe<T> {
            const IMPLS: bool = true;
        }

        <Probe<$ty>>::IMPLS
    }};
}

/// Returns which of the three contracts the type implements.
macro_rules! contracts_of {
    ($ty:ty) => {
        [
            implements!($ty: Seatable),
            implements!($ty: Loungeable),
            implements!($ty: Surfaceable),
        ]
    };
}

const CHAIR: [bool; 3] = [true, false, false];
const SOFA: [bool; 3] = [false, true, false];
const TABLE: [bool; 3] = [false, false, true];

#[test]
fn chairs_are_only_seatable() {
    assert_eq!(contracts_of!(ArtDecoChair), CHAIR);
    assert_eq!(contracts_of!(ModernChair), CHAIR);
    assert_eq!(contracts_of!(VictorianChair), CHAIR);
}

#[test]
fn sofas_are_only_loungeable() {
    assert_eq!(contracts_of!(ArtDecoSofa), SOFA);
    assert_eq!(contracts_of!(ModernSofa), SOFA);
    assert_eq!(contracts_of!(VictorianSofa), SOFA);
}

#[test]
fn coffee_tables_are_only_surfaceable() {
    assert_eq!(contracts_of!(ArtDecoCoffeeTable), TABLE);
    assert_eq!(contracts_of!(ModernCoffeeTable), TABLE);
    assert_eq!(contracts_of!(VictorianCoffeeTable), TABLE);
}

#[test]
fn contract_objects_do_not_cross_kinds() {
    assert!(implements!(dyn Seatable: Seatable));
    assert!(!implements!(dyn Seatable: Loungeable));
    assert!(!implements!(dyn Loungeable: Surfaceable));
    assert!(!implements!(dyn Surfaceable: Seatable));
}
