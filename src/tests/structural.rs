use crate::compare::{HashEq, StructuralComparer};
use crate::value::HashValue;
use crate::{mix32, mix64};

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

crate::structural!(Point => |p| HashValue::from(p.x), |p| HashValue::from(p.y));

#[derive(Debug)]
struct Person {
    name: String,
    age: u32,
}

fn name_member(p: &Person) -> HashValue<'_> {
    HashValue::from(&p.name)
}

fn age_member(p: &Person) -> HashValue<'_> {
    HashValue::from(p.age)
}

crate::structural!(Person => name_member, age_member);

/// The structural hash is the combine over the registered members, in
/// schema order.
#[test]
fn hash_is_member_combine() {
    let comparer = StructuralComparer::<Point>::new();
    let p = Point { x: 5, y: -3 };

    assert_eq!(comparer.hash32(Some(&p)), mix32::combine2(p.x, p.y));
    assert_eq!(comparer.hash64(Some(&p)), mix64::combine2(p.x, p.y));
}

/// Member-wise equality with consistent hashes.
#[test]
fn equal_instances() {
    let comparer = StructuralComparer::<Point>::new();
    let a = Point { x: 1, y: 2 };
    let b = Point { x: 1, y: 2 };

    assert!(comparer.equals(Some(&a), Some(&b)));
    assert_eq!(comparer.hash32(Some(&a)), comparer.hash32(Some(&b)));
    assert_eq!(comparer.hash64(Some(&a)), comparer.hash64(Some(&b)));
}

/// Any differing member breaks equality.
#[test]
fn unequal_instances() {
    let comparer = StructuralComparer::<Point>::new();
    let a = Point { x: 1, y: 2 };

    assert!(!comparer.equals(Some(&a), Some(&Point { x: 1, y: 3 })));
    assert!(!comparer.equals(Some(&a), Some(&Point { x: 9, y: 2 })));
}

/// Schema order is part of the fingerprint: swapped member values produce
/// a different hash.
#[test]
fn member_order_matters() {
    let comparer = StructuralComparer::<Point>::new();
    let ab = Point { x: 1, y: 2 };
    let ba = Point { x: 2, y: 1 };

    assert_ne!(comparer.hash32(Some(&ab)), comparer.hash32(Some(&ba)));
}

/// Borrowing member accessors extract owned fields without copying.
#[test]
fn borrowed_members() {
    let comparer = StructuralComparer::<Person>::new();
    let a = Person {
        name: "Ada".to_owned(),
        age: 36,
    };
    let b = Person {
        name: "Ada".to_owned(),
        age: 36,
    };

    assert!(comparer.equals(Some(&a), Some(&b)));
    assert_eq!(comparer.hash32(Some(&a)), mix32::combine2(&a.name, a.age));
}

/// Absence semantics match the other adapters.
#[test]
fn absent_semantics() {
    let comparer = StructuralComparer::<Point>::new();
    let p = Point { x: 0, y: 0 };

    assert!(comparer.equals(None, None));
    assert!(!comparer.equals(Some(&p), None));
    assert_eq!(comparer.hash32(None), 0);
    assert_eq!(comparer.hash64(None), 0);
}

/// The comparer is a zero-sized, copyable handle.
#[test]
fn comparer_is_copyable() {
    let comparer = StructuralComparer::<Point>::default();
    let copy = comparer;
    let p = Point { x: 4, y: 4 };

    assert_eq!(comparer.hash32(Some(&p)), copy.hash32(Some(&p)));
}
