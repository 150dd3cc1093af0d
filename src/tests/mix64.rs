use crate::Mix64;
use crate::mix64::{
    combine, combine1, combine2, combine3, combine4, combine5, combine6, combine7, combine8,
};
use crate::value::HashValue;

/// combine3 equals the incremental path exactly.
#[test]
fn combine_matches_incremental_concrete() {
    let mut mix = Mix64::new();
    mix.add(123);
    mix.add(456);
    mix.add(789);

    assert_eq!(combine3(123, 456, 789), mix.finish());
}

/// Fixed-input order sensitivity at 64 bits.
#[test]
fn order_sensitive_concrete() {
    assert_ne!(combine4(1, 2, 3, 4), combine4(4, 3, 2, 1));
    assert_ne!(combine2(1, 2), combine2(2, 1));
}

/// Every fixed arity matches the incremental path.
#[test]
fn arity_equivalence() {
    let v: Vec<i32> = (1..=8).collect();
    let incremental = |n: usize| {
        let mut mix = Mix64::new();
        for &x in &v[..n] {
            mix.add(x);
        }
        mix.finish()
    };

    assert_eq!(combine1(v[0]), incremental(1));
    assert_eq!(combine2(v[0], v[1]), incremental(2));
    assert_eq!(combine3(v[0], v[1], v[2]), incremental(3));
    assert_eq!(combine4(v[0], v[1], v[2], v[3]), incremental(4));
    assert_eq!(combine5(v[0], v[1], v[2], v[3], v[4]), incremental(5));
    assert_eq!(combine6(v[0], v[1], v[2], v[3], v[4], v[5]), incremental(6));
    assert_eq!(
        combine7(v[0], v[1], v[2], v[3], v[4], v[5], v[6]),
        incremental(7)
    );
    assert_eq!(
        combine8(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]),
        incremental(8)
    );
}

/// Arity 1 routes through the accumulator, not a raw-code shortcut.
#[test]
fn single_arity_uses_accumulator() {
    let value = 5_i32;
    assert_eq!(combine1(value), Mix64::new().with(value).finish());
    assert_ne!(combine1(value), HashValue::from(value).code64());
}

/// The variable-arity combine agrees with the fixed arities.
#[test]
fn variable_arity_matches_fixed() {
    let values = [
        HashValue::from(10),
        HashValue::from(20),
        HashValue::from(30),
    ];
    assert_eq!(combine(values), combine3(10, 20, 30));
}

/// Same inputs, same fingerprint.
#[test]
fn deterministic() {
    let a = combine4("alpha", 2, "gamma", 4_u64);
    let b = combine4("alpha", 2, "gamma", 4_u64);
    assert_eq!(a, b);
}

/// finish is idempotent and non-destructive.
#[test]
fn finish_idempotent() {
    let mut mix = Mix64::new();
    mix.add(7);
    let first = mix.finish();
    assert_eq!(first, mix.finish());

    mix.add(8);
    assert_ne!(first, mix.finish(), "later adds must still change the mix");
}

/// The ingestion count participates in the final mix: a null is a distinct
/// contribution, not a no-op.
#[test]
fn null_advances_state() {
    let empty = Mix64::new();
    let with_null = Mix64::new().with(HashValue::Null);

    assert_eq!(with_null.count(), 1);
    assert_ne!(empty.finish(), with_null.finish());
}

/// Null slots hash deterministically and differ from non-null slots.
#[test]
fn null_handling() {
    let nulls = || {
        [
            HashValue::Null,
            HashValue::from(1),
            HashValue::Null,
            HashValue::from(2),
        ]
    };
    assert_eq!(combine(nulls()), combine(nulls()));

    let filled = [
        HashValue::from(9),
        HashValue::from(1),
        HashValue::Null,
        HashValue::from(2),
    ];
    assert_ne!(combine(nulls()), combine(filled));
}

/// 32- and 64-bit accumulators are independent functions: their low words
/// disagree on common inputs.
#[test]
fn widths_are_independent() {
    let h32 = crate::mix32::combine3(123, 456, 789);
    let h64 = combine3(123, 456, 789);
    assert_ne!(u64::from(h32), h64 & 0xFFFF_FFFF);
}
