//! Two-element products.
//!
//! A parse result is a pair of the remaining input and the produced value.

/// Builds a pair.
#[inline]
pub fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

/// First projection.
#[inline]
pub fn fst<A, B>(p: (A, B)) -> A {
    p.0
}

/// Second projection.
#[inline]
pub fn snd<A, B>(p: (A, B)) -> B {
    p.1
}

/// Maps the second component, leaving the first untouched.
#[inline]
pub fn map_snd<A, B, C>(f: impl FnOnce(B) -> C, (a, b): (A, B)) -> (A, C) {
    (a, f(b))
}
