//! Functor, applicative and alternative operations over [`Option`].
//!
//! The combinator engine signals failure with absence only. These functions
//! name the algebra the parser layer is built from, so that
//! [`Parser`](crate::Parser) combinators read as the same laws lifted over an
//! input cursor.

/// A present optional.
#[inline]
pub fn just<A>(a: A) -> Option<A> {
    Some(a)
}

/// The absent optional.
#[inline]
pub fn nothing<A>() -> Option<A> {
    None
}

/// Applies `f` to a present value. `f` is never called on absence.
#[inline]
pub fn fmap<A, B>(f: impl FnOnce(A) -> B, m: Option<A>) -> Option<B> {
    match m {
        Some(a) => Some(f(a)),
        None => None,
    }
}

/// Applies an optional function to an optional argument. Absence on either
/// side is absence of the result.
#[inline]
pub fn ap<A, B, F: FnOnce(A) -> B>(mf: Option<F>, ma: Option<A>) -> Option<B> {
    match mf {
        Some(f) => fmap(f, ma),
        None => None,
    }
}

/// Sequences a dependent optional computation.
#[inline]
pub fn bind<A, B>(ma: Option<A>, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
    match ma {
        Some(a) => f(a),
        None => None,
    }
}

/// Left-biased choice: `ma` if present, otherwise `mb`.
#[inline]
pub fn alt<A>(ma: Option<A>, mb: impl FnOnce() -> Option<A>) -> Option<A> {
    match ma {
        Some(a) => Some(a),
        None => mb(),
    }
}
