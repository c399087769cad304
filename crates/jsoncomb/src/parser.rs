//! Parsers and the combinators that build them.
//!
//! A [`Parser`] is a pure function from an [`Input`] cursor to an optional
//! pair of the cursor after the match and the produced value. Failure is
//! absence; nothing else is reported. Because the cursor is a value, a failed
//! branch cannot leave partial consumption behind: [`Parser::or_else`] simply
//! runs the second branch on the same cursor.
//!
//! # Examples
//!
//! ```rust
//! use jsoncomb::{literal_element, satisfy, sep_by};
//!
//! let digit = satisfy(|c| c.is_ascii_digit());
//! let digits = sep_by(digit, literal_element(','));
//!
//! let (rest, parsed) = digits.parse_str("1,2,3;").unwrap();
//! assert_eq!(rest, ";");
//! assert_eq!(parsed.to_vec(), vec!['1', '2', '3']);
//! ```
use alloc::{rc::Rc, vec, vec::Vec};
use core::{cell::OnceCell, fmt};

use crate::{
    input::Input,
    list::List,
    maybe::{self, alt, bind, fmap},
    pair::{self, map_snd},
};

type ParseFn<'a, A> = dyn Fn(Input<'a>) -> Option<(Input<'a>, A)> + 'a;

/// A parser producing values of type `A`.
///
/// Cloning a parser is cheap; clones share the same underlying function.
#[must_use = "parsers do nothing until run"]
pub struct Parser<'a, A> {
    run: Rc<ParseFn<'a, A>>,
}

impl<A> Clone for Parser<'_, A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<'a, A: 'a> Parser<'a, A> {
    /// Wraps a parsing function.
    pub fn new(run: impl Fn(Input<'a>) -> Option<(Input<'a>, A)> + 'a) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Runs the parser at `input`.
    #[must_use]
    pub fn parse(&self, input: Input<'a>) -> Option<(Input<'a>, A)> {
        (self.run)(input)
    }

    /// Runs the parser at the start of `text`, returning the unconsumed text
    /// with the value.
    #[must_use]
    pub fn parse_str(&self, text: &'a str) -> Option<(&'a str, A)> {
        fmap(|(rest, a)| (rest.as_str(), a), self.parse(Input::new(text)))
    }

    /// Transforms the produced value, leaving the cursor untouched.
    pub fn map<B: 'a>(self, f: impl Fn(A) -> B + 'a) -> Parser<'a, B> {
        Parser::new(move |input| fmap(|result| map_snd(&f, result), self.parse(input)))
    }

    /// Runs `self`, then `other` on what remains, and combines both values.
    /// Either failure fails the whole sequence.
    pub fn zip_with<B: 'a, C: 'a>(
        self,
        other: Parser<'a, B>,
        f: impl Fn(A, B) -> C + 'a,
    ) -> Parser<'a, C> {
        Parser::new(move |input| {
            bind(self.parse(input), |(rest, a)| {
                fmap(|(rest, b)| (rest, f(a, b)), other.parse(rest))
            })
        })
    }

    /// Sequences `other` after `self`, keeping the value of `self`.
    pub fn then_left<B: 'a>(self, other: Parser<'a, B>) -> Self {
        self.zip_with(other, |a, _| a)
    }

    /// Sequences `other` after `self`, keeping the value of `other`.
    pub fn then_right<B: 'a>(self, other: Parser<'a, B>) -> Parser<'a, B> {
        self.zip_with(other, |_, b| b)
    }

    /// Tries `self`; if it fails, tries `other` from the same position.
    pub fn or_else(self, other: Self) -> Self {
        Parser::new(move |input| alt(self.parse(input), || other.parse(input)))
    }

    /// Chooses the next parser from the value just produced.
    pub fn and_then<B: 'a>(self, f: impl Fn(A) -> Parser<'a, B> + 'a) -> Parser<'a, B> {
        Parser::new(move |input| bind(self.parse(input), |(rest, a)| f(a).parse(rest)))
    }

    /// Transforms the produced value, failing when `f` returns `None`.
    pub fn filter_map<B: 'a>(self, f: impl Fn(A) -> Option<B> + 'a) -> Parser<'a, B> {
        Parser::new(move |input| {
            bind(self.parse(input), |(rest, a)| fmap(|b| (rest, b), f(a)))
        })
    }

    /// Produces the text `self` consumed instead of its value.
    pub fn recognize(self) -> Parser<'a, &'a str> {
        Parser::new(move |input| {
            fmap(
                |(rest, _)| (rest, rest.consumed_since(input)),
                self.parse(input),
            )
        })
    }
}

/// Always succeeds with `value`, consuming nothing.
pub fn pure<'a, A: Clone + 'a>(value: A) -> Parser<'a, A> {
    Parser::new(move |input| maybe::just(pair::pair(input, value.clone())))
}

/// Always fails.
pub fn empty<'a, A: 'a>() -> Parser<'a, A> {
    Parser::new(|_| maybe::nothing())
}

/// Applies the function produced by `pf` to the value produced by `pa`,
/// running `pa` on the input `pf` left.
pub fn ap<'a, A: 'a, B: 'a, F>(pf: Parser<'a, F>, pa: Parser<'a, A>) -> Parser<'a, B>
where
    F: FnOnce(A) -> B + 'a,
{
    pf.zip_with(pa, |f, a| f(a))
}

/// Defers building a parser until it is first run. Recursive grammars use
/// this to refer to themselves.
pub fn lazy<'a, A: 'a>(build: impl Fn() -> Parser<'a, A> + 'a) -> Parser<'a, A> {
    let cell = OnceCell::new();
    Parser::new(move |input| cell.get_or_init(&build).parse(input))
}

/// Consumes one character satisfying `predicate`.
pub fn satisfy<'a>(predicate: impl Fn(char) -> bool + 'a) -> Parser<'a, char> {
    Parser::new(move |input: Input<'a>| {
        bind(input.split_first(), |(c, rest)| predicate(c).then_some((rest, c)))
    })
}

/// Consumes exactly `expected`.
pub fn literal_element<'a>(expected: char) -> Parser<'a, char> {
    satisfy(move |c| c == expected)
}

/// Consumes the characters of `expected` in order.
pub fn literal_sequence<'a>(expected: &str) -> Parser<'a, List<char>> {
    sequence_of(List::chars(expected).map(|c| literal_element(*c)))
}

/// Succeeds, consuming nothing, only at the end of input.
pub fn end_of_input<'a>() -> Parser<'a, ()> {
    Parser::new(|input: Input<'a>| input.is_empty().then_some((input, ())))
}

/// Zero or more repetitions of `p`.
pub fn many<'a, A: 'a>(p: Parser<'a, A>) -> Parser<'a, List<A>> {
    some(p).or_else(pure(List::nil()))
}

/// One or more repetitions of `p`.
///
/// The first match must consume input or the whole repetition fails. Later
/// matches that consume nothing end the repetition.
pub fn some<'a, A: 'a>(p: Parser<'a, A>) -> Parser<'a, List<A>> {
    Parser::new(move |input: Input<'a>| {
        let (mut rest, first) = p.parse(input).filter(|(rest, _)| rest.len() < input.len())?;
        let mut items = vec![first];
        while let Some((next, item)) = p.parse(rest) {
            if next.len() >= rest.len() {
                break;
            }
            items.push(item);
            rest = next;
        }
        Some((rest, items.into_iter().collect()))
    })
}

/// Runs each parser in order, collecting their values. Fails if any fails.
pub fn sequence_of<'a, A: 'a>(parsers: List<Parser<'a, A>>) -> Parser<'a, List<A>> {
    Parser::new(move |input| {
        let mut rest = input;
        let mut items = Vec::new();
        for p in &parsers {
            let (next, item) = p.parse(rest)?;
            items.push(item);
            rest = next;
        }
        Some((rest, items.into_iter().collect()))
    })
}

/// Exactly `n` repetitions of `p`.
pub fn count<'a, A: 'a>(n: usize, p: Parser<'a, A>) -> Parser<'a, List<A>> {
    sequence_of(List::replicate(n, p))
}

/// The first parser in `parsers` that succeeds, each tried from the same
/// position. An empty list never succeeds.
pub fn choice<'a, A: 'a>(parsers: List<Parser<'a, A>>) -> Parser<'a, A> {
    Parser::new(move |input| parsers.iter().find_map(|p| p.parse(input)))
}

/// `Some` of the value of `p`, or `None` without consuming. Never fails.
pub fn optional<'a, A: 'a>(p: Parser<'a, A>) -> Parser<'a, Option<A>> {
    Parser::new(move |input| {
        alt(fmap(|(rest, a)| (rest, Some(a)), p.parse(input)), || {
            Some((input, None))
        })
    })
}

/// The value of `p` without consuming any input.
pub fn look_ahead<'a, A: 'a>(p: Parser<'a, A>) -> Parser<'a, A> {
    Parser::new(move |input| fmap(|(_, a)| (input, a), p.parse(input)))
}

/// One or more `element`s separated by `separator`. Separator values are
/// dropped.
pub fn sep_by<'a, A: 'a, S: 'a>(
    element: Parser<'a, A>,
    separator: Parser<'a, S>,
) -> Parser<'a, List<A>> {
    element
        .clone()
        .zip_with(many(separator.then_right(element)), List::cons)
}
