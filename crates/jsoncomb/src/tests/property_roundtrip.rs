use alloc::string::{String, ToString};

use quickcheck::QuickCheck;

use crate::{JsonParser, ParserOptions, Value, parse_document, parse_value};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: the rendered form of any value parses back to the same value.
#[test]
fn rendered_values_parse_back() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let rendered = value.to_string();
        parse_document(&rendered) == Ok(value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: whitespace around a rendered value changes nothing but what is
/// consumed.
#[test]
fn surrounding_whitespace_is_consumed() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, before: u8, after: u8) -> bool {
        let mut text = String::new();
        text.extend(core::iter::repeat_n(" \t\n\r", usize::from(before % 4)));
        text.push_str(&value.to_string());
        text.extend(core::iter::repeat_n("\r\n", usize::from(after % 4)));
        text.push('#');
        parse_value(&text) == Some(("#", value))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value, u8, u8) -> bool);
}

/// Property: a value nested one level deeper than allowed is rejected, one
/// level shallower is accepted.
#[test]
fn depth_limit_is_exact() {
    fn prop(depth: u8) -> bool {
        let depth = usize::from(depth % 16);
        let parser = JsonParser::new(ParserOptions {
            max_depth: depth,
            ..Default::default()
        });
        let nested = |n: usize| {
            let mut text = "[".repeat(n);
            text.push('0');
            text.push_str(&"]".repeat(n));
            text
        };
        parser.parse_document(&nested(depth)).is_ok()
            && parser.parse_document(&nested(depth + 1)).is_err()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(u8) -> bool);
}
