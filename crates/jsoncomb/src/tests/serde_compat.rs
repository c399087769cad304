use rstest::rstest;

use crate::parse_document;

/// serde_json keeps integers apart from floats; the grammar reads every
/// number as `f64`.
fn normalize(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value as J;

    match value {
        J::Number(n) => n
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or(J::Null, J::Number),
        J::Array(items) => J::Array(items.into_iter().map(normalize).collect()),
        J::Object(map) => J::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect()),
        other => other,
    }
}

#[rstest]
#[case::scalars(r#"[null, true, false, 0, -1, 2.5, 1e3, -4.25E-2, "x"]"#)]
#[case::escapes(r#"["\"\\\/\b\f\n\r\t", "é中", "😀"]"#)]
#[case::nested(r#"{"a": {"b": [{"c": []}, {}]}, "d": [[[]]]}"#)]
#[case::member_order(r#"{"z": 1, "y": 2, "x": 3, "a": 4}"#)]
#[case::repeated_key(r#"{"k": 1, "other": 2, "k": 3}"#)]
#[case::whitespace(" \t\r\n[ 1 ,\n 2 ] \n")]
#[case::large_integer("12345678901234567890")]
fn agrees_with_serde_json(#[case] text: &str) {
    let ours = parse_document(text).expect("document parses");
    let ours = serde_json::to_value(&ours).expect("value serializes");
    let theirs: serde_json::Value = serde_json::from_str(text).expect("serde_json parses");

    assert_eq!(normalize(ours), normalize(theirs), "{text}");
}

#[rstest]
#[case::trailing_comma("[1,]")]
#[case::unquoted_key("{a: 1}")]
#[case::lone_surrogate(r#""\udc00""#)]
#[case::raw_control_character("\"\u{1}\"")]
#[case::unfinished_fraction("1.")]
#[case::trailing_value("[] []")]
fn rejects_what_serde_json_rejects(#[case] text: &str) {
    assert!(serde_json::from_str::<serde_json::Value>(text).is_err());
    assert!(parse_document(text).is_err(), "{text}");
}
