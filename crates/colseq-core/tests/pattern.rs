//! Tests for range pattern compression and expansion.

use colseq_core::{CodecError, compress_range, expand_pattern};
use proptest::prelude::*;

#[test]
fn compress_rejects_different_literals() {
    assert!(matches!(
        compress_range("a_1", "z_1"),
        Err(CodecError::StructureMismatch { .. })
    ));
}

#[test]
fn compress_is_case_sensitive() {
    assert!(matches!(
        compress_range("a1", "A1"),
        Err(CodecError::StructureMismatch { .. })
    ));
}

#[test]
fn compress_rejects_different_segment_counts() {
    assert!(matches!(
        compress_range("a1", "a1b"),
        Err(CodecError::StructureMismatch { reason, .. }) if reason == "length error"
    ));
}

#[test]
fn compress_various_inputs() {
    let cases = [
        ("1", "1", "1"),
        ("1", "2", "{1,2}"),
        ("1", "111", "{1,111}"),
        ("a1", "a1", "a1"),
        ("a1", "a2", "a{1,2}"),
        ("a1", "a111", "a{1,111}"),
        ("a_1", "a_2", "a_{1,2}"),
        ("a_1", "a_111", "a_{1,111}"),
        ("1b", "1b", "1b"),
        ("1b", "2b", "{1,2}b"),
        ("1b", "111b", "{1,111}b"),
        ("1_b", "2_b", "{1,2}_b"),
        ("1_b", "111_b", "{1,111}_b"),
        ("a_1b", "a_2b", "a_{1,2}b"),
        ("a_1b", "a_111b", "a_{1,111}b"),
        ("a_1_b", "a_2_b", "a_{1,2}_b"),
        ("a_1_b", "a_111_b", "a_{1,111}_b"),
        ("a_1_1_x_100", "a_1_999_x_100", "a_1_{1,999}_x_100"),
        ("a_1_1", "a_1_1", "a_1_1"),
        ("a_11_x_100", "a_11_x_100", "a_11_x_100"),
        ("a01", "a03", "a{01,03}"),
        ("a01", "a011", "a{01,011}"),
        ("q1_2", "q3_4", "q{1,3}_{2,4}"),
    ];
    for (from, to, expected) in cases {
        assert_eq!(
            compress_range(from, to).unwrap(),
            expected,
            "compress_range({from:?}, {to:?})"
        );
    }
}

#[test]
fn expand_counts_every_combination() {
    assert_eq!(
        expand_pattern("_anfang{1,3}_mitte_{1,2}_ende_{1,4}")
            .unwrap()
            .len(),
        24
    );
    assert_eq!(
        expand_pattern("{0,1}_anfang{1,3}_mitte_{1,2}_ende_{1,4}")
            .unwrap()
            .len(),
        48
    );
}

#[test]
fn expand_simple_patterns() {
    assert!(expand_pattern("").unwrap().is_empty());
    assert_eq!(expand_pattern("a1").unwrap(), ["a1"]);
    assert_eq!(expand_pattern("a{1,1}").unwrap(), ["a1"]);
    assert_eq!(expand_pattern("a{1,3}").unwrap(), ["a1", "a2", "a3"]);
    assert_eq!(expand_pattern("a0{1,3}").unwrap(), ["a01", "a02", "a03"]);
    assert_eq!(expand_pattern("a{01,03}").unwrap(), ["a01", "a02", "a03"]);
    assert_eq!(expand_pattern("{1,3}b").unwrap(), ["1b", "2b", "3b"]);
    assert_eq!(expand_pattern("a{3,1}").unwrap(), ["a3", "a2", "a1"]);
}

#[test]
fn expand_rightmost_varies_fastest() {
    assert_eq!(
        expand_pattern("a{1,3}_{1,2}").unwrap(),
        ["a1_1", "a1_2", "a2_1", "a2_2", "a3_1", "a3_2"]
    );
}

#[test]
fn expand_three_ranges_snapshot() {
    let expanded = expand_pattern("{1,2}a{1,2}_{1,2}").unwrap();
    insta::assert_json_snapshot!(expanded, @r#"
    [
      "1a1_1",
      "1a1_2",
      "1a2_1",
      "1a2_2",
      "2a1_1",
      "2a1_2",
      "2a2_1",
      "2a2_2"
    ]
    "#);
}

#[test]
fn expand_zero_padding_follows_start() {
    let padded = ["a_001", "a_002", "a_003", "a_004"];
    assert_eq!(expand_pattern("a_{001,004}").unwrap(), padded);
    // The width comes from the start numeral only, so these agree.
    assert_eq!(expand_pattern("a_{001,4}").unwrap(), padded);
    assert_eq!(
        expand_pattern("a_{001,011}").unwrap(),
        expand_pattern("a_{001,11}").unwrap()
    );
    assert_eq!(
        expand_pattern("a_{009,11}").unwrap(),
        ["a_009", "a_010", "a_011"]
    );
}

#[test]
fn expand_unclosed_brace_is_malformed() {
    assert!(matches!(
        expand_pattern("a{1,3"),
        Err(CodecError::MalformedPattern { .. })
    ));
}

#[test]
fn expand_braces_without_marker_are_literal() {
    assert_eq!(expand_pattern("a{x}").unwrap(), ["a{x}"]);
}

#[test]
fn expand_is_repeatable() {
    let pattern = "image{00001,00012}.jpg";
    let first = expand_pattern(pattern).unwrap();
    let second = expand_pattern(pattern).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 12);
    assert_eq!(first[0], "image00001.jpg");
    assert_eq!(first[11], "image00012.jpg");
}

#[test]
fn expand_many_markers() {
    let pattern = "{1,1}x".repeat(20_000);
    let expanded = expand_pattern(&pattern).unwrap();
    assert_eq!(expanded, ["1x".repeat(20_000)]);

    let pattern = "{1,2}_".repeat(3) + &"{7,7}y".repeat(5_000);
    let expanded = expand_pattern(&pattern).unwrap();
    assert_eq!(expanded.len(), 8);
    let tail = "7y".repeat(5_000);
    assert_eq!(expanded[0], format!("1_1_1_{tail}"));
    assert_eq!(expanded[1], format!("1_1_2_{tail}"));
    assert_eq!(expanded[7], format!("2_2_2_{tail}"));
}

proptest! {
    #[test]
    fn compressed_range_expands_to_both_ends(
        prefix in "[a-z_]{0,4}",
        suffix in "[a-z.]{0,4}",
        low in 0u32..200,
        high in 0u32..200,
    ) {
        let from = format!("{prefix}{low}{suffix}");
        let to = format!("{prefix}{high}{suffix}");
        let pattern = compress_range(&from, &to).unwrap();
        let expanded = expand_pattern(&pattern).unwrap();

        prop_assert_eq!(expanded.len() as u32, low.abs_diff(high) + 1);
        prop_assert_eq!(expanded.first(), Some(&from));
        prop_assert_eq!(expanded.last(), Some(&to));
    }

    #[test]
    fn two_ranges_expand_in_lock_step(
        first in 1u32..6,
        second in 1u32..6,
    ) {
        let from = "w1_q1".to_string();
        let to = format!("w{first}_q{second}");
        let pattern = compress_range(&from, &to).unwrap();
        let expanded = expand_pattern(&pattern).unwrap();

        prop_assert_eq!(expanded.len() as u32, first * second);
        for (idx, item) in expanded.iter().enumerate() {
            let idx = idx as u32;
            let expected = format!("w{}_q{}", idx / second + 1, idx % second + 1);
            prop_assert_eq!(item, &expected);
        }
    }
}
