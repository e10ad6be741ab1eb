//! Integration tests for the Intcode loader
//!
//! Tests loading of well-formed program text, including the tolerated
//! whitespace around tokens.

use intcode_loader::{load, parse_words};
use proptest::prelude::*;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_sample_program() {
    let program = load("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
    assert_eq!(program.len(), 12);
    assert_eq!(program.get(0), Some(1));
    assert_eq!(program.get(11), Some(50));
}

#[test]
fn test_load_large_values() {
    let program = load("104,1125899906842624,99").unwrap();
    assert_eq!(program.words(), &[104, 1125899906842624, 99]);
}

#[test]
fn test_load_file_contents_with_newline() {
    let program = load("3,9,8,9,10,9,4,9,99,-1,8\n").unwrap();
    assert_eq!(program.len(), 11);
    assert_eq!(program.get(9), Some(-1));
}

#[test]
fn test_load_with_crlf() {
    let program = load("1,0,0,0,99\r\n").unwrap();
    assert_eq!(program.len(), 5);
}

#[test]
fn test_load_with_spaces_around_commas() {
    let program = load("1, 0 ,0,\t0 ,99").unwrap();
    assert_eq!(program.words(), &[1, 0, 0, 0, 99]);
}

#[test]
fn test_load_wrapped_lines() {
    let source = "1,9,10,3,\n2,3,11,0,\n99,30,40,50";
    assert_eq!(load(source).unwrap().len(), 12);
}

#[test]
fn test_explicit_plus_sign() {
    assert_eq!(parse_words("+5,-5").unwrap(), vec![5, -5]);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn test_canonical_text_loads_back(words in prop::collection::vec(any::<i64>(), 1..64)) {
        let text = words
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let program = load(&text).unwrap();
        prop_assert_eq!(program.words(), words.as_slice());
        prop_assert_eq!(program.to_text(), text);
    }
}
