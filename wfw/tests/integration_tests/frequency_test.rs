// tests/integration_tests/frequency_test.rs
use super::common::PREAMBLE;
use wfw::{count, letter_frequency, relative_frequency, word_frequency};

#[test]
fn test_preamble_frequencies() {
    let words = word_frequency(PREAMBLE);
    assert_eq!(words.get("the"), 6);
    assert_eq!(words.get("and"), 3);
    assert_eq!(words.get("of"), 3);

    let letters = letter_frequency(PREAMBLE);
    assert_eq!(letters.get(&'e'), 39);
    assert_eq!(letters.get(&'t'), 29);

    let ratio = relative_frequency(&words, "the");
    assert!((ratio - 6.0 / 52.0).abs() < f64::EPSILON);
}

#[test]
fn test_word_sum_equals_word_count() {
    for text in [PREAMBLE, "", "one", "Mixed CASE mixed case, MIXED!", "a_b c-d e.f"] {
        let table = word_frequency(text);
        let sum: usize = table.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, count(text).words, "Sum mismatch for {text:?}");
        assert_eq!(table.total(), sum);
    }
}

#[test]
fn test_case_insensitivity() {
    assert_eq!(word_frequency(PREAMBLE), word_frequency(&PREAMBLE.to_uppercase()));
}

#[test]
fn test_relative_frequency_without_words() {
    let table = word_frequency("... !!! ???");
    assert_eq!(table.total(), 0);
    assert_eq!(relative_frequency(&table, "anything"), 0.0);
}
