// Utils module tests.

use super::*;

#[test]
fn test_split_piece_count_plain() {
    assert_eq!(split_piece_count("one two three"), 3);
    assert_eq!(split_piece_count("one\t\ttwo\nthree"), 3);
}

#[test]
fn test_split_piece_count_counts_edge_pieces() {
    // Leading/trailing whitespace yields empty pieces at either end
    assert_eq!(split_piece_count(" one two "), 4);
    assert_eq!(split_piece_count(""), 1);
    assert_eq!(split_piece_count("   "), 2);
}

#[test]
fn test_phrase_word_count_empty_is_zero() {
    assert_eq!(phrase_word_count(""), 0);
    assert_eq!(phrase_word_count("Home"), 1);
    assert_eq!(phrase_word_count("Best  coffee in town"), 4);
}

#[test]
fn test_char_length_counts_scalars() {
    assert_eq!(char_length("Café"), 4);
    assert_eq!(char_length(""), 0);
}

#[test]
fn test_ratio_two_places() {
    assert_eq!(ratio_two_places(10, 3), 3.33);
    assert_eq!(ratio_two_places(2, 3), 0.67);
    assert_eq!(ratio_two_places(4, 2), 2.0);
    assert_eq!(ratio_two_places(5, 0), 0.0);
}

#[test]
fn test_percentage_two_places() {
    assert_eq!(percentage_two_places(1, 3), 33.33);
    assert_eq!(percentage_two_places(2, 3), 66.67);
    assert_eq!(percentage_two_places(3, 3), 100.0);
    assert_eq!(percentage_two_places(0, 0), 0.0);
    assert_eq!(percentage_two_places(7, 0), 0.0);
}

#[test]
#[should_panic(expected = "programming error")]
fn test_parse_selector_unsafe_panics_on_bad_input() {
    let _ = parse_selector_unsafe("a[", "test");
}

#[test]
fn test_parse_selector_unsafe_accepts_valid() {
    let selector = parse_selector_unsafe("link[rel=\"alternate\"][hreflang]", "test");
    let doc = scraper::Html::parse_document(
        r#"<link rel="alternate" hreflang="fr" href="/fr">"#,
    );
    assert_eq!(doc.select(&selector).count(), 1);
}
