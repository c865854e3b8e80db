//! Editor Property Tests
//!
//! Behaviour of the word-chain editor as seen through its public operations:
//! tokenization round trips, cut/copy/paste scenarios, no-op rules and the
//! cached misspelling count.

use std::sync::Arc;

use wordchain::core::cursor::CursorStrategy;
use wordchain::core::{Dictionary, ReferenceEditor, TextEditor, WordEditor};

fn no_dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::default())
}

fn text_of(editor: &WordEditor) -> String {
    editor.get_text().collect()
}

fn words_of(editor: &WordEditor) -> Vec<String> {
    editor.words().map(str::to_string).collect()
}

// =============================================================================
// TOKENIZATION
// =============================================================================

#[test]
fn get_text_round_trips_tokens() {
    let document = "  The   quick\tbrown\n\nfox  jumps ";
    let editor = WordEditor::new(document, no_dictionary());

    let expected: Vec<&str> = document.split_whitespace().collect();
    assert_eq!(editor.word_count(), expected.len());
    assert_eq!(text_of(&editor), "The quick brown fox jumps ");

    let pieces: Vec<String> = editor.get_text().collect();
    assert_eq!(pieces.len(), expected.len());
    for (piece, word) in pieces.iter().zip(&expected) {
        assert_eq!(piece, &format!("{} ", word));
    }
}

#[test]
fn get_text_starts_fresh_each_call() {
    let editor = WordEditor::new("a b c", no_dictionary());
    let mut first = editor.get_text();
    assert_eq!(first.next().as_deref(), Some("a "));

    let second: String = editor.get_text().collect();
    assert_eq!(second, "a b c ");
    assert_eq!(first.collect::<String>(), "b c ");
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn scenario_cut_and_paste_back() {
    let mut editor = WordEditor::new("the quick brown fox", no_dictionary());

    editor.cut(2, 3);
    assert_eq!(text_of(&editor), "the brown fox ");
    assert_eq!(editor.word_count(), 3);

    editor.paste(1).unwrap();
    assert_eq!(text_of(&editor), "the quick brown fox ");
    assert_eq!(editor.word_count(), 4);
    assert!(editor.check_invariants().is_ok());
}

#[test]
fn scenario_copy_and_paste_at_end() {
    let mut editor = WordEditor::new("a b c d", no_dictionary());

    editor.copy(1, 2);
    assert_eq!(text_of(&editor), "a b c d ");
    assert_eq!(editor.word_count(), 4);

    editor.paste(4).unwrap();
    assert_eq!(text_of(&editor), "a b c d a ");
    assert_eq!(editor.word_count(), 5);
    assert_eq!(editor.words().next(), Some("a"));
    assert!(editor.check_invariants().is_ok());
}

#[test]
fn scenario_empty_document() {
    let mut editor = WordEditor::new("", no_dictionary());

    assert_eq!(editor.cut(1, 3), 0);
    editor.copy(1, 2);
    assert_eq!(editor.paste(1).unwrap(), 0);
    assert_eq!(editor.paste(0).unwrap(), 0);

    assert_eq!(editor.word_count(), 0);
    assert_eq!(editor.misspellings(), 0);
    assert_eq!(editor.get_text().count(), 0);
    assert!(editor.check_invariants().is_ok());
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn cut_then_paste_in_place_restores_content() {
    let original = "one two three four five six";
    for (i, j) in [(1, 2), (1, 4), (2, 5), (3, 7), (6, 7), (1, 7)] {
        let mut editor = WordEditor::new(original, no_dictionary());
        let removed = editor.cut(i, j);
        assert_eq!(removed, j - i);
        editor.paste(i - 1).unwrap();
        assert_eq!(
            text_of(&editor).trim_end(),
            original,
            "cut({}, {}) then paste({})",
            i,
            j,
            i - 1
        );
        assert!(editor.check_invariants().is_ok());
    }
}

#[test]
fn copy_is_a_pure_recorder() {
    let mut editor = WordEditor::new("red green blue", no_dictionary());
    editor.copy(1, 3);
    editor.copy(2, 4);
    assert_eq!(text_of(&editor), "red green blue ");
    assert_eq!(editor.word_count(), 3);
    assert_eq!(editor.chain().live_nodes(), 3);
}

#[test]
fn paste_after_copy_keeps_source() {
    let mut editor = WordEditor::new("a b c d e", no_dictionary());
    editor.copy(2, 4);
    editor.paste(5).unwrap();
    editor.paste(0).unwrap();

    assert_eq!(
        words_of(&editor),
        vec!["b", "c", "a", "b", "c", "d", "e", "b", "c"]
    );
    assert_eq!(editor.word_count(), 9);
    assert!(editor.check_invariants().is_ok());
}

#[test]
fn paste_past_end_is_noop() {
    let mut editor = WordEditor::new("a b", no_dictionary());
    editor.copy(1, 2);
    assert_eq!(editor.paste(3).unwrap(), 0);
    assert_eq!(text_of(&editor), "a b ");
}

#[test]
fn cut_replaces_pending_cut() {
    let mut editor = WordEditor::new("a b c d", no_dictionary());
    editor.cut(1, 2);
    editor.cut(1, 2);
    editor.paste(2).unwrap();
    assert_eq!(words_of(&editor), vec!["c", "d", "b"]);
}

#[test]
fn nearest_cursor_behaves_like_from_head() {
    let document = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12";
    let mut head = WordEditor::with_cursor(document, no_dictionary(), CursorStrategy::FromHead);
    let mut nearest = WordEditor::with_cursor(document, no_dictionary(), CursorStrategy::Nearest);

    for editor in [&mut head, &mut nearest] {
        editor.cut(3, 6);
        editor.paste(8).unwrap();
        editor.copy(10, 12);
        editor.paste(2).unwrap();
        editor.cut(1, 2);
        editor.paste(11).unwrap();
    }

    assert_eq!(words_of(&head), words_of(&nearest));
    assert!(nearest.check_invariants().is_ok());
}

// =============================================================================
// MISSPELLINGS
// =============================================================================

#[test]
fn misspellings_all_known() {
    let dict = Arc::new(Dictionary::from_words(["the", "quick", "brown", "fox"]));
    let editor = WordEditor::new("the quick brown fox the fox", dict);
    assert_eq!(editor.misspellings(), 0);
}

#[test]
fn misspellings_none_known() {
    let dict = Arc::new(Dictionary::from_words(["zebra"]));
    let editor = WordEditor::new("qwe rty uio pas dfg", dict);
    assert_eq!(editor.misspellings(), 5);
}

#[test]
fn misspellings_are_case_and_punctuation_sensitive() {
    let dict = Arc::new(Dictionary::from_words(["hello", "world"]));
    let editor = WordEditor::new("Hello world, hello world", dict);
    assert_eq!(editor.misspellings(), 2);
}

#[test]
fn dictionary_is_shared_between_editors() {
    let dict = Arc::new(Dictionary::from_words(["a"]));
    let word = WordEditor::new("a b", Arc::clone(&dict));
    let reference = ReferenceEditor::new("a b", Arc::clone(&dict));
    assert_eq!(Arc::strong_count(&dict), 3);
    assert_eq!(word.misspellings(), 1);
    assert_eq!(reference.misspellings(), 1);
}

#[test]
fn trait_text_matches_get_text() {
    let editor = WordEditor::new("x y z", no_dictionary());
    let via_trait = TextEditor::text(&editor);
    assert_eq!(via_trait, text_of(&editor));
    assert_eq!(TextEditor::name(&editor), "word-chain");
}
