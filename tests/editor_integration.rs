//! End-to-end scenarios through the editor facade, against the
//! in-memory backend.

use scriv::action::Action;
use scriv::api::Editor;
use scriv::clipboard::MemoryClipboard;
use scriv::config::StepDefaults;
use scriv::document::memory::InMemoryDocument;
use scriv::document::{Document, StyleState};
use scriv::error::ApplyError;
use scriv::model::{Alignment, Color, Image, Pt, TextRange, TextStyle};

fn editor_over(text: &str) -> Editor<InMemoryDocument> {
    Editor::new(InMemoryDocument::from_text(text)).with_clipboard(MemoryClipboard::new())
}

#[test]
fn select_style_copy_flow() {
    let mut editor = editor_over("hello world");

    editor
        .apply(&Action::SelectRange(TextRange::new(0, 5)))
        .unwrap();
    editor.apply(&Action::ToggleStyle(TextStyle::Bold)).unwrap();
    editor.apply(&Action::Copy).unwrap();

    let doc = editor.document();
    assert_eq!(
        doc.style_state(TextStyle::Bold, TextRange::new(0, 5)),
        StyleState::On
    );
    assert_eq!(
        doc.style_state(TextStyle::Bold, TextRange::new(5, 11)),
        StyleState::Off
    );
}

#[test]
fn undo_and_redo_round_trip_a_full_edit() {
    let mut editor = editor_over("hello");
    editor
        .apply(&Action::SelectRange(TextRange::new(0, 5)))
        .unwrap();

    let before = editor.document().attributed();
    editor
        .apply(&Action::SetForegroundColor(Color::rgb(200, 0, 0)))
        .unwrap();
    let after = editor.document().attributed();
    assert_ne!(before, after);

    editor.apply(&Action::UndoLatestChange).unwrap();
    assert_eq!(editor.document().attributed(), before);
    assert_eq!(editor.document().selection(), TextRange::new(0, 5));

    editor.apply(&Action::RedoLatestChange).unwrap();
    assert_eq!(editor.document().attributed(), after);
}

#[test]
fn paste_images_at_a_caret_lands_in_order() {
    let mut editor = editor_over("0123456789");
    editor
        .apply(&Action::SelectRange(TextRange::caret(5)))
        .unwrap();

    let images = vec![Image::new("one", vec![1]), Image::new("two", vec![2])];
    editor.apply(&Action::PasteImages(images)).unwrap();

    let doc = editor.document();
    assert_eq!(doc.len(), 12);
    assert_eq!(doc.selection(), TextRange::caret(7));
    assert_eq!(doc.text(TextRange::new(5, 7)), "\u{FFFC}\u{FFFC}");
}

#[test]
fn default_indent_steps_cancel_out() {
    let steps = StepDefaults::default();
    let mut editor = editor_over("some paragraph").with_steps(steps.clone());
    editor
        .apply(&Action::SelectRange(TextRange::new(0, 4)))
        .unwrap();

    let increase = editor.steps().increase_indent();
    let decrease = editor.steps().decrease_indent();
    assert_eq!(increase, Action::StepIndent(Pt(4.0)));

    let original = editor.document().indent(0);
    editor.apply(&increase).unwrap();
    editor.apply(&decrease).unwrap();
    assert_eq!(editor.document().indent(0), original);
}

#[test]
fn whole_content_replacement_undoes_in_one_step() {
    let mut editor = editor_over("a long established document");
    let before = editor.document().attributed();

    editor
        .apply(&Action::SetAttributedString(
            scriv::model::AttributedText::plain("fresh"),
        ))
        .unwrap();
    assert_eq!(editor.document().selection(), TextRange::caret(0));
    assert_eq!(editor.document().len(), 5);

    editor.undo().unwrap();
    assert_eq!(editor.document().attributed(), before);
}

#[test]
fn out_of_bounds_selection_fails_cleanly() {
    let mut editor = editor_over("short");
    editor
        .apply(&Action::SelectRange(TextRange::new(1, 3)))
        .unwrap();

    let err = editor
        .apply(&Action::SelectRange(TextRange::new(0, 6)))
        .unwrap_err();
    assert!(matches!(err, ApplyError::RangeOutOfBounds(_, 5)));
    assert_eq!(editor.document().selection(), TextRange::new(1, 3));
}

#[test]
fn copy_with_nothing_selected_is_an_error() {
    let mut editor = editor_over("hello");
    let err = editor.apply(&Action::Copy).unwrap_err();
    assert!(matches!(err, ApplyError::NoSelection));
}

#[test]
fn alignment_applies_per_paragraph() {
    let mut editor = editor_over("one\ntwo\nthree");
    editor
        .apply(&Action::SelectRange(TextRange::caret(5)))
        .unwrap();
    editor
        .apply(&Action::SetAlignment(Alignment::Center))
        .unwrap();

    let content = editor.document().attributed();
    let centered: Vec<bool> = content
        .runs()
        .iter()
        .map(|run| run.attrs.alignment == Alignment::Center)
        .collect();
    assert_eq!(centered, vec![false, true, false]);
}

#[test]
fn metadata_and_apply_agree_on_the_whole_vocabulary() {
    let mut editor = editor_over("hello world");
    editor
        .apply(&Action::SelectRange(TextRange::new(0, 5)))
        .unwrap();

    let actions = vec![
        Action::ToggleStyle(TextStyle::Italic),
        Action::ChangeStyle(TextStyle::Underline, true),
        Action::SetAlignment(Alignment::Right),
        Action::StepFontSize(2),
        Action::StepIndent(Pt(8.0)),
        Action::StepSuperscript(1),
        Action::SetBackgroundColor(Color::rgb(255, 255, 0)),
        Action::SetHighlightedRange(Some(TextRange::new(0, 3))),
        Action::PasteText("x".into()),
    ];

    for action in actions {
        let meta = editor.metadata(&action);
        assert!(!meta.title.is_empty());
        let applied = editor.apply(&action).unwrap();
        assert!(applied.mutated, "{} did not mutate", action.name());
    }

    // Every edit above is one history entry.
    for _ in 0..9 {
        editor.undo().unwrap();
    }
    assert!(matches!(
        editor.undo().unwrap_err(),
        ApplyError::NothingToUndo
    ));
}
