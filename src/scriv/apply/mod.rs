//! # Effect Applier
//!
//! Turns an [`Action`] into a mutation of a [`Document`]. The dispatch
//! below is the single place every variant is routed; each family
//! module holds the actual rules and its own tests.
//!
//! A failed apply leaves the document untouched. Only non-mutating
//! variants can fail (`Copy`, the history pair, `SelectRange`, and the
//! host delegations); every mutating family is infallible by
//! construction, clamping instead of erroring, so the undo snapshot
//! taken before a mutation is never orphaned.
//!
//! Undo bookkeeping: one snapshot per mutating action, pushed before
//! the mutation. `SelectRange` is a navigation, not an edit, and
//! pushes nothing.

use crate::action::Action;
use crate::clipboard::Clipboard;
use crate::document::Document;
use crate::error::Result;
use crate::host::Host;
use crate::model::ColorAttribute;
use log::debug;

pub mod clipboard;
pub mod history;
pub mod host;
pub mod paste;
pub mod selection;
pub mod stepping;
pub mod styling;

/// What an apply did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Whether document content or attributes changed.
    pub mutated: bool,
}

pub fn apply<D: Document>(
    action: &Action,
    doc: &mut D,
    clipboard_out: &mut dyn Clipboard,
    host_out: &mut dyn Host,
) -> Result<Applied> {
    debug!("applying {}", action.name());
    match action {
        Action::Copy => clipboard::copy(doc, clipboard_out),
        Action::DismissKeyboard => host::dismiss_keyboard(host_out),
        Action::Print => host::print(host_out),
        Action::UndoLatestChange => history::undo(doc),
        Action::RedoLatestChange => history::redo(doc),
        Action::SelectRange(range) => selection::select_range(doc, *range),
        Action::SetAlignment(alignment) => edit(doc, |d| styling::set_alignment(d, *alignment)),
        Action::StepFontSize(delta) => edit(doc, |d| stepping::step_font_size(d, *delta)),
        Action::StepIndent(delta) => edit(doc, |d| stepping::step_indent(d, *delta)),
        Action::StepSuperscript(delta) => edit(doc, |d| stepping::step_superscript(d, *delta)),
        Action::ToggleStyle(style) => edit(doc, |d| styling::toggle_style(d, *style)),
        Action::ChangeStyle(style, enabled) => {
            edit(doc, |d| styling::change_style(d, *style, *enabled))
        }
        Action::SetBackgroundColor(color) => {
            edit(doc, |d| styling::set_color(d, ColorAttribute::Background, *color))
        }
        Action::SetForegroundColor(color) => {
            edit(doc, |d| styling::set_color(d, ColorAttribute::Foreground, *color))
        }
        Action::SetUnderlineColor(color) => {
            edit(doc, |d| styling::set_color(d, ColorAttribute::Underline, *color))
        }
        Action::SetStrikethroughColor(color) => edit(doc, |d| {
            styling::set_color(d, ColorAttribute::Strikethrough, *color)
        }),
        Action::SetStrokeColor(color) => {
            edit(doc, |d| styling::set_color(d, ColorAttribute::Stroke, *color))
        }
        Action::SetHighlightedRange(range) => {
            edit(doc, |d| styling::set_highlighted_range(d, *range))
        }
        Action::HighlightingStyle(style) => {
            edit(doc, |d| styling::set_highlighting_style(d, *style))
        }
        Action::PasteImage(image) => {
            edit(doc, |d| paste::paste_images(d, std::slice::from_ref(image)))
        }
        Action::PasteImages(images) => edit(doc, |d| paste::paste_images(d, images)),
        Action::PasteText(text) => edit(doc, |d| paste::paste_text(d, text)),
        Action::SetAttributedString(content) => {
            edit(doc, |d| paste::set_attributed_string(d, content))
        }
    }
}

fn edit<D: Document>(doc: &mut D, run: impl FnOnce(&mut D) -> Applied) -> Result<Applied> {
    doc.push_undo();
    Ok(run(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::document::memory::fixtures::DocumentFixture;
    use crate::document::memory::InMemoryDocument;
    use crate::document::StyleState;
    use crate::error::ApplyError;
    use crate::host::fixtures::RecordingHost;
    use crate::model::{Pt, TextRange, TextStyle};

    fn run(action: &Action, doc: &mut InMemoryDocument) -> Result<Applied> {
        let mut clipboard = MemoryClipboard::new();
        let mut host = RecordingHost::new();
        apply(action, doc, &mut clipboard, &mut host)
    }

    #[test]
    fn edit_then_undo_restores_the_previous_state() {
        let mut doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(0, 5)
            .build();
        let before = doc.attributed();

        run(&Action::ToggleStyle(TextStyle::Bold), &mut doc).unwrap();
        assert_ne!(doc.attributed(), before);

        run(&Action::undo(), &mut doc).unwrap();
        assert_eq!(doc.attributed(), before);
        assert_eq!(doc.selection(), TextRange::new(0, 5));

        run(&Action::redo(), &mut doc).unwrap();
        assert_eq!(
            doc.style_state(TextStyle::Bold, TextRange::new(0, 5)),
            StyleState::On
        );
    }

    #[test]
    fn select_range_is_not_an_undoable_edit() {
        let mut doc = DocumentFixture::new().with_text("hello").build();
        run(&Action::SelectRange(TextRange::new(1, 3)), &mut doc).unwrap();

        let err = run(&Action::undo(), &mut doc).unwrap_err();
        assert!(matches!(err, ApplyError::NothingToUndo));
    }

    #[test]
    fn a_new_edit_clears_the_redo_stack() {
        let mut doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(0, 5)
            .build();

        run(&Action::ToggleStyle(TextStyle::Bold), &mut doc).unwrap();
        run(&Action::undo(), &mut doc).unwrap();
        run(&Action::StepFontSize(2), &mut doc).unwrap();

        let err = run(&Action::redo(), &mut doc).unwrap_err();
        assert!(matches!(err, ApplyError::NothingToRedo));
    }

    #[test]
    fn failed_applies_leave_the_document_untouched() {
        let mut doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(1, 3)
            .build();
        let before = doc.attributed();

        let err = run(&Action::SelectRange(TextRange::new(0, 99)), &mut doc).unwrap_err();
        assert!(matches!(err, ApplyError::RangeOutOfBounds(_, 5)));
        assert_eq!(doc.attributed(), before);
        assert_eq!(doc.selection(), TextRange::new(1, 3));
    }

    #[test]
    fn host_failures_surface_without_mutating() {
        let mut doc = DocumentFixture::new().with_text("hello").build();
        let before = doc.attributed();
        let mut clipboard = MemoryClipboard::new();
        let mut host = RecordingHost::failing("printer on fire");

        let err = apply(&Action::Print, &mut doc, &mut clipboard, &mut host).unwrap_err();
        assert!(matches!(err, ApplyError::Collaborator(_)));
        assert_eq!(doc.attributed(), before);

        let err = run(&Action::undo(), &mut doc).unwrap_err();
        assert!(matches!(err, ApplyError::NothingToUndo));
    }

    #[test]
    fn non_mutating_actions_report_unchanged() {
        let mut doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(0, 2)
            .build();

        let applied = run(&Action::Copy, &mut doc).unwrap();
        assert!(!applied.mutated);

        let applied = run(&Action::SelectRange(TextRange::caret(4)), &mut doc).unwrap();
        assert!(!applied.mutated);

        let applied = run(&Action::DismissKeyboard, &mut doc).unwrap();
        assert!(!applied.mutated);
    }

    #[test]
    fn stepping_at_a_clamp_boundary_still_records_one_undo_entry() {
        let mut doc = DocumentFixture::new()
            .with_text("ab")
            .with_font_size(Pt(1.0), 0, 2)
            .with_selection(0, 2)
            .build();

        let applied = run(&Action::StepFontSize(-5), &mut doc).unwrap();
        assert!(!applied.mutated);
        assert_eq!(doc.undo_depth(), 1);
    }
}
