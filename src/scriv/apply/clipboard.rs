use super::Applied;
use crate::clipboard::Clipboard;
use crate::document::Document;
use crate::error::{ApplyError, Result};
use log::warn;

/// Copy the selected text to the clipboard. The document is never
/// mutated, even when the collaborator fails.
pub fn copy<D: Document>(doc: &D, clipboard: &mut dyn Clipboard) -> Result<Applied> {
    let selection = doc.selection();
    if selection.is_empty() {
        return Err(ApplyError::NoSelection);
    }

    let text = doc.text(selection);
    clipboard.copy(&text).map_err(|e| {
        warn!("clipboard copy failed: {}", e);
        ApplyError::Collaborator(e)
    })?;
    Ok(Applied { mutated: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::document::memory::fixtures::DocumentFixture;
    use crate::error::CollaboratorError;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy(&mut self, _text: &str) -> std::result::Result<(), CollaboratorError> {
            Err(CollaboratorError::new("clipboard", "unavailable"))
        }
    }

    #[test]
    fn copies_the_selected_text() {
        let doc = DocumentFixture::new()
            .with_text("hello world")
            .with_selection(6, 11)
            .build();
        let mut clipboard = MemoryClipboard::new();

        let applied = copy(&doc, &mut clipboard).unwrap();
        assert!(!applied.mutated);
        assert_eq!(clipboard.last(), Some("world"));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(2, 2)
            .build();
        let mut clipboard = MemoryClipboard::new();

        let err = copy(&doc, &mut clipboard).unwrap_err();
        assert!(matches!(err, ApplyError::NoSelection));
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn collaborator_failures_are_wrapped() {
        let doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(0, 5)
            .build();

        let err = copy(&doc, &mut BrokenClipboard).unwrap_err();
        assert!(matches!(err, ApplyError::Collaborator(_)));
    }
}
