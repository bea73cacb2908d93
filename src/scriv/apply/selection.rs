use super::Applied;
use crate::document::Document;
use crate::error::{ApplyError, Result};
use crate::model::TextRange;

/// Move the active selection. A range reaching past the end of the
/// content is rejected and the selection stays where it was.
pub fn select_range<D: Document>(doc: &mut D, range: TextRange) -> Result<Applied> {
    if range.end > doc.len() {
        return Err(ApplyError::RangeOutOfBounds(range, doc.len()));
    }
    doc.set_selection(range);
    Ok(Applied { mutated: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::memory::fixtures::DocumentFixture;

    #[test]
    fn moves_the_selection() {
        let mut doc = DocumentFixture::new().with_text("hello").build();
        select_range(&mut doc, TextRange::new(1, 4)).unwrap();
        assert_eq!(doc.selection(), TextRange::new(1, 4));
    }

    #[test]
    fn the_end_of_content_is_a_valid_caret() {
        let mut doc = DocumentFixture::new().with_text("hello").build();
        select_range(&mut doc, TextRange::caret(5)).unwrap();
        assert_eq!(doc.selection(), TextRange::caret(5));
    }

    #[test]
    fn out_of_bounds_leaves_the_selection_unchanged() {
        let mut doc = DocumentFixture::new()
            .with_text("hello")
            .with_selection(1, 2)
            .build();

        let err = select_range(&mut doc, TextRange::new(2, 6)).unwrap_err();
        assert!(matches!(err, ApplyError::RangeOutOfBounds(_, 5)));
        assert_eq!(doc.selection(), TextRange::new(1, 2));
    }
}
