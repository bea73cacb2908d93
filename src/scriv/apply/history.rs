use super::Applied;
use crate::document::Document;
use crate::error::{ApplyError, Result};

pub fn undo<D: Document>(doc: &mut D) -> Result<Applied> {
    if doc.pop_undo() {
        Ok(Applied { mutated: true })
    } else {
        Err(ApplyError::NothingToUndo)
    }
}

pub fn redo<D: Document>(doc: &mut D) -> Result<Applied> {
    if doc.pop_redo() {
        Ok(Applied { mutated: true })
    } else {
        Err(ApplyError::NothingToRedo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::memory::fixtures::DocumentFixture;
    use crate::model::TextRange;

    #[test]
    fn empty_stacks_fail_with_the_right_error() {
        let mut doc = DocumentFixture::new().with_text("ab").build();
        assert!(matches!(
            undo(&mut doc).unwrap_err(),
            ApplyError::NothingToUndo
        ));
        assert!(matches!(
            redo(&mut doc).unwrap_err(),
            ApplyError::NothingToRedo
        ));
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut doc = DocumentFixture::new().with_text("ab").build();
        doc.push_undo();
        doc.insert_text(2, "c");

        undo(&mut doc).unwrap();
        assert_eq!(doc.text(TextRange::new(0, doc.len())), "ab");

        redo(&mut doc).unwrap();
        assert_eq!(doc.text(TextRange::new(0, doc.len())), "abc");
    }
}
