use super::Applied;
use crate::document::Document;
use crate::model::{AttributedText, Image, TextRange};

/// A paste replaces a non-empty selection; the insertion then happens
/// at the collapsed caret.
fn insertion_point<D: Document>(doc: &mut D) -> usize {
    let selection = doc.selection();
    if !selection.is_empty() {
        doc.delete(selection);
    }
    selection.start
}

pub fn paste_text<D: Document>(doc: &mut D, text: &str) -> Applied {
    let at = insertion_point(doc);
    doc.insert_text(at, text);
    doc.set_selection(TextRange::caret(at + text.chars().count()));
    Applied { mutated: true }
}

/// Insert images in payload order, each insertion advancing the point
/// past the previous one; the selection ends collapsed after the last.
pub fn paste_images<D: Document>(doc: &mut D, images: &[Image]) -> Applied {
    let mut at = insertion_point(doc);
    for image in images {
        doc.insert_image(at, image.clone());
        at += 1;
    }
    doc.set_selection(TextRange::caret(at));
    Applied { mutated: true }
}

/// Whole-content replacement. The caller's dispatch records a single
/// whole-document history entry; nothing here attempts to diff.
pub fn set_attributed_string<D: Document>(doc: &mut D, content: &AttributedText) -> Applied {
    doc.replace_all(content.clone());
    doc.set_selection(TextRange::caret(0));
    Applied { mutated: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::memory::fixtures::DocumentFixture;
    use crate::model::{Run, RunContent, TextAttributes};

    #[test]
    fn paste_text_at_a_caret_inserts_and_collapses_after() {
        let mut doc = DocumentFixture::new()
            .with_text("helloworld")
            .with_selection(5, 5)
            .build();

        paste_text(&mut doc, ", ");
        assert_eq!(doc.text(TextRange::new(0, doc.len())), "hello, world");
        assert_eq!(doc.selection(), TextRange::caret(7));
    }

    #[test]
    fn paste_text_replaces_a_non_empty_selection() {
        let mut doc = DocumentFixture::new()
            .with_text("hello cruel world")
            .with_selection(6, 11)
            .build();

        paste_text(&mut doc, "kind");
        assert_eq!(doc.text(TextRange::new(0, doc.len())), "hello kind world");
        assert_eq!(doc.selection(), TextRange::caret(10));
    }

    #[test]
    fn images_insert_in_order_and_collapse_after_the_last() {
        let mut doc = DocumentFixture::new()
            .with_text("0123456789")
            .with_selection(5, 5)
            .build();
        let first = Image::new("first", vec![1]);
        let second = Image::new("second", vec![2]);

        paste_images(&mut doc, &[first.clone(), second.clone()]);

        assert_eq!(doc.len(), 12);
        assert_eq!(doc.selection(), TextRange::caret(7));
        let content = doc.attributed();
        let images: Vec<&Image> = content
            .runs()
            .iter()
            .filter_map(|run| match &run.content {
                RunContent::Image(image) => Some(image),
                RunContent::Text(_) => None,
            })
            .collect();
        assert_eq!(images, vec![&first, &second]);
    }

    #[test]
    fn single_image_paste_is_one_unit() {
        let mut doc = DocumentFixture::new()
            .with_text("ab")
            .with_selection(1, 1)
            .build();

        paste_images(&mut doc, std::slice::from_ref(&Image::new("pic", vec![])));
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.selection(), TextRange::caret(2));
    }

    #[test]
    fn replacement_resets_the_caret_to_the_start() {
        let mut doc = DocumentFixture::new()
            .with_text("old content")
            .with_selection(4, 9)
            .build();

        let bold = TextAttributes {
            bold: true,
            ..TextAttributes::default()
        };
        let content = AttributedText::new(vec![Run {
            content: RunContent::Text("new".into()),
            attrs: bold,
        }]);
        set_attributed_string(&mut doc, &content);

        assert_eq!(doc.text(TextRange::new(0, doc.len())), "new");
        assert_eq!(doc.selection(), TextRange::caret(0));
        assert_eq!(doc.attributed(), content);
    }
}
