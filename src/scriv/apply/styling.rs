use super::Applied;
use crate::document::{Document, StyleState};
use crate::model::{Alignment, Color, ColorAttribute, HighlightStyle, TextRange, TextStyle};

/// Flip a boolean style over the selection. A selection mixing "on"
/// and "off" runs turns uniformly on: turning on wins.
pub fn toggle_style<D: Document>(doc: &mut D, style: TextStyle) -> Applied {
    let selection = doc.selection();
    let enabled = doc.style_state(style, selection) != StyleState::On;
    doc.set_style(style, enabled, selection);
    Applied { mutated: true }
}

/// Set a boolean style to an explicit value over the selection; the
/// current state, mixed or not, is irrelevant.
pub fn change_style<D: Document>(doc: &mut D, style: TextStyle, enabled: bool) -> Applied {
    doc.set_style(style, enabled, doc.selection());
    Applied { mutated: true }
}

/// Align the paragraphs touched by the selection; a caret aligns the
/// paragraph containing it.
pub fn set_alignment<D: Document>(doc: &mut D, alignment: Alignment) -> Applied {
    let paragraphs = doc.paragraph_range(doc.selection());
    doc.set_alignment(alignment, paragraphs);
    Applied { mutated: true }
}

pub fn set_color<D: Document>(doc: &mut D, attribute: ColorAttribute, color: Color) -> Applied {
    doc.set_color(attribute, color, doc.selection());
    Applied { mutated: true }
}

/// Set or clear the highlighted span. The active selection is not
/// touched.
pub fn set_highlighted_range<D: Document>(doc: &mut D, range: Option<TextRange>) -> Applied {
    doc.set_highlighted_range(range);
    Applied { mutated: true }
}

pub fn set_highlighting_style<D: Document>(doc: &mut D, style: HighlightStyle) -> Applied {
    doc.set_highlighting_style(style);
    Applied { mutated: true }
}
