//! Stepped numeric adjustments.
//!
//! Stepping reads the scalar at the selection start, adds the signed
//! delta, clamps to the valid band, and writes the result back over
//! the selection (the caret's typing attributes when nothing is
//! selected). Out-of-band results saturate; stepping never errors.

use super::Applied;
use crate::document::Document;
use crate::model::Pt;

pub const MIN_FONT_SIZE: Pt = Pt(1.0);
pub const MAX_FONT_SIZE: Pt = Pt(512.0);

pub const MIN_INDENT: Pt = Pt(0.0);
pub const MAX_INDENT: Pt = Pt(400.0);

pub const MIN_SUPERSCRIPT: i32 = -4;
pub const MAX_SUPERSCRIPT: i32 = 4;

pub fn step_font_size<D: Document>(doc: &mut D, delta: i32) -> Applied {
    let selection = doc.selection();
    let current = doc.font_size(selection.start);
    let next = Pt(current.0 + delta as f32).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    doc.set_font_size(next, selection);
    Applied {
        mutated: next != current,
    }
}

pub fn step_indent<D: Document>(doc: &mut D, delta: Pt) -> Applied {
    let selection = doc.selection();
    let current = doc.indent(selection.start);
    let next = (current + delta).clamp(MIN_INDENT, MAX_INDENT);
    doc.set_indent(next, selection);
    Applied {
        mutated: next != current,
    }
}

pub fn step_superscript<D: Document>(doc: &mut D, delta: i32) -> Applied {
    let selection = doc.selection();
    let current = doc.superscript(selection.start);
    let next = current
        .saturating_add(delta)
        .clamp(MIN_SUPERSCRIPT, MAX_SUPERSCRIPT);
    doc.set_superscript(next, selection);
    Applied {
        mutated: next != current,
    }
}
