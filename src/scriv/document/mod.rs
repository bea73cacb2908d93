//! # Document Backend
//!
//! The [`Document`] trait is the applier's view of the attributed-text
//! storage engine. Abstracting it behind a trait keeps the command
//! layer decoupled from any particular text storage and lets tests run
//! against [`memory::InMemoryDocument`].
//!
//! ## Contract
//!
//! - Positions and lengths are text units: one unit per character, one
//!   per inline image attachment.
//! - Attribute setters taking an empty range update the caret's typing
//!   attributes instead of document content; scalar getters at the
//!   caret read those typing attributes back.
//! - The undo/redo history is snapshot-based. `push_undo` records the
//!   current state and clears the redo stack; a successful `pop_undo`
//!   moves the current state onto the redo stack (and `pop_redo` the
//!   reverse), so one applied action is always one history entry.
//! - Implementations keep the selection within bounds after any
//!   content change.

use crate::model::{
    Alignment, AttributedText, Color, ColorAttribute, HighlightStyle, Image, Pt, TextRange,
    TextStyle,
};

pub mod memory;

/// Result of asking whether a boolean style holds over a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleState {
    /// Every unit in the range has the style.
    On,
    /// No unit in the range has the style.
    Off,
    /// The range mixes styled and unstyled units.
    Mixed,
}

pub trait Document {
    /// Content length in text units.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn selection(&self) -> TextRange;

    fn set_selection(&mut self, range: TextRange);

    /// Plain text over a range; inline images render as U+FFFC.
    fn text(&self, range: TextRange) -> String;

    /// Full content as attribute runs.
    fn attributed(&self) -> AttributedText;

    /// Replace the entire content. Does not touch the history.
    fn replace_all(&mut self, content: AttributedText);

    fn insert_text(&mut self, at: usize, text: &str);

    fn insert_image(&mut self, at: usize, image: Image);

    fn delete(&mut self, range: TextRange);

    /// Expand a range to the enclosing paragraph boundaries.
    fn paragraph_range(&self, around: TextRange) -> TextRange;

    fn style_state(&self, style: TextStyle, range: TextRange) -> StyleState;

    fn set_style(&mut self, style: TextStyle, enabled: bool, range: TextRange);

    fn set_alignment(&mut self, alignment: Alignment, range: TextRange);

    fn set_color(&mut self, attribute: ColorAttribute, color: Color, range: TextRange);

    fn font_size(&self, at: usize) -> Pt;

    fn set_font_size(&mut self, size: Pt, range: TextRange);

    fn indent(&self, at: usize) -> Pt;

    fn set_indent(&mut self, points: Pt, range: TextRange);

    fn superscript(&self, at: usize) -> i32;

    fn set_superscript(&mut self, level: i32, range: TextRange);

    fn highlighted_range(&self) -> Option<TextRange>;

    fn set_highlighted_range(&mut self, range: Option<TextRange>);

    fn highlighting_style(&self) -> HighlightStyle;

    fn set_highlighting_style(&mut self, style: HighlightStyle);

    /// Record the current state on the undo stack and clear redo.
    fn push_undo(&mut self);

    /// Restore the most recent undo entry, moving the current state to
    /// the redo stack. Returns false if there is nothing to undo.
    fn pop_undo(&mut self) -> bool;

    /// Restore the most recent redo entry, moving the current state to
    /// the undo stack. Returns false if there is nothing to redo.
    fn pop_redo(&mut self) -> bool;
}
