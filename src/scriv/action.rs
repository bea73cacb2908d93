//! The closed vocabulary of editing actions.
//!
//! An [`Action`] is a value object describing a single requested edit
//! or UI-level effect. It is created at the moment of the request,
//! handed to the applier, and discarded; it carries no identity beyond
//! its tag and payload. Both resolvers (`metadata` and `apply`) match
//! on this enum without a wildcard arm, so adding a variant does not
//! compile until both handle it.

use crate::error::{ApplyError, Result};
use crate::model::{
    Alignment, AttributedText, Color, HighlightStyle, Image, Pt, TextRange, TextStyle,
};
use serde::{Deserialize, Serialize};

/// Unsigned magnitudes above this are not exactly representable in an
/// `f32` point payload and are rejected at construction.
const MAX_EXACT_F32: u32 = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Copy the current selection to the clipboard.
    Copy,
    /// Ask the host to dismiss the soft keyboard.
    DismissKeyboard,
    /// Ask the host to print the document.
    Print,
    /// Redo one undone edit.
    RedoLatestChange,
    /// Undo one edit.
    UndoLatestChange,
    /// Set paragraph alignment over the selected paragraphs.
    SetAlignment(Alignment),
    /// Add a signed delta, in whole points, to the current font size.
    StepFontSize(i32),
    /// Add a signed delta, in points, to the current indent.
    StepIndent(Pt),
    /// Add a signed delta to the superscript/subscript level.
    StepSuperscript(i32),
    /// Flip a boolean style over the selection.
    ToggleStyle(TextStyle),
    /// Set a boolean style to an explicit value over the selection.
    ChangeStyle(TextStyle, bool),
    SetBackgroundColor(Color),
    SetForegroundColor(Color),
    SetUnderlineColor(Color),
    SetStrikethroughColor(Color),
    SetStrokeColor(Color),
    /// Set or (with `None`) clear the highlighted span.
    SetHighlightedRange(Option<TextRange>),
    /// Set how the highlighted span is rendered.
    HighlightingStyle(HighlightStyle),
    /// Insert one image at the selection.
    PasteImage(Image),
    /// Insert several images at the selection, in payload order.
    PasteImages(Vec<Image>),
    /// Insert text at the selection.
    PasteText(String),
    /// Move the active selection.
    SelectRange(TextRange),
    /// Replace the whole document content.
    SetAttributedString(AttributedText),
}

impl Action {
    /// Stable kebab-case tag name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Copy => "copy",
            Action::DismissKeyboard => "dismiss-keyboard",
            Action::Print => "print",
            Action::RedoLatestChange => "redo-latest-change",
            Action::UndoLatestChange => "undo-latest-change",
            Action::SetAlignment(_) => "set-alignment",
            Action::StepFontSize(_) => "step-font-size",
            Action::StepIndent(_) => "step-indent",
            Action::StepSuperscript(_) => "step-superscript",
            Action::ToggleStyle(_) => "toggle-style",
            Action::ChangeStyle(..) => "change-style",
            Action::SetBackgroundColor(_) => "set-background-color",
            Action::SetForegroundColor(_) => "set-foreground-color",
            Action::SetUnderlineColor(_) => "set-underline-color",
            Action::SetStrikethroughColor(_) => "set-strikethrough-color",
            Action::SetStrokeColor(_) => "set-stroke-color",
            Action::SetHighlightedRange(_) => "set-highlighted-range",
            Action::HighlightingStyle(_) => "highlighting-style",
            Action::PasteImage(_) => "paste-image",
            Action::PasteImages(_) => "paste-images",
            Action::PasteText(_) => "paste-text",
            Action::SelectRange(_) => "select-range",
            Action::SetAttributedString(_) => "set-attributed-string",
        }
    }
}

/// Direction aliases: each desugars an unsigned magnitude into the
/// canonical signed stepping variant. Magnitudes that cannot be
/// represented in the signed payload fail here, at construction, never
/// by wrapping.
impl Action {
    pub const fn undo() -> Self {
        Action::UndoLatestChange
    }

    pub const fn redo() -> Self {
        Action::RedoLatestChange
    }

    pub fn increase_font_size(points: u32) -> Result<Self> {
        Ok(Action::StepFontSize(signed_step(points)?))
    }

    pub fn decrease_font_size(points: u32) -> Result<Self> {
        Ok(Action::StepFontSize(-signed_step(points)?))
    }

    pub fn increase_indent(points: u32) -> Result<Self> {
        Ok(Action::StepIndent(Pt(real_step(points)?)))
    }

    pub fn decrease_indent(points: u32) -> Result<Self> {
        Ok(Action::StepIndent(Pt(-real_step(points)?)))
    }

    pub fn increase_superscript(steps: u32) -> Result<Self> {
        Ok(Action::StepSuperscript(signed_step(steps)?))
    }

    pub fn decrease_superscript(steps: u32) -> Result<Self> {
        Ok(Action::StepSuperscript(-signed_step(steps)?))
    }
}

fn signed_step(magnitude: u32) -> Result<i32> {
    i32::try_from(magnitude).map_err(|_| ApplyError::StepValueOutOfRange(magnitude as u64))
}

fn real_step(magnitude: u32) -> Result<f32> {
    if magnitude > MAX_EXACT_F32 {
        return Err(ApplyError::StepValueOutOfRange(magnitude as u64));
    }
    Ok(magnitude as f32)
}
