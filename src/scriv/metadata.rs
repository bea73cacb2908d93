//! # Metadata Resolver
//!
//! Pure, total mapping from an [`Action`] to presentation metadata:
//! a stable id, a display title, a menu-context title, and an icon
//! key. There is no error case: every constructible action resolves,
//! falling back to the placeholder icon or the raw localization key
//! where nothing better exists.
//!
//! Ids hash the whole action value (tag plus payload), so two actions
//! that share a display title (two `StepIndent` deltas, say) still get
//! distinct ids. Titles are purely presentational.

use crate::action::Action;
use crate::locale::Localizer;
use crate::model::{Alignment, TextStyle};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Icon returned for variants without a distinguishing icon of their
/// own.
pub const PLACEHOLDER_ICON: IconKey = IconKey("questionmark.square.dashed");

/// Key into the external icon backend. Opaque to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconKey(pub &'static str);

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Deterministic identifier derived from an action's tag and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Presentation metadata for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMetadata {
    pub id: ActionId,
    pub title: String,
    pub menu_title: String,
    pub icon: IconKey,
}

pub fn action_id(action: &Action) -> ActionId {
    let mut hasher = FxHasher::default();
    action.hash(&mut hasher);
    ActionId(hasher.finish())
}

pub fn resolve_metadata(action: &Action, localizer: &dyn Localizer) -> ActionMetadata {
    let title = localizer.resolve(title_key(action), &[]);
    let menu_title = match action {
        // The menu key carries the delta so a menu can show
        // "Increase Indent by 4pt" where a toolbar shows the generic
        // title.
        Action::StepIndent(delta) => {
            let key = if delta.0 >= 0.0 {
                "action.step-indent.increase.menu"
            } else {
                "action.step-indent.decrease.menu"
            };
            let params = [("points", delta.abs().to_string())];
            localizer.resolve(key, &params)
        }
        _ => title.clone(),
    };

    ActionMetadata {
        id: action_id(action),
        title,
        menu_title,
        icon: icon_key(action),
    }
}

fn title_key(action: &Action) -> &'static str {
    match action {
        Action::Copy => "action.copy",
        Action::DismissKeyboard => "action.dismiss-keyboard",
        Action::Print => "action.print",
        Action::RedoLatestChange => "action.redo",
        Action::UndoLatestChange => "action.undo",
        Action::SetAlignment(alignment) => alignment.title_key(),
        Action::StepFontSize(delta) => {
            if *delta >= 0 {
                "action.step-font-size.increase"
            } else {
                "action.step-font-size.decrease"
            }
        }
        Action::StepIndent(delta) => {
            if delta.0 >= 0.0 {
                "action.step-indent.increase"
            } else {
                "action.step-indent.decrease"
            }
        }
        Action::StepSuperscript(delta) => {
            if *delta >= 0 {
                "action.step-superscript.increase"
            } else {
                "action.step-superscript.decrease"
            }
        }
        // ChangeStyle titles come from the style payload alone; the
        // bool payload only matters to the applier.
        Action::ToggleStyle(style) | Action::ChangeStyle(style, _) => style.title_key(),
        Action::SetBackgroundColor(_) => "action.set-background-color",
        Action::SetForegroundColor(_) => "action.set-foreground-color",
        Action::SetUnderlineColor(_) => "action.set-underline-color",
        Action::SetStrikethroughColor(_) => "action.set-strikethrough-color",
        Action::SetStrokeColor(_) => "action.set-stroke-color",
        Action::SetHighlightedRange(_) => "action.set-highlighted-range",
        Action::HighlightingStyle(_) => "action.highlighting-style",
        Action::PasteImage(_) => "action.paste-image",
        Action::PasteImages(_) => "action.paste-images",
        Action::PasteText(_) => "action.paste-text",
        Action::SelectRange(_) => "action.select-range",
        Action::SetAttributedString(_) => "action.set-attributed-string",
    }
}

fn icon_key(action: &Action) -> IconKey {
    match action {
        Action::Copy => IconKey("doc.on.doc"),
        Action::DismissKeyboard => IconKey("keyboard.chevron.compact.down"),
        Action::Print => IconKey("printer"),
        Action::RedoLatestChange => IconKey("arrow.uturn.forward"),
        Action::UndoLatestChange => IconKey("arrow.uturn.backward"),
        Action::SetAlignment(alignment) => alignment.icon_key(),
        Action::StepFontSize(delta) => {
            if *delta >= 0 {
                IconKey("textformat.size.larger")
            } else {
                IconKey("textformat.size.smaller")
            }
        }
        Action::StepIndent(delta) => {
            if delta.0 >= 0.0 {
                IconKey("increase.indent")
            } else {
                IconKey("decrease.indent")
            }
        }
        Action::StepSuperscript(delta) => {
            if *delta >= 0 {
                IconKey("textformat.superscript")
            } else {
                IconKey("textformat.subscript")
            }
        }
        Action::ToggleStyle(style) | Action::ChangeStyle(style, _) => style.icon_key(),
        Action::SetBackgroundColor(_) => IconKey("paintbrush.pointed"),
        Action::SetForegroundColor(_) => IconKey("paintbrush"),
        Action::SetUnderlineColor(_) => IconKey("underline"),
        Action::SetStrikethroughColor(_) => IconKey("strikethrough"),
        Action::SetStrokeColor(_) => IconKey("pencil.and.outline"),
        Action::SetHighlightedRange(_)
        | Action::HighlightingStyle(_)
        | Action::PasteImage(_)
        | Action::PasteImages(_)
        | Action::PasteText(_)
        | Action::SelectRange(_)
        | Action::SetAttributedString(_) => PLACEHOLDER_ICON,
    }
}

/// Style values own their icon and title, decoupling the choice from
/// the action wrapper.
impl TextStyle {
    pub fn icon_key(self) -> IconKey {
        match self {
            TextStyle::Bold => IconKey("bold"),
            TextStyle::Italic => IconKey("italic"),
            TextStyle::Underline => IconKey("underline"),
            TextStyle::Strikethrough => IconKey("strikethrough"),
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            TextStyle::Bold => "action.style.bold",
            TextStyle::Italic => "action.style.italic",
            TextStyle::Underline => "action.style.underline",
            TextStyle::Strikethrough => "action.style.strikethrough",
        }
    }
}

impl Alignment {
    pub fn icon_key(self) -> IconKey {
        match self {
            Alignment::Left => IconKey("text.alignleft"),
            Alignment::Center => IconKey("text.aligncenter"),
            Alignment::Right => IconKey("text.alignright"),
            Alignment::Justified => IconKey("text.justify"),
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Alignment::Left => "action.set-alignment.left",
            Alignment::Center => "action.set-alignment.center",
            Alignment::Right => "action.set-alignment.right",
            Alignment::Justified => "action.set-alignment.justified",
        }
    }
}
