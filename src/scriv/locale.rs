//! Localization seam.
//!
//! The resolver maps actions to string keys; a [`Localizer`] turns
//! keys into display strings. Resolution is total: an unknown key
//! comes back as the key itself, never as an error.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named parameters substituted into a localized template.
pub type Params<'a> = &'a [(&'a str, String)];

pub trait Localizer {
    /// Resolve a key to a display string, substituting `{name}`
    /// placeholders from `params`. Must always return a string.
    fn resolve(&self, key: &str, params: Params) -> String;
}

/// The built-in English string catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

static STRINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("action.copy", "Copy"),
        ("action.dismiss-keyboard", "Dismiss Keyboard"),
        ("action.print", "Print"),
        ("action.redo", "Redo"),
        ("action.undo", "Undo"),
        ("action.set-alignment.left", "Align Left"),
        ("action.set-alignment.center", "Align Center"),
        ("action.set-alignment.right", "Align Right"),
        ("action.set-alignment.justified", "Justify"),
        ("action.step-font-size.increase", "Increase Font Size"),
        ("action.step-font-size.decrease", "Decrease Font Size"),
        ("action.step-indent.increase", "Increase Indent"),
        ("action.step-indent.decrease", "Decrease Indent"),
        (
            "action.step-indent.increase.menu",
            "Increase Indent by {points}",
        ),
        (
            "action.step-indent.decrease.menu",
            "Decrease Indent by {points}",
        ),
        ("action.step-superscript.increase", "Increase Superscript"),
        ("action.step-superscript.decrease", "Decrease Superscript"),
        ("action.style.bold", "Bold"),
        ("action.style.italic", "Italic"),
        ("action.style.underline", "Underline"),
        ("action.style.strikethrough", "Strikethrough"),
        ("action.set-background-color", "Background Color"),
        ("action.set-foreground-color", "Text Color"),
        ("action.set-underline-color", "Underline Color"),
        ("action.set-strikethrough-color", "Strikethrough Color"),
        ("action.set-stroke-color", "Stroke Color"),
        ("action.set-highlighted-range", "Highlighted Range"),
        ("action.highlighting-style", "Highlighting Style"),
        ("action.paste-image", "Paste Image"),
        ("action.paste-images", "Paste Images"),
        ("action.paste-text", "Paste"),
        ("action.select-range", "Select Range"),
        ("action.set-attributed-string", "Replace Content"),
    ])
});

impl Localizer for Catalog {
    fn resolve(&self, key: &str, params: Params) -> String {
        let template = STRINGS.get(key).copied().unwrap_or(key);
        substitute(template, params)
    }
}

fn substitute(template: &str, params: Params) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(Catalog.resolve("action.copy", &[]), "Copy");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(Catalog.resolve("action.missing", &[]), "action.missing");
    }

    #[test]
    fn params_substitute_into_template() {
        let params = [("points", "4pt".to_string())];
        assert_eq!(
            Catalog.resolve("action.step-indent.increase.menu", &params),
            "Increase Indent by 4pt"
        );
    }
}
