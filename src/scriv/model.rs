use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg};

/// A half-open span of text units `[start, end)` within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Creates a range, swapping the bounds if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A zero-length range (an insertion point).
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A measurement in typographic points.
///
/// Compares and hashes by bit pattern so that actions carrying point
/// payloads stay structurally hashable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    pub fn clamp(self, min: Pt, max: Pt) -> Pt {
        Pt(self.0.clamp(min.0, max.0))
    }
}

impl PartialEq for Pt {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Pt {}

impl Hash for Pt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Add for Pt {
    type Output = Pt;

    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl From<f32> for Pt {
    fn from(points: f32) -> Self {
        Pt(points)
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}pt", self.0 as i64)
        } else {
            write!(f, "{}pt", self.0)
        }
    }
}

/// An opaque platform color, carried as 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// An opaque image payload. An inserted image occupies exactly one
/// text unit in the document (attachment model).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// The boolean character styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

/// How a highlighted range is rendered: tint behind the text, or
/// recolor the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightStyle {
    Background,
    Foreground,
}

/// Names the color slots a document carries per text unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorAttribute {
    Foreground,
    Background,
    Underline,
    Strikethrough,
    Stroke,
}

/// The full attribute set of a text unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextAttributes {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_size: Pt,
    pub indent: Pt,
    pub superscript: i32,
    pub alignment: Alignment,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub underline_color: Option<Color>,
    pub strikethrough_color: Option<Color>,
    pub stroke_color: Option<Color>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            font_size: Pt(16.0),
            indent: Pt::ZERO,
            superscript: 0,
            alignment: Alignment::Left,
            foreground: None,
            background: None,
            underline_color: None,
            strikethrough_color: None,
            stroke_color: None,
        }
    }
}

impl TextAttributes {
    pub fn style(&self, style: TextStyle) -> bool {
        match style {
            TextStyle::Bold => self.bold,
            TextStyle::Italic => self.italic,
            TextStyle::Underline => self.underline,
            TextStyle::Strikethrough => self.strikethrough,
        }
    }

    pub fn set_style(&mut self, style: TextStyle, enabled: bool) {
        match style {
            TextStyle::Bold => self.bold = enabled,
            TextStyle::Italic => self.italic = enabled,
            TextStyle::Underline => self.underline = enabled,
            TextStyle::Strikethrough => self.strikethrough = enabled,
        }
    }

    pub fn color(&self, attribute: ColorAttribute) -> Option<Color> {
        match attribute {
            ColorAttribute::Foreground => self.foreground,
            ColorAttribute::Background => self.background,
            ColorAttribute::Underline => self.underline_color,
            ColorAttribute::Strikethrough => self.strikethrough_color,
            ColorAttribute::Stroke => self.stroke_color,
        }
    }

    pub fn set_color(&mut self, attribute: ColorAttribute, color: Color) {
        match attribute {
            ColorAttribute::Foreground => self.foreground = Some(color),
            ColorAttribute::Background => self.background = Some(color),
            ColorAttribute::Underline => self.underline_color = Some(color),
            ColorAttribute::Strikethrough => self.strikethrough_color = Some(color),
            ColorAttribute::Stroke => self.stroke_color = Some(color),
        }
    }
}

/// One run of an [`AttributedText`]: a stretch of equally-attributed
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub content: RunContent,
    pub attrs: TextAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunContent {
    Text(String),
    Image(Image),
}

/// Rich-text content as an ordered sequence of attribute runs.
///
/// Lengths and positions are counted in text units: one unit per
/// character, one unit per inline image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributedText {
    runs: Vec<Run>,
}

impl AttributedText {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Plain text with default attributes.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![Run {
                content: RunContent::Text(text.to_string()),
                attrs: TextAttributes::default(),
            }],
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs
            .iter()
            .map(|run| match &run.content {
                RunContent::Text(text) => text.chars().count(),
                RunContent::Image(_) => 1,
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| match &run.content {
            RunContent::Text(text) => text.is_empty(),
            RunContent::Image(_) => false,
        })
    }

    /// Lossy plain-text projection; inline images render as U+FFFC.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            match &run.content {
                RunContent::Text(text) => out.push_str(text),
                RunContent::Image(_) => out.push('\u{FFFC}'),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_normalizes_reversed_bounds() {
        let range = TextRange::new(7, 3);
        assert_eq!(range.start, 3);
        assert_eq!(range.end, 7);
    }

    #[test]
    fn caret_is_empty() {
        assert!(TextRange::caret(5).is_empty());
        assert_eq!(TextRange::caret(5).len(), 0);
    }

    #[test]
    fn pt_display_drops_trailing_zero() {
        assert_eq!(Pt(4.0).to_string(), "4pt");
        assert_eq!(Pt(4.5).to_string(), "4.5pt");
        assert_eq!(Pt(-2.0).to_string(), "-2pt");
    }

    #[test]
    fn attributed_len_counts_images_as_one_unit() {
        let content = AttributedText::new(vec![
            Run {
                content: RunContent::Text("ab".into()),
                attrs: TextAttributes::default(),
            },
            Run {
                content: RunContent::Image(Image::new("pic", vec![1, 2, 3])),
                attrs: TextAttributes::default(),
            },
        ]);
        assert_eq!(content.len(), 3);
        assert_eq!(content.text(), "ab\u{FFFC}");
    }

    #[test]
    fn plain_empty_text_has_no_runs() {
        assert!(AttributedText::plain("").is_empty());
        assert_eq!(AttributedText::plain("").len(), 0);
    }
}
