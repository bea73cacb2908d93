use super::{Document, StyleState};
use crate::model::{
    Alignment, AttributedText, Color, ColorAttribute, HighlightStyle, Image, Pt, Run, RunContent,
    TextAttributes, TextRange, TextStyle,
};

#[derive(Debug, Clone, PartialEq)]
enum Glyph {
    Char(char),
    Image(Image),
}

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    glyph: Glyph,
    attrs: TextAttributes,
}

/// Everything the history snapshots: content, selection, typing
/// attributes, highlight.
#[derive(Debug, Clone, PartialEq)]
struct State {
    cells: Vec<Cell>,
    selection: TextRange,
    typing_attrs: TextAttributes,
    highlight: Option<TextRange>,
    highlight_style: HighlightStyle,
}

impl Default for State {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            selection: TextRange::caret(0),
            typing_attrs: TextAttributes::default(),
            highlight: None,
            highlight_style: HighlightStyle::Background,
        }
    }
}

/// In-memory document for testing and development.
/// One cell per text unit; history entries are whole-state snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    state: State,
    undo: Vec<State>,
    redo: Vec<State>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_attributed(AttributedText::plain(text))
    }

    pub fn from_attributed(content: AttributedText) -> Self {
        let mut doc = Self::new();
        doc.replace_all(content);
        doc
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    fn clamp(&self, range: TextRange) -> TextRange {
        let len = self.state.cells.len();
        TextRange::new(range.start.min(len), range.end.min(len))
    }

    fn attrs_at(&self, at: usize) -> TextAttributes {
        if self.state.cells.is_empty() {
            return self.state.typing_attrs;
        }
        if self.state.selection.is_empty() && at == self.state.selection.start {
            return self.state.typing_attrs;
        }
        let index = at.min(self.state.cells.len() - 1);
        self.state.cells[index].attrs
    }

    fn insertion_attrs(&self, at: usize) -> TextAttributes {
        let selection = self.state.selection;
        if selection.is_empty() && selection.start == at {
            self.state.typing_attrs
        } else if at > 0 && at <= self.state.cells.len() {
            self.state.cells[at - 1].attrs
        } else if let Some(cell) = self.state.cells.first() {
            cell.attrs
        } else {
            self.state.typing_attrs
        }
    }

    fn context_attrs(&self, at: usize) -> TextAttributes {
        if at > 0 && at <= self.state.cells.len() {
            self.state.cells[at - 1].attrs
        } else if let Some(cell) = self.state.cells.first() {
            cell.attrs
        } else {
            self.state.typing_attrs
        }
    }

    fn edit_attrs<F: FnMut(&mut TextAttributes)>(&mut self, range: TextRange, mut edit: F) {
        let range = self.clamp(range);
        if range.is_empty() {
            edit(&mut self.state.typing_attrs);
            return;
        }
        for cell in &mut self.state.cells[range.start..range.end] {
            edit(&mut cell.attrs);
        }
    }

    fn is_newline(cell: &Cell) -> bool {
        matches!(cell.glyph, Glyph::Char('\n'))
    }
}

impl Document for InMemoryDocument {
    fn len(&self) -> usize {
        self.state.cells.len()
    }

    fn selection(&self) -> TextRange {
        self.state.selection
    }

    fn set_selection(&mut self, range: TextRange) {
        let clamped = self.clamp(range);
        self.state.selection = clamped;
        // A collapsed selection re-seeds the typing attributes from
        // the character before the caret.
        if clamped.is_empty() {
            self.state.typing_attrs = self.context_attrs(clamped.start);
        }
    }

    fn text(&self, range: TextRange) -> String {
        let range = self.clamp(range);
        self.state.cells[range.start..range.end]
            .iter()
            .map(|cell| match &cell.glyph {
                Glyph::Char(c) => *c,
                Glyph::Image(_) => '\u{FFFC}',
            })
            .collect()
    }

    fn attributed(&self) -> AttributedText {
        let mut runs: Vec<Run> = Vec::new();
        for cell in &self.state.cells {
            match &cell.glyph {
                Glyph::Char(c) => {
                    let merged = match runs.last_mut() {
                        Some(Run {
                            content: RunContent::Text(text),
                            attrs,
                        }) if *attrs == cell.attrs => {
                            text.push(*c);
                            true
                        }
                        _ => false,
                    };
                    if !merged {
                        runs.push(Run {
                            content: RunContent::Text(c.to_string()),
                            attrs: cell.attrs,
                        });
                    }
                }
                Glyph::Image(image) => runs.push(Run {
                    content: RunContent::Image(image.clone()),
                    attrs: cell.attrs,
                }),
            }
        }
        AttributedText::new(runs)
    }

    fn replace_all(&mut self, content: AttributedText) {
        let mut cells = Vec::with_capacity(content.len());
        for run in content.runs() {
            match &run.content {
                RunContent::Text(text) => {
                    cells.extend(text.chars().map(|c| Cell {
                        glyph: Glyph::Char(c),
                        attrs: run.attrs,
                    }));
                }
                RunContent::Image(image) => cells.push(Cell {
                    glyph: Glyph::Image(image.clone()),
                    attrs: run.attrs,
                }),
            }
        }
        self.state.cells = cells;
        self.state.selection = self.clamp(self.state.selection);
        self.state.highlight = self.state.highlight.map(|h| self.clamp(h));
        self.state.typing_attrs = self.context_attrs(self.state.selection.start);
    }

    fn insert_text(&mut self, at: usize, text: &str) {
        let attrs = self.insertion_attrs(at);
        let at = at.min(self.state.cells.len());
        let cells: Vec<Cell> = text
            .chars()
            .map(|c| Cell {
                glyph: Glyph::Char(c),
                attrs,
            })
            .collect();
        self.state.cells.splice(at..at, cells);
    }

    fn insert_image(&mut self, at: usize, image: Image) {
        let attrs = self.insertion_attrs(at);
        let at = at.min(self.state.cells.len());
        self.state.cells.insert(
            at,
            Cell {
                glyph: Glyph::Image(image),
                attrs,
            },
        );
    }

    fn delete(&mut self, range: TextRange) {
        let range = self.clamp(range);
        self.state.cells.drain(range.start..range.end);
        self.state.selection = TextRange::caret(range.start);
        self.state.typing_attrs = self.context_attrs(range.start);
        self.state.highlight = self.state.highlight.map(|h| self.clamp(h));
    }

    fn paragraph_range(&self, around: TextRange) -> TextRange {
        let len = self.state.cells.len();
        if len == 0 {
            return TextRange::caret(0);
        }
        let mut start = around.start.min(len);
        while start > 0 && !Self::is_newline(&self.state.cells[start - 1]) {
            start -= 1;
        }
        let mut end = around.end.min(len);
        while end < len && !Self::is_newline(&self.state.cells[end]) {
            end += 1;
        }
        // Include the trailing newline in the paragraph.
        if end < len {
            end += 1;
        }
        TextRange::new(start, end)
    }

    fn style_state(&self, style: TextStyle, range: TextRange) -> StyleState {
        let range = self.clamp(range);
        if range.is_empty() {
            return if self.state.typing_attrs.style(style) {
                StyleState::On
            } else {
                StyleState::Off
            };
        }
        let mut on = 0usize;
        for cell in &self.state.cells[range.start..range.end] {
            if cell.attrs.style(style) {
                on += 1;
            }
        }
        if on == range.len() {
            StyleState::On
        } else if on == 0 {
            StyleState::Off
        } else {
            StyleState::Mixed
        }
    }

    fn set_style(&mut self, style: TextStyle, enabled: bool, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.set_style(style, enabled));
    }

    fn set_alignment(&mut self, alignment: Alignment, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.alignment = alignment);
    }

    fn set_color(&mut self, attribute: ColorAttribute, color: Color, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.set_color(attribute, color));
    }

    fn font_size(&self, at: usize) -> Pt {
        self.attrs_at(at).font_size
    }

    fn set_font_size(&mut self, size: Pt, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.font_size = size);
    }

    fn indent(&self, at: usize) -> Pt {
        self.attrs_at(at).indent
    }

    fn set_indent(&mut self, points: Pt, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.indent = points);
    }

    fn superscript(&self, at: usize) -> i32 {
        self.attrs_at(at).superscript
    }

    fn set_superscript(&mut self, level: i32, range: TextRange) {
        self.edit_attrs(range, |attrs| attrs.superscript = level);
    }

    fn highlighted_range(&self) -> Option<TextRange> {
        self.state.highlight
    }

    fn set_highlighted_range(&mut self, range: Option<TextRange>) {
        self.state.highlight = range.map(|r| self.clamp(r));
    }

    fn highlighting_style(&self) -> HighlightStyle {
        self.state.highlight_style
    }

    fn set_highlighting_style(&mut self, style: HighlightStyle) {
        self.state.highlight_style = style;
    }

    fn push_undo(&mut self) {
        self.undo.push(self.state.clone());
        self.redo.clear();
    }

    fn pop_undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(std::mem::replace(&mut self.state, previous));
                true
            }
            None => false,
        }
    }

    fn pop_redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(std::mem::replace(&mut self.state, next));
                true
            }
            None => false,
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct DocumentFixture {
        pub doc: InMemoryDocument,
    }

    impl Default for DocumentFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DocumentFixture {
        pub fn new() -> Self {
            Self {
                doc: InMemoryDocument::new(),
            }
        }

        pub fn with_text(mut self, text: &str) -> Self {
            self.doc.replace_all(AttributedText::plain(text));
            self
        }

        pub fn with_selection(mut self, start: usize, end: usize) -> Self {
            self.doc.set_selection(TextRange::new(start, end));
            self
        }

        pub fn with_style(mut self, style: TextStyle, start: usize, end: usize) -> Self {
            self.doc.set_style(style, true, TextRange::new(start, end));
            self
        }

        pub fn with_font_size(mut self, size: Pt, start: usize, end: usize) -> Self {
            self.doc.set_font_size(size, TextRange::new(start, end));
            self
        }

        pub fn build(self) -> InMemoryDocument {
            self.doc
        }
    }
}
