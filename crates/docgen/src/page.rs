//! Cursor-based A4 page layout over a printpdf layer.
//!
//! `PageWriter` keeps a vertical cursor and offers the handful of elements
//! the sample documents need: title, heading, wrapped paragraph, labelled
//! field, list item, signature line, and a grid table.  All five demo
//! documents fit a single page, so there is no page-break handling.

use printpdf::{IndirectFontRef, Line, Mm, PdfLayerReference, Point};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

/// Points to millimetres (1 pt = 1/72 in).
const PT_TO_MM: f32 = 0.352_778;

/// Average glyph advance for Helvetica, as a fraction of the font size.
/// Good enough for wrapping and label offsets in fixed demo content.
const AVG_GLYPH_WIDTH: f32 = 0.5;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;

/// One cell of a grid table.
#[derive(Debug, Clone)]
pub struct TableCell {
    pub text: String,
    pub bold: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Writes flowing content onto one A4 layer, top to bottom.
pub struct PageWriter {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Baseline of the next element, in mm from the page bottom.
    y: f32,
}

impl PageWriter {
    pub fn new(layer: PdfLayerReference, regular: IndirectFontRef, bold: IndirectFontRef) -> Self {
        Self {
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn line_height(size: f32) -> f32 {
        size * 1.35 * PT_TO_MM
    }

    fn write_line(&mut self, text: &str, size: f32, bold: bool) {
        self.y -= Self::line_height(size);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
    }

    /// Vertical whitespace.
    pub fn spacer(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Document title.
    pub fn title(&mut self, text: &str) {
        self.write_line(text, TITLE_SIZE, true);
    }

    /// Section heading.
    pub fn heading(&mut self, text: &str) {
        self.spacer(2.0);
        self.write_line(text, HEADING_SIZE, true);
        self.spacer(1.0);
    }

    /// Single body line, no wrapping.
    pub fn text_line(&mut self, text: &str) {
        self.write_line(text, BODY_SIZE, false);
    }

    /// Single bold body line.
    pub fn bold_line(&mut self, text: &str) {
        self.write_line(text, BODY_SIZE, true);
    }

    /// Word-wrapped body paragraph.
    pub fn paragraph(&mut self, text: &str) {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let max_chars = (usable / (BODY_SIZE * AVG_GLYPH_WIDTH * PT_TO_MM)) as usize;
        for line in wrap(text, max_chars) {
            self.write_line(&line, BODY_SIZE, false);
        }
    }

    /// "Label: value" with the label in bold.
    pub fn field(&mut self, label: &str, value: &str) {
        self.y -= Self::line_height(BODY_SIZE);
        let label_text = format!("{label}: ");
        self.layer
            .use_text(&label_text, BODY_SIZE, Mm(MARGIN_MM), Mm(self.y), &self.bold);
        let offset = label_text.len() as f32 * BODY_SIZE * AVG_GLYPH_WIDTH * PT_TO_MM;
        self.layer.use_text(
            value,
            BODY_SIZE,
            Mm(MARGIN_MM + offset),
            Mm(self.y),
            &self.regular,
        );
    }

    /// Dashed list item.
    pub fn list_item(&mut self, text: &str) {
        self.write_line(&format!("-  {text}"), BODY_SIZE, false);
    }

    /// Signature rule with a caption underneath.
    pub fn signature_line(&mut self, caption: &str) {
        self.text_line("_________________________");
        self.text_line(caption);
    }

    /// Grid table.  The first row is rendered bold as a header; other cells
    /// follow their own `bold` flag.  `col_widths` are in mm.
    pub fn table(&mut self, rows: &[Vec<TableCell>], col_widths: &[f32]) {
        let row_height = 8.0_f32;
        let table_width: f32 = col_widths.iter().sum();
        let top = self.y;
        let bottom = top - row_height * rows.len() as f32;

        // Cell text.
        for (row_index, row) in rows.iter().enumerate() {
            let baseline = top - row_height * row_index as f32 - 5.5;
            let mut x = MARGIN_MM;
            for (cell, width) in row.iter().zip(col_widths) {
                let bold = row_index == 0 || cell.bold;
                let font = if bold { &self.bold } else { &self.regular };
                self.layer
                    .use_text(&cell.text, BODY_SIZE, Mm(x + 2.0), Mm(baseline), font);
                x += width;
            }
        }

        // Grid lines.
        self.layer.set_outline_thickness(0.6);
        for row_index in 0..=rows.len() {
            let y = top - row_height * row_index as f32;
            self.stroke_line(MARGIN_MM, y, MARGIN_MM + table_width, y);
        }
        let mut x = MARGIN_MM;
        self.stroke_line(x, top, x, bottom);
        for width in col_widths {
            x += width;
            self.stroke_line(x, top, x, bottom);
        }

        self.y = bottom;
    }

    fn stroke_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y1)), false),
                (Point::new(Mm(x2), Mm(y2)), false),
            ],
            is_closed: false,
        });
    }
}

/// Greedy word wrap at `max_chars` characters per line.
///
/// Words longer than the budget get a line of their own rather than being
/// split.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn long_text_wraps_at_word_boundaries() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 15, "line too long: {line}");
        }
        assert_eq!(
            lines.join(" "),
            "the quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap("a pneumonoultramicroscopic b", 10);
        assert_eq!(lines, vec!["a", "pneumonoultramicroscopic", "b"]);
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }
}
