//! Drawing capability used by the invoice layout.
//!
//! All coordinates are PDF points with the origin at the top-left corner of
//! the page and `y` growing downwards. Backends convert to their own space.

use crate::error::RenderError;
use crate::metrics;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size: f32,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }
}

/// A document drawn page by page and then finalized into bytes.
pub trait Canvas {
    /// Start a new page; later drawing lands on it.
    fn new_page(&mut self);

    /// Place a single line of text with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke a straight line.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32));

    /// Place a PNG image scaled into the given box.
    fn image(&mut self, png: &[u8], x: f32, y: f32, width: f32, height: f32) -> Result<(), RenderError>;

    /// Finalize the document. Consumes the canvas, so it can only happen once.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;

    /// Height `text` occupies when wrapped to `width`.
    fn text_height(&self, text: &str, width: f32, style: TextStyle) -> f32 {
        metrics::wrap_lines(text, width, style).len() as f32 * metrics::line_height(style)
    }

    /// Draw `text` wrapped to `width`; returns the height used.
    fn text_box(&mut self, text: &str, x: f32, y: f32, width: f32, style: TextStyle) -> f32 {
        let line_height = metrics::line_height(style);
        let lines = metrics::wrap_lines(text, width, style);
        for (i, line) in lines.iter().enumerate() {
            if !line.is_empty() {
                self.text(line, x, y + i as f32 * line_height, style);
            }
        }
        lines.len() as f32 * line_height
    }

    /// Draw one line of text centered within `[x, x + width]`.
    fn text_centered(&mut self, text: &str, x: f32, y: f32, width: f32, style: TextStyle) {
        let offset = ((width - metrics::text_width(text, style)) / 2.0).max(0.0);
        self.text(text, x + offset, y, style);
    }
}
