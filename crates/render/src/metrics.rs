//! Glyph widths for the built-in Helvetica faces and greedy line wrapping.
//!
//! Widths are the standard AFM advances (1/1000 em) for printable ASCII.
//! Anything outside that range is measured as a digit.

use crate::canvas::{FontWeight, TextStyle};

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.156;

/// Ascender as a multiple of the font size (top of line box to baseline).
pub const ASCENT: f32 = 0.718;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0' .. '9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':' .. '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N' .. 'Z'
    278, 278, 278, 469, 556, 333,                                                   // '[' .. '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a' .. 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n' .. 'z'
    334, 260, 334, 584,                                                             // '{' .. '~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn advance(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let code = ch as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of a single line of text in points.
pub fn text_width(text: &str, style: TextStyle) -> f32 {
    let units: u32 = text.chars().map(|c| advance(c, style.weight) as u32).sum();
    units as f32 * style.size / 1000.0
}

pub fn line_height(style: TextStyle) -> f32 {
    style.size * LINE_HEIGHT
}

/// Break `text` into lines no wider than `width`.
///
/// Explicit newlines are kept. Words are packed greedily; a word wider than
/// the whole line is split between characters. Always returns at least one
/// line (possibly empty).
pub fn wrap_lines(text: &str, width: f32, style: TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, style, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: f32, style: TextStyle, out: &mut Vec<String>) {
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, style) <= width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if text_width(word, style) <= width {
            current = word.to_string();
        } else {
            current = split_long_word(word, width, style, out);
        }
    }
    out.push(current);
}

// Emits full-width chunks and returns the trailing remainder.
fn split_long_word(word: &str, width: f32, style: TextStyle, out: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if text_width(&chunk, style) > width && chunk.chars().count() > 1 {
            chunk.pop();
            out.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}
