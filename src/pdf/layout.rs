use pdf_writer::{Content, Name, Str};

use crate::fonts::FontEntry;
use crate::model::{HAlign, PAGE_HEIGHT};

pub(super) struct TextLine {
    pub(super) text: String,
    pub(super) width: f32,
}

/// Where and how a block of wrapped lines is drawn. `top` is measured
/// down from the top of the page.
pub(super) struct TextBox {
    pub(super) x: f32,
    pub(super) top: f32,
    pub(super) width: f32,
    pub(super) font_size: f32,
    pub(super) line_gap: f32,
    pub(super) align: HAlign,
    pub(super) color: [u8; 3],
}

const FIT_EPSILON: f32 = 0.01;

fn finish_line(lines: &mut Vec<TextLine>, current: &mut String, width: &mut f32) {
    lines.push(TextLine {
        text: std::mem::take(current),
        width: *width,
    });
    *width = 0.0;
}

/// Split a word too wide for any line into pieces that fit. Every piece holds
/// at least one char so degenerate widths still terminate.
fn break_word(word: &str, font: &FontEntry, font_size: f32, max_width: f32) -> Vec<(String, f32)> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_w = 0.0f32;
    for ch in word.chars() {
        let cw = font.char_width_1000(ch) * font_size / 1000.0;
        if !piece.is_empty() && piece_w + cw > max_width + FIT_EPSILON {
            pieces.push((std::mem::take(&mut piece), piece_w));
            piece_w = 0.0;
        }
        piece.push(ch);
        piece_w += cw;
    }
    if !piece.is_empty() {
        pieces.push((piece, piece_w));
    }
    pieces
}

/// Greedy word wrap. Literal newlines start a new line (an empty source line
/// stays as a blank line); empty text yields no lines at all.
pub(super) fn wrap_text(
    text: &str,
    font: &FontEntry,
    font_size: f32,
    max_width: f32,
) -> Vec<TextLine> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }
    let space_w = font.space_width(font_size);

    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0.0f32;

        for word in hard_line.split_whitespace() {
            let ww = font.word_width(word, font_size);
            if !current.is_empty() {
                if current_w + space_w + ww <= max_width + FIT_EPSILON {
                    current.push(' ');
                    current.push_str(word);
                    current_w += space_w + ww;
                    continue;
                }
                finish_line(&mut lines, &mut current, &mut current_w);
            }

            if ww <= max_width + FIT_EPSILON {
                current.push_str(word);
                current_w = ww;
            } else {
                let mut pieces = break_word(word, font, font_size, max_width);
                let last = pieces.pop();
                for (piece, piece_w) in pieces {
                    lines.push(TextLine {
                        text: piece,
                        width: piece_w,
                    });
                }
                if let Some((piece, piece_w)) = last {
                    current = piece;
                    current_w = piece_w;
                }
            }
        }
        finish_line(&mut lines, &mut current, &mut current_w);
    }
    lines
}

pub(super) fn line_height(font: &FontEntry, font_size: f32) -> f32 {
    font_size * font.line_h_ratio
}

/// Height of `count` lines set with `line_gap` after each one.
pub(super) fn block_height(count: usize, line_h: f32, line_gap: f32) -> f32 {
    count as f32 * (line_h + line_gap)
}

/// Number of leading lines whose full line box fits within `max_height`.
pub(super) fn lines_that_fit(count: usize, line_h: f32, line_gap: f32, max_height: f32) -> usize {
    (0..count)
        .take_while(|&i| i as f32 * (line_h + line_gap) + line_h <= max_height + FIT_EPSILON)
        .count()
}

/// Draw pre-wrapped lines; the first line box starts at `tb.top`.
pub(super) fn render_lines(
    content: &mut Content,
    font: &mut FontEntry,
    lines: &[TextLine],
    tb: &TextBox,
) {
    if lines.iter().all(|l| l.text.is_empty()) {
        return;
    }
    let line_h = line_height(font, tb.font_size);
    let ascent = tb.font_size * font.ascender_ratio;
    let [r, g, b] = tb.color;

    content.save_state();
    content.set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    content.begin_text();
    content.set_font(Name(font.pdf_name.as_bytes()), tb.font_size);

    let mut td_x = 0.0f32;
    let mut td_y = 0.0f32;
    for (i, line) in lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        let x = match tb.align {
            HAlign::Left => tb.x,
            HAlign::Center => tb.x + (tb.width - line.width) / 2.0,
            HAlign::Right => tb.x + tb.width - line.width,
        };
        let baseline = PAGE_HEIGHT - (tb.top + i as f32 * (line_h + tb.line_gap) + ascent);

        content.next_line(x - td_x, baseline - td_y);
        td_x = x;
        td_y = baseline;

        let bytes = font.encode(&line.text);
        content.show(Str(&bytes));
    }

    content.end_text();
    content.restore_state();
}
