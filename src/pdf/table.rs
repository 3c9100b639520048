use crate::error::Error;
use crate::model::{
    BLACK, BORDER_WIDTH, CELL_LINE_GAP, CELL_PADDING, CONTENT_BOTTOM, CONTENT_WIDTH, CellPlacement,
    CellStyle, MARGIN, PAGE_HEIGHT, Pagination, Table, TablePlacement, VAlign,
};

use super::Composer;
use super::layout::{TextBox, block_height, line_height, lines_that_fit, render_lines, wrap_text};

/// Identifies a cell in the layout trace.
#[derive(Clone, Copy)]
pub(crate) struct CellTag<'a> {
    pub(crate) table: &'a str,
    pub(crate) row: usize,
    pub(crate) col: usize,
}

/// Scale declared widths down to `available` when they are wider, keeping
/// their proportions. The last column takes the rounding remainder so the
/// emitted widths sum to `available`. Widths that already fit are kept.
pub(super) fn fit_columns(declared: &[f32], available: f32) -> Vec<f32> {
    let total: f32 = declared.iter().sum();
    if total <= available + 0.01 || total <= 0.0 {
        return declared.to_vec();
    }
    let scale = available / total;
    let mut widths: Vec<f32> = declared.iter().map(|w| w * scale).collect();
    if let Some((last, rest)) = widths.split_last_mut() {
        *last = available - rest.iter().sum::<f32>();
    }
    widths
}

fn check_arity(table: &Table) -> Result<(), Error> {
    let columns = table.col_widths.len();
    match table.rows.iter().position(|row| row.len() != columns) {
        Some(row) => Err(Error::RowArity {
            table: table.name.clone(),
            row,
            cells: table.rows[row].len(),
            columns,
        }),
        None => Ok(()),
    }
}

impl Composer {
    /// Draw one bordered cell at a fixed size and return the y just below it.
    /// Text that does not fit the height is cut at the last whole line; the
    /// box never grows.
    pub(crate) fn cell(
        &mut self,
        tag: CellTag<'_>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: &str,
        style: &CellStyle,
    ) -> f32 {
        let pdf_bottom = PAGE_HEIGHT - y - height;
        self.content.save_state();
        self.content.set_line_width(BORDER_WIDTH);
        self.content.set_stroke_rgb(0.0, 0.0, 0.0);
        self.content.rect(x, pdf_bottom, width, height);
        self.content.stroke();
        if let Some([r, g, b]) = style.background {
            self.content
                .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            self.content.rect(x, pdf_bottom, width, height);
            self.content.fill_nonzero();
        }
        self.content.restore_state();

        let font = self.fonts.get(style.bold);
        let text = font.normalize(text);
        let inner_w = width - 2.0 * CELL_PADDING;
        let lines = wrap_text(&text, font, style.font_size, inner_w);
        let line_h = line_height(font, style.font_size);
        let text_h = block_height(lines.len(), line_h, CELL_LINE_GAP);

        let text_top = match style.v_align {
            VAlign::Middle => y + (height - text_h) / 2.0,
            VAlign::Top => y + CELL_PADDING,
        };
        let fit = lines_that_fit(lines.len(), line_h, CELL_LINE_GAP, height - 2.0 * CELL_PADDING);
        if fit < lines.len() {
            log::debug!(
                "{}[{},{}]: {} of {} lines fit in {:.1}pt",
                tag.table,
                tag.row,
                tag.col,
                fit,
                lines.len(),
                height
            );
        }

        render_lines(
            &mut self.content,
            self.fonts.get_mut(style.bold),
            &lines[..fit],
            &TextBox {
                x: x + CELL_PADDING,
                top: text_top,
                width: inner_w,
                font_size: style.font_size,
                line_gap: CELL_LINE_GAP,
                align: style.align,
                color: style.text_color,
            },
        );

        self.trace.cells.push(CellPlacement {
            table: tag.table.to_string(),
            row: tag.row,
            col: tag.col,
            page: self.page,
            x,
            y,
            width,
            height,
            text: text.into_owned(),
            bold: style.bold,
            background: style.background,
            truncated: fit < lines.len(),
        });
        self.note_extent(y + height);

        y + height
    }

    /// Lay out a grid at the left margin, every row `row_height` tall. The
    /// cursor moves once, to the bottom of the last row.
    pub(crate) fn table(&mut self, table: &Table) -> Result<(), Error> {
        check_arity(table)?;

        let widths = fit_columns(&table.col_widths, CONTENT_WIDTH);
        let opts = table.options;
        let row_h = opts.row_height.max(0.0);

        let mut table_top = self.y;
        let mut first_row = 0usize;

        for (ri, row) in table.rows.iter().enumerate() {
            let mut row_y = table_top + (ri - first_row) as f32 * row_h;

            if self.pagination == Pagination::Flow
                && row_y + row_h > CONTENT_BOTTOM
                && row_y > MARGIN + 0.01
            {
                self.place_table(table, &widths, table_top, ri - first_row);
                self.overflow_break();
                table_top = self.y;
                first_row = ri;
                row_y = table_top;
            }

            let is_header = opts.has_header && ri == 0;
            let style = CellStyle {
                font_size: opts.font_size,
                bold: is_header,
                background: is_header.then_some(opts.header_background),
                text_color: if is_header {
                    opts.header_text_color
                } else {
                    BLACK
                },
                ..CellStyle::default()
            };

            let mut x = MARGIN;
            for (ci, (text, &w)) in row.iter().zip(&widths).enumerate() {
                let tag = CellTag {
                    table: &table.name,
                    row: ri,
                    col: ci,
                };
                self.cell(tag, x, row_y, w, row_h, text, &style);
                x += w;
            }
        }

        let rows_here = table.rows.len() - first_row;
        self.place_table(table, &widths, table_top, rows_here);
        self.y = table_top + rows_here as f32 * row_h;
        self.mark_advance();
        Ok(())
    }

    fn place_table(&mut self, table: &Table, widths: &[f32], top: f32, rows: usize) {
        let row_height = table.options.row_height.max(0.0);
        let height = rows as f32 * row_height;
        log::debug!(
            "TABLE {} page={} top={:.2} rows={} height={:.2}",
            table.name,
            self.page + 1,
            top,
            rows,
            height
        );
        self.trace.tables.push(TablePlacement {
            name: table.name.clone(),
            section: self.section.clone(),
            page: self.page,
            top,
            row_height,
            col_widths: widths.to_vec(),
            rows,
            height,
        });
    }
}
