mod layout;
mod table;

use std::time::Instant;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, TextStr};

use crate::error::Error;
use crate::fonts::{FontConfig, FontSet};
use crate::model::{
    BreakKind, CONTENT_BOTTOM, CONTENT_WIDTH, CursorMark, CursorMove, LayoutTrace, MARGIN,
    PAGE_HEIGHT, PAGE_WIDTH, PageBreak, Pagination, Table, TextStyle,
};
use crate::report::ValuationReport;

use layout::{TextBox, block_height, line_height, render_lines, wrap_text};

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub pagination: Pagination,
    pub fonts: FontConfig,
}

pub struct Rendered {
    pub bytes: Vec<u8>,
    pub trace: LayoutTrace,
}

/// Layout state for one document pass: the finished pages, the page being
/// drawn and the cursor on it. Emitters get it by `&mut`; nothing about the
/// cursor lives outside it.
pub(crate) struct Composer {
    fonts: FontSet,
    pagination: Pagination,
    pages: Vec<Content>,
    content: Content,
    page: usize,
    /// Top-down offset of the next block on the current page.
    y: f32,
    section: String,
    trace: LayoutTrace,
    warned_page: Option<usize>,
}

impl Composer {
    pub(crate) fn new(options: &RenderOptions) -> Self {
        let trace = LayoutTrace {
            page_extents: vec![MARGIN],
            ..LayoutTrace::default()
        };
        Self {
            fonts: FontSet::load(&options.fonts),
            pagination: options.pagination,
            pages: Vec::new(),
            content: Content::new(),
            page: 0,
            y: MARGIN,
            section: String::new(),
            trace,
            warned_page: None,
        }
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn begin_section(&mut self, name: &str) {
        self.section.clear();
        self.section.push_str(name);
    }

    fn mark_advance(&mut self) {
        self.trace.cursor.push(CursorMark {
            page: self.page,
            y: self.y,
            kind: CursorMove::Advance,
        });
    }

    /// Move the cursor down. Negative distances are ignored.
    pub(crate) fn advance(&mut self, dy: f32) {
        self.y += dy.max(0.0);
        self.mark_advance();
    }

    fn break_page(&mut self, kind: BreakKind) {
        self.pages
            .push(std::mem::replace(&mut self.content, Content::new()));
        self.trace.page_breaks.push(PageBreak {
            page: self.page,
            after: self.section.clone(),
            kind,
        });
        self.page += 1;
        self.y = MARGIN;
        self.trace.page_extents.push(MARGIN);
        self.trace.cursor.push(CursorMark {
            page: self.page,
            y: self.y,
            kind: CursorMove::PageBreak,
        });
    }

    /// Authorial page break: close the page and restart at the top margin.
    pub(crate) fn new_page(&mut self) {
        self.break_page(BreakKind::Explicit);
    }

    fn overflow_break(&mut self) {
        log::debug!(
            "Overflow break in {} at y={:.2} on page {}",
            self.section,
            self.y,
            self.page + 1
        );
        self.break_page(BreakKind::Overflow);
    }

    fn at_page_top(&self) -> bool {
        (self.y - MARGIN).abs() < 0.01
    }

    /// In flow mode, start a new page when `height` more content would
    /// cross the bottom margin. Fixed pagination never breaks here.
    pub(crate) fn ensure_room(&mut self, height: f32) {
        if self.pagination == Pagination::Flow
            && !self.at_page_top()
            && self.y + height > CONTENT_BOTTOM
        {
            self.overflow_break();
        }
    }

    fn note_extent(&mut self, bottom: f32) {
        let extent = &mut self.trace.page_extents[self.page];
        *extent = extent.max(bottom);
        if bottom > CONTENT_BOTTOM + 0.01 && self.warned_page != Some(self.page) {
            self.warned_page = Some(self.page);
            log::warn!(
                "Page {} content runs {:.1}pt past the bottom margin (section {})",
                self.page + 1,
                bottom - CONTENT_BOTTOM,
                self.section
            );
        }
    }

    /// Height `text` wraps to at `width`, without line gaps.
    pub(crate) fn measure(&self, text: &str, style: &TextStyle, width: f32) -> f32 {
        let font = self.fonts.get(style.bold);
        let text = font.normalize(text);
        let lines = wrap_text(&text, font, style.font_size, width);
        block_height(lines.len(), line_height(font, style.font_size), 0.0)
    }

    /// Draw wrapped text with its first line box at (`x`, `y`). The cursor
    /// does not move. Returns the height drawn.
    pub(crate) fn text_at(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        text: &str,
        style: &TextStyle,
    ) -> f32 {
        let font = self.fonts.get(style.bold);
        let text = font.normalize(text);
        let lines = wrap_text(&text, font, style.font_size, width);
        let height = block_height(lines.len(), line_height(font, style.font_size), 0.0);
        render_lines(
            &mut self.content,
            self.fonts.get_mut(style.bold),
            &lines,
            &TextBox {
                x,
                top: y,
                width,
                font_size: style.font_size,
                line_gap: 0.0,
                align: style.align,
                color: style.color,
            },
        );
        self.note_extent(y + height);
        height
    }

    /// Text at the cursor followed by a fixed advance, regardless of how
    /// tall the text turned out.
    pub(crate) fn line(&mut self, text: &str, style: &TextStyle, advance: f32) {
        let height = self.measure(text, style, CONTENT_WIDTH);
        self.ensure_room(advance.max(height));
        self.text_at(MARGIN, self.y, CONTENT_WIDTH, text, style);
        self.advance(advance);
    }

    pub(crate) fn heading(&mut self, title: &str) {
        // keep a heading together with at least one following row
        self.ensure_room(36.0);
        self.line(title, &TextStyle::bold(10.0), 18.0);
    }

    /// Full-width wrapped text at the cursor; the cursor moves by the
    /// measured height plus `gap`.
    pub(crate) fn paragraph(&mut self, text: &str, style: &TextStyle, gap: f32) {
        let height = self.measure(text, style, CONTENT_WIDTH);
        self.ensure_room(height);
        self.text_at(MARGIN, self.y, CONTENT_WIDTH, text, style);
        self.advance(height + gap);
    }

    fn finish(mut self) -> (Vec<Content>, FontSet, LayoutTrace) {
        self.pages.push(self.content);
        self.trace.page_count = self.pages.len();
        (self.pages, self.fonts, self.trace)
    }
}

fn compose(report: &ValuationReport, options: &RenderOptions) -> Result<Composer, Error> {
    let mut composer = Composer::new(options);
    crate::report::sections::emit(report, &mut composer)?;
    Ok(composer)
}

/// Run the layout pass only.
pub fn layout(report: &ValuationReport, options: &RenderOptions) -> Result<LayoutTrace, Error> {
    let (_, _, trace) = compose(report, options)?.finish();
    Ok(trace)
}

/// Lay out free-standing tables one below the other from the top margin,
/// with `gap` points between them. Same composer, no report template.
pub fn layout_tables(
    tables: &[Table],
    gap: f32,
    options: &RenderOptions,
) -> Result<LayoutTrace, Error> {
    let mut composer = Composer::new(options);
    composer.begin_section("tables");
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            composer.advance(gap);
        }
        composer.table(table)?;
    }
    let (_, _, trace) = composer.finish();
    Ok(trace)
}

pub fn render(report: &ValuationReport, options: &RenderOptions) -> Result<Rendered, Error> {
    let t0 = Instant::now();
    let (pages, fonts, trace) = compose(report, options)?.finish();
    let t_layout = t0.elapsed();

    let bytes = assemble(pages, &fonts);
    let t_assembly = t0.elapsed();

    let overflowing = trace.overflowing_pages();
    if !overflowing.is_empty() && options.pagination == Pagination::Fixed {
        log::warn!(
            "{} of {} pages overflow the bottom margin; --flow splits them onto extra pages",
            overflowing.len(),
            trace.page_count
        );
    }

    log::info!(
        "Render phases: layout={:.1}ms, assembly={:.1}ms ({} pages, {} tables, {} cells)",
        t_layout.as_secs_f64() * 1000.0,
        (t_assembly - t_layout).as_secs_f64() * 1000.0,
        trace.page_count,
        trace.tables.len(),
        trace.cells.len(),
    );

    Ok(Rendered { bytes, trace })
}

fn assemble(pages: Vec<Content>, fonts: &FontSet) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let font_pairs: Vec<(String, Ref)> = fonts
        .entries()
        .into_iter()
        .map(|entry| {
            let font_ref = alloc();
            entry.write(&mut pdf, font_ref, &mut alloc);
            log::debug!(
                "Font {} written ({})",
                entry.pdf_name,
                if entry.is_embedded() { "embedded subset" } else { "standard" }
            );
            (entry.pdf_name.clone(), font_ref)
        })
        .collect();

    let n = pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in pages.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);
    pdf.document_info(info_id)
        .title(TextStr("Valuation Report"))
        .producer(TextStr(concat!("valuation-pdf ", env!("CARGO_PKG_VERSION"))));

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (name, font_ref) in &font_pairs {
            fonts.pair(Name(name.as_bytes()), *font_ref);
        }
    }

    pdf.finish()
}
