/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 36.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Lowest y (top-down) content may reach before the bottom margin.
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN;

pub const CELL_PADDING: f32 = 4.0;
pub const CELL_LINE_GAP: f32 = 2.0;
pub const BORDER_WIDTH: f32 = 0.5;

pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
pub const BLUE: [u8; 3] = [0x00, 0x00, 0xFF];
pub const HEADER_GRAY: [u8; 3] = [0xE8, 0xE8, 0xE8];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VAlign {
    Top,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStyle {
    pub font_size: f32,
    pub bold: bool,
    pub background: Option<[u8; 3]>,
    pub text_color: [u8; 3],
    pub align: HAlign,
    pub v_align: VAlign,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            bold: false,
            background: None,
            text_color: BLACK,
            align: HAlign::Left,
            v_align: VAlign::Top,
        }
    }
}

/// Style for headings and free text outside of tables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub bold: bool,
    pub color: [u8; 3],
    pub align: HAlign,
}

impl TextStyle {
    pub fn regular(font_size: f32) -> Self {
        Self {
            font_size,
            bold: false,
            color: BLACK,
            align: HAlign::Left,
        }
    }

    pub fn bold(font_size: f32) -> Self {
        Self {
            bold: true,
            ..Self::regular(font_size)
        }
    }

    pub fn aligned(self, align: HAlign) -> Self {
        Self { align, ..self }
    }

    pub fn colored(self, color: [u8; 3]) -> Self {
        Self { color, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableOptions {
    pub header_background: [u8; 3],
    pub header_text_color: [u8; 3],
    pub row_height: f32, // uniform for every row
    pub font_size: f32,
    pub has_header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header_background: HEADER_GRAY,
            header_text_color: BLACK,
            row_height: 18.0,
            font_size: 8.0,
            has_header: false,
        }
    }
}

pub struct Table {
    /// Name used in the layout trace and in arity errors.
    pub name: String,
    pub col_widths: Vec<f32>, // declared, points
    pub rows: Vec<Vec<String>>,
    pub options: TableOptions,
}

impl Table {
    pub fn new(name: &str, col_widths: &[f32], rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            col_widths: col_widths.to_vec(),
            rows,
            options: TableOptions::default(),
        }
    }

    pub fn row_height(mut self, row_height: f32) -> Self {
        self.options.row_height = row_height;
        self
    }

    pub fn with_header(mut self) -> Self {
        self.options.has_header = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pagination {
    /// Only explicit page breaks; overflowing pages are reported, not split.
    #[default]
    Fixed,
    /// Explicit breaks plus a break before any block that would cross the bottom margin.
    Flow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakKind {
    Explicit,
    Overflow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageBreak {
    /// Index of the page that was closed.
    pub page: usize,
    /// Section active when the break happened.
    pub after: String,
    pub kind: BreakKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Advance,
    PageBreak,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorMark {
    pub page: usize,
    pub y: f32,
    pub kind: CursorMove,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TablePlacement {
    pub name: String,
    pub section: String,
    pub page: usize,
    pub top: f32,
    pub row_height: f32,
    pub col_widths: Vec<f32>, // as emitted, after fitting
    pub rows: usize,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellPlacement {
    pub table: String,
    pub row: usize,
    pub col: usize,
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub bold: bool,
    pub background: Option<[u8; 3]>,
    /// Wrapped lines that did not fit the fixed cell height.
    pub truncated: bool,
}

/// Everything the layout pass decided, in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutTrace {
    pub page_count: usize,
    pub page_breaks: Vec<PageBreak>,
    pub cursor: Vec<CursorMark>,
    pub tables: Vec<TablePlacement>,
    pub cells: Vec<CellPlacement>,
    /// Deepest y reached on each page.
    pub page_extents: Vec<f32>,
}

impl LayoutTrace {
    pub fn overflowing_pages(&self) -> Vec<usize> {
        self.page_extents
            .iter()
            .enumerate()
            .filter(|(_, y)| **y > CONTENT_BOTTOM + 0.01)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn tables_in(&self, section: &str) -> impl Iterator<Item = &TablePlacement> {
        self.tables.iter().filter(move |t| t.section == section)
    }

    pub fn table(&self, name: &str) -> Option<&TablePlacement> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn cells_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a CellPlacement> {
        self.cells.iter().filter(move |c| c.table == table)
    }
}
