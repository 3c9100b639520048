use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use pdf_writer::types::{CidFontType, FontFlags, SystemInfo, UnicodeCmap};
use pdf_writer::{Name, Pdf, Rect, Ref, Str};
use ttf_parser::Face;

/// Optional TrueType/OpenType files replacing the standard Helvetica faces.
#[derive(Clone, Debug, Default)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

// Helvetica AFM: Ascender 718, FontBBox -166 -225 1000 931. Line height is the
// full bbox height, which is what pdfkit uses for standard fonts.
const HELVETICA_ASCENDER: f32 = 0.718;
const HELVETICA_LINE_H: f32 = 1.156;

/// Helvetica advance widths at 1000 units/em for WinAnsi 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // p..~
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Widths for the WinAnsi upper half. Only the glyphs report text actually
/// uses are listed; the rest get the average lowercase advance.
fn standard_high_width(byte: u8, bold: bool) -> f32 {
    match byte {
        0x85 | 0x97 => 1000.0, // ellipsis, emdash
        0x91 | 0x92 => {
            if bold {
                278.0
            } else {
                222.0
            }
        }
        0x93 | 0x94 => {
            if bold {
                500.0
            } else {
                333.0
            }
        }
        0x95 => 350.0,         // bullet
        0xA0 => 278.0,         // nbsp
        0xB0 => 400.0,         // degree
        0xB7 => 278.0,         // periodcentered
        0xD7 => 584.0,         // multiply
        _ => 556.0,
    }
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

const RUPEE: char = '\u{20B9}';

struct TrueTypeFace {
    ps_name: String,
    data: Vec<u8>,
    face_index: u32,
    /// Every char the cmap covers: (original glyph id, advance in 1000-units).
    glyphs: HashMap<char, (u16, f32)>,
    remapper: subsetter::GlyphRemapper,
    /// Chars drawn so far with their remapped glyph ids, ordered for stable output.
    used: BTreeMap<char, u16>,
    bbox: Rect,
    ascent: f32,
    descent: f32,
    cap_height: f32,
}

enum FaceKind {
    Standard {
        base_font: &'static str,
        widths: &'static [u16; 95],
        bold: bool,
    },
    TrueType(Box<TrueTypeFace>),
}

pub(crate) struct FontEntry {
    pub(crate) pdf_name: String,
    pub(crate) ascender_ratio: f32,
    pub(crate) line_h_ratio: f32,
    face: FaceKind,
}

impl FontEntry {
    pub(crate) fn standard(pdf_name: &str, bold: bool) -> Self {
        let (base_font, widths) = if bold {
            ("Helvetica-Bold", &HELVETICA_BOLD_WIDTHS)
        } else {
            ("Helvetica", &HELVETICA_WIDTHS)
        };
        Self {
            pdf_name: pdf_name.to_string(),
            ascender_ratio: HELVETICA_ASCENDER,
            line_h_ratio: HELVETICA_LINE_H,
            face: FaceKind::Standard {
                base_font,
                widths,
                bold,
            },
        }
    }

    pub(crate) fn is_embedded(&self) -> bool {
        matches!(self.face, FaceKind::TrueType(_))
    }

    fn supports(&self, ch: char) -> bool {
        match ch {
            '\n' => return true,
            '\r' | '\t' => return false,
            _ => {}
        }
        match &self.face {
            FaceKind::Standard { .. } => char_to_winansi(ch) >= 32,
            FaceKind::TrueType(tt) => tt.glyphs.contains_key(&ch),
        }
    }

    /// Replace chars this face cannot draw. Carriage returns are dropped and
    /// tabs become spaces. Measuring and drawing both go through this so
    /// widths always match what ends up on the page.
    pub(crate) fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().all(|ch| self.supports(ch)) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() + 4);
        for ch in text.chars() {
            match ch {
                '\r' => {}
                '\t' => out.push(' '),
                _ if self.supports(ch) => out.push(ch),
                RUPEE => out.push_str("Rs."),
                _ => out.push('?'),
            }
        }
        Cow::Owned(out)
    }

    /// Width of a single character in 1000-units.
    pub(crate) fn char_width_1000(&self, ch: char) -> f32 {
        match &self.face {
            FaceKind::Standard { widths, bold, .. } => match char_to_winansi(ch) {
                b @ 32..=126 => widths[(b - 32) as usize] as f32,
                b if b >= 128 => standard_high_width(b, *bold),
                _ => 0.0,
            },
            FaceKind::TrueType(tt) => tt.glyphs.get(&ch).map_or(0.0, |&(_, w)| w),
        }
    }

    pub(crate) fn word_width(&self, word: &str, font_size: f32) -> f32 {
        word.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }

    pub(crate) fn space_width(&self, font_size: f32) -> f32 {
        self.char_width_1000(' ') * font_size / 1000.0
    }

    /// Encode normalized text for a `Tj` operand. Embedded faces record every
    /// glyph they hand out so the subset can be built after layout.
    pub(crate) fn encode(&mut self, text: &str) -> Vec<u8> {
        match &mut self.face {
            FaceKind::Standard { .. } => text
                .chars()
                .map(char_to_winansi)
                .filter(|&b| b >= 32)
                .collect(),
            FaceKind::TrueType(tt) => {
                let mut out = Vec::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    let gid = match tt.glyphs.get(&ch) {
                        Some(&(gid, _)) => {
                            let new_gid = tt.remapper.remap(gid);
                            tt.used.insert(ch, new_gid);
                            new_gid
                        }
                        None => 0,
                    };
                    out.extend_from_slice(&gid.to_be_bytes());
                }
                out
            }
        }
    }

    /// Write the font dictionary (and for embedded faces the subset program,
    /// descriptor, CIDFont and ToUnicode CMap).
    pub(crate) fn write(&self, pdf: &mut Pdf, font_ref: Ref, alloc: &mut impl FnMut() -> Ref) {
        match &self.face {
            FaceKind::Standard { base_font, .. } => {
                pdf.type1_font(font_ref)
                    .base_font(Name(base_font.as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            FaceKind::TrueType(tt) => write_truetype(pdf, font_ref, tt, alloc),
        }
    }
}

fn write_truetype(
    pdf: &mut Pdf,
    font_ref: Ref,
    tt: &TrueTypeFace,
    alloc: &mut impl FnMut() -> Ref,
) {
    let descriptor_ref = alloc();
    let data_ref = alloc();
    let cid_font_ref = alloc();
    let tounicode_ref = alloc();

    let subset_data = subsetter::subset(&tt.data, tt.face_index, &tt.remapper).unwrap_or_else(|e| {
        log::warn!("Font subsetting failed for {}: {e}; embedding full font", tt.ps_name);
        tt.data.clone()
    });
    pdf.stream(data_ref, &subset_data)
        .pair(Name(b"Length1"), subset_data.len() as i32);

    let ps_name = tt.ps_name.as_bytes();

    pdf.font_descriptor(descriptor_ref)
        .name(Name(ps_name))
        .flags(FontFlags::NON_SYMBOLIC)
        .bbox(tt.bbox)
        .italic_angle(0.0)
        .ascent(tt.ascent)
        .descent(tt.descent)
        .cap_height(tt.cap_height)
        .stem_v(80.0)
        .font_file2(data_ref);

    let system_info = SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    };
    {
        let mut cid = pdf.cid_font(cid_font_ref);
        cid.subtype(CidFontType::Type2);
        cid.base_font(Name(ps_name));
        cid.system_info(system_info);
        cid.font_descriptor(descriptor_ref);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));
        let mut gid_widths: Vec<(u16, f32)> = tt
            .used
            .iter()
            .map(|(ch, &new_gid)| (new_gid, tt.glyphs.get(ch).map_or(0.0, |&(_, w)| w)))
            .collect();
        gid_widths.sort_by_key(|&(gid, _)| gid);
        gid_widths.dedup_by_key(|&mut (gid, _)| gid);
        if !gid_widths.is_empty() {
            let mut w = cid.widths();
            for &(gid, width) in &gid_widths {
                w.consecutive(gid, [width]);
            }
        }
    }

    let cmap_name = format!("{}-UTF16", tt.ps_name);
    let mut cmap = UnicodeCmap::new(
        Name(cmap_name.as_bytes()),
        SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        },
    );
    for (&ch, &new_gid) in &tt.used {
        cmap.pair(new_gid, ch);
    }
    let cmap_data = cmap.finish();
    pdf.stream(tounicode_ref, cmap_data.as_slice());

    pdf.type0_font(font_ref)
        .base_font(Name(ps_name))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_font_ref)
        .to_unicode(tounicode_ref);
}

fn postscript_name(face: &Face, path: &Path) -> String {
    face.names()
        .into_iter()
        .find(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode())
        .and_then(|name| name.to_string())
        .or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "EmbeddedFont".to_string())
        .replace(' ', "")
}

fn load_truetype(path: &Path, pdf_name: &str) -> Option<FontEntry> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Cannot read font {}: {e}", path.display());
            return None;
        }
    };
    let face = match Face::parse(&data, 0) {
        Ok(face) => face,
        Err(e) => {
            log::warn!("Cannot parse font {}: {e}", path.display());
            return None;
        }
    };

    let units = face.units_per_em() as f32;
    let mut glyphs = HashMap::new();
    if let Some(cmap) = face.tables().cmap {
        for subtable in cmap.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                if let Some(ch) = char::from_u32(cp)
                    && let Some(gid) = subtable.glyph_index(cp)
                {
                    let w = face
                        .glyph_hor_advance(gid)
                        .map_or(0.0, |adv| adv as f32 / units * 1000.0);
                    glyphs.entry(ch).or_insert((gid.0, w));
                }
            });
        }
    }
    if !glyphs.contains_key(&' ') {
        log::warn!("Font {} has no space glyph", path.display());
        return None;
    }

    let bb = face.global_bounding_box();
    let bbox = Rect::new(
        bb.x_min as f32 / units * 1000.0,
        bb.y_min as f32 / units * 1000.0,
        bb.x_max as f32 / units * 1000.0,
        bb.y_max as f32 / units * 1000.0,
    );
    let ascent = face.ascender() as f32 / units * 1000.0;
    let descent = face.descender() as f32 / units * 1000.0;
    let cap_height = face
        .capital_height()
        .map_or(700.0, |h| h as f32 / units * 1000.0);
    let line_h_ratio =
        (face.ascender() as f32 - face.descender() as f32 + face.line_gap() as f32) / units;
    let ascender_ratio = face.ascender() as f32 / units;
    let ps_name = postscript_name(&face, path);

    log::debug!(
        "Loaded font {} as {pdf_name}: {} glyphs mapped",
        path.display(),
        glyphs.len()
    );

    Some(FontEntry {
        pdf_name: pdf_name.to_string(),
        ascender_ratio,
        line_h_ratio,
        face: FaceKind::TrueType(Box::new(TrueTypeFace {
            ps_name,
            data,
            face_index: 0,
            glyphs,
            remapper: subsetter::GlyphRemapper::new(),
            used: BTreeMap::new(),
            bbox,
            ascent,
            descent,
            cap_height,
        })),
    })
}

/// The regular and bold faces every report is drawn with.
pub(crate) struct FontSet {
    regular: FontEntry,
    bold: FontEntry,
}

impl FontSet {
    pub(crate) fn load(config: &FontConfig) -> Self {
        let pick = |path: &Option<PathBuf>, pdf_name: &str, bold: bool| {
            path.as_deref()
                .and_then(|p| load_truetype(p, pdf_name))
                .unwrap_or_else(|| {
                    if let Some(p) = path {
                        log::warn!("Using standard Helvetica instead of {}", p.display());
                    }
                    FontEntry::standard(pdf_name, bold)
                })
        };
        Self {
            regular: pick(&config.regular, "F1", false),
            bold: pick(&config.bold, "F2", true),
        }
    }

    pub(crate) fn get(&self, bold: bool) -> &FontEntry {
        if bold { &self.bold } else { &self.regular }
    }

    pub(crate) fn get_mut(&mut self, bold: bool) -> &mut FontEntry {
        if bold {
            &mut self.bold
        } else {
            &mut self.regular
        }
    }

    pub(crate) fn entries(&self) -> [&FontEntry; 2] {
        [&self.regular, &self.bold]
    }
}
