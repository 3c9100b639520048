#![allow(dead_code)]

use std::path::PathBuf;

use valuation_pdf::{
    LayoutTrace, Pagination, RenderOptions, Rendered, ValuationReport, layout, render,
};

pub const CONTENT_WIDTH: f32 = 523.0;
pub const MARGIN: f32 = 36.0;
pub const CONTENT_BOTTOM: f32 = 806.0;

/// Output directory for generated artefacts: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    std::fs::create_dir_all(&dir).ok();
    dir
}

pub fn options(pagination: Pagination) -> RenderOptions {
    RenderOptions {
        pagination,
        ..RenderOptions::default()
    }
}

pub fn sample_trace(pagination: Pagination) -> LayoutTrace {
    let _ = env_logger::try_init();
    layout(&ValuationReport::sample(), &options(pagination)).expect("layout sample report")
}

pub fn sample_pdf(pagination: Pagination) -> Rendered {
    let _ = env_logger::try_init();
    render(&ValuationReport::sample(), &options(pagination)).expect("render sample report")
}

fn find_all<'a>(haystack: &'a [u8], needle: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(move |(_, w)| *w == needle)
        .map(|(i, _)| i)
}

/// Numbers following each occurrence of `key` up to the closing `]` or end
/// of line, e.g. `/MediaBox [0 0 595 842]`.
pub fn pdf_numbers_after(pdf: &[u8], key: &str) -> Vec<Vec<f32>> {
    find_all(pdf, key.as_bytes())
        .map(|start| {
            let rest = &pdf[start + key.len()..];
            let end = rest
                .iter()
                .position(|&b| b == b']' || b == b'\n' || b == b'/')
                .unwrap_or(rest.len());
            String::from_utf8_lossy(&rest[..end])
                .split(|c: char| c.is_whitespace() || c == '[')
                .filter_map(|s| s.parse().ok())
                .collect()
        })
        .collect()
}

pub fn pdf_contains(pdf: &[u8], needle: &str) -> bool {
    find_all(pdf, needle.as_bytes()).next().is_some()
}

/// Page count declared by the page tree root.
pub fn pdf_page_count(pdf: &[u8]) -> Option<usize> {
    pdf_numbers_after(pdf, "/Count ")
        .into_iter()
        .next()
        .and_then(|nums| nums.first().map(|n| *n as usize))
}

/// Sum of emitted widths for one table placement.
pub fn width_sum(widths: &[f32]) -> f32 {
    widths.iter().sum()
}

pub fn print_extents(trace: &LayoutTrace) {
    println!();
    println!("+{:-<8}+{:-<12}+{:-<10}+", "", "", "");
    println!("| {:<6} | {:<10} | {:<8} |", "Page", "Extent", "Overflow");
    println!("+{:-<8}+{:-<12}+{:-<10}+", "", "", "");
    for (i, y) in trace.page_extents.iter().enumerate() {
        let over = if *y > CONTENT_BOTTOM + 0.01 { "yes" } else { "" };
        println!("| {:<6} | {:>10.2} | {:<8} |", i + 1, y, over);
    }
    println!("+{:-<8}+{:-<12}+{:-<10}+", "", "", "");
}
