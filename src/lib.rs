mod error;
mod fonts;
pub mod model;
mod money;
mod pdf;
mod report;

pub use error::Error;
pub use fonts::FontConfig;
pub use model::{
    BreakKind, CellPlacement, CursorMark, CursorMove, LayoutTrace, PageBreak, Pagination, Table,
    TableOptions, TablePlacement,
};
pub use money::{Rupees, amount_in_words, format_inr, group_indian};
pub use pdf::{RenderOptions, Rendered, layout, layout_tables, render};
pub use report::{
    Apartment, Boundaries, CompositeRate, Declaration, Figures, Flat, General, Header,
    Marketability, Rate, Valuation, ValuationReport, load_report,
};

use std::path::Path;
use std::time::Instant;

/// Render `report` and write the PDF to `output`. Returns the layout trace.
pub fn generate_report(
    report: &ValuationReport,
    options: &RenderOptions,
    output: &Path,
) -> Result<LayoutTrace, Error> {
    let t0 = Instant::now();

    let Rendered { bytes, trace } = pdf::render(report, options)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        trace.page_count,
    );

    Ok(trace)
}
