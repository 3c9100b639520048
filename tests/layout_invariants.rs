mod common;

use common::{CONTENT_BOTTOM, CONTENT_WIDTH, MARGIN};
use valuation_pdf::{
    BreakKind, CursorMove, Error, Pagination, Table, ValuationReport, layout, layout_tables,
};

const HEADER_GRAY: [u8; 3] = [0xE8, 0xE8, 0xE8];

fn rows(n: usize, cols: usize) -> Vec<Vec<String>> {
    (0..n)
        .map(|r| (0..cols).map(|c| format!("r{r}c{c}")).collect())
        .collect()
}

#[test]
fn every_table_spans_the_content_width() {
    for pagination in [Pagination::Fixed, Pagination::Flow] {
        let trace = common::sample_trace(pagination);
        assert!(!trace.tables.is_empty());
        for table in &trace.tables {
            let sum = common::width_sum(&table.col_widths);
            assert!(
                (sum - CONTENT_WIDTH).abs() <= 0.01,
                "{} widths sum to {sum}",
                table.name
            );
        }
    }
}

#[test]
fn declared_widths_keep_their_proportions() {
    let trace = common::sample_trace(Pagination::Fixed);
    let general = trace.table("general").expect("general table");
    assert_eq!(general.col_widths.len(), 3);
    let ratio = general.col_widths[1] / general.col_widths[0];
    assert!((ratio - 7.0).abs() < 0.001, "280/40 ratio lost: {ratio}");

    let results = trace.table("results").expect("results table");
    let ratio = results.col_widths[0] / results.col_widths[1];
    assert!((ratio - 320.0 / 225.0).abs() < 0.001);
}

#[test]
fn widths_that_already_fit_are_untouched() {
    let table = Table::new("narrow", &[100.0, 200.0], rows(2, 2));
    let trace = layout_tables(&[table], 0.0, &common::options(Pagination::Fixed)).unwrap();
    assert_eq!(trace.tables[0].col_widths, vec![100.0, 200.0]);
}

#[test]
fn every_cell_sits_in_a_declared_column() {
    let trace = common::sample_trace(Pagination::Fixed);
    for table in &trace.tables {
        let columns = table.col_widths.len();
        let cells: Vec<_> = trace.cells_of(&table.name).collect();
        assert!(!cells.is_empty());
        assert!(cells.iter().all(|c| c.col < columns), "{}", table.name);
    }
    let general: Vec<_> = trace.cells_of("general").collect();
    assert_eq!(general.len(), 26 * 3);
}

#[test]
fn row_arity_mismatch_fails_fast() {
    let mut bad = rows(3, 3);
    bad[1].pop();
    let tables = [
        Table::new("fine", &[40.0, 280.0, 245.0], rows(2, 3)),
        Table::new("bad", &[40.0, 280.0, 245.0], bad),
    ];
    let err = layout_tables(&tables, 10.0, &common::options(Pagination::Fixed)).unwrap_err();
    match &err {
        Error::RowArity {
            table,
            row,
            cells,
            columns,
        } => {
            assert_eq!(table, "bad");
            assert_eq!((*row, *cells, *columns), (1, 2, 3));
        }
        other => panic!("expected RowArity, got {other:?}"),
    }
    assert!(err.to_string().contains("'bad' row 1"));
}

#[test]
fn cursor_only_moves_down_within_a_page() {
    for pagination in [Pagination::Fixed, Pagination::Flow] {
        let trace = common::sample_trace(pagination);
        for pair in trace.cursor.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.page == b.page {
                assert!(b.y >= a.y, "cursor moved up on page {}: {} -> {}", a.page, a.y, b.y);
            } else {
                assert_eq!(b.page, a.page + 1);
                assert_eq!(b.kind, CursorMove::PageBreak);
            }
        }
    }
}

#[test]
fn cursor_resets_only_at_page_breaks() {
    let trace = common::sample_trace(Pagination::Fixed);
    let resets: Vec<_> = trace
        .cursor
        .iter()
        .filter(|m| m.kind == CursorMove::PageBreak)
        .collect();
    assert_eq!(resets.len(), trace.page_breaks.len());
    assert!(resets.iter().all(|m| m.y == MARGIN));
    assert!(
        trace
            .cursor
            .iter()
            .filter(|m| m.kind == CursorMove::Advance)
            .all(|m| m.y > MARGIN)
    );
}

#[test]
fn general_table_fits_on_the_first_page() {
    let trace = common::sample_trace(Pagination::Fixed);
    let general = trace.table("general").expect("general table");
    assert_eq!(general.page, 0);
    assert_eq!(general.rows, 26);
    assert_eq!(general.row_height, 18.0);
    assert!((general.height - 468.0).abs() < f32::EPSILON);
    // below the addressee block, title and section heading
    assert!(general.top > MARGIN + 60.0);
    assert!(general.top + general.height <= CONTENT_BOTTOM);
    assert!(!trace.overflowing_pages().contains(&0));
}

#[test]
fn three_authored_breaks_make_four_pages() {
    let trace = common::sample_trace(Pagination::Fixed);
    common::print_extents(&trace);
    assert_eq!(trace.page_count, 4);
    let after: Vec<_> = trace.page_breaks.iter().map(|b| b.after.as_str()).collect();
    assert_eq!(after, ["general", "flat", "results"]);
    assert!(trace.page_breaks.iter().all(|b| b.kind == BreakKind::Explicit));
    for (i, brk) in trace.page_breaks.iter().enumerate() {
        assert_eq!(brk.page, i);
    }
}

#[test]
fn sections_land_on_their_pages() {
    let trace = common::sample_trace(Pagination::Fixed);
    let page_of = |name: &str| trace.table(name).map(|t| t.page);
    assert_eq!(page_of("general"), Some(0));
    assert_eq!(page_of("general_continued"), Some(1));
    assert_eq!(page_of("apartment"), Some(1));
    assert_eq!(page_of("facilities"), Some(1));
    assert_eq!(page_of("flat"), Some(1));
    assert_eq!(page_of("marketability"), Some(2));
    assert_eq!(page_of("rate"), Some(2));
    assert_eq!(page_of("composite_rate"), Some(2));
    assert_eq!(page_of("details_of_valuation"), Some(2));
    assert_eq!(page_of("results"), Some(2));
    assert_eq!(page_of("declaration"), Some(3));
    assert_eq!(trace.tables_in("apartment").count(), 2);
}

#[test]
fn fixed_pagination_reports_overflow_without_splitting() {
    let trace = common::sample_trace(Pagination::Fixed);
    let overflowing = trace.overflowing_pages();
    assert!(overflowing.contains(&1), "flat section runs past page 2");
    assert!(!overflowing.contains(&3));
    assert_eq!(trace.tables.len(), 11, "no table was split");
}

#[test]
fn flow_pagination_keeps_every_page_inside_the_margins() {
    let fixed = common::sample_trace(Pagination::Fixed);
    let flow = common::sample_trace(Pagination::Flow);
    common::print_extents(&flow);

    assert!(flow.page_count > fixed.page_count);
    assert!(flow.overflowing_pages().is_empty());
    let explicit = flow
        .page_breaks
        .iter()
        .filter(|b| b.kind == BreakKind::Explicit)
        .count();
    assert_eq!(explicit, 3);
    assert_eq!(flow.page_breaks.len(), flow.page_count - 1);

    // a split table keeps every row
    let result_rows: usize = flow
        .tables
        .iter()
        .filter(|t| t.name == "results")
        .map(|t| t.rows)
        .sum();
    assert_eq!(result_rows, 8);
}

#[test]
fn flow_splits_long_tables_at_the_bottom_margin() {
    let table = Table::new("long", &[40.0, 280.0, 245.0], rows(50, 3));
    let trace = layout_tables(
        std::slice::from_ref(&table),
        0.0,
        &common::options(Pagination::Flow),
    )
    .unwrap();

    assert_eq!(trace.page_count, 2);
    let parts: Vec<_> = trace.tables.iter().map(|t| (t.page, t.rows)).collect();
    assert_eq!(parts, [(0, 42), (1, 8)]);
    assert_eq!(trace.tables[1].top, MARGIN);
    assert_eq!(trace.page_breaks[0].kind, BreakKind::Overflow);
    assert!(trace.cells.iter().all(|c| c.y + c.height <= CONTENT_BOTTOM + 0.01));

    let fixed = layout_tables(&[table], 0.0, &common::options(Pagination::Fixed)).unwrap();
    assert_eq!(fixed.page_count, 1);
    assert_eq!(fixed.overflowing_pages(), vec![0]);
}

#[test]
fn details_header_row_is_shaded_and_bold() {
    let trace = common::sample_trace(Pagination::Fixed);
    let cells: Vec<_> = trace.cells_of("details_of_valuation").collect();
    assert_eq!(cells.len(), 6 * 4);
    for cell in cells {
        if cell.row == 0 {
            assert!(cell.bold, "header cell {} not bold", cell.col);
            assert_eq!(cell.background, Some(HEADER_GRAY));
        } else {
            assert!(!cell.bold);
            assert_eq!(cell.background, None);
        }
    }
    // tables without a header band have no shaded cells at all
    assert!(trace.cells_of("general").all(|c| !c.bold && c.background.is_none()));
}

#[test]
fn rows_keep_their_fixed_height() {
    let trace = common::sample_trace(Pagination::Fixed);
    for table in &trace.tables {
        for cell in trace.cells_of(&table.name) {
            assert_eq!(cell.height, table.row_height);
            let expected = table.top + cell.row as f32 * table.row_height;
            assert!((cell.y - expected).abs() < 0.001, "{}[{}]", table.name, cell.row);
        }
    }
    // long facts are cut at the row height rather than growing the row
    assert!(trace.cells_of("general").any(|c| c.truncated));
    assert!(trace.cells_of("declaration").all(|c| c.height == 20.0));
}

#[test]
fn empty_facts_print_as_na() {
    let trace = layout(&ValuationReport::default(), &common::options(Pagination::Fixed)).unwrap();
    let owner = trace
        .cells_of("general")
        .find(|c| c.row == 9 && c.col == 2)
        .expect("owner cell");
    assert_eq!(owner.text, "NA");
    assert_eq!(trace.page_count, 4);
}

#[test]
fn rupee_sign_is_spelled_out_for_the_standard_face() {
    let trace = common::sample_trace(Pagination::Fixed);
    let total = trace
        .cells_of("details_of_valuation")
        .find(|c| c.row == 4 && c.col == 3)
        .expect("total cell");
    assert_eq!(total.text, "Rs. 59,51,499.40");
}

#[test]
fn degenerate_cells_do_not_panic() {
    let table = Table::new("degenerate", &[0.0, -5.0], vec![vec!["wide text".into(), "x".into()]])
        .row_height(0.0);
    let trace = layout_tables(&[table], 0.0, &common::options(Pagination::Flow)).unwrap();
    assert_eq!(trace.page_count, 1);
    assert!(trace.cells.iter().all(|c| c.truncated));
}

#[test]
fn flow_keeps_signature_blocks_inside_the_margins() {
    let _ = env_logger::try_init();
    let options = common::options(Pagination::Flow);
    // each count lands the closing signature blocks at a different height
    for count in 90..=110 {
        let mut report = ValuationReport::sample();
        report.limiting_conditions = (0..count)
            .map(|i| format!("Condition {i}: the valuer has relied on the documents produced."))
            .collect();
        let trace = layout(&report, &options).unwrap();
        assert!(
            trace.overflowing_pages().is_empty(),
            "{count} conditions overflow: {:?}",
            trace.page_extents
        );
    }
}

#[test]
fn carriage_returns_and_tabs_are_not_drawn_as_question_marks() {
    let mut report = ValuationReport::sample();
    report.general.owner_name = "Line one\r\nLine\ttwo".to_string();
    let trace = layout(&report, &common::options(Pagination::Fixed)).unwrap();
    let owner = trace
        .cells_of("general")
        .find(|c| c.row == 9 && c.col == 2)
        .expect("owner cell");
    assert_eq!(owner.text, "Line one\nLine two");
}

#[test]
fn negative_row_height_never_moves_the_cursor_up() {
    let tables = [
        Table::new("upside_down", &[100.0, 200.0], rows(3, 2)).row_height(-10.0),
        Table::new("after", &[100.0, 200.0], rows(1, 2)),
    ];
    let trace = layout_tables(&tables, 5.0, &common::options(Pagination::Flow)).unwrap();
    assert_eq!(trace.page_count, 1);
    assert_eq!(trace.tables[0].height, 0.0);
    assert_eq!(trace.tables[1].top, MARGIN + 5.0);
    for pair in trace.cursor.windows(2) {
        assert!(pair[1].y >= pair[0].y, "{} -> {}", pair[0].y, pair[1].y);
    }
}
