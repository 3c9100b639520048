use valuation_pdf::{
    Pagination, RenderOptions, Rupees, ValuationReport, amount_in_words, format_inr, group_indian,
    layout,
};

#[test]
fn indian_grouping() {
    assert_eq!(format_inr(5951499.40), "\u{20B9} 59,51,499.40");
    assert_eq!(format_inr(23400.0), "\u{20B9} 23,400.00");
    assert_eq!(format_inr(1612962.0), "\u{20B9} 16,12,962.00");
    assert_eq!(format_inr(999.5), "\u{20B9} 999.50");
    assert_eq!(format_inr(0.0), "\u{20B9} 0.00");
    assert_eq!(format_inr(-1500.0), "\u{20B9} -1,500.00");
    assert_eq!(format_inr(123456789.0), "\u{20B9} 12,34,56,789.00");

    assert_eq!(group_indian(100), "100");
    assert_eq!(group_indian(1000), "1,000");
    assert_eq!(group_indian(100000), "1,00,000");
}

#[test]
fn amounts_in_words() {
    assert_eq!(
        amount_in_words(5951499.40),
        "Fifty Nine Lac Fifty One Thousand Four Hundred Ninety Nine Rupees Only"
    );
    assert_eq!(amount_in_words(0.0), "Zero Rupees Only");
    assert_eq!(amount_in_words(15.0), "Fifteen Rupees Only");
    assert_eq!(amount_in_words(100000.0), "One Lac Rupees Only");
    assert_eq!(
        amount_in_words(25000000.0),
        "Two Crore Fifty Lac Rupees Only"
    );
    assert_eq!(amount_in_words(1010.0), "One Thousand Ten Rupees Only");
}

#[test]
fn percentages_round_half_away_from_zero() {
    let fmv = Rupees::from_paise(595_149_940);
    assert_eq!(fmv.percent(95).paise(), 565_392_443);
    assert_eq!(fmv.percent(80).paise(), 476_119_952);
    assert_eq!(fmv.percent(35).paise(), 208_302_479);
    assert_eq!(Rupees::from_paise(1).percent(50).paise(), 1);
    assert_eq!(Rupees::from_paise(-1).percent(50).paise(), -1);
}

#[test]
fn sample_report_figures() {
    let f = ValuationReport::sample().figures();
    assert_eq!(f.flat_value.grouped(), "44,51,499.40");
    assert_eq!(f.furniture_fixtures.grouped(), "15,00,000.00");
    assert_eq!(f.total_value.to_string(), "\u{20B9} 59,51,499.40");
    assert_eq!(f.fair_market_value, f.total_value);
    assert_eq!(f.realizable_value.grouped(), "56,53,924.43");
    assert_eq!(f.distress_value.grouped(), "47,61,199.52");
    assert_eq!(f.insurable_value.grouped(), "20,83,024.79");
    assert_eq!(f.jantri_rate.grouped(), "23,400.00");
    assert_eq!(f.jantri_value.grouped(), "16,12,962.00");
    assert_eq!(f.sale_deed_value, None);
    assert_eq!(
        f.total_in_words,
        "Fifty Nine Lac Fifty One Thousand Four Hundred Ninety Nine Rupees Only"
    );
}

#[test]
fn figures_follow_the_inputs() {
    let mut report = ValuationReport::sample();
    report.valuation.carpet_area = 100.0;
    report.valuation.adopted_rate = 50_000.0;
    report.valuation.furniture_fixtures = 0.0;
    report.valuation.sale_deed_value = Some(4_000_000.0);

    let f = report.figures();
    assert_eq!(f.total_value, Rupees::from_f64(5_000_000.0));
    assert_eq!(f.realizable_value, Rupees::from_f64(4_750_000.0));
    assert_eq!(f.sale_deed_value.map(|v| v.grouped()).as_deref(), Some("40,00,000.00"));
    assert_eq!(f.total_in_words, "Fifty Lac Rupees Only");
}

#[test]
fn sums_saturate_at_the_paise_limit() {
    let max = Rupees::from_paise(i64::MAX);
    assert_eq!((max + Rupees::from_paise(1)).paise(), i64::MAX);
    assert_eq!((max + max).paise(), i64::MAX);
    let min = Rupees::from_paise(i64::MIN);
    assert_eq!((min + Rupees::from_paise(-1)).paise(), i64::MIN);

    assert_eq!(Rupees::from_f64(1e300).paise(), i64::MAX);
    assert_eq!(Rupees::from_f64(f64::NEG_INFINITY).paise(), i64::MIN);
    assert_eq!(Rupees::from_f64(f64::NAN).paise(), 0);

    assert_eq!(max.percent(200).paise(), i64::MAX);
    assert_eq!(min.percent(200).paise(), i64::MIN);
    assert_eq!(max.percent(100), max);
    assert_eq!(min.grouped(), "-92,23,37,20,36,85,47,758.08");
}

#[test]
fn huge_inputs_lay_out_without_panicking() {
    let mut report = ValuationReport::sample();
    report.valuation.carpet_area = 1e18;
    report.valuation.adopted_rate = 1e18;
    report.valuation.furniture_fixtures = 1e18;
    report.rate.jantri_rate = 1e18;

    let f = report.figures();
    assert_eq!(f.flat_value.paise(), i64::MAX);
    assert_eq!(f.total_value.paise(), i64::MAX);
    assert_eq!(f.jantri_value.paise(), i64::MAX);
    assert!(f.realizable_value < f.total_value);
    assert!(f.total_in_words.contains("Crore"));

    let options = RenderOptions {
        pagination: Pagination::Fixed,
        ..RenderOptions::default()
    };
    let trace = layout(&report, &options).unwrap();
    assert_eq!(trace.page_count, 4);
}

#[test]
fn negative_inputs_give_negative_figures() {
    let mut report = ValuationReport::sample();
    report.valuation.carpet_area = 100.0;
    report.valuation.adopted_rate = -1_000.0;
    report.valuation.furniture_fixtures = -500.0;

    let f = report.figures();
    assert_eq!(f.flat_value.grouped(), "-1,00,000.00");
    assert_eq!(f.total_value.grouped(), "-1,00,500.00");
    assert_eq!(f.total_value.to_string(), "\u{20B9} -1,00,500.00");
    assert_eq!(f.realizable_value.grouped(), "-95,475.00");
    assert_eq!(f.distress_value.grouped(), "-80,400.00");
    assert_eq!(f.insurable_value.grouped(), "-35,175.00");
    // words spell the magnitude
    assert_eq!(f.total_in_words, "One Lac Five Hundred Rupees Only");
}

#[test]
fn negative_carpet_area_counts_as_zero() {
    let mut report = ValuationReport::sample();
    report.valuation.carpet_area = -52.3;
    report.valuation.furniture_fixtures = 1_500.0;

    let f = report.figures();
    assert!(f.flat_value.is_zero());
    assert!(f.jantri_value.is_zero());
    assert_eq!(f.total_value.grouped(), "1,500.00");
}
