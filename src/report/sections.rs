//! The fixed report template: headings, form labels and table shapes, with
//! every property fact taken from the [`ValuationReport`].
//!
//! Page breaks sit where the printed form has them (after the General
//! section, after the Flat section and after the valuation results) and are
//! not derived from remaining space.

use crate::error::Error;
use crate::model::{BLUE, CONTENT_WIDTH, HAlign, MARGIN, Table, TextStyle};
use crate::pdf::Composer;

use super::{Figures, ValuationReport};

const FORM_COLS: [f32; 3] = [40.0, 280.0, 245.0];
const DETAILS_COLS: [f32; 4] = [40.0, 280.0, 130.0, 115.0];
const RESULT_COLS: [f32; 2] = [320.0, 225.0];
const DECLARATION_COLS: [f32; 2] = [30.0, 535.0];

const TITLE: &str = "VALUATION REPORT(IN RESPECT OF FLAT/HOUSE/INDUSTRIAL/SHOP)";

/// Column of the signature blocks, offset from the left margin.
const SIGNATURE_X: f32 = MARGIN + 320.0;
const SIGNATURE_W: f32 = 200.0;
const SIGNATURE_BLOCK: f32 = 30.0;

const STANDARD_CONDITIONS: [&str; 6] = [
    "If this property is offered for collateral security the concerned financial institution \
     is requested to obtained latest title report from advocate of said property.",
    "No responsibility is to be assumed for matter legal in nature nor is opinion of title \
     rendered by this report, good title is assumed.",
    "Scope of this report is only to access present market value of the property for specific \
     purpose, date & place. It therefore varies with purpose, period, and location, \
     identification of rightful owner of the property, genuineness of the title deed, \
     encumbrance if any on the property etc. be examined by the (Financial Institution) \
     concerned authority.",
    "Possession of the any copy of this report does not carry with it the right of \
     publication, nor any be used for any purpose by any one, except the addressee and the \
     property owner, without the previous written consent of the appraiser, and in any event, \
     only may be revealed in its entirety.",
    "Credibility of buyer and seller is fully responsible of financial institute. \
     Identification of buyer & seller is from financial institute only.",
    "If found any typo error in this report is not counted for any legal action and obligation.",
];

fn na(value: &str) -> String {
    if value.trim().is_empty() {
        "NA".to_string()
    } else {
        value.to_string()
    }
}

/// A numbered form row: item number, label, fact.
fn row(no: &str, label: &str, value: impl Into<String>) -> Vec<String> {
    vec![no.to_string(), label.to_string(), value.into()]
}

/// A label row that introduces sub-items and carries no fact of its own.
fn group(no: &str, label: &str) -> Vec<String> {
    row(no, label, String::new())
}

fn area(sq_mt: f64) -> String {
    format!("{sq_mt:.2}")
}

pub(crate) fn emit(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    let figures = report.figures();

    header(report, c);
    general(report, c)?;
    c.new_page();

    general_continued(report, c)?;
    apartment(report, c)?;
    flat(report, c)?;
    c.new_page();

    marketability(report, c)?;
    rate(report, &figures, c)?;
    composite(report, &figures, c)?;
    details(report, &figures, c)?;
    results(report, &figures, c)?;
    c.new_page();

    limiting_conditions(report, c);
    declaration(report, c)?;
    signatures(report, c);
    enclosure(report, &figures, c);
    Ok(())
}

fn header(report: &ValuationReport, c: &mut Composer) {
    c.begin_section("header");
    let h = &report.header;
    let text = TextStyle::regular(9.0);

    let top = c.y();
    c.line("To;", &text, 10.0);
    c.line(&h.bank_name, &text, 10.0);
    c.line(&h.branch_name, &text, 40.0);

    // right-hand block sits level with the addressee
    let right = text.aligned(HAlign::Right);
    c.text_at(MARGIN, top, CONTENT_WIDTH, &format!("File No: {}", na(&h.file_no)), &right);
    c.text_at(
        MARGIN,
        top + 10.0,
        CONTENT_WIDTH,
        &format!("Date: {}", na(&h.report_date)),
        &right,
    );

    c.line(TITLE, &TextStyle::bold(10.0).aligned(HAlign::Center), 20.0);
}

fn general(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("general");
    c.heading("GENERAL");
    let g = &report.general;

    let rows = vec![
        row("1", "purpose for which valuation is made", na(&g.purpose)),
        row("2", "(a) Date of inspection", na(&g.inspection_date)),
        row("", "(b) Date on which valuation is made", na(&g.valuation_date)),
        group("", "List of documents produced for pursual"),
        row("", "(1) Mortgage Deed :", na(&g.mortgage_deed)),
        row("", "(2) Mortgage Deed Between :", na(&g.mortgage_deed_between)),
        row("3", "(3) Previous Valuation Report:", na(&g.previous_valuation_report)),
        row(
            "",
            "(4) Previous Valuation Report In Favor of:",
            na(&g.previous_valuation_in_favor_of),
        ),
        row("", "(5) Approved Plan No:", na(&g.approved_plan_no)),
        row("4", "Name of the Owner/Applicant:", na(&g.owner_name)),
        row("5", "Brief description of Property", na(&g.property_description)),
        group("", "Location of the property"),
        row("", "(a) Plot No/Survey No/Block No", na(&g.plot_survey_no)),
        row("", "(b) Door/Shop No", na(&g.door_no)),
        row("6", "(c) TP Np/Village", na(&g.tp_village)),
        row("", "(d) Ward/Taluka", na(&g.ward_taluka)),
        row("", "(e) Mandal/District", na(&g.mandal_district)),
        row("", "(f) Date of issue & Validity of layout plan", na(&g.layout_plan_date)),
        row("", "(g) Approved map/plan issuing authority", na(&g.approved_map_authority)),
        row(
            "",
            "(h) weather genuineness or authenticity of approved map/plan verified",
            na(&g.map_verification),
        ),
        row(
            "",
            "(i) Any other comments by valuer on authentic of approved plan",
            na(&g.plan_authenticity),
        ),
        row("7", "Postal address of the property", na(&g.postal_address)),
        row("8", "City/Town", na(&g.city_town)),
        row("", "Residential Area", na(&g.residential_area)),
        row("", "Commercial Area", na(&g.commercial_area)),
        row("", "Industrial Area", na(&g.industrial_area)),
    ];
    c.table(&Table::new("general", &FORM_COLS, rows))?;
    c.advance(10.0);
    Ok(())
}

fn general_continued(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    let g = &report.general;
    let carpet = area(report.valuation.carpet_area);

    let rows = vec![
        group("9", "Classification Of The Area"),
        row("", "(a) High/Middle/Poor", na(&g.area_class)),
        row("", "(b) Urban/Semi Urban/Rural", na(&g.urban_class)),
        row(
            "10",
            "Coming under Corporation limits/Village Panchayat/Municipality",
            na(&g.corporation_limits),
        ),
        row(
            "11",
            "Weather convered under any State/Central Govt.enactments(e.g. Urban land celling \
             actior notified under agenc area/scheduled area/cantonment area",
            na(&g.state_enactments),
        ),
        group("12", "Boundaries of the property"),
        row("", "East", na(&g.boundaries.east)),
        row("", "West", na(&g.boundaries.west)),
        row("", "North", na(&g.boundaries.north)),
        row("", "South", na(&g.boundaries.south)),
        group("13", "Extent of the Site"),
        row("", "Built Up Area (Sq.mt.):", na(&g.built_up_area)),
        row("", "Carpet Area (Sq.mt.):", carpet.clone()),
        row("", "UDSL (Sq.Mt.):", na(&g.udsl)),
        row("14", "Latitude,Longitude & Co ordinates of flat", na(&g.coordinates)),
        group("15", "Extent of the Site Considered for valuation"),
        row("", "Carpet Area (Sq.mt.):", carpet),
        row(
            "16",
            "Weather Occupied by owner/tenant? If occupied by tenant,science how long? Rent \
             received per month",
            na(&g.occupancy),
        ),
    ];
    c.table(&Table::new("general_continued", &FORM_COLS, rows))?;
    c.advance(10.0);
    Ok(())
}

fn apartment(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("apartment");
    c.heading("II.APARTMENT BUILDING");
    let a = &report.apartment;

    let building = vec![
        row("1", "Nature of Apartment", na(&a.nature)),
        row("2", "Location", na(&a.location)),
        row("", "Survey/Block No.", na(&a.survey_block_no)),
        row("", "TP, FP No.", na(&a.tp_fp_no)),
        row("", "Village/Municipality/Corporation", na(&a.municipality)),
        row("", "Door No,Street or Road (Pin Code)", na(&a.door_street_pin)),
        row(
            "3",
            "Description of the locality\nResidential/Commercial/Mixed",
            na(&a.locality),
        ),
        row("4", "Commencement Year of construction", na(&a.construction_year)),
        row("5", "Number of Floor", na(&a.floors)),
        row("6", "Type Of Structure", na(&a.structure)),
        row("7", "Number of Dwelling units in the building", na(&a.dwelling_units)),
    ];
    c.table(&Table::new("apartment", &FORM_COLS, building))?;
    c.advance(10.0);

    let facilities = vec![
        row("8", "Quality of Construction", na(&a.construction_quality)),
        row("9", "Apperance of the building", na(&a.appearance)),
        row("10", "Maintenance of building", na(&a.maintenance)),
        group("11", "Facilities Available"),
        row("", "Lift", na(&a.lift)),
        row("", "Protected Water Supply", na(&a.water_supply)),
        row("", "Under ground sewerage", na(&a.sewerage)),
        row("", "car parking-Open/Covered", na(&a.car_parking)),
        row("", "is compound wall Existing?", na(&a.compound_wall)),
        row("", "Is pavement laid around the building?", na(&a.pavement)),
    ];
    c.table(&Table::new("facilities", &FORM_COLS, facilities))?;
    c.advance(10.0);
    Ok(())
}

fn flat(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("flat");
    c.heading("III. Flat");
    let f = &report.flat;
    let carpet = area(report.valuation.carpet_area);

    let rows = vec![
        row("1", "The floor on which the Flat is situated", na(&f.floor)),
        row("2", "Door No, Of the Flat", na(&f.door_no)),
        row("3", "Specification of the Flat", na(&f.specification)),
        row("", "Roof", na(&f.roof)),
        row("", "Flooring", na(&f.flooring)),
        row("", "Doors", na(&f.doors)),
        row("", "Windows", na(&f.windows)),
        row("", "Fittings", na(&f.fittings)),
        row("", "Finishing", na(&f.finishing)),
        row("4", "House Tax", na(&f.house_tax)),
        row("", "Assessment no", na(&f.assessment_no)),
        row("", "Tax paid in the name of", na(&f.tax_paid_by)),
        row("", "Tax amount", na(&f.tax_amount)),
        row("5", "Electricity service connection no.", na(&f.electricity_connection)),
        row("", "Meter card is in name of", na(&f.meter_card_name)),
        row("6", "How is the maintenance of the Flat?", na(&f.maintenance)),
        row("7", "Sale Deed in the name of", na(&f.sale_deed_name)),
        row(
            "8",
            "What is the undivided area of land as per sale deed? (sq.mt.)",
            na(&f.undivided_land_area),
        ),
        row(
            "9",
            "What is the plinth area of the Flat ?",
            format!(
                "Built Up Area (Sq.mt.): {}\nCarpet Area (Sq.mt.): {carpet}",
                na(&report.general.built_up_area)
            ),
        ),
        row("10", "What is the FSI?", na(&f.fsi)),
        row(
            "11",
            "What is the Carpet Area of the Flat consider for valuation?",
            carpet.clone(),
        ),
        row("12", "Is it posh/ I class/Medium / Ordinary", na(&f.class)),
        row(
            "13",
            "IS It being used for residential or comercial purpose?",
            na(&f.usage),
        ),
        row("14", "is it is owner occupied or Rent out?", na(&f.occupancy)),
        row("15", "If rented ,what is the monthly rent?", na(&f.monthly_rent)),
    ];
    c.table(&Table::new("flat", &FORM_COLS, rows))?;
    Ok(())
}

fn marketability(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("marketability");
    c.heading("IV MARKETIBILITY");
    let m = &report.marketability;

    let rows = vec![
        row("1", "How is marketability?", na(&m.marketability)),
        row(
            "2",
            "What are the factors favouring for an extra potential value?",
            na(&m.positive_factors),
        ),
        row(
            "3",
            "Any negative factors are observed which affect the market value in general?",
            na(&m.negative_factors),
        ),
    ];
    c.table(&Table::new("marketability", &FORM_COLS, rows))?;
    c.advance(8.0);
    Ok(())
}

fn rate(report: &ValuationReport, figures: &Figures, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("rate");
    c.heading("V RATE");
    let r = &report.rate;

    let rows = vec![
        row("", "", na(&r.market_basis)),
        row(
            "1",
            "After analysing the comparable sale instances, what is the composite rate for a \
             similar flat with same specifications in the adjoining locality?",
            na(&r.comparable_rate),
        ),
        row(
            "2",
            "Assuming it is a new construction, what is the adopted basic composite rate of the \
             flat under valuation after comparing with the specifications and other factors with \
             the flat under comparison",
            na(&r.adopted_basis),
        ),
        group("3", "Break up for the rate"),
        row("", "(i) Building + Services", na(&r.building_services)),
        row("", "(ii) Land+Others", na(&r.land_others)),
        row(
            "4",
            "Guideline rate obtained from the Registrar's office",
            na(&r.guideline_rate),
        ),
        row("", "Per Sq. Mt.", area(report.valuation.carpet_area)),
        row("", "", figures.jantri_rate.to_string()),
        row("", "Total Jantri Value", figures.jantri_value.to_string()),
    ];
    c.table(&Table::new("rate", &FORM_COLS, rows).row_height(20.0))?;
    c.advance(8.0);
    Ok(())
}

fn composite(report: &ValuationReport, figures: &Figures, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("composite");
    c.heading("VI COMPOSITE RATE ADOPTED AFTER DEPRECIATION");
    let cr = &report.composite;
    let adopted = format!("{} | Per Sq.mt. Carpet Area", figures.adopted_rate);

    let rows = vec![
        row("a", "Depreciated building rate", na(&cr.depreciated_building_rate)),
        row("", "Replacement cost of Flat with services", na(&cr.replacement_cost)),
        row("", "Age of the building", na(&cr.building_age)),
        row("", "Life of the building estimated", na(&cr.building_life)),
        row(
            "",
            "Depreciation % assuming the salvage value as 10%",
            na(&cr.depreciation_percent),
        ),
        row("", "Depreciated ratio of the building", na(&cr.depreciated_ratio)),
        row("b", "Total Composite rate arrived for valuation", adopted.clone()),
        row("", "Depreciated building rate VI (a)", na(&cr.depreciated_building_rate)),
        row("", "Rate of land & Other VI (3) ii", na(&cr.land_rate_method)),
        row("", "Total Composite rate", adopted),
    ];
    c.table(&Table::new("composite_rate", &FORM_COLS, rows))?;
    c.advance(8.0);
    Ok(())
}

fn details(report: &ValuationReport, figures: &Figures, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("details");
    c.heading("DETAILS OF VALUATION");
    let text = |s: &str| s.to_string();

    let rows = vec![
        vec![text("No."), text("DESCRIPTION"), text("Area in Sq. mt."), text("RATE")],
        vec![
            text("1"),
            text("Present value of the Flat - Carpet Area"),
            area(report.valuation.carpet_area),
            figures.adopted_rate.to_string(),
        ],
        vec![text(""), text("Value Of The Flat"), text(""), figures.flat_value.to_string()],
        vec![
            text("2"),
            text("Fixed Furniture & Fixtures"),
            text(""),
            figures.furniture_fixtures.to_string(),
        ],
        vec![
            text(""),
            text("Total Value Of The Flat"),
            text(""),
            figures.total_value.to_string(),
        ],
        vec![
            text(""),
            format!("In Words {}.", figures.total_in_words),
            text(""),
            text(""),
        ],
    ];
    c.table(&Table::new("details_of_valuation", &DETAILS_COLS, rows).with_header())?;
    c.advance(15.0);
    Ok(())
}

fn results(report: &ValuationReport, figures: &Figures, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("results");
    c.line(
        "As a result of my appraisal and analysis,",
        &TextStyle::bold(9.0),
        18.0,
    );
    let v = &report.valuation;
    let pair = |label: &str, value: String| vec![label.to_string(), value];

    let rows = vec![
        pair("Fair Market Market Value", figures.fair_market_value.to_string()),
        pair("Realizeable Value 95% of M.V", figures.realizable_value.to_string()),
        pair("Distress value 80% of M.V", figures.distress_value.to_string()),
        pair(
            "Sale Deed Value",
            figures
                .sale_deed_value
                .map_or_else(|| "NA".to_string(), |value| value.to_string()),
        ),
        pair("Jantri Value", figures.jantri_value.to_string()),
        pair("Insurable Value", figures.insurable_value.to_string()),
        pair(&format!("Remarks: {}", na(&v.remarks)), String::new()),
        pair("Copy Of Document Shown To Us", na(&v.documents_shown)),
    ];
    c.table(&Table::new("results", &RESULT_COLS, rows))?;
    Ok(())
}

fn limiting_conditions(report: &ValuationReport, c: &mut Composer) {
    c.begin_section("limiting_conditions");
    c.line(
        "STATEMENT OF LIMITING CONDITIONS",
        &TextStyle::bold(10.0).colored(BLUE),
        18.0,
    );

    let body = TextStyle::regular(8.0);
    if report.limiting_conditions.is_empty() {
        for condition in STANDARD_CONDITIONS {
            c.paragraph(&format!("\u{2022} {condition}"), &body, 3.0);
        }
    } else {
        for condition in &report.limiting_conditions {
            c.paragraph(&format!("\u{2022} {condition}"), &body, 3.0);
        }
    }
    c.advance(12.0);
}

fn declaration(report: &ValuationReport, c: &mut Composer) -> Result<(), Error> {
    c.begin_section("declaration");
    c.line("VIII DECLARATION", &TextStyle::bold(10.0), 18.0);
    let d = &report.declaration;
    let item = |mark: &str, text: String| vec![mark.to_string(), text];

    let rows = vec![
        item("", "I hereby declare that-".into()),
        item(
            "a",
            "I declare that I am not associated with the builder or with any of his associate \
             companies or with the borrower directly or indirectly in the past or in the present \
             and this report has been prepared by me with highest professional integrity."
                .into(),
        ),
        item(
            "b",
            format!(
                "I further declare that I have personally inspected the site and building on {}.",
                na(&d.inspection_date)
            ),
        ),
        item(
            "c",
            "I further declare that all the above particulars and information given in this \
             report are true to the best of my knowledge and belief."
                .into(),
        ),
        item(
            "d",
            "Future life of property is based on proper maintenance of the property".into(),
        ),
    ];
    c.table(&Table::new("declaration", &DECLARATION_COLS, rows).row_height(20.0))?;
    c.advance(20.0);
    Ok(())
}

fn signatures(report: &ValuationReport, c: &mut Composer) {
    c.begin_section("signatures");
    let d = &report.declaration;
    let text = TextStyle::regular(9.0);

    let signer = TextStyle::bold(9.0).aligned(HAlign::Center);
    let valuer = na(&d.valuer_name);
    let name_h = c.measure(&valuer, &signer, SIGNATURE_W);
    // both columns are two lines tall and must share a page
    c.ensure_room(SIGNATURE_BLOCK.max(15.0 + name_h));
    let top = c.y();
    c.line(&format!("Place: {}", na(&d.place)), &text, 15.0);
    c.text_at(MARGIN, c.y(), CONTENT_WIDTH, &format!("Date: {}", na(&d.date)), &text);

    c.text_at(SIGNATURE_X, top, SIGNATURE_W, "SIGNATURE OF THE VALUER", &signer);
    c.text_at(SIGNATURE_X, top + 15.0, SIGNATURE_W, &valuer, &signer);
    c.advance(40.0);
}

fn enclosure(report: &ValuationReport, figures: &Figures, c: &mut Composer) {
    c.begin_section("enclosure");
    c.line(
        "Enclsd: 1. Declaration from the valuer",
        &TextStyle::bold(9.0),
        18.0,
    );

    let note = format!(
        "The undersigned has inspected the property detailed in the Valuation report dated-{}. \
         We are satisfied that the fair and reasonable market value of the property is Rs. \
         {}/- (In Words {}).",
        na(&report.declaration.report_reference_date),
        figures.fair_market_value.grouped(),
        figures.fair_market_value.in_words(),
    );
    c.paragraph(&note, &TextStyle::regular(8.0), 20.0);

    let signer = TextStyle::bold(9.0).aligned(HAlign::Center);
    c.ensure_room(SIGNATURE_BLOCK);
    let y = c.y();
    c.text_at(SIGNATURE_X, y, SIGNATURE_W, "SIGNATURE", &signer);
    c.text_at(
        SIGNATURE_X,
        y + 15.0,
        SIGNATURE_W,
        "NAME OF BRANCH OFFICIAL WITH SEAL",
        &signer,
    );
}
