use crate::money::Rupees;

use super::ValuationReport;

const REALIZABLE_PCT: u32 = 95;
const DISTRESS_PCT: u32 = 80;
const INSURABLE_PCT: u32 = 35;

/// Monetary figures derived from the valuation inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Figures {
    pub adopted_rate: Rupees,
    pub flat_value: Rupees,
    pub furniture_fixtures: Rupees,
    pub total_value: Rupees,
    pub fair_market_value: Rupees,
    pub realizable_value: Rupees,
    pub distress_value: Rupees,
    pub insurable_value: Rupees,
    pub jantri_rate: Rupees,
    pub jantri_value: Rupees,
    pub sale_deed_value: Option<Rupees>,
    pub total_in_words: String,
}

impl Figures {
    pub fn compute(report: &ValuationReport) -> Self {
        let v = &report.valuation;
        let area = v.carpet_area.max(0.0);

        let flat_value = Rupees::from_f64(area * v.adopted_rate);
        let furniture_fixtures = Rupees::from_f64(v.furniture_fixtures);
        let total_value = flat_value + furniture_fixtures;
        let fair_market_value = total_value;

        Self {
            adopted_rate: Rupees::from_f64(v.adopted_rate),
            flat_value,
            furniture_fixtures,
            total_value,
            fair_market_value,
            realizable_value: fair_market_value.percent(REALIZABLE_PCT),
            distress_value: fair_market_value.percent(DISTRESS_PCT),
            insurable_value: fair_market_value.percent(INSURABLE_PCT),
            jantri_rate: Rupees::from_f64(report.rate.jantri_rate),
            jantri_value: Rupees::from_f64(area * report.rate.jantri_rate),
            sale_deed_value: v.sale_deed_value.map(Rupees::from_f64),
            total_in_words: total_value.in_words(),
        }
    }
}
