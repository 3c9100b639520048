//! The parameter record a valuation report is instantiated from.
//!
//! Fields are grouped the way the printed report is: one struct per section.
//! JSON keys are camelCase to match the valuation records served by the web
//! application's API. Every field has a default, so partial records load; an
//! empty fact prints as `NA`.

mod figures;
mod sample;
pub(crate) mod sections;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use figures::Figures;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuationReport {
    pub header: Header,
    pub general: General,
    pub apartment: Apartment,
    pub flat: Flat,
    pub marketability: Marketability,
    pub rate: Rate,
    pub composite: CompositeRate,
    pub valuation: Valuation,
    /// Empty means the standard set of conditions.
    pub limiting_conditions: Vec<String>,
    pub declaration: Declaration,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Header {
    pub bank_name: String,
    pub branch_name: String,
    pub file_no: String,
    /// As printed, e.g. `31-Oct-2025`.
    pub report_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Boundaries {
    pub east: String,
    pub west: String,
    pub north: String,
    pub south: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct General {
    pub purpose: String,
    pub inspection_date: String,
    pub valuation_date: String,
    pub mortgage_deed: String,
    pub mortgage_deed_between: String,
    pub previous_valuation_report: String,
    pub previous_valuation_in_favor_of: String,
    pub approved_plan_no: String,
    pub owner_name: String,
    pub property_description: String,
    pub plot_survey_no: String,
    pub door_no: String,
    pub tp_village: String,
    pub ward_taluka: String,
    pub mandal_district: String,
    pub layout_plan_date: String,
    pub approved_map_authority: String,
    pub map_verification: String,
    pub plan_authenticity: String,
    pub postal_address: String,
    pub city_town: String,
    pub residential_area: String,
    pub commercial_area: String,
    pub industrial_area: String,
    pub area_class: String,
    pub urban_class: String,
    pub corporation_limits: String,
    pub state_enactments: String,
    pub boundaries: Boundaries,
    pub built_up_area: String,
    pub udsl: String,
    pub coordinates: String,
    pub occupancy: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Apartment {
    pub nature: String,
    pub location: String,
    pub survey_block_no: String,
    pub tp_fp_no: String,
    pub municipality: String,
    pub door_street_pin: String,
    pub locality: String,
    pub construction_year: String,
    pub floors: String,
    pub structure: String,
    pub dwelling_units: String,
    pub construction_quality: String,
    pub appearance: String,
    pub maintenance: String,
    pub lift: String,
    pub water_supply: String,
    pub sewerage: String,
    pub car_parking: String,
    pub compound_wall: String,
    pub pavement: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flat {
    pub floor: String,
    pub door_no: String,
    pub specification: String,
    pub roof: String,
    pub flooring: String,
    pub doors: String,
    pub windows: String,
    pub fittings: String,
    pub finishing: String,
    pub house_tax: String,
    pub assessment_no: String,
    pub tax_paid_by: String,
    pub tax_amount: String,
    pub electricity_connection: String,
    pub meter_card_name: String,
    pub maintenance: String,
    pub sale_deed_name: String,
    pub undivided_land_area: String,
    pub fsi: String,
    pub class: String,
    pub usage: String,
    pub occupancy: String,
    pub monthly_rent: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Marketability {
    pub marketability: String,
    pub positive_factors: String,
    pub negative_factors: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rate {
    /// How the fair market value was estimated (market enquiry narrative).
    pub market_basis: String,
    pub comparable_rate: String,
    pub adopted_basis: String,
    pub building_services: String,
    pub land_others: String,
    pub guideline_rate: String,
    /// Registrar's guideline (jantri) rate per sq. mt.
    pub jantri_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositeRate {
    pub depreciated_building_rate: String,
    pub replacement_cost: String,
    pub building_age: String,
    pub building_life: String,
    pub depreciation_percent: String,
    pub depreciated_ratio: String,
    pub land_rate_method: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Valuation {
    /// Sq. mt.
    pub carpet_area: f64,
    /// Adopted composite rate per sq. mt. of carpet area.
    pub adopted_rate: f64,
    pub furniture_fixtures: f64,
    pub sale_deed_value: Option<f64>,
    pub remarks: String,
    pub documents_shown: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Declaration {
    /// Long form used in the declaration, e.g. `30th October, 2025`.
    pub inspection_date: String,
    /// Date the enclosure refers to, e.g. `30/10/2025`.
    pub report_reference_date: String,
    pub place: String,
    pub date: String,
    pub valuer_name: String,
}

impl ValuationReport {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn figures(&self) -> Figures {
        Figures::compute(self)
    }
}

pub fn load_report(path: &Path) -> Result<ValuationReport, Error> {
    let json = std::fs::read_to_string(path)?;
    let report = ValuationReport::from_json(&json)?;
    log::info!("Loaded report for {:?} from {}", report.general.owner_name, path.display());
    Ok(report)
}
