use super::{
    Apartment, Boundaries, CompositeRate, Declaration, Flat, General, Header, Marketability,
    Rate, Valuation, ValuationReport,
};

fn s(text: &str) -> String {
    text.to_string()
}

const ADDRESS: &str = "Flat No. A/503, 5th Floor, Tower A, \
    \"Brookfieldz Devbhumi Residency\", Nr. Tulsidham Cross Road, Manjalpur, Vadodara - 390020.";

const MARKET_BASIS: &str = "The estimate of Fair Market Value is based on situation, \
    location, size, shape, road width, Neighborhood, accessibility, frontage, environmental \
    aspects, demand and supply. The property rate is considered after information received by \
    surrounding property holders. Also necessary information has been collected from nearby \
    occupant. Our market inquiry among nearby occupant has revealed that similar sized property \
    in the vicinity of the subject property is available in a range from Rs. 60000-65000 per \
    sq. Mt. based on Carpet area.";

impl ValuationReport {
    /// Flat A/503, Brookfieldz Devbhumi Residency, Vadodara: the report the
    /// fixed layout was drawn up for.
    pub fn sample() -> Self {
        Self {
            header: Header {
                bank_name: s("Gujarat Gramin Bank , Vadodara"),
                branch_name: s("Manjalpur Branch"),
                file_no: s("06GGB1025 10"),
                report_date: s("31-Oct-2025"),
            },
            general: General {
                purpose: s("Financial Assistance for loan from GGB Bank"),
                inspection_date: s("30-Oct-2025"),
                valuation_date: s("31-Oct-2025"),
                mortgage_deed: s("Reg. No. 7204, Dated: 28/05/2025"),
                mortgage_deed_between: s(
                    "Hemanshu Haribhai Patel & GGB Manjalpur Branch - Mr. Sanjaykumar",
                ),
                previous_valuation_report: s(
                    "Issued By I S Associates Pvt. Ltd. On Dated: 20/03/2025",
                ),
                previous_valuation_in_favor_of: s("Mr. Hemanshu Haribhai Patel"),
                approved_plan_no: s(
                    "Approved by Vadodara Municpal Corporation, Ward No. 4, Order No.: \
                     RAH-SHB/19/20-21, Date: 26/11/2020",
                ),
                owner_name: s("Hemanshu Haribhai Patel"),
                property_description: s(
                    "It is a 3bhk Residential Flat at 5th Floor of Tower A of Brookfieldz \
                     Devbhumi Residency, Flat No. A/503.",
                ),
                plot_survey_no: s(
                    "R.S. No. 101, 102/2, 106/2 Paiki 2, T.P.S. No. 29, F.P. No. 9+24, At: \
                     Manjalpur, Sub District & District: Vadodara.",
                ),
                door_no: s(ADDRESS),
                tp_village: s("Manjalpur"),
                ward_taluka: s("Vadodara"),
                mandal_district: s("Vadodara"),
                layout_plan_date: s("26-Nov-2020"),
                approved_map_authority: s("Vadodara Municipal Corporation"),
                map_verification: s(
                    "Original Documents Not Produced To the Valuer For Scrutinity. We have \
                     verified scan copy of original.",
                ),
                plan_authenticity: s("Property is constructed as per approved plan"),
                postal_address: s(ADDRESS),
                city_town: s("Vadodara"),
                residential_area: s("Yes"),
                commercial_area: s("No"),
                industrial_area: s("No"),
                area_class: s("Middle Class Area"),
                urban_class: s("Urban"),
                corporation_limits: s("Vadodara Municipal Corporation"),
                state_enactments: s("As Per General Development Control Regulation."),
                boundaries: Boundaries {
                    east: s("Tower B"),
                    west: s("Staircase, Passage"),
                    north: s("36 Mt. Wide Road"),
                    south: s("Flat No. 501, Tower B"),
                },
                built_up_area: s("NA"),
                udsl: s("20.49"),
                coordinates: s("22\u{B0}16'13.5\"N 73\u{B0}11'41.8\"E"),
                occupancy: s("Vacant"),
            },
            apartment: Apartment {
                nature: s("Residential Flat"),
                location: s("Vadodara"),
                survey_block_no: s("R.S. No. 101, 102/2, 106/2 Paiki 2"),
                tp_fp_no: s("T.P.S. No. 29, F.P. No. 3+24"),
                municipality: s("Vadodara Municipal Corporation"),
                door_street_pin: s("390011"),
                locality: s("Residential Flat in Developed Area."),
                construction_year: s("2025"),
                floors: s("Basement + Ground Floor + 7 Upper Floors"),
                structure: s("RCC Structure"),
                dwelling_units: s("As Per Plan"),
                construction_quality: s("Standard"),
                appearance: s("Good"),
                maintenance: s("Good"),
                lift: s("Yes"),
                water_supply: s("Yes"),
                sewerage: s("Yes"),
                car_parking: s("Yes"),
                compound_wall: s("Yes"),
                pavement: s("Yes"),
            },
            flat: Flat {
                floor: s("5th Floor"),
                door_no: s("Flat No. A-503"),
                specification: s("3BHK Residential Flat"),
                roof: s("RCC Slab"),
                flooring: s("Vitrified Tiles"),
                doors: s("Wooden Framed Flush Door"),
                windows: s("Section Windows"),
                fittings: s("Good"),
                finishing: s("Interior Finishing"),
                house_tax: s("NA"),
                assessment_no: s("NA"),
                tax_paid_by: s("NA"),
                tax_amount: s("NA"),
                electricity_connection: s("NA"),
                meter_card_name: s("NA"),
                maintenance: s("Well Maintained"),
                sale_deed_name: s("Hemanshu Haribhai Patel"),
                undivided_land_area: s("20.49"),
                fsi: s("2.7"),
                class: s("Medium"),
                usage: s("Used As Residential Flat"),
                occupancy: s("Vacant"),
                monthly_rent: s("Not Applicable"),
            },
            marketability: Marketability {
                marketability: s("Good"),
                positive_factors: s("Prposed Fully Developed Scheme"),
                negative_factors: s("The Unforeseen Events"),
            },
            rate: Rate {
                market_basis: s(MARKET_BASIS),
                comparable_rate: s(MARKET_BASIS),
                adopted_basis: s(
                    "I have adopted market approach method for valuation of the property. \
                     Local Inquiry as well as market Survey",
                ),
                building_services: s("24 x 7 Water Supply & Security"),
                land_others: s("Fully Developed Scheme & Interior"),
                guideline_rate: s(
                    "Jantri rate: Rs. 23400/- per sq. mt. for composite rate for the year 2023.",
                ),
                jantri_rate: 23_400.0,
            },
            composite: CompositeRate {
                depreciated_building_rate: s("Consider In Valuation"),
                replacement_cost: s("Consider In Valuation"),
                building_age: s("0 Years"),
                building_life: s("50 Years"),
                depreciation_percent: s("N.A."),
                depreciated_ratio: s("N.A."),
                land_rate_method: s("Composite Rate Method Of Valuation"),
            },
            valuation: Valuation {
                carpet_area: 68.93,
                adopted_rate: 64_580.0,
                furniture_fixtures: 1_500_000.0,
                sale_deed_value: None,
                remarks: s("Rate is given on Carpet Area."),
                documents_shown: s("Mortgage Deed, Approved Plan, Previous Valuation Report"),
            },
            limiting_conditions: Vec::new(),
            declaration: Declaration {
                inspection_date: s("30th October, 2025"),
                report_reference_date: s("30/10/2025"),
                place: s("Vadodara"),
                date: s("31/10/2025"),
                valuer_name: s("MAHIM ARCHITECTS"),
            },
        }
    }
}
