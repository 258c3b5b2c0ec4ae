use crate::pricing::tables::Table;
use chrono::NaiveDate;

pub const KEY_DELIVERY_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2029, 11, 1) {
    Some(date) => date,
    None => panic!("key delivery date must be a calendar date"),
};

pub const BASE_YEAR: i32 = 2025;

/// Fifteen years of resale price growth starting from the purchase year.
pub const PRICE_GROWTH_RATES: [f64; 15] = [
    0.15, 0.15, 0.15, 0.15, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02,
];

/// Hotel occupancy for the ten operating years following key delivery.
pub const OCCUPANCY_RATES: [f64; 10] = [0.35, 0.44, 0.59, 0.65, 0.65, 0.65, 0.65, 0.65, 0.65, 0.65];

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MANAGEMENT_EXPENSE_RATIO: f64 = 0.50;
pub const ADR_INDEXATION: f64 = 0.08;

pub const BREAKFAST_RATE: f64 = 3_500.0;
pub const CHILDREN_RATE: f64 = 50.0;
pub const COWORKING_RATE: f64 = 50.0;

const FALLBACK_SIZE: &str = "S";
const FALLBACK_VIEW: &str = "Двор";
const FALLBACK_RATE: f64 = 14_400.0;

/// Base nightly accommodation rate by apartment size and CRM view.
#[derive(Debug)]
pub struct AccommodationRates {
    rows: &'static [(&'static str, Table<&'static str, f64>)],
}

impl AccommodationRates {
    /// Unknown sizes price as `S`, unknown views as the courtyard column.
    pub fn rate(&self, size: &str, view_crm: &str) -> f64 {
        self.row(size)
            .or_else(|| self.row(FALLBACK_SIZE))
            .and_then(|row| row.get(&view_crm).or_else(|| row.get(&FALLBACK_VIEW)))
            .unwrap_or(FALLBACK_RATE)
    }

    fn row(&self, size: &str) -> Option<&Table<&'static str, f64>> {
        self.rows
            .iter()
            .find(|(candidate, _)| *candidate == size)
            .map(|(_, row)| row)
    }
}

pub static ACCOMMODATION_RATES: AccommodationRates = AccommodationRates {
    rows: &[
        (
            "XS",
            Table::new(
                "accommodation rate",
                &[
                    ("ул.Морская", 14_400.0),
                    ("Двор", 14_832.0),
                    ("Море", 15_276.96),
                    ("Озеро", 15_735.27),
                ],
            ),
        ),
        (
            "S",
            Table::new(
                "accommodation rate",
                &[
                    ("ул.Морская", 14_688.0),
                    ("Двор", 15_128.64),
                    ("Море", 15_582.50),
                    ("Озеро", 16_049.97),
                ],
            ),
        ),
        (
            "M",
            Table::new(
                "accommodation rate",
                &[
                    ("ул.Морская", 16_891.20),
                    ("Двор", 17_397.94),
                    ("Море", 17_919.87),
                    ("Озеро", 18_457.47),
                ],
            ),
        ),
        (
            "L",
            Table::new(
                "accommodation rate",
                &[
                    ("ул.Морская", 18_242.50),
                    ("Двор", 18_789.77),
                    ("Море", 19_353.46),
                    ("Озеро", 19_934.07),
                ],
            ),
        ),
        (
            "XL",
            Table::new(
                "accommodation rate",
                &[
                    ("ул.Морская", 20_066.75),
                    ("Двор", 20_668.75),
                    ("Море", 21_288.81),
                    ("Озеро", 21_927.47),
                ],
            ),
        ),
    ],
};

/// Market and hotel-operation assumptions behind a profitability report.
#[derive(Debug, Clone)]
pub struct ProfitabilityAssumptions {
    pub key_delivery_date: NaiveDate,
    pub base_year: i32,
    pub price_growth_rates: [f64; 15],
    pub occupancy_rates: [f64; 10],
    pub days_per_year: f64,
    pub management_expense_ratio: f64,
    pub adr_indexation: f64,
    pub breakfast_rate: f64,
    pub children_rate: f64,
    pub coworking_rate: f64,
    pub accommodation_rates: &'static AccommodationRates,
}

impl ProfitabilityAssumptions {
    pub fn standard() -> Self {
        Self {
            key_delivery_date: KEY_DELIVERY_DATE,
            base_year: BASE_YEAR,
            price_growth_rates: PRICE_GROWTH_RATES,
            occupancy_rates: OCCUPANCY_RATES,
            days_per_year: DAYS_PER_YEAR,
            management_expense_ratio: MANAGEMENT_EXPENSE_RATIO,
            adr_indexation: ADR_INDEXATION,
            breakfast_rate: BREAKFAST_RATE,
            children_rate: CHILDREN_RATE,
            coworking_rate: COWORKING_RATE,
            accommodation_rates: &ACCOMMODATION_RATES,
        }
    }

    /// Last year of the resale price curve.
    pub fn horizon_year(&self) -> i32 {
        self.base_year + self.price_growth_rates.len() as i32
    }
}

impl Default for ProfitabilityAssumptions {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accommodation_rate_reads_size_and_view() {
        assert_eq!(ACCOMMODATION_RATES.rate("S", "Двор"), 15_128.64);
        assert_eq!(ACCOMMODATION_RATES.rate("XL", "Озеро"), 21_927.47);
        assert_eq!(ACCOMMODATION_RATES.rate("XS", "ул.Морская"), 14_400.0);
    }

    #[test]
    fn accommodation_rate_falls_back_to_small_courtyard() {
        assert_eq!(ACCOMMODATION_RATES.rate("XXL", "Горы"), 15_128.64);
        assert_eq!(ACCOMMODATION_RATES.rate("XXL", "Море"), 15_582.50);
        assert_eq!(ACCOMMODATION_RATES.rate("L", "Горы"), 18_789.77);
    }

    #[test]
    fn accommodation_rate_has_flat_floor_without_rows() {
        static EMPTY: AccommodationRates = AccommodationRates { rows: &[] };
        assert_eq!(EMPTY.rate("S", "Двор"), 14_400.0);
    }

    #[test]
    fn standard_horizon_is_fifteen_years_out() {
        let assumptions = ProfitabilityAssumptions::default();
        assert_eq!(assumptions.horizon_year(), 2040);
        assert_eq!(assumptions.key_delivery_date.to_string(), "2029-11-01");
    }
}
