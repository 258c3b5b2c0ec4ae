use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilityReport {
    pub lot: LotDetails,
    pub payment: PaymentSummary,
    pub price_projection: PriceProjection,
    pub hotel_income: HotelIncome,
    pub summary: ReturnSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotDetails {
    pub code: String,
    pub building: String,
    pub number: u32,
    pub floor: i32,
    pub area: f64,
    pub rooms: u32,
    pub size: String,
    pub view: String,
    pub view_crm: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummary {
    pub installment: bool,
    pub purchase_price: f64,
    pub site_price_sqm: Option<f64>,
    pub full_payment_price: Option<f64>,
    pub installment_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceProjection {
    pub years: Vec<i32>,
    pub prices: Vec<f64>,
    /// Growth applied to reach each point; the purchase year carries 0.
    pub growth_rates: Vec<f64>,
    pub key_delivery_date: String,
    pub price_at_delivery: f64,
    pub growth_to_delivery: f64,
    pub profit_at_delivery: f64,
    pub price_sqm_at_delivery: f64,
    pub horizon_year: i32,
    pub price_at_horizon: f64,
    pub profit_at_horizon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelIncome {
    pub years: Vec<HotelYearReport>,
    pub total_income_10y: f64,
    pub avg_annual_income: f64,
    pub avg_annual_yield: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelYearReport {
    pub year: i32,
    pub occupancy: f64,
    pub adr: f64,
    pub accommodation_rate: f64,
    pub breakfast_rate: f64,
    pub children_rate: f64,
    pub coworking_rate: f64,
    pub gross_revenue: f64,
    pub gross_accommodation: f64,
    pub management_expense: f64,
    pub owner_income: f64,
    pub monthly_income: f64,
    pub annual_yield: f64,
    pub price_growth_profit: f64,
    pub cumulative_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSummary {
    pub total_return_10y: f64,
    pub avg_annual_total: f64,
    pub avg_annual_total_yield: f64,
    pub payback_hotel_years: Option<u32>,
    pub payback_total_years: Option<u32>,
}
