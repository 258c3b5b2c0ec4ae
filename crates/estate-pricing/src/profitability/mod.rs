//! Investment view of a purchased lot: resale price growth until the
//! horizon plus income from renting the unit through the hotel operator.

mod assumptions;
mod hotel;
mod projection;
mod report;

pub use assumptions::{
    AccommodationRates, ProfitabilityAssumptions, ACCOMMODATION_RATES, ADR_INDEXATION, BASE_YEAR,
    BREAKFAST_RATE, CHILDREN_RATE, COWORKING_RATE, DAYS_PER_YEAR, KEY_DELIVERY_DATE,
    MANAGEMENT_EXPENSE_RATIO, OCCUPANCY_RATES, PRICE_GROWTH_RATES,
};
pub use report::{
    HotelIncome, HotelYearReport, LotDetails, PaymentSummary, PriceProjection,
    ProfitabilityReport, ReturnSummary,
};

use crate::error::CalculationError;
use crate::lots::{Lot, LotRegistry, PaymentPlan};
use crate::rounding::{round_currency, round_ratio};
use chrono::Datelike;
use hotel::{project_hotel_income, HotelSchedule, HotelYear};
use projection::PriceCurve;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityRequest {
    pub building: String,
    pub number: u32,
    #[serde(default)]
    pub installment: bool,
}

impl ProfitabilityRequest {
    pub fn plan(&self) -> PaymentPlan {
        PaymentPlan::from_installment(self.installment)
    }
}

pub fn compute_profitability(
    registry: &LotRegistry,
    assumptions: &ProfitabilityAssumptions,
    building: &str,
    number: u32,
    plan: PaymentPlan,
) -> Result<ProfitabilityReport, CalculationError> {
    let lot = registry
        .find(building, number)
        .ok_or_else(|| CalculationError::LotNotFound {
            building: building.to_string(),
            number,
        })?;

    let purchase_price = match lot.price_for(plan) {
        Some(price) if price != 0.0 => price,
        _ => {
            return Err(CalculationError::MissingPriceData {
                building: lot.building.clone(),
                number: lot.number,
                plan: plan.label(),
            })
        }
    };

    let curve = PriceCurve::project(purchase_price, assumptions);
    let accommodation_base = assumptions
        .accommodation_rates
        .rate(&lot.size, &lot.view_crm);
    let schedule = project_hotel_income(accommodation_base, purchase_price, &curve, assumptions);

    debug!(
        lot = %lot.code,
        plan = plan.label(),
        purchase_price,
        accommodation_base,
        payback_hotel_years = ?schedule.payback_hotel_years,
        payback_total_years = ?schedule.payback_total_years,
        "profitability projected"
    );

    let price_projection = price_projection(lot, purchase_price, &curve, assumptions);
    let hotel_years = schedule.years.len().max(1) as f64;
    let avg_annual_income = schedule.total_income / hotel_years;
    let total_return = schedule.total_income + curve.horizon_profit();
    let avg_annual_total = total_return / hotel_years;

    Ok(ProfitabilityReport {
        lot: lot_details(lot),
        payment: PaymentSummary {
            installment: matches!(plan, PaymentPlan::Installment),
            purchase_price: round_currency(purchase_price),
            site_price_sqm: lot.site_price_sqm,
            full_payment_price: lot.full_payment_price.map(round_currency),
            installment_price: lot.installment_price.map(round_currency),
        },
        price_projection,
        hotel_income: hotel_income(&schedule, avg_annual_income, purchase_price),
        summary: ReturnSummary {
            total_return_10y: round_currency(total_return),
            avg_annual_total: round_currency(avg_annual_total),
            avg_annual_total_yield: round_ratio(avg_annual_total / purchase_price),
            payback_hotel_years: schedule.payback_hotel_years,
            payback_total_years: schedule.payback_total_years,
        },
    })
}

fn lot_details(lot: &Lot) -> LotDetails {
    LotDetails {
        code: lot.code.clone(),
        building: lot.building.clone(),
        number: lot.number,
        floor: lot.floor,
        area: lot.area,
        rooms: lot.rooms,
        size: lot.size.clone(),
        view: lot.view.clone(),
        view_crm: lot.view_crm.clone(),
        status: lot.status.clone(),
    }
}

fn price_projection(
    lot: &Lot,
    purchase_price: f64,
    curve: &PriceCurve,
    assumptions: &ProfitabilityAssumptions,
) -> PriceProjection {
    let price_at_delivery = curve
        .price_in(assumptions.key_delivery_date.year())
        .unwrap_or_else(|| curve.horizon_price());
    let profit_at_delivery = price_at_delivery - purchase_price;

    let growth_rates = std::iter::once(0.0)
        .chain(assumptions.price_growth_rates)
        .collect();

    PriceProjection {
        years: curve.years().collect(),
        prices: curve.prices().iter().copied().map(round_currency).collect(),
        growth_rates,
        key_delivery_date: assumptions.key_delivery_date.format("%Y-%m-%d").to_string(),
        price_at_delivery: round_currency(price_at_delivery),
        growth_to_delivery: round_ratio(profit_at_delivery / purchase_price),
        profit_at_delivery: round_currency(profit_at_delivery),
        price_sqm_at_delivery: round_currency(price_at_delivery / lot.area),
        horizon_year: assumptions.horizon_year(),
        price_at_horizon: round_currency(curve.horizon_price()),
        profit_at_horizon: round_currency(curve.horizon_profit()),
    }
}

fn hotel_income(
    schedule: &HotelSchedule,
    avg_annual_income: f64,
    purchase_price: f64,
) -> HotelIncome {
    HotelIncome {
        years: schedule.years.iter().map(hotel_year_report).collect(),
        total_income_10y: round_currency(schedule.total_income),
        avg_annual_income: round_currency(avg_annual_income),
        avg_annual_yield: round_ratio(avg_annual_income / purchase_price),
    }
}

fn hotel_year_report(year: &HotelYear) -> HotelYearReport {
    HotelYearReport {
        year: year.year,
        occupancy: year.occupancy,
        adr: round_currency(year.adr),
        accommodation_rate: round_currency(year.accommodation),
        breakfast_rate: round_currency(year.breakfast),
        children_rate: round_currency(year.children),
        coworking_rate: round_currency(year.coworking),
        gross_revenue: round_currency(year.gross_revenue),
        gross_accommodation: round_currency(year.gross_accommodation),
        management_expense: round_currency(year.management_expense),
        owner_income: round_currency(year.owner_income),
        monthly_income: round_currency(year.owner_income / 12.0),
        annual_yield: round_ratio(year.annual_yield),
        price_growth_profit: round_currency(year.price_growth_profit),
        cumulative_income: round_currency(year.cumulative_income),
    }
}
