use super::assumptions::ProfitabilityAssumptions;
use super::projection::PriceCurve;
use chrono::Datelike;

/// One operating year of the apartment in the hotel rental pool.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HotelYear {
    pub(crate) year: i32,
    pub(crate) occupancy: f64,
    pub(crate) accommodation: f64,
    pub(crate) breakfast: f64,
    pub(crate) children: f64,
    pub(crate) coworking: f64,
    pub(crate) adr: f64,
    pub(crate) gross_revenue: f64,
    pub(crate) gross_accommodation: f64,
    pub(crate) management_expense: f64,
    pub(crate) owner_income: f64,
    pub(crate) annual_yield: f64,
    pub(crate) price_growth_profit: f64,
    pub(crate) cumulative_income: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HotelSchedule {
    pub(crate) years: Vec<HotelYear>,
    pub(crate) total_income: f64,
    pub(crate) payback_hotel_years: Option<u32>,
    pub(crate) payback_total_years: Option<u32>,
}

/// Project owner income for each occupancy year after key delivery.
///
/// Only accommodation revenue is shared with the management company and
/// paid out; breakfast, children and coworking sales stay in gross revenue.
pub(crate) fn project_hotel_income(
    accommodation_base: f64,
    purchase_price: f64,
    curve: &PriceCurve,
    assumptions: &ProfitabilityAssumptions,
) -> HotelSchedule {
    let first_year = assumptions.key_delivery_date.year() + 1;
    let mut years = Vec::with_capacity(assumptions.occupancy_rates.len());
    let mut cumulative_income = 0.0;
    let mut payback_hotel_years = None;
    let mut payback_total_years = None;

    for (index, occupancy) in assumptions.occupancy_rates.iter().copied().enumerate() {
        let year = first_year + index as i32;
        let factor = (1.0 + assumptions.adr_indexation).powf(index as f64);

        let accommodation = accommodation_base * factor;
        let breakfast = assumptions.breakfast_rate * factor;
        let children = assumptions.children_rate * factor;
        let coworking = assumptions.coworking_rate * factor;
        let adr = accommodation + breakfast + children + coworking;

        let gross_revenue = adr * occupancy * assumptions.days_per_year;
        let gross_accommodation = accommodation * occupancy * assumptions.days_per_year;
        let management_expense = gross_accommodation * assumptions.management_expense_ratio;
        let owner_income = gross_accommodation - management_expense;
        let annual_yield = owner_income / purchase_price;

        cumulative_income += owner_income;
        let price_growth_profit = curve.profit_in(year);
        let operating_years = index as u32 + 1;

        if payback_hotel_years.is_none() && cumulative_income >= purchase_price {
            payback_hotel_years = Some(operating_years);
        }
        if payback_total_years.is_none()
            && cumulative_income + price_growth_profit >= purchase_price
        {
            payback_total_years = Some(operating_years);
        }

        years.push(HotelYear {
            year,
            occupancy,
            accommodation,
            breakfast,
            children,
            coworking,
            adr,
            gross_revenue,
            gross_accommodation,
            management_expense,
            owner_income,
            annual_yield,
            price_growth_profit,
            cumulative_income,
        });
    }

    HotelSchedule {
        years,
        total_income: cumulative_income,
        payback_hotel_years,
        payback_total_years,
    }
}
