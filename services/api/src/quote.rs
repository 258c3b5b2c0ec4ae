use crate::infra::{catalog_service, pricing_service, resolve_lots_path};
use clap::Args;
use estate_pricing::error::AppError;
use estate_pricing::lots::LotOptions;
use estate_pricing::pricing::{
    ApartmentPriceBreakdown, ApartmentPricingRequest, DropdownOptions, ParkingPriceBreakdown,
    ParkingPricingRequest, StoragePriceBreakdown, StoragePricingRequest,
};
use estate_pricing::profitability::{ProfitabilityReport, ProfitabilityRequest};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ApartmentArgs {
    /// Apartment type label (Ст, 1К, 2К)
    #[arg(long = "type")]
    pub(crate) apartment_type: String,
    #[arg(long)]
    pub(crate) floor: u32,
    /// Total area in square meters, summer area included
    #[arg(long)]
    pub(crate) area_total: f64,
    /// Balcony and terrace area in square meters
    #[arg(long, default_value_t = 0.0)]
    pub(crate) area_summer: f64,
    #[arg(long)]
    pub(crate) size: String,
    #[arg(long)]
    pub(crate) layout: String,
    #[arg(long)]
    pub(crate) geometry: String,
    #[arg(long)]
    pub(crate) elevator_zone: String,
    #[arg(long)]
    pub(crate) view: String,
    #[arg(long, default_value = "Стандарт")]
    pub(crate) position: String,
    #[arg(long)]
    pub(crate) units_on_floor: u32,
    #[arg(long)]
    pub(crate) building: String,
    /// Signed fraction applied to the computed price per square meter
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub(crate) price_adjustment: f64,
    /// Print the raw breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ApartmentArgs {
    fn into_request(self) -> (ApartmentPricingRequest, bool) {
        let request = ApartmentPricingRequest {
            apartment_type: self.apartment_type,
            floor: self.floor,
            area_total: self.area_total,
            area_summer: self.area_summer,
            size: self.size,
            layout: self.layout,
            geometry: self.geometry,
            elevator_zone: self.elevator_zone,
            view: self.view,
            position: self.position,
            units_on_floor: self.units_on_floor,
            building: self.building,
            price_adjustment: self.price_adjustment,
        };
        (request, self.json)
    }
}

#[derive(Args, Debug)]
pub(crate) struct StorageArgs {
    /// Storage room area in square meters
    #[arg(long)]
    pub(crate) area: f64,
    /// Apply the storage discount
    #[arg(long)]
    pub(crate) discount: bool,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ParkingArgs {
    /// Parking type label, e.g. "VIP место"
    #[arg(long)]
    pub(crate) kind: String,
    /// Apply the parking discount
    #[arg(long)]
    pub(crate) discount: bool,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LotsArgs {
    /// Lot dataset path (defaults to APP_LOTS_PATH)
    #[arg(long)]
    pub(crate) lots: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProfitabilityArgs {
    #[arg(long)]
    pub(crate) building: String,
    #[arg(long)]
    pub(crate) number: u32,
    /// Price the lot on the installment plan instead of full payment
    #[arg(long)]
    pub(crate) installment: bool,
    /// Lot dataset path (defaults to APP_LOTS_PATH)
    #[arg(long)]
    pub(crate) lots: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OptionsArgs {
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_apartment(args: ApartmentArgs) -> Result<(), AppError> {
    let (request, json) = args.into_request();
    let breakdown = catalog_service().compute_apartment_price(&request)?;
    emit(json, &breakdown, render_apartment)
}

pub(crate) fn run_storage(args: StorageArgs) -> Result<(), AppError> {
    let request = StoragePricingRequest {
        area: args.area,
        with_discount: args.discount,
    };
    let breakdown = catalog_service().compute_storage_price(&request)?;
    emit(args.json, &breakdown, render_storage)
}

pub(crate) fn run_parking(args: ParkingArgs) -> Result<(), AppError> {
    let request = ParkingPricingRequest {
        parking_type: args.kind,
        with_discount: args.discount,
    };
    let breakdown = catalog_service().compute_parking_price(&request)?;
    emit(args.json, &breakdown, render_parking)
}

pub(crate) fn run_lots(args: LotsArgs) -> Result<(), AppError> {
    let path = resolve_lots_path(args.lots)?;
    let service = pricing_service(&path)?;
    emit(args.json, &service.list_lot_options(), render_lots)
}

pub(crate) fn run_profitability(args: ProfitabilityArgs) -> Result<(), AppError> {
    let path = resolve_lots_path(args.lots)?;
    let service = pricing_service(&path)?;
    let request = ProfitabilityRequest {
        building: args.building,
        number: args.number,
        installment: args.installment,
    };
    let report = service.compute_profitability(&request)?;
    emit(args.json, &report, render_profitability)
}

pub(crate) fn run_options(args: OptionsArgs) -> Result<(), AppError> {
    let options = catalog_service().list_dropdown_options();
    emit(args.json, &options, render_options)
}

fn emit<T: Serialize>(json: bool, value: &T, render: fn(&T) -> String) -> Result<(), AppError> {
    if json {
        let body = serde_json::to_string_pretty(value)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{body}");
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub(crate) fn render_apartment(breakdown: &ApartmentPriceBreakdown) -> String {
    let input = &breakdown.input;
    let areas = &breakdown.areas;
    let coefficients = &breakdown.coefficients;
    let mut out = String::new();

    out.push_str(&format!(
        "Apartment {} | building {} | floor {}\n",
        input.apartment_type, input.building, input.floor
    ));
    out.push_str(&format!(
        "Areas: total {} | summer {} (weighted {}) | without summer {} | with coefficient {}\n",
        areas.total, areas.summer, areas.summer_with_coeff, areas.without_summer, areas.with_coeff
    ));
    out.push_str(&format!(
        "Base price {} | total coefficient {}\n",
        money(coefficients.base_price),
        coefficients.total
    ));
    for (label, value) in [
        ("floor", coefficients.floor),
        ("size", coefficients.size),
        ("layout", coefficients.layout),
        ("geometry", coefficients.geometry),
        ("elevator", coefficients.elevator),
        ("view", coefficients.view),
        ("position", coefficients.position),
        ("units on floor", coefficients.units_on_floor),
        ("building", coefficients.building),
    ] {
        out.push_str(&format!("  - {label}: {value}\n"));
    }
    out.push_str(&format!(
        "Price: {} per sqm | budget {}\n",
        money(breakdown.pricing.price_per_sqm),
        money(breakdown.pricing.budget)
    ));
    out.push_str(&format!(
        "Final ({} adjustment): {} per sqm | budget {}\n",
        percent(breakdown.pricing.adjustment),
        money(breakdown.pricing.final_price_per_sqm),
        money(breakdown.pricing.final_budget)
    ));
    out.push_str(&format!(
        "CRM (max discount {}): {} per sqm | budget {}\n",
        percent(breakdown.crm.max_discount),
        money(breakdown.crm.price_per_sqm),
        money(breakdown.crm.budget)
    ));
    out.push_str(&format!(
        "Site (booking fee {}): {} per sqm | budget {}\n",
        money(breakdown.site.booking_fee),
        money(breakdown.site.price_per_sqm),
        money(breakdown.site.budget)
    ));
    out
}

pub(crate) fn render_storage(breakdown: &StoragePriceBreakdown) -> String {
    format!(
        "Storage {} sqm | {} per sqm (discount {}) | total {}\n",
        breakdown.area,
        money(breakdown.price_per_sqm),
        percent(breakdown.discount),
        money(breakdown.total)
    )
}

pub(crate) fn render_parking(breakdown: &ParkingPriceBreakdown) -> String {
    format!(
        "Parking {} | base {} (discount {}) | price {}\n",
        breakdown.parking_type,
        money(breakdown.base_price),
        percent(breakdown.discount),
        money(breakdown.price)
    )
}

pub(crate) fn render_lots(options: &LotOptions) -> String {
    let mut out = String::new();
    for building in &options.buildings {
        let lots = options.lots.get(building).map(Vec::as_slice).unwrap_or(&[]);
        out.push_str(&format!("Building {building} ({} lots)\n", lots.len()));
        for lot in lots {
            out.push_str(&format!(
                "  - {} | floor {} | {} sqm | {} rooms | {} | {}\n",
                lot.code, lot.floor, lot.area, lot.rooms, lot.size, lot.status
            ));
        }
    }
    out
}

pub(crate) fn render_profitability(report: &ProfitabilityReport) -> String {
    let projection = &report.price_projection;
    let hotel = &report.hotel_income;
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Lot {} | {} sqm | size {} | view {} ({}) | {}\n",
        report.lot.code,
        report.lot.area,
        report.lot.size,
        report.lot.view,
        report.lot.view_crm,
        report.lot.status
    ));
    out.push_str(&format!(
        "Purchase price ({}): {}\n",
        if report.payment.installment {
            "installment"
        } else {
            "full payment"
        },
        money(report.payment.purchase_price)
    ));
    out.push_str(&format!(
        "Key delivery {}: price {} ({} growth, profit {}, {} per sqm)\n",
        projection.key_delivery_date,
        money(projection.price_at_delivery),
        percent(projection.growth_to_delivery),
        money(projection.profit_at_delivery),
        money(projection.price_sqm_at_delivery)
    ));
    out.push_str(&format!(
        "Horizon {}: price {} (profit {})\n",
        projection.horizon_year,
        money(projection.price_at_horizon),
        money(projection.profit_at_horizon)
    ));
    out.push_str("Hotel income:\n");
    for year in &hotel.years {
        out.push_str(&format!(
            "  - {}: occupancy {} | ADR {} | owner income {} ({} monthly) | yield {} | cumulative {}\n",
            year.year,
            percent(year.occupancy),
            money(year.adr),
            money(year.owner_income),
            money(year.monthly_income),
            percent(year.annual_yield),
            money(year.cumulative_income)
        ));
    }
    out.push_str(&format!(
        "Hotel total {} | average {} per year ({})\n",
        money(hotel.total_income_10y),
        money(hotel.avg_annual_income),
        percent(hotel.avg_annual_yield)
    ));
    out.push_str(&format!(
        "Total return {} | average {} per year ({})\n",
        money(summary.total_return_10y),
        money(summary.avg_annual_total),
        percent(summary.avg_annual_total_yield)
    ));
    out.push_str(&format!(
        "Payback: hotel only {} | with price growth {}\n",
        payback(summary.payback_hotel_years),
        payback(summary.payback_total_years)
    ));
    out
}

fn payback(years: Option<u32>) -> String {
    match years {
        Some(years) => format!("{years} years"),
        None => "not reached".to_string(),
    }
}

pub(crate) fn render_options(options: &DropdownOptions) -> String {
    let mut out = String::new();
    let join = |values: &[&str]| values.join(", ");
    out.push_str(&format!("Apartment types: {}\n", join(&options.apartment_types)));
    out.push_str(&format!(
        "Floors: {}\n",
        options
            .floors
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("Sizes: {}\n", join(&options.sizes)));
    for row in &options.size_ranges {
        let ranges: Vec<String> = row
            .ranges
            .iter()
            .map(|range| format!("{} {}", range.size, range.range))
            .collect();
        out.push_str(&format!("  - {}: {}\n", row.apartment_type, ranges.join(", ")));
    }
    out.push_str(&format!("Layouts: {}\n", join(&options.layouts)));
    out.push_str(&format!("Geometries: {}\n", join(&options.geometries)));
    out.push_str(&format!("Elevator zones: {}\n", join(&options.elevator_zones)));
    out.push_str(&format!("Views: {}\n", join(&options.views)));
    out.push_str(&format!("Positions: {}\n", join(&options.positions)));
    out.push_str(&format!(
        "Units on floor: {}\n",
        options
            .units_on_floor
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("Buildings: {}\n", join(&options.buildings)));
    out.push_str(&format!("Parking types: {}\n", join(&options.parking_types)));
    out
}
