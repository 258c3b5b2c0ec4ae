use super::tables::{
    BASE_PRICES, BOOKING_FEE, BUILDING_COEFFICIENTS, ELEVATOR_COEFFICIENTS,
    FLOOR_COEFFICIENTS, GEOMETRY_COEFFICIENTS, LAYOUT_COEFFICIENTS, MAX_APARTMENT_DISCOUNT,
    POSITION_COEFFICIENTS, SIZE_COEFFICIENTS, SUMMER_AREA_FACTOR, UNITS_ON_FLOOR_COEFFICIENTS,
    VIEW_COEFFICIENTS,
};
use super::ValidationError;
use crate::error::CalculationError;
use crate::rounding::{round_coefficient, round_currency};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Attributes of an apartment as entered in the price calculator.
///
/// Categorical fields stay as their published labels: an unknown label on a
/// coefficient attribute simply contributes nothing to the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentPricingRequest {
    pub apartment_type: String,
    pub floor: u32,
    pub area_total: f64,
    pub area_summer: f64,
    pub size: String,
    pub layout: String,
    pub geometry: String,
    pub elevator_zone: String,
    pub view: String,
    pub position: String,
    pub units_on_floor: u32,
    pub building: String,
    #[serde(default)]
    pub price_adjustment: f64,
}

impl ApartmentPricingRequest {
    /// Numeric constraints enforced at the service boundary. The engine itself
    /// accepts any finite input, including a summer area larger than the total.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=12).contains(&self.floor) {
            return Err(ValidationError::new("floor", "must be between 1 and 12"));
        }
        if !self.area_total.is_finite() || self.area_total <= 0.0 {
            return Err(ValidationError::new("area_total", "must be greater than 0"));
        }
        if !self.area_summer.is_finite() || self.area_summer < 0.0 {
            return Err(ValidationError::new("area_summer", "must not be negative"));
        }
        if self.units_on_floor < 1 {
            return Err(ValidationError::new("units_on_floor", "must be at least 1"));
        }
        if !self.price_adjustment.is_finite() {
            return Err(ValidationError::new("price_adjustment", "must be a finite fraction"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApartmentPriceBreakdown {
    pub input: ApartmentPricingRequest,
    pub areas: AreaBreakdown,
    pub coefficients: CoefficientBreakdown,
    pub pricing: PricingLayer,
    pub crm: CrmLayer,
    pub site: SiteLayer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaBreakdown {
    pub total: f64,
    pub summer: f64,
    pub summer_with_coeff: f64,
    pub without_summer: f64,
    /// Reported only; budgets are always computed from the total area.
    pub with_coeff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientBreakdown {
    pub base_price: f64,
    pub floor: f64,
    pub size: f64,
    pub layout: f64,
    pub geometry: f64,
    pub elevator: f64,
    pub view: f64,
    pub position: f64,
    pub units_on_floor: f64,
    pub building: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingLayer {
    pub price_per_sqm: f64,
    pub budget: f64,
    pub adjustment: f64,
    pub final_price_per_sqm: f64,
    pub final_budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrmLayer {
    pub max_discount: f64,
    pub price_per_sqm: f64,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLayer {
    pub booking_fee: f64,
    pub price_per_sqm: f64,
    pub budget: f64,
}

struct ResolvedCoefficients {
    floor: f64,
    size: f64,
    layout: f64,
    geometry: f64,
    elevator: f64,
    view: f64,
    position: f64,
    units_on_floor: f64,
    building: f64,
}

impl ResolvedCoefficients {
    fn resolve(request: &ApartmentPricingRequest) -> Self {
        Self {
            floor: FLOOR_COEFFICIENTS.lookup_with_default(&request.floor),
            size: SIZE_COEFFICIENTS.lookup_with_default(&request.size.as_str()),
            layout: LAYOUT_COEFFICIENTS.lookup_with_default(&request.layout.as_str()),
            geometry: GEOMETRY_COEFFICIENTS.lookup_with_default(&request.geometry.as_str()),
            elevator: ELEVATOR_COEFFICIENTS.lookup_with_default(&request.elevator_zone.as_str()),
            view: VIEW_COEFFICIENTS.lookup_with_default(&request.view.as_str()),
            position: POSITION_COEFFICIENTS.lookup_with_default(&request.position.as_str()),
            units_on_floor: UNITS_ON_FLOOR_COEFFICIENTS.lookup_with_default(&request.units_on_floor),
            building: BUILDING_COEFFICIENTS.lookup_with_default(&request.building.as_str()),
        }
    }

    // Summation order matches the sheet; the unrounded sum feeds the price.
    fn total(&self) -> f64 {
        self.floor
            + self.size
            + self.layout
            + self.geometry
            + self.elevator
            + self.view
            + self.position
            + self.units_on_floor
            + self.building
    }
}

pub fn compute_apartment_price(
    request: &ApartmentPricingRequest,
) -> Result<ApartmentPriceBreakdown, CalculationError> {
    let base_price = BASE_PRICES.lookup_required(&request.apartment_type.as_str())?;
    let area_total = request.area_total;

    let summer_with_coeff = round_currency(request.area_summer * SUMMER_AREA_FACTOR);
    let without_summer = round_currency(area_total - request.area_summer);
    let with_coeff = round_currency(without_summer + summer_with_coeff);

    let coefficients = ResolvedCoefficients::resolve(request);
    let total_coefficient = coefficients.total();

    let price_per_sqm = round_currency(base_price + base_price * total_coefficient);
    let budget = round_currency(price_per_sqm * area_total);

    let adjustment = request.price_adjustment;
    let final_price_per_sqm = round_currency(price_per_sqm + price_per_sqm * adjustment);
    let final_budget = round_currency(final_price_per_sqm * area_total);

    let crm_price_per_sqm = round_currency(final_price_per_sqm * (1.0 + MAX_APARTMENT_DISCOUNT));
    let crm_budget = round_currency(crm_price_per_sqm * area_total);

    let site_price_per_sqm = round_currency(crm_price_per_sqm + BOOKING_FEE);
    let site_budget = round_currency(site_price_per_sqm * area_total);

    debug!(
        apartment_type = %request.apartment_type,
        total_coefficient,
        final_price_per_sqm,
        "apartment priced"
    );

    Ok(ApartmentPriceBreakdown {
        input: request.clone(),
        areas: AreaBreakdown {
            total: area_total,
            summer: request.area_summer,
            summer_with_coeff,
            without_summer,
            with_coeff,
        },
        coefficients: CoefficientBreakdown {
            base_price,
            floor: coefficients.floor,
            size: coefficients.size,
            layout: coefficients.layout,
            geometry: coefficients.geometry,
            elevator: coefficients.elevator,
            view: coefficients.view,
            position: coefficients.position,
            units_on_floor: coefficients.units_on_floor,
            building: coefficients.building,
            total: round_coefficient(total_coefficient),
        },
        pricing: PricingLayer {
            price_per_sqm,
            budget,
            adjustment,
            final_price_per_sqm,
            final_budget,
        },
        crm: CrmLayer {
            max_discount: MAX_APARTMENT_DISCOUNT,
            price_per_sqm: crm_price_per_sqm,
            budget: crm_budget,
        },
        site: SiteLayer {
            booking_fee: BOOKING_FEE,
            price_per_sqm: site_price_per_sqm,
            budget: site_budget,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_room_request() -> ApartmentPricingRequest {
        ApartmentPricingRequest {
            apartment_type: "1К".to_string(),
            floor: 5,
            area_total: 45.0,
            area_summer: 5.0,
            size: "M".to_string(),
            layout: "Линейная".to_string(),
            geometry: "Правильная".to_string(),
            elevator_zone: "Зона 2".to_string(),
            view: "Двор юг".to_string(),
            position: "Стандарт".to_string(),
            units_on_floor: 26,
            building: "С1".to_string(),
            price_adjustment: 0.0,
        }
    }

    #[test]
    fn prices_reference_one_room_apartment() {
        let result = compute_apartment_price(&one_room_request()).expect("priced");

        assert_eq!(result.coefficients.base_price, 313_920.0);
        assert_eq!(result.coefficients.floor, 0.005);
        assert_eq!(result.coefficients.geometry, 0.03);
        assert_eq!(result.coefficients.total, 0.035);

        assert_eq!(result.areas.summer_with_coeff, 1.5);
        assert_eq!(result.areas.without_summer, 40.0);
        assert_eq!(result.areas.with_coeff, 41.5);

        assert_eq!(result.pricing.price_per_sqm, 324_907.2);
        assert_eq!(result.pricing.budget, 14_620_824.0);
        assert_eq!(result.pricing.final_price_per_sqm, 324_907.2);
        assert_eq!(result.pricing.final_budget, 14_620_824.0);

        assert_eq!(result.crm.price_per_sqm, 357_397.92);
        assert_eq!(result.crm.budget, 16_082_906.4);
        assert_eq!(result.site.price_per_sqm, 363_397.92);
        assert_eq!(result.site.budget, 16_352_906.4);
    }

    #[test]
    fn adjustment_and_premium_attributes_stack() {
        let request = ApartmentPricingRequest {
            apartment_type: "Ст".to_string(),
            floor: 12,
            area_total: 31.7,
            area_summer: 4.3,
            size: "XS".to_string(),
            layout: "Угловая".to_string(),
            geometry: "Неправильная".to_string(),
            elevator_zone: "Зона 1".to_string(),
            view: "Море".to_string(),
            position: "Окна на кровлю".to_string(),
            units_on_floor: 11,
            building: "С2".to_string(),
            price_adjustment: -0.03,
        };

        let result = compute_apartment_price(&request).expect("priced");

        assert_eq!(result.areas.summer_with_coeff, 1.29);
        assert_eq!(result.areas.without_summer, 27.4);
        assert_eq!(result.areas.with_coeff, 28.69);
        assert_eq!(result.coefficients.total, 0.51);
        assert_eq!(result.pricing.price_per_sqm, 493_770.0);
        assert_eq!(result.pricing.budget, 15_652_509.0);
        assert_eq!(result.pricing.final_price_per_sqm, 478_956.9);
        assert_eq!(result.pricing.final_budget, 15_182_933.73);
        assert_eq!(result.crm.price_per_sqm, 526_852.59);
        assert_eq!(result.crm.budget, 16_701_227.1);
        assert_eq!(result.site.price_per_sqm, 532_852.59);
        assert_eq!(result.site.budget, 16_891_427.1);
    }

    #[test]
    fn unknown_attribute_labels_are_neutral() {
        let request = ApartmentPricingRequest {
            apartment_type: "2К".to_string(),
            floor: 1,
            area_total: 72.35,
            area_summer: 80.0,
            size: "Гигант".to_string(),
            layout: "Г-образная".to_string(),
            geometry: "Правильная".to_string(),
            elevator_zone: "Зона 9".to_string(),
            view: "Космос".to_string(),
            position: "Стандарт".to_string(),
            units_on_floor: 99,
            building: "С9".to_string(),
            price_adjustment: 0.05,
        };

        let result = compute_apartment_price(&request).expect("unknown labels never fail");

        assert_eq!(result.coefficients.size, 0.0);
        assert_eq!(result.coefficients.view, 0.0);
        assert_eq!(result.coefficients.units_on_floor, 0.0);
        assert_eq!(result.coefficients.total, -0.015);
        assert_eq!(result.areas.without_summer, -7.65);
        assert_eq!(result.areas.with_coeff, 16.35);
        assert_eq!(result.pricing.price_per_sqm, 302_769.3);
        assert_eq!(result.pricing.final_price_per_sqm, 317_907.77);
        assert_eq!(result.pricing.final_budget, 23_000_627.16);
        assert_eq!(result.site.budget, 25_734_790.09);
    }

    #[test]
    fn unknown_apartment_type_is_rejected() {
        let mut request = one_room_request();
        request.apartment_type = "Пентхаус".to_string();

        let err = compute_apartment_price(&request).expect_err("type is required");
        assert_eq!(
            err,
            CalculationError::UnknownCategory {
                table: "apartment type",
                key: "Пентхаус".to_string(),
            }
        );
    }

    #[test]
    fn validation_enforces_numeric_bounds_only() {
        let mut request = one_room_request();
        assert!(request.validate().is_ok());

        request.area_summer = 60.0;
        assert!(request.validate().is_ok(), "summer area above total is accepted");

        request.floor = 13;
        assert_eq!(request.validate().unwrap_err().field, "floor");

        request.floor = 5;
        request.area_total = 0.0;
        assert_eq!(request.validate().unwrap_err().field, "area_total");

        request.area_total = 45.0;
        request.units_on_floor = 0;
        assert_eq!(request.validate().unwrap_err().field, "units_on_floor");
    }

    #[test]
    fn request_defaults_price_adjustment_to_zero() {
        let payload = serde_json::json!({
            "apartment_type": "1К",
            "floor": 5,
            "area_total": 45,
            "area_summer": 5,
            "size": "M",
            "layout": "Линейная",
            "geometry": "Правильная",
            "elevator_zone": "Зона 2",
            "view": "Двор юг",
            "position": "Стандарт",
            "units_on_floor": 26,
            "building": "С1"
        });

        let request: ApartmentPricingRequest =
            serde_json::from_value(payload).expect("payload deserializes");
        assert_eq!(request, one_room_request());
    }
}
