use super::tables::{PARKING_DISCOUNT, PARKING_PRICES, STORAGE_DISCOUNT, STORAGE_PRICE_PER_SQM};
use super::ValidationError;
use crate::error::CalculationError;
use crate::rounding::{round_currency, round_whole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePricingRequest {
    pub area: f64,
    #[serde(default)]
    pub with_discount: bool,
}

impl StoragePricingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(ValidationError::new("area", "must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoragePriceBreakdown {
    pub area: f64,
    pub price_per_sqm: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingPricingRequest {
    pub parking_type: String,
    #[serde(default)]
    pub with_discount: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingPriceBreakdown {
    pub parking_type: String,
    pub base_price: f64,
    pub discount: f64,
    pub price: f64,
}

/// Discounted ancillary prices land on whole currency units, unlike the
/// two-decimal apartment prices.
fn apply_discount(price: f64, discount: f64) -> f64 {
    round_whole(price * (1.0 - discount))
}

pub fn compute_storage_price(area: f64, with_discount: bool) -> StoragePriceBreakdown {
    let (price_per_sqm, discount) = if with_discount {
        (
            apply_discount(STORAGE_PRICE_PER_SQM, STORAGE_DISCOUNT),
            STORAGE_DISCOUNT,
        )
    } else {
        (STORAGE_PRICE_PER_SQM, 0.0)
    };

    StoragePriceBreakdown {
        area,
        price_per_sqm,
        discount,
        total: round_currency(price_per_sqm * area),
    }
}

pub fn compute_parking_price(
    parking_type: &str,
    with_discount: bool,
) -> Result<ParkingPriceBreakdown, CalculationError> {
    let base_price = PARKING_PRICES.lookup_required(&parking_type)?;
    let (price, discount) = if with_discount {
        (apply_discount(base_price, PARKING_DISCOUNT), PARKING_DISCOUNT)
    } else {
        (base_price, 0.0)
    };

    Ok(ParkingPriceBreakdown {
        parking_type: parking_type.to_string(),
        base_price,
        discount,
        price,
    })
}
