//! Table-driven price calculators for apartments, storage rooms and parking.

mod ancillary;
mod apartment;
mod options;
pub mod tables;

pub use ancillary::{
    compute_parking_price, compute_storage_price, ParkingPriceBreakdown, ParkingPricingRequest,
    StoragePriceBreakdown, StoragePricingRequest,
};
pub use apartment::{
    compute_apartment_price, ApartmentPriceBreakdown, ApartmentPricingRequest, AreaBreakdown,
    CoefficientBreakdown, CrmLayer, PricingLayer, SiteLayer,
};
pub use options::{list_dropdown_options, DropdownOptions, SizeRange, SizeRangeRow};

/// A request field outside the numeric bounds accepted at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }
}
