use std::sync::Arc;

use crate::error::AppError;
use crate::lots::{LotOptions, LotRegistry};
use crate::pricing::{
    self, ApartmentPriceBreakdown, ApartmentPricingRequest, DropdownOptions,
    ParkingPriceBreakdown, ParkingPricingRequest, StoragePriceBreakdown, StoragePricingRequest,
};
use crate::profitability::{
    self, ProfitabilityAssumptions, ProfitabilityReport, ProfitabilityRequest,
};

/// Entry point shared by the HTTP routes and the command line.
///
/// Requests are validated here so both surfaces reject the same inputs.
#[derive(Debug, Clone)]
pub struct PricingService {
    registry: Arc<LotRegistry>,
    assumptions: ProfitabilityAssumptions,
}

impl PricingService {
    pub fn new(registry: Arc<LotRegistry>) -> Self {
        Self::with_assumptions(registry, ProfitabilityAssumptions::standard())
    }

    pub fn with_assumptions(
        registry: Arc<LotRegistry>,
        assumptions: ProfitabilityAssumptions,
    ) -> Self {
        Self {
            registry,
            assumptions,
        }
    }

    pub fn registry(&self) -> &LotRegistry {
        &self.registry
    }

    pub fn compute_apartment_price(
        &self,
        request: &ApartmentPricingRequest,
    ) -> Result<ApartmentPriceBreakdown, AppError> {
        request.validate()?;
        Ok(pricing::compute_apartment_price(request)?)
    }

    pub fn compute_storage_price(
        &self,
        request: &StoragePricingRequest,
    ) -> Result<StoragePriceBreakdown, AppError> {
        request.validate()?;
        Ok(pricing::compute_storage_price(
            request.area,
            request.with_discount,
        ))
    }

    pub fn compute_parking_price(
        &self,
        request: &ParkingPricingRequest,
    ) -> Result<ParkingPriceBreakdown, AppError> {
        Ok(pricing::compute_parking_price(
            &request.parking_type,
            request.with_discount,
        )?)
    }

    pub fn list_lot_options(&self) -> LotOptions {
        self.registry.list_by_building()
    }

    pub fn compute_profitability(
        &self,
        request: &ProfitabilityRequest,
    ) -> Result<ProfitabilityReport, AppError> {
        Ok(profitability::compute_profitability(
            &self.registry,
            &self.assumptions,
            &request.building,
            request.number,
            request.plan(),
        )?)
    }

    pub fn list_dropdown_options(&self) -> DropdownOptions {
        pricing::list_dropdown_options()
    }
}
