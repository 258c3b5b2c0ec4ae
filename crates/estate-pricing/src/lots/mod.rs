//! Lot registry: the fixed dataset of sellable units used by the
//! profitability calculator.

mod domain;
mod loader;
mod registry;

pub use domain::{Lot, LotOptions, LotSummary, PaymentPlan};
pub use loader::DatasetFormat;
pub use registry::{LotRegistry, RegistryError};
