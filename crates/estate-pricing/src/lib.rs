pub mod config;
pub mod error;
pub mod lots;
pub mod pricing;
pub mod profitability;
pub mod rounding;
pub mod router;
pub mod service;
pub mod telemetry;

pub use router::pricing_router;
pub use service::PricingService;
