use estate_pricing::config::AppConfig;
use estate_pricing::error::AppError;
use estate_pricing::lots::LotRegistry;
use estate_pricing::PricingService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Dataset path from the command line, falling back to `APP_LOTS_PATH`.
pub(crate) fn resolve_lots_path(cli_override: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match cli_override {
        Some(path) => Ok(path),
        None => Ok(AppConfig::load()?.data.lots_path),
    }
}

pub(crate) fn pricing_service(lots_path: &Path) -> Result<Arc<PricingService>, AppError> {
    let registry = LotRegistry::from_path(lots_path)?;
    Ok(Arc::new(PricingService::new(Arc::new(registry))))
}

/// Service for commands that never touch the lot registry.
pub(crate) fn catalog_service() -> PricingService {
    PricingService::new(Arc::new(LotRegistry::default()))
}
