use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::warn;

use crate::error::AppError;
use crate::pricing::{ApartmentPricingRequest, ParkingPricingRequest, StoragePricingRequest};
use crate::profitability::ProfitabilityRequest;
use crate::service::PricingService;

/// Router builder exposing the calculators and lot picker over HTTP.
pub fn pricing_router(service: Arc<PricingService>) -> Router {
    Router::new()
        .route("/api/options", get(options_handler))
        .route("/api/calculate/apartment", post(apartment_handler))
        .route("/api/calculate/storage", post(storage_handler))
        .route("/api/calculate/parking", post(parking_handler))
        .route("/api/profitability/lots", get(lots_handler))
        .route("/api/profitability/calculate", post(profitability_handler))
        .with_state(service)
}

fn respond<T: Serialize>(operation: &'static str, result: Result<T, AppError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            warn!(
                operation,
                status = error.status().as_u16(),
                error = %error,
                "request rejected"
            );
            error.into_response()
        }
    }
}

pub(crate) async fn options_handler(State(service): State<Arc<PricingService>>) -> Response {
    respond("options", Ok(service.list_dropdown_options()))
}

pub(crate) async fn apartment_handler(
    State(service): State<Arc<PricingService>>,
    Json(request): Json<ApartmentPricingRequest>,
) -> Response {
    respond("apartment", service.compute_apartment_price(&request))
}

pub(crate) async fn storage_handler(
    State(service): State<Arc<PricingService>>,
    Json(request): Json<StoragePricingRequest>,
) -> Response {
    respond("storage", service.compute_storage_price(&request))
}

pub(crate) async fn parking_handler(
    State(service): State<Arc<PricingService>>,
    Json(request): Json<ParkingPricingRequest>,
) -> Response {
    respond("parking", service.compute_parking_price(&request))
}

pub(crate) async fn lots_handler(State(service): State<Arc<PricingService>>) -> Response {
    respond("lots", Ok(service.list_lot_options()))
}

pub(crate) async fn profitability_handler(
    State(service): State<Arc<PricingService>>,
    Json(request): Json<ProfitabilityRequest>,
) -> Response {
    respond("profitability", service.compute_profitability(&request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lots::{DatasetFormat, LotRegistry};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const LOTS: &str = r#"[
        {"code": "С1-101", "building": "С1", "number": 101, "floor": 1, "area": 28.4,
         "rooms": 0, "size": "S", "view": "Двор юг", "view_crm": "Двор", "status": "Свободна",
         "site_price_sqm": 368500.0, "full_payment_price": 9514000.0, "installment_price": 10275000.0},
        {"code": "С1-512", "building": "С1", "number": 512, "floor": 5, "area": 52.6,
         "rooms": 1, "size": "L", "view": "Двор+море", "view_crm": "Море", "status": "Продана",
         "site_price_sqm": 382500.0, "full_payment_price": 18290000.0, "installment_price": null}
    ]"#;

    fn router() -> Router {
        let registry = LotRegistry::from_reader(LOTS.as_bytes(), DatasetFormat::Json)
            .expect("registry builds");
        pricing_router(Arc::new(PricingService::new(Arc::new(registry))))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn read(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn apartment_payload() -> Value {
        json!({
            "apartment_type": "1К",
            "floor": 5,
            "area_total": 45.0,
            "area_summer": 5.0,
            "size": "M",
            "layout": "Линейная",
            "geometry": "Правильная",
            "elevator_zone": "Зона 2",
            "view": "Двор юг",
            "position": "Стандарт",
            "units_on_floor": 26,
            "building": "С1"
        })
    }

    #[tokio::test]
    async fn apartment_route_returns_breakdown() {
        let (status, body) = post_json("/api/calculate/apartment", apartment_payload()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pricing"]["price_per_sqm"], json!(324907.2));
        assert_eq!(body["site"]["budget"], json!(16352906.4));
    }

    #[tokio::test]
    async fn apartment_route_rejects_out_of_range_floor() {
        let mut payload = apartment_payload();
        payload["floor"] = json!(13);

        let (status, body) = post_json("/api/calculate/apartment", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("floor"));
    }

    #[tokio::test]
    async fn apartment_route_rejects_unknown_type() {
        let mut payload = apartment_payload();
        payload["apartment_type"] = json!("Пентхаус");

        let (status, body) = post_json("/api/calculate/apartment", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("unknown apartment type: Пентхаус"));
    }

    #[tokio::test]
    async fn storage_and_parking_routes_price_discounts() {
        let (status, body) =
            post_json("/api/calculate/storage", json!({"area": 10.0, "with_discount": true}))
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], json!(2375000.0));

        let (status, body) = post_json(
            "/api/calculate/parking",
            json!({"parking_type": "VIP место", "with_discount": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], json!(1710000.0));
    }

    #[tokio::test]
    async fn lots_route_groups_by_building() {
        let (status, body) = get_json("/api/profitability/lots").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["buildings"], json!(["С1"]));
        assert_eq!(body["lots"]["С1"][1]["number"], json!(512));
    }

    #[tokio::test]
    async fn options_route_lists_floors() {
        let (status, body) = get_json("/api/options").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["floors"].as_array().map(Vec::len), Some(12));
    }

    #[tokio::test]
    async fn profitability_route_maps_lookup_failures() {
        let (status, body) = post_json(
            "/api/profitability/calculate",
            json!({"building": "С1", "number": 101}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["payback_hotel_years"], json!(6));

        let (status, _) = post_json(
            "/api/profitability/calculate",
            json!({"building": "С1", "number": 999}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = post_json(
            "/api/profitability/calculate",
            json!({"building": "С1", "number": 512, "installment": true}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("lot С1-512 has no installment price"));
    }
}
