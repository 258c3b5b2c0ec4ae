use estate_pricing::error::CalculationError;
use estate_pricing::pricing::tables::{BOOKING_FEE, MAX_APARTMENT_DISCOUNT};
use estate_pricing::pricing::{
    compute_apartment_price, compute_parking_price, compute_storage_price,
    list_dropdown_options, ApartmentPricingRequest,
};
use estate_pricing::rounding::{round_currency, round_whole};

fn request(apartment_type: &str, floor: u32, view: &str, building: &str) -> ApartmentPricingRequest {
    ApartmentPricingRequest {
        apartment_type: apartment_type.to_string(),
        floor,
        area_total: 41.3,
        area_summer: 3.2,
        size: "M".to_string(),
        layout: "Угловая".to_string(),
        geometry: "Неправильная".to_string(),
        elevator_zone: "Зона 1".to_string(),
        view: view.to_string(),
        position: "Стандарт".to_string(),
        units_on_floor: 26,
        building: building.to_string(),
        price_adjustment: 0.0,
    }
}

#[test]
fn price_layers_hold_for_every_listed_combination() {
    let options = list_dropdown_options();

    for apartment_type in &options.apartment_types {
        for floor in &options.floors {
            for view in &options.views {
                for building in &options.buildings {
                    let breakdown =
                        compute_apartment_price(&request(apartment_type, *floor, view, building))
                            .expect("listed labels price");

                    let pricing = &breakdown.pricing;
                    assert_eq!(pricing.final_price_per_sqm, pricing.price_per_sqm);
                    assert_eq!(pricing.final_budget, pricing.budget);
                    assert_eq!(
                        breakdown.crm.price_per_sqm,
                        round_currency(pricing.final_price_per_sqm * (1.0 + MAX_APARTMENT_DISCOUNT))
                    );
                    assert_eq!(
                        breakdown.site.price_per_sqm,
                        round_currency(breakdown.crm.price_per_sqm + BOOKING_FEE)
                    );
                }
            }
        }
    }
}

#[test]
fn unsupported_view_contributes_nothing() {
    let neutral = compute_apartment_price(&request("2К", 7, "Двор юг", "С1")).expect("prices");
    let sea = compute_apartment_price(&request("2К", 7, "Море", "С1")).expect("prices");
    let unknown =
        compute_apartment_price(&request("2К", 7, "Вид на Луну", "С1")).expect("prices");

    assert_eq!(unknown.coefficients.view, 0.0);
    assert_eq!(unknown.coefficients.total, neutral.coefficients.total);
    assert_eq!(unknown.site.budget, neutral.site.budget);
    assert!(sea.pricing.price_per_sqm > unknown.pricing.price_per_sqm);
}

#[test]
fn positive_adjustment_raises_final_price_only() {
    let mut adjusted = request("Ст", 3, "Двор юг", "С2");
    adjusted.price_adjustment = 0.04;

    let base = compute_apartment_price(&request("Ст", 3, "Двор юг", "С2")).expect("prices");
    let breakdown = compute_apartment_price(&adjusted).expect("prices");

    assert_eq!(breakdown.pricing.price_per_sqm, base.pricing.price_per_sqm);
    assert!(breakdown.pricing.final_price_per_sqm > base.pricing.final_price_per_sqm);
    assert_eq!(
        breakdown.pricing.final_price_per_sqm,
        round_currency(
            breakdown.pricing.price_per_sqm + breakdown.pricing.price_per_sqm * 0.04
        )
    );
}

#[test]
fn ancillary_discounts_cut_exactly_five_percent() {
    let full = compute_storage_price(6.5, false);
    let discounted = compute_storage_price(6.5, true);
    assert_eq!(discounted.price_per_sqm, round_whole(full.price_per_sqm * 0.95));
    assert_eq!(discounted.total, round_currency(discounted.price_per_sqm * 6.5));

    for parking_type in list_dropdown_options().parking_types {
        let full = compute_parking_price(parking_type, false).expect("listed type");
        let discounted = compute_parking_price(parking_type, true).expect("listed type");
        assert_eq!(discounted.base_price, full.price);
        assert_eq!(discounted.price, round_whole(full.price * 0.95));
    }
}

#[test]
fn unpriced_categories_are_rejected() {
    let err = compute_parking_price("Вертолётная площадка", false).expect_err("unknown type");
    assert_eq!(
        err,
        CalculationError::UnknownCategory {
            table: "parking type",
            key: "Вертолётная площадка".to_string(),
        }
    );

    let err = compute_apartment_price(&request("3К", 4, "Двор юг", "С1")).expect_err("unknown");
    assert!(matches!(
        err,
        CalculationError::UnknownCategory {
            table: "apartment type",
            ..
        }
    ));
}
