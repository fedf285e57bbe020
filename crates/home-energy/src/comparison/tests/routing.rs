use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::comparison::comparison_router;
use crate::comparison::router::{
    household_handler, savings_handler, CooktopSavingsRequest, FieldQuery,
};
use crate::household::{defaults, CooktopType, EstimationParameters, HouseholdAnswers};
use crate::pricing::{EmissionsFactors, StubRegionResolver};

fn cooktop_body() -> serde_json::Value {
    json!({
        "cooktop_answers": { "cooktop": "Piped gas" },
        "your_home": { "people_in_house": 4, "postcode": "0000" }
    })
}

#[tokio::test]
async fn cooktop_savings_route_returns_every_option() {
    let router = comparison_router(service());

    let response = router
        .oneshot(json_post("/cooktop/savings", &cooktop_body()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let text = std::str::from_utf8(&body).expect("utf8 body");
    let labels = [
        "Electric induction",
        "Piped gas",
        "Bottled gas",
        "Electric (coil or ceramic)",
    ];
    let positions: Vec<_> = labels
        .iter()
        .map(|label| text.find(label).expect("label present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{text}");

    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let options = payload["options"].as_object().expect("options object");
    assert_eq!(options["Piped gas"]["savings"], json!(0.0));
    assert_eq!(options["Piped gas"]["emissions_reduction_percentage"], json!(0.0));
}

#[tokio::test]
async fn field_query_selects_a_secondary_field() {
    let router = comparison_router(service());
    let body = json!({
        "driving_answers": {
            "vehicle_type": "Petrol",
            "vehicle_size": "Medium",
            "km_per_week": "200"
        },
        "your_home": { "people_in_house": 2, "postcode": "6011" }
    });

    let response = router
        .oneshot(json_post("/driving/savings?field=km_per_week", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let options = payload["options"].as_object().expect("options object");
    assert_eq!(options.len(), 5);
    assert!(options.contains_key("50 or less"));
    assert!(options["400 or more"]["savings"].as_f64().expect("number") < 0.0);
}

#[tokio::test]
async fn heating_and_hot_water_routes_accept_their_answers() {
    let heating = json!({
        "heating_answers": {
            "main_heating_source": "Heat pump",
            "heating_during_day": "Never",
            "insulation_quality": "Well insulated"
        },
        "your_home": { "people_in_house": 3, "postcode": "1234" }
    });
    let response = comparison_router(service())
        .oneshot(json_post("/heating/savings", &heating))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["options"].as_object().expect("options").len(), 6);

    let hot_water = json!({
        "hot_water_answers": {
            "hot_water_usage": "High",
            "hot_water_heating_source": "Piped gas instantaneous"
        },
        "your_home": { "people_in_house": 5, "postcode": "0000" }
    });
    let response = comparison_router(service())
        .oneshot(json_post("/hot_water/savings?field=hot_water_usage", &hot_water))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["options"].as_object().expect("options").len(), 3);
}

#[tokio::test]
async fn unknown_label_is_rejected_before_the_engine() {
    let body = json!({
        "cooktop_answers": { "cooktop": "Gas hob" },
        "your_home": { "people_in_house": 4, "postcode": "0000" }
    });

    let response = comparison_router(service())
        .oneshot(json_post("/cooktop/savings", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn out_of_range_home_is_rejected() {
    for home in [
        json!({ "people_in_house": 0, "postcode": "0000" }),
        json!({ "people_in_house": 7, "postcode": "0000" }),
        json!({ "people_in_house": 3, "postcode": "12a4" }),
    ] {
        let body = json!({
            "cooktop_answers": { "cooktop": "Piped gas" },
            "your_home": home
        });
        let response = comparison_router(service())
            .oneshot(json_post("/cooktop/savings", &body))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn savings_handler_reports_estimate_errors_as_server_errors() {
    let mut parameters = EstimationParameters::standard();
    parameters.cooktop.remove(&CooktopType::ElectricInduction);
    let service = service_with(parameters, EmissionsFactors::standard());

    let request = CooktopSavingsRequest {
        cooktop_answers: defaults::cooktop(),
        your_home: default_home(),
    };
    let response = savings_handler::<StubRegionResolver, CooktopSavingsRequest>(
        State(service),
        Query(FieldQuery { field: None }),
        axum::Json(request),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        json!("unrecognized cooktop category: Electric induction")
    );
}

#[tokio::test]
async fn household_handler_fills_missing_sections() {
    let response = household_handler::<StubRegionResolver>(
        State(service()),
        axum::Json(HouseholdAnswers::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["climate_zone"], json!("CZ1"));
    assert_eq!(payload["overall"]["savings"], json!(0.0));
    assert!(payload["current"]["cost"].as_f64().expect("number") > 0.0);
}

#[tokio::test]
async fn household_route_reports_alternatives() {
    let body = json!({
        "your_home": { "people_in_house": 2, "postcode": "6011" },
        "heating": {
            "main_heating_source": "Piped gas heater",
            "alternative_main_heating_source": "Heat pump",
            "heating_during_day": "5-7 days a week",
            "insulation_quality": "Not well insulated"
        },
        "solar": { "hasSolar": true }
    });

    let response = comparison_router(service())
        .oneshot(json_post("/household-energy-profile/", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["climate_zone"], json!("CZ2"));
    assert_eq!(payload["heating"]["switched"], json!(true));
    assert!(payload["heating"]["savings"].as_f64().expect("number") > 0.0);
    assert!(payload["usage_profile"]["day_kwh"].as_f64().expect("number") < 0.0);
}
