use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::comparison::ComparisonService;
use crate::household::{defaults, EstimationParameters, SwitchableAnswers, YourHome};
use crate::pricing::{EmissionsFactors, StubRegionResolver};

pub(super) fn service() -> Arc<ComparisonService<StubRegionResolver>> {
    Arc::new(ComparisonService::standard(StubRegionResolver))
}

pub(super) fn service_with(
    parameters: EstimationParameters,
    factors: EmissionsFactors,
) -> Arc<ComparisonService<StubRegionResolver>> {
    Arc::new(ComparisonService::new(
        Arc::new(StubRegionResolver),
        Arc::new(parameters),
        Arc::new(factors),
    ))
}

pub(super) fn no_emissions() -> EmissionsFactors {
    EmissionsFactors::new(HashMap::new())
}

pub(super) fn home(people: u8, postcode: &str) -> YourHome {
    YourHome::new(people, postcode).expect("valid home")
}

pub(super) fn default_home() -> YourHome {
    defaults::your_home()
}

/// Every starting point reachable by changing one field of `base`.
pub(super) fn starting_points<A: SwitchableAnswers>(base: &A) -> Vec<A> {
    A::FIELDS
        .iter()
        .flat_map(|field| base.candidates(*field))
        .map(|candidate| candidate.answers)
        .collect()
}

pub(super) fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("json body")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
