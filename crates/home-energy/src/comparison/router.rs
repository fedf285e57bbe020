use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::options::SavingsOptions;
use super::service::ComparisonService;
use crate::household::{
    CooktopAnswers, DrivingAnswers, EstimateError, HeatingAnswers, HotWaterAnswers,
    HouseholdAnswers, SwitchableAnswers, YourHome,
};
use crate::pricing::RegionResolver;

/// Router builder exposing the household report and the per-sub-system
/// savings endpoints.
pub fn comparison_router<R>(service: Arc<ComparisonService<R>>) -> Router
where
    R: RegionResolver + 'static,
{
    Router::new()
        .route("/household-energy-profile/", post(household_handler::<R>))
        .route("/heating/savings", post(savings_handler::<R, HeatingSavingsRequest>))
        .route("/hot_water/savings", post(savings_handler::<R, HotWaterSavingsRequest>))
        .route("/cooktop/savings", post(savings_handler::<R, CooktopSavingsRequest>))
        .route("/driving/savings", post(savings_handler::<R, DrivingSavingsRequest>))
        .with_state(service)
}

/// Body of a savings request: one sub-system's answers plus the home.
pub trait SavingsRequest: DeserializeOwned + Send + 'static {
    type Answers: SwitchableAnswers;

    fn into_parts(self) -> (Self::Answers, YourHome);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatingSavingsRequest {
    pub heating_answers: HeatingAnswers,
    pub your_home: YourHome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotWaterSavingsRequest {
    pub hot_water_answers: HotWaterAnswers,
    pub your_home: YourHome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooktopSavingsRequest {
    pub cooktop_answers: CooktopAnswers,
    pub your_home: YourHome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingSavingsRequest {
    pub driving_answers: DrivingAnswers,
    pub your_home: YourHome,
}

impl SavingsRequest for HeatingSavingsRequest {
    type Answers = HeatingAnswers;

    fn into_parts(self) -> (HeatingAnswers, YourHome) {
        (self.heating_answers, self.your_home)
    }
}

impl SavingsRequest for HotWaterSavingsRequest {
    type Answers = HotWaterAnswers;

    fn into_parts(self) -> (HotWaterAnswers, YourHome) {
        (self.hot_water_answers, self.your_home)
    }
}

impl SavingsRequest for CooktopSavingsRequest {
    type Answers = CooktopAnswers;

    fn into_parts(self) -> (CooktopAnswers, YourHome) {
        (self.cooktop_answers, self.your_home)
    }
}

impl SavingsRequest for DrivingSavingsRequest {
    type Answers = DrivingAnswers;

    fn into_parts(self) -> (DrivingAnswers, YourHome) {
        (self.driving_answers, self.your_home)
    }
}

/// `?field=` selector. Absent means the sub-system's primary fuel field.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(bound(deserialize = "F: DeserializeOwned"))]
pub struct FieldQuery<F> {
    #[serde(default)]
    pub field: Option<F>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub options: SavingsOptions,
}

pub(crate) async fn household_handler<R>(
    State(service): State<Arc<ComparisonService<R>>>,
    axum::Json(answers): axum::Json<HouseholdAnswers>,
) -> Response
where
    R: RegionResolver + 'static,
{
    match service.household_report(answers) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => estimate_failure(error),
    }
}

pub(crate) async fn savings_handler<R, Q>(
    State(service): State<Arc<ComparisonService<R>>>,
    Query(query): Query<FieldQuery<<Q::Answers as SwitchableAnswers>::Field>>,
    axum::Json(request): axum::Json<Q>,
) -> Response
where
    R: RegionResolver + 'static,
    Q: SavingsRequest,
{
    let (answers, home) = request.into_parts();
    match service.savings_options(&answers, query.field, &home) {
        Ok(options) => (StatusCode::OK, axum::Json(OptionsResponse { options })).into_response(),
        Err(error) => estimate_failure(error),
    }
}

fn estimate_failure(error: EstimateError) -> Response {
    warn!(%error, "estimation failed");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
