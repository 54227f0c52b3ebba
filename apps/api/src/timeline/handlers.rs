use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::timeline::{aggregate_raw, bucket, ExperienceBucket, RawInterval};

#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub intervals: Vec<RawInterval>,
}

#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub years: i64,
    pub months: u32,
    pub bucket: ExperienceBucket,
}

#[derive(Debug, Deserialize)]
pub struct BucketQuery {
    pub years: f64,
}

#[derive(Debug, Serialize)]
pub struct BucketResponse {
    pub years: f64,
    pub bucket: ExperienceBucket,
}

/// POST /api/v1/experience/aggregate
pub async fn handle_aggregate(
    State(state): State<AppState>,
    Json(req): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, AppError> {
    let duration = aggregate_raw(&req.intervals, state.today());
    Ok(Json(AggregateResponse {
        years: duration.years,
        months: duration.months,
        bucket: bucket(duration.fractional_years()),
    }))
}

/// GET /api/v1/experience/bucket?years=
pub async fn handle_bucket(
    Query(params): Query<BucketQuery>,
) -> Result<Json<BucketResponse>, AppError> {
    if !params.years.is_finite() {
        return Err(AppError::Validation("years must be a finite number".to_string()));
    }
    Ok(Json(BucketResponse {
        years: params.years,
        bucket: bucket(params.years),
    }))
}
