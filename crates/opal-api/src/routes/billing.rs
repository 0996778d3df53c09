use axum::Json;
use serde::{Deserialize, Serialize};

use opal_core::models::context::BillingContext;
use opal_core::models::recommendation::BillingRecommendation;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ClassifyRequest {
    pub services: Vec<String>,
    pub context: BillingContext,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub recommendation: BillingRecommendation,
}

/// Classify a service selection into a billing recommendation.
pub async fn classify_billing(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let recommendation = opal_rates::classify(&req.services, &req.context)?;
    Ok(Json(ClassifyResponse { recommendation }))
}
