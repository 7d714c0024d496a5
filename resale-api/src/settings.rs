use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use resale_catalog::{PricingEngine, Settings};

use crate::dto::{QuoteRequest, QuoteResponse, SettingsRequest};
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/settings", get(get_settings).put(update_settings))
        .route("/v1/quote", post(quote))
}

/// GET /v1/settings
async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = state.with_manager(|manager| manager.settings().clone()).await?;
    Ok(Json(settings))
}

/// PUT /v1/settings
/// Replaces the record wholesale; unusable numbers become zero
async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<SettingsRequest>,
) -> Result<Json<Settings>, AppError> {
    let settings = state
        .with_manager(move |manager| {
            manager.update_settings(req.into());
            manager.settings().clone()
        })
        .await?;
    Ok(Json(settings))
}

/// POST /v1/quote
/// Live preview against the current settings, nothing is stored
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let settings = state.with_manager(|manager| manager.settings().clone()).await?;
    let engine = PricingEngine::new(settings);

    let breakdown = engine.quote(req.original_price.amount(), req.currency, req.piece_category);
    let summary = state.summary.render_breakdown(&breakdown, req.payment_status);

    Ok(Json(QuoteResponse { breakdown, summary }))
}
