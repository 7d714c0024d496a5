use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use resale_order::{DashboardStats, Order, OrderDraft, OrderId};
use resale_shared::Masked;

use crate::dto::{
    CreateOrderRequest, DashboardResponse, ListOrdersQuery, SummaryResponse, UpdatePaymentRequest,
    UpdateStatusRequest,
};
use crate::{error::AppError, state::AppState};

const RECENT_ORDERS: usize = 5;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/orders", get(list_orders).post(create_order))
        .route("/v1/orders/{id}", get(get_order).delete(delete_order))
        .route("/v1/orders/{id}/status", put(update_status))
        .route("/v1/orders/{id}/payment", put(update_payment))
        .route("/v1/orders/{id}/summary", get(order_summary))
        .route("/v1/dashboard", get(dashboard))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/orders?q=
/// Newest first, optionally filtered by customer name
async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let query = query.q.unwrap_or_default();
    let orders: Vec<Order> = state
        .with_manager(move |manager| manager.book().search(&query).into_iter().cloned().collect())
        .await?;
    Ok(Json(orders))
}

/// POST /v1/orders
/// Price against the current settings and record the order
async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let draft = OrderDraft {
        customer_name: req.customer_name,
        phone: Masked(req.phone.trim().to_string()),
        original_price: req.original_price.amount(),
        currency: req.currency,
        piece_category: req.piece_category,
        payment_status: req.payment_status,
    };

    let order = state.with_manager(move |manager| manager.place_order(draft)).await??;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /v1/orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order_id = OrderId::from(id.as_str());
    state
        .with_manager(move |manager| manager.get_order(&order_id).cloned())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Order not found: {}", id)))
}

/// DELETE /v1/orders/{id}
async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let order_id = OrderId::from(id);
    state.with_manager(move |manager| manager.delete_order(&order_id)).await??;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v1/orders/{id}/status
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, AppError> {
    let order_id = OrderId::from(id);
    let order = state
        .with_manager(move |manager| manager.update_status(&order_id, req.status))
        .await??;
    Ok(Json(order))
}

/// PUT /v1/orders/{id}/payment
/// Payment edits may also move the order status
async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePaymentRequest>,
) -> Result<Json<Order>, AppError> {
    let order_id = OrderId::from(id);
    let order = state
        .with_manager(move |manager| manager.update_payment_status(&order_id, req.payment_status))
        .await??;
    Ok(Json(order))
}

/// GET /v1/orders/{id}/summary
/// Share text for the customer
async fn order_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, AppError> {
    let order_id = OrderId::from(id.as_str());
    let order = state
        .with_manager(move |manager| manager.get_order(&order_id).cloned())
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Order not found: {}", id)))?;

    Ok(Json(SummaryResponse {
        order_id: order.id.to_string(),
        text: state.summary.render(&order),
    }))
}

/// GET /v1/dashboard
async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let response = state
        .with_manager(|manager| DashboardResponse {
            stats: DashboardStats::from_orders(manager.orders()),
            recent: manager.book().recent(RECENT_ORDERS).to_vec(),
        })
        .await?;
    Ok(Json(response))
}
