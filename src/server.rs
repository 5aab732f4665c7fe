use crate::models::{Listing, ParsedQuery, ScoredResult};
use crate::search::{interpret, rank};
use crate::store::ListingStore;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const BOOKING_STATUS: &str = "mock-booking-created";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

impl AppState {
    pub fn new(store: impl ListingStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub parsed: ParsedQuery,
    pub total: usize,
    pub results: Vec<ScoredResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub count: usize,
    pub listings: Vec<Listing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub status: String,
    pub received: Value,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/listings", get(listings))
        .route("/api/search", get(search))
        .route("/api/booking", post(booking))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn listings(State(state): State<AppState>) -> Json<ListingsResponse> {
    let listings = state.store.all_listings().await;
    Json(ListingsResponse {
        count: listings.len(),
        listings,
    })
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let parsed = interpret(&params.text);
    let candidates = state.store.all_listings().await;
    let results = rank(&candidates, &parsed);

    info!(
        query = %params.text,
        candidates = candidates.len(),
        total = results.len(),
        "Search served"
    );

    Json(SearchResponse {
        query: params.text,
        parsed,
        total: results.len(),
        results,
    })
}

/// Echo the booking request back; nothing is reserved
async fn booking(body: Option<Json<Value>>) -> Json<BookingResponse> {
    let received = body
        .map(|Json(value)| value)
        .unwrap_or_else(|| Value::Object(Default::default()));
    info!("Mock booking received");

    Json(BookingResponse {
        status: BOOKING_STATUS.to_string(),
        received,
        received_at: Utc::now(),
    })
}
