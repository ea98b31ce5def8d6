use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::AppError;
use crate::services::aggregation_service;
use crate::services::query_service::{self, ListQuery, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::services::seed_loader::{self, SeedOutcome};
use crate::utils::helpers::{parse_month, parse_positive};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    page: Option<String>,
    per_page: Option<String>,
    search: Option<String>,
    month: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MonthParams {
    month: Option<String>,
}

impl MonthParams {
    fn month(&self) -> Option<u32> {
        parse_month(self.month.as_deref())
    }
}

pub async fn initialize_database(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = seed_loader::initialize(state.store.as_ref(), state.seed_source.as_ref())
        .await
        .map_err(|e| AppError::operation_failed("Error initializing database", e))?;

    let response = match outcome {
        SeedOutcome::Inserted(_) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Database initialized successfully" })),
        ),
        SeedOutcome::AlreadyInitialized => (
            StatusCode::OK,
            Json(json!({ "message": "Database already initialized" })),
        ),
    };
    Ok(response)
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    const MESSAGE: &str = "Error fetching transactions";

    let query = ListQuery {
        page: parse_positive("page", params.page.as_deref(), DEFAULT_PAGE)
            .map_err(|e| AppError::operation_failed(MESSAGE, e))?,
        per_page: parse_positive("perPage", params.per_page.as_deref(), DEFAULT_PER_PAGE)
            .map_err(|e| AppError::operation_failed(MESSAGE, e))?,
        search: params.search.unwrap_or_default(),
        month: parse_month(params.month.as_deref()),
    };

    let page = query_service::list_transactions(state.store.as_ref(), &query)
        .await
        .map_err(|e| AppError::operation_failed(MESSAGE, e))?;
    Ok(Json(page))
}

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let stats = aggregation_service::statistics(state.store.as_ref(), params.month())
        .await
        .map_err(|e| AppError::operation_failed("Error fetching statistics", e))?;
    Ok(Json(stats))
}

pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let histogram = aggregation_service::price_histogram(state.store.as_ref(), params.month())
        .await
        .map_err(|e| AppError::operation_failed("Error fetching bar chart data", e))?;
    Ok(Json(histogram))
}

pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = aggregation_service::category_breakdown(state.store.as_ref(), params.month())
        .await
        .map_err(|e| AppError::operation_failed("Error fetching pie chart data", e))?;
    Ok(Json(categories))
}

pub async fn get_combined(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let report = aggregation_service::combined(state.store.as_ref(), params.month())
        .await
        .map_err(|e| AppError::operation_failed("Error fetching combined data", e))?;
    Ok(Json(report))
}
