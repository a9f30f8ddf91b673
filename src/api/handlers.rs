use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{QuizItem, QuizItemDraft};
use crate::search::{SearchPage, SearchParams};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

/// Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Search quiz items by title substring
pub async fn search_quiz_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>> {
    let query = params.into_query()?;
    let page = state.search.search(&query).await?;
    Ok(Json(page))
}

/// Create a quiz item
pub async fn add_quiz_item(
    State(state): State<AppState>,
    Json(draft): Json<QuizItemDraft>,
) -> Result<(StatusCode, Json<AddQuizItemResponse>)> {
    let item = state.catalog.create(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddQuizItemResponse {
            message: "Quiz item added successfully".to_string(),
            data: item,
        }),
    ))
}

#[derive(Debug, Serialize)]
pub struct AddQuizItemResponse {
    pub message: String,
    pub data: QuizItem,
}

/// Get a quiz item by id
pub async fn get_quiz_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<QuizItem>> {
    let item = state.catalog.get(id).await?;
    Ok(Json(item))
}

/// Get the sibling of a quiz item. Items without one (including dangling
/// references) answer 404.
pub async fn get_quiz_item_sibling(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<QuizItem>> {
    match state.catalog.sibling_of(id).await? {
        Some(sibling) => Ok(Json(sibling)),
        None => Err(AppError::NotFound(format!(
            "Quiz item {} has no sibling",
            id
        ))),
    }
}
