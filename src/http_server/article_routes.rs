//! Article HTTP Routes
//!
//! Endpoints for article definitions and the shop floor entries recorded
//! against them. Entry creation returns 400 with the validator's messages
//! when the submission does not fit the article's shop floor fields.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use uuid::Uuid;

use super::errors::ApiResult;
use super::response::{DeleteResponse, ListResponse, SingleResponse};
use crate::catalog::{Article, Catalog, Entry, NewArticle};

/// Create article routes
pub fn article_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/articles", get(list_articles_handler).post(create_article_handler))
        .route(
            "/articles/:id",
            get(get_article_handler).delete(delete_article_handler),
        )
        .route(
            "/articles/:id/entries",
            get(list_entries_handler).post(create_entry_handler),
        )
        .with_state(catalog)
}

// ==================
// Article Handlers
// ==================

async fn list_articles_handler(
    State(catalog): State<Arc<Catalog>>,
) -> ApiResult<Json<ListResponse<Article>>> {
    Ok(Json(ListResponse::new(catalog.list_articles()?)))
}

async fn create_article_handler(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<NewArticle>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Article>>)> {
    let Json(request) = payload?;
    let article = catalog.create_article(request)?;
    Ok((StatusCode::CREATED, Json(SingleResponse::new(article))))
}

async fn get_article_handler(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<SingleResponse<Article>>> {
    let Path(id) = id?;
    Ok(Json(SingleResponse::new(catalog.get_article(id)?)))
}

async fn delete_article_handler(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;
    catalog.delete_article(id)?;
    Ok(Json(DeleteResponse::success()))
}

// ==================
// Entry Handlers
// ==================

async fn list_entries_handler(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<ListResponse<Entry>>> {
    let Path(id) = id?;
    Ok(Json(ListResponse::new(catalog.list_entries(id)?)))
}

async fn create_entry_handler(
    State(catalog): State<Arc<Catalog>>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Entry>>)> {
    let Path(id) = id?;
    let Json(data) = payload?;
    let entry = catalog.create_entry(id, data)?;
    Ok((StatusCode::CREATED, Json(SingleResponse::new(entry))))
}
