use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::views::{CategoryPage, HomePage, SearchPage, WeaponPage};
use super::AppState;
use crate::catalog::{
    display_name_from_slug, normalize_query, scan_category, search_weapons, weapon_detail,
    Category,
};
use crate::error::AppError;

/// Run filesystem or SQLite work off the async workers
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}

pub(crate) async fn home_handler() -> Json<HomePage> {
    info!(route = "/", "request start");
    Json(HomePage::new())
}

pub(crate) async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn category_handler(
    state: AppState,
    category: Category,
) -> Result<Json<CategoryPage>, AppError> {
    info!(route = %category.path(), "request start");
    let static_root = state.static_root.clone();
    let weapons = run_blocking(move || scan_category(&static_root, category)).await?;

    Ok(Json(CategoryPage {
        title: category.title(),
        category,
        weapons,
    }))
}

pub(crate) async fn weapon_handler(
    State(state): State<AppState>,
    Path(raw_name): Path<String>,
) -> Result<Json<WeaponPage>, AppError> {
    let weapon_name = display_name_from_slug(&raw_name);
    info!(route = "/weapon/:name", weapon = %weapon_name, "request start");

    let store = state.store.clone();
    let strategy = state.fetch_strategy;
    let lookup = weapon_name.clone();
    // The connection lives only inside this closure
    let detail = run_blocking(move || {
        let conn = store.open()?;
        weapon_detail(&conn, &lookup, strategy)
    })
    .await?;

    Ok(Json(WeaponPage {
        title: weapon_name.clone(),
        weapon_name,
        detail,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

pub(crate) async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, AppError> {
    let raw = params.q.unwrap_or_default();
    let Some(query) = normalize_query(&raw).map(str::to_string) else {
        return Ok(Json(SearchPage {
            title: "SEARCH",
            query: String::new(),
            results: Vec::new(),
        }));
    };
    info!(route = "/search", query = %query, "request start");

    let store = state.store.clone();
    let needle = query.clone();
    let results = run_blocking(move || {
        let conn = store.open()?;
        search_weapons(&conn, &needle)
    })
    .await?;

    Ok(Json(SearchPage {
        title: "SEARCH",
        query,
        results,
    }))
}

pub(crate) async fn not_found_handler(uri: Uri) -> AppError {
    info!(path = %uri.path(), "no route matched");
    AppError::NotFound(uri.path().to_string())
}
