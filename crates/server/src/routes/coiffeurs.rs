//! Coiffeur record route handlers.
//!
//! JSON API endpoints for listing, searching, paginating, inserting, and
//! updating records. Responses wrap the record list as
//! `{"coiffeurs": [...]}` - the shape the browser client renders directly.

use annuaire_core::{CoiffeurId, CoiffeurRecord, CoiffeurUpdate};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::db::CoiffeurRepository;
use crate::error::Result;
use crate::state::AppState;

/// Query parameters for the search listing.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to match across all columns; absent or empty means "all".
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Response wrapper for record listings.
#[derive(Debug, Serialize)]
pub struct CoiffeurList {
    pub coiffeurs: Vec<CoiffeurRecord>,
}

/// Response from inserting a record.
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub success: bool,
    pub message: String,
    pub id: CoiffeurId,
}

/// Response from an update-by-name call.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
}

/// List all records, or search across every column.
///
/// GET /api/allCoiffeurs?searchTerm=
///
/// # Errors
///
/// Returns 500 if the record store is unreachable or the query fails.
pub async fn all(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CoiffeurList>> {
    let coiffeurs = CoiffeurRepository::new(state.pool())
        .search(query.search_term.as_deref())
        .await?;

    Ok(Json(CoiffeurList { coiffeurs }))
}

/// First page of the name-sorted listing.
///
/// GET /api/coiffeurs
///
/// # Errors
///
/// Returns 500 if the record store is unreachable or the query fails.
pub async fn first_page(State(state): State<AppState>) -> Result<Json<CoiffeurList>> {
    let coiffeurs = CoiffeurRepository::new(state.pool()).page(1).await?;

    Ok(Json(CoiffeurList { coiffeurs }))
}

/// One page of the name-sorted listing.
///
/// GET /api/coiffeurs/{page}
///
/// A non-numeric page segment falls back to page 1 rather than rejecting
/// the request; the scroll-triggered client always sends integers, but the
/// contract is forgiving.
///
/// # Errors
///
/// Returns 500 if the record store is unreachable or the query fails.
pub async fn page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<CoiffeurList>> {
    let page = page.parse::<i64>().unwrap_or(1);
    let coiffeurs = CoiffeurRepository::new(state.pool()).page(page).await?;

    Ok(Json(CoiffeurList { coiffeurs }))
}

/// Insert a record.
///
/// POST /api/addCoiffeur
///
/// Accepts all seven fields with no validation; missing fields are stored
/// as NULL. Returns the store-assigned identity.
///
/// # Errors
///
/// Returns 500 if the record store is unreachable or the insert fails.
pub async fn add(
    State(state): State<AppState>,
    Json(record): Json<CoiffeurRecord>,
) -> Result<Json<AddResponse>> {
    let id = CoiffeurRepository::new(state.pool()).insert(&record).await?;

    tracing::info!(%id, "coiffeur added");

    Ok(Json(AddResponse {
        success: true,
        message: "coiffeur added".to_owned(),
        id,
    }))
}

/// Update every record whose `nom` matches the path segment.
///
/// PUT /api/coiffeurs/{name}
///
/// Reports success even when no record matched - there is no existence
/// check, so a stale name is a silent no-op.
///
/// # Errors
///
/// Returns 500 if the record store is unreachable or the update fails.
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(fields): Json<CoiffeurUpdate>,
) -> Result<Json<UpdateResponse>> {
    CoiffeurRepository::new(state.pool())
        .update_by_name(&name, &fields)
        .await?;

    tracing::info!(name = %name, "coiffeur updated");

    Ok(Json(UpdateResponse { success: true }))
}
