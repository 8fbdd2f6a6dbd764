use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use common::types::CountResponse;
use models::Fournisseur;

use crate::{errors::JsonApiError, state::AppState};

/// Optional lookups on the list route; both may be combined.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-sensitive substring of the company name
    pub societe: Option<String>,
    /// Case-sensitive suffix of the email, e.g. `acme.com`
    pub domaine: Option<String>,
}

#[utoipa::path(
    get, path = "/api/v1/fournisseurs", tag = "fournisseurs",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::FournisseurDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Fournisseur>>, JsonApiError> {
    let svc = &state.fournisseurs;
    let found = match (q.societe.as_deref(), q.domaine.as_deref()) {
        (Some(societe), domaine) => svc.find_by_societe(societe).await.map(|mut list| {
            if let Some(d) = domaine {
                list.retain(|f| f.email_ends_with(d));
            }
            list
        }),
        (None, Some(domaine)) => svc.find_by_email_domain(domaine).await,
        (None, None) => svc.find_all().await,
    };
    match found {
        Ok(list) => {
            info!(count = list.len(), "list fournisseurs");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::internal("List Failed", e)),
    }
}

#[utoipa::path(
    get, path = "/api/v1/fournisseurs/count", tag = "fournisseurs",
    responses(
        (status = 200, description = "Count OK", body = crate::openapi::CountResponseDoc),
        (status = 500, description = "Count Failed")
    )
)]
pub async fn count(State(state): State<AppState>) -> Result<Json<CountResponse>, JsonApiError> {
    let count = state.fournisseurs.count().await.map_err(|e| JsonApiError::internal("Count Failed", e))?;
    Ok(Json(CountResponse { count }))
}

/// A missing record is `200` with a `null` body.
#[utoipa::path(
    get, path = "/api/v1/fournisseurs/{id}", tag = "fournisseurs",
    params(("id" = i64, Path, description = "Fournisseur ID")),
    responses(
        (status = 200, description = "Record, or null when absent", body = crate::openapi::FournisseurDoc),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Fetch Failed")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Option<Fournisseur>>, JsonApiError> {
    let found = state.fournisseurs.find_by_id(id).await.map_err(|e| JsonApiError::internal("Fetch Failed", e))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/api/v1/fournisseurs", tag = "fournisseurs",
    request_body = crate::openapi::FournisseurDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::FournisseurDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<AppState>, Json(mut input): Json<Fournisseur>) -> Result<Json<Fournisseur>, JsonApiError> {
    // Ids are store-assigned on create.
    input.id = None;
    let saved = state.fournisseurs.save(input).await.map_err(|e| JsonApiError::internal("Create Failed", e))?;
    info!(id = ?saved.id, societe = ?saved.societe, "created fournisseur");
    Ok(Json(saved))
}

#[utoipa::path(
    put, path = "/api/v1/fournisseurs/{id}", tag = "fournisseurs",
    params(("id" = i64, Path, description = "Fournisseur ID")),
    request_body = crate::openapi::FournisseurDoc,
    responses(
        (status = 200, description = "Updated; the path ID replaces any ID in the body", body = crate::openapi::FournisseurDoc),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i64>, Json(input): Json<Fournisseur>) -> Result<Json<Fournisseur>, JsonApiError> {
    let updated = state.fournisseurs.update(id, input).await.map_err(|e| JsonApiError::internal("Update Failed", e))?;
    info!(id, "updated fournisseur");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/fournisseurs/{id}", tag = "fournisseurs",
    params(("id" = i64, Path, description = "Fournisseur ID")),
    responses(
        (status = 200, description = "Deleted, or already absent"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.fournisseurs.delete_by_id(id).await.map_err(|e| JsonApiError::internal("Delete Failed", e))?;
    Ok(StatusCode::OK)
}
