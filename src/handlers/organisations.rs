use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::{Message, non_empty};
use crate::db::{AppState, repo};
use crate::error::{AppError, OptionExt, Result, msg};
use crate::extractors::{Json, Path};
use crate::models::{Entity, Organisation};
use crate::validation::{Record, require_fields};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/organisations", get(list_organisations))
        .route("/organisation", post(create_organisation))
        .route(
            "/organisation/{code}",
            get(get_organisation)
                .put(update_organisation)
                .delete(delete_organisation),
        )
        .route("/organisation/name/{org_name}", get(get_organisation_by_name))
}

pub async fn list_organisations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Organisation>>> {
    let conn = state.db.get()?;
    non_empty(repo::fetch_all(&conn)?, msg::NO_ORGANISATIONS)
}

pub async fn get_organisation(
    State(state): State<AppState>,
    Path(code): Path<i64>,
) -> Result<Json<Organisation>> {
    let conn = state.db.get()?;
    let organisation = repo::fetch_by_key::<Organisation>(&conn, code)?
        .or_not_found(msg::ORGANISATION_NOT_FOUND)?;
    Ok(Json(organisation))
}

pub async fn get_organisation_by_name(
    State(state): State<AppState>,
    Path(org_name): Path<String>,
) -> Result<Json<Organisation>> {
    let conn = state.db.get()?;
    let organisation = repo::fetch_first_by_field::<Organisation>(&conn, "org_name", &org_name)?
        .or_not_found(msg::ORGANISATION_NOT_FOUND)?;
    Ok(Json(organisation))
}

pub async fn create_organisation(
    State(state): State<AppState>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, Json<Organisation>)> {
    require_fields(&record, Organisation::REQUIRED)?;

    let mut conn = state.db.get()?;
    let organisation: Organisation = repo::insert(&mut conn, &record)?;
    tracing::debug!("Created organisation {}", organisation.code);

    Ok((StatusCode::CREATED, Json(organisation)))
}

pub async fn update_organisation(
    State(state): State<AppState>,
    Path(code): Path<i64>,
    Json(record): Json<Record>,
) -> Result<Json<Organisation>> {
    let mut conn = state.db.get()?;
    let organisation = repo::update::<Organisation>(&mut conn, code, &record)?
        .or_not_found(msg::ORGANISATION_NOT_FOUND)?;
    Ok(Json(organisation))
}

pub async fn delete_organisation(
    State(state): State<AppState>,
    Path(code): Path<i64>,
) -> Result<Json<Message>> {
    let mut conn = state.db.get()?;
    if !repo::delete::<Organisation>(&mut conn, code)? {
        return Err(AppError::NotFound(msg::ORGANISATION_NOT_FOUND.into()));
    }
    tracing::debug!("Deleted organisation {}", code);
    Ok(Message::new(msg::ORGANISATION_DELETED))
}
