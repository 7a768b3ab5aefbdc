//! The standalone user registry. Writes answer with a message, not the record.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use super::{Message, non_empty};
use crate::db::{AppState, repo};
use crate::error::{AppError, OptionExt, Result, msg};
use crate::extractors::{Json, Path};
use crate::models::{Entity, User};
use crate::validation::{Record, require_fields};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, Json<Message>)> {
    require_fields(&record, User::REQUIRED)?;

    let mut conn = state.db.get()?;
    let user: User = repo::insert(&mut conn, &record)?;
    tracing::debug!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Message::new(msg::USER_ADDED)))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let conn = state.db.get()?;
    non_empty(repo::fetch_all(&conn)?, msg::NO_USERS)
}

pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<User>> {
    let conn = state.db.get()?;
    let user = repo::fetch_by_key::<User>(&conn, id)?.or_not_found(msg::USER_NOT_FOUND)?;
    Ok(Json(user))
}

/// Full replacement: an unknown id is reported before the body is checked,
/// required fields must be present and omitted optional fields are cleared.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(record): Json<Record>,
) -> Result<Json<Message>> {
    let mut conn = state.db.get()?;
    repo::fetch_by_key::<User>(&conn, id)?.or_not_found(msg::USER_NOT_FOUND)?;
    require_fields(&record, User::REQUIRED)?;

    repo::replace::<User>(&mut conn, id, &record)?.or_not_found(msg::USER_NOT_FOUND)?;
    Ok(Message::new(msg::USER_UPDATED))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>> {
    let mut conn = state.db.get()?;
    if !repo::delete::<User>(&mut conn, id)? {
        return Err(AppError::NotFound(msg::USER_NOT_FOUND.into()));
    }
    Ok(Message::new(msg::USER_DELETED))
}
