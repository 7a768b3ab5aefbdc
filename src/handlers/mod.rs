pub mod employees;
pub mod organisations;
pub mod users;

use axum::{Router, routing::get};
use serde::Serialize;

use crate::config::Deployment;
use crate::db::AppState;
use crate::error::{AppError, Result};
use crate::extractors::Json;

/// Body for endpoints that answer with a sentence instead of a record.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

/// Collection responses report an empty result as not found.
fn non_empty<T>(rows: Vec<T>, message: impl Into<String>) -> Result<Json<Vec<T>>> {
    if rows.is_empty() {
        return Err(AppError::NotFound(message.into()));
    }
    Ok(Json(rows))
}

/// Routes for one deployment, plus its welcome page at `/`.
pub fn router(deployment: Deployment) -> Router<AppState> {
    let welcome = deployment.welcome();
    let routes = match deployment {
        Deployment::Organisations => organisations::router().merge(employees::router()),
        Deployment::Users => users::router(),
        Deployment::All => organisations::router()
            .merge(employees::router())
            .merge(users::router()),
    };
    routes.route("/", get(move || async move { welcome }))
}
