use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use super::{Message, non_empty};
use crate::db::{AppState, repo};
use crate::error::{AppError, OptionExt, Result, msg};
use crate::extractors::{Json, Path, Query};
use crate::models::{Employee, Entity};
use crate::validation::{Record, require_fields};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employees/org/{org_code}", get(list_employees_by_org))
        .route("/employee", post(create_employee))
        .route("/employee/search", get(search_employees))
        .route(
            "/employee/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub fname: Option<String>,
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let conn = state.db.get()?;
    non_empty(repo::fetch_all(&conn)?, msg::NO_EMPLOYEES)
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>> {
    let conn = state.db.get()?;
    let employee = repo::fetch_by_key::<Employee>(&conn, id)?
        .or_not_found(msg::EMPLOYEE_ID_NOT_FOUND)?;
    Ok(Json(employee))
}

pub async fn list_employees_by_org(
    State(state): State<AppState>,
    Path(org_code): Path<i64>,
) -> Result<Json<Vec<Employee>>> {
    let conn = state.db.get()?;
    non_empty(
        repo::fetch_by_field(&conn, "org_code", &org_code)?,
        msg::NO_EMPLOYEES_FOR_ORG,
    )
}

pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Employee>>> {
    let fname = query
        .fname
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::BadRequest(msg::FNAME_PARAM_REQUIRED.into()))?;

    let conn = state.db.get()?;
    non_empty(
        repo::fetch_by_field(&conn, "fname", &fname)?,
        format!("No employees found with fname '{}'.", fname),
    )
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, Json<Employee>)> {
    require_fields(&record, Employee::REQUIRED)?;

    let mut conn = state.db.get()?;
    let employee: Employee = repo::insert(&mut conn, &record)?;
    tracing::debug!("Created employee {}", employee.id);

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(record): Json<Record>,
) -> Result<Json<Employee>> {
    let mut conn = state.db.get()?;
    let employee = repo::update::<Employee>(&mut conn, id, &record)?
        .or_not_found(msg::EMPLOYEE_NOT_FOUND)?;
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>> {
    let mut conn = state.db.get()?;
    if !repo::delete::<Employee>(&mut conn, id)? {
        return Err(AppError::NotFound(msg::EMPLOYEE_NOT_FOUND.into()));
    }
    Ok(Message::new(msg::EMPLOYEE_DELETED))
}
