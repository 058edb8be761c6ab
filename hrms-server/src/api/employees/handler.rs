//! Employee API Handlers

use axum::{Json, extract::State};

use crate::api::extract::{JsonBody, PathId};
use crate::core::ServerState;
use crate::db::mapper;
use crate::db::models::{Employee, EmployeePayload};
use crate::utils::{AppError, AppResult};

/// Confirmation returned by a successful delete
pub const DELETED_MESSAGE: &str = "record has been deleted";

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees().find_all().await?;
    Ok(Json(employees))
}

/// Create a new employee
///
/// Insert failures are reported as 400; a failed re-read of the inserted
/// document is a 500.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeePayload>,
) -> AppResult<Json<Employee>> {
    let repo = state.employees();
    let id = repo
        .insert(&payload)
        .await
        .map_err(|e| AppError::insert_rejected(e.to_string()))?;

    let employee = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Employee {} missing after insert", id)))?;

    tracing::info!(employee_id = %employee.id, "Employee created");
    Ok(Json(employee))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> AppResult<Json<Employee>> {
    let oid = mapper::parse_identifier(&id)?;
    let employee = state
        .employees()
        .find_by_id(oid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Overwrite an employee's name, salary and age
///
/// The identifier is validated before the body, so a malformed id is
/// reported as such whatever the body holds.
pub async fn update(
    State(state): State<ServerState>,
    PathId(id): PathId,
    body: Result<JsonBody<EmployeePayload>, AppError>,
) -> AppResult<Json<Employee>> {
    let oid = mapper::parse_identifier(&id)?;
    let JsonBody(payload) = body?;
    let employee = state.employees().update(oid, payload).await?;

    tracing::info!(employee_id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> AppResult<Json<&'static str>> {
    let oid = mapper::parse_identifier(&id)?;
    state.employees().delete(oid).await?;

    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(Json(DELETED_MESSAGE))
}
