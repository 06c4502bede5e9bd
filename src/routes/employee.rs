use crate::db::postgres_service::PostgresService;
use crate::reports::employee::employee_dashboard;
use crate::types::dashboard::{EmployeeDashboardRes, RSelectOption, SelectOptionRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Caller;
use actix_web::{get, post, web};
use chrono::Utc;
use std::sync::Arc;

#[get("/dashboard")]
async fn dashboard(
    caller: Caller,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<EmployeeDashboardRes> {
    let office_id = caller.0.office_id.ok_or_else(|| {
        AppError::Validation("Employee is not assigned to an office.".to_string())
    })?;
    let office = db.get_office(office_id).await?;

    let options = db.list_active_options().await?;
    let my_sessions = db.list_completed_sessions_for_employee(caller.0.id).await?;
    let colleagues = db.list_employees_for_office(office_id).await?;
    let office_sessions = db
        .list_completed_sessions_for_employees(colleagues.iter().map(|e| e.id).collect())
        .await?;
    let today = Utc::now().date_naive();

    Ok(ApiResponse::Ok(employee_dashboard(
        &caller.0,
        &office,
        &options,
        &my_sessions,
        office_sessions.len() as u64,
        today,
    )))
}

#[post("/commute/select")]
async fn select_option(
    caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSelectOption>,
) -> ApiResult<SelectOptionRes> {
    let session_id = db
        .select_commute_option(caller.0.id, body.option_id)
        .await?;
    Ok(ApiResponse::Ok(SelectOptionRes {
        employee_id: caller.0.id,
        selected_option_id: body.option_id,
        session_id,
    }))
}
