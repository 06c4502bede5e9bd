use crate::db::postgres_service::PostgresService;
use crate::reports::hr::hr_dashboard;
use crate::types::dashboard::HrDashboardRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Caller;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/dashboard")]
async fn dashboard(
    caller: Caller,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<HrDashboardRes> {
    let office_id = caller.0.office_id.ok_or_else(|| {
        AppError::Validation("Employee is not assigned to an office.".to_string())
    })?;
    let office = db.get_office(office_id).await?;

    let employees = db.list_employees_for_office(office_id).await?;
    let options = db.list_all_options().await?;
    let rewards = db.list_rewards_for_office(office_id).await?;
    let sessions = db
        .list_completed_sessions_for_employees(employees.iter().map(|e| e.id).collect())
        .await?;

    Ok(ApiResponse::Ok(hr_dashboard(
        &office, &employees, &options, &rewards, &sessions,
    )))
}
