use crate::db::postgres_service::PostgresService;
use crate::reports::lobby::lobby_summary;
use crate::types::error::AppError;
use crate::types::lobby::LobbyRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::{FinishSessionRes, StartSessionRes};
use crate::utils::identity::Caller;
use actix_web::{get, post, web};
use chrono::Utc;
use std::sync::Arc;

#[get("/lobby")]
async fn lobby(caller: Caller, db: web::Data<Arc<PostgresService>>) -> ApiResult<LobbyRes> {
    let office_id = caller.0.office_id.ok_or_else(|| {
        AppError::Validation("Employee is not assigned to an office.".to_string())
    })?;
    let office = db.get_office(office_id).await?;

    let employees = db.list_all_employees().await?;
    let sessions = db.list_completed_sessions().await?;
    let today = Utc::now().date_naive();

    Ok(ApiResponse::Ok(lobby_summary(
        &office.name,
        today,
        &employees,
        &sessions,
    )))
}

#[post("/sessions/start")]
async fn start_session(
    caller: Caller,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<StartSessionRes> {
    let session = db.start_session(caller.0.id).await?;
    Ok(ApiResponse::Created(StartSessionRes {
        id: session.id,
        status: session.status,
    }))
}

#[post("/sessions/{id}/finish")]
async fn finish_session(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<FinishSessionRes> {
    let session = db.finish_session(path.into_inner()).await?;
    Ok(ApiResponse::Ok(FinishSessionRes {
        id: session.id,
        status: session.status,
        points: session.points_earned,
    }))
}
