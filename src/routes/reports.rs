use crate::db::postgres_service::PostgresService;
use crate::reports::participation::participation_report;
use crate::types::lobby::ParticipationRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Caller;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/participation")]
async fn participation(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<ParticipationRes> {
    let total = db.count_employees().await?;
    let active = db.list_active_enrollments().await?;
    Ok(ApiResponse::Ok(participation_report(total, &active)))
}
