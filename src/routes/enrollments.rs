use crate::db::postgres_service::PostgresService;
use crate::types::enrollment::{EnrollmentListQuery, EnrollmentRes, REnrollmentCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Caller;
use actix_web::{get, post, web};
use std::sync::Arc;

#[get("")]
async fn list(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<EnrollmentListQuery>,
) -> ApiResult<Vec<EnrollmentRes>> {
    let enrollments = db.list_enrollments(query.status).await?;
    Ok(ApiResponse::Ok(
        enrollments.into_iter().map(EnrollmentRes::from).collect(),
    ))
}

#[post("")]
async fn create(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<REnrollmentCreate>,
) -> ApiResult<EnrollmentRes> {
    let enrollment = db.create_enrollment(body.employee, body.option).await?;
    Ok(ApiResponse::Created(EnrollmentRes::from(enrollment)))
}

#[post("/{id}/cancel")]
async fn cancel(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<EnrollmentRes> {
    let enrollment = db.cancel_enrollment(path.into_inner()).await?;
    Ok(ApiResponse::Ok(EnrollmentRes::from(enrollment)))
}
