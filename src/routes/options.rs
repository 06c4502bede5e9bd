use crate::db::postgres_service::PostgresService;
use crate::types::option::OptionRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Caller;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(_caller: Caller, db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<OptionRes>> {
    let options = db.list_active_options().await?;
    Ok(ApiResponse::Ok(
        options.into_iter().map(OptionRes::from).collect(),
    ))
}
