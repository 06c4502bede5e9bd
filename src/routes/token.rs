use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{construct_token, TokenRefreshRes};
use crate::utils::identity::Caller;
use actix_web::{post, web};
use std::sync::Arc;

/// Rotate the caller's api key. The old token stops working immediately.
#[post("/refresh")]
async fn refresh(
    caller: Caller,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<TokenRefreshRes> {
    let api_key = db.regenerate_employee_token(caller.0.id).await?;
    Ok(ApiResponse::Ok(TokenRefreshRes {
        token: construct_token(caller.0.id, &api_key),
    }))
}
