use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::token::deconstruct_token;
use crate::utils::token::verify;

/// The employee behind the bearer token, resolved once at the request
/// boundary. Handlers take `Caller` and pass the model down explicitly; no
/// "current employee" state exists anywhere else.
pub struct Caller(pub entity::employee::Model);

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Caller, AppError>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let header = req
                .headers()
                .get(actix_web::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or(AppError::Unauthorized)?;
            let token = header
                .strip_prefix("Bearer ")
                .ok_or(AppError::Unauthorized)?;

            let (employee_id, api_key) =
                deconstruct_token(token).ok_or(AppError::Unauthorized)?;

            let db = req
                .app_data::<web::Data<Arc<PostgresService>>>()
                .ok_or_else(|| AppError::Internal("Database not configured".to_string()))?;

            let employee = db
                .get_employee(employee_id)
                .await
                .map_err(|_| AppError::Unauthorized)?;

            if !verify(&api_key, &employee.token).unwrap_or(false) {
                return Err(AppError::Unauthorized);
            }

            Ok(Caller(employee))
        })
    }
}
