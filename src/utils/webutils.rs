use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;

/// Gate for the provisioning scope: only the configured admin key passes.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
