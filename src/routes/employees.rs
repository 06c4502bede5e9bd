use crate::db::postgres_service::PostgresService;
use crate::types::employee::{
    DBEmployeeCreate, EmployeeCreateRes, EmployeeListQuery, EmployeeRes, PageRes, REmployeeCreate,
};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{construct_token, TokenType};
use crate::utils::identity::Caller;
use crate::utils::token::{encrypt, new_token};
use actix_web::{get, post, web};
use std::sync::Arc;

#[get("")]
async fn list(
    _caller: Caller,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<EmployeeListQuery>,
) -> ApiResult<PageRes<EmployeeRes>> {
    let page = query.page.unwrap_or(1).max(1) - 1;
    let per_page = query.page_size.unwrap_or(50).clamp(1, 200);

    let (items, total) = db
        .list_employees_paginated(query.department.clone(), page, per_page)
        .await?;

    Ok(ApiResponse::Ok(PageRes {
        count: total,
        results: items.into_iter().map(EmployeeRes::from).collect(),
    }))
}

/// Provision an employee and hand back their access token. Admin only; this
/// is the only place tokens are minted for a new identity.
#[post("")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<REmployeeCreate>,
) -> ApiResult<EmployeeCreateRes> {
    let token = new_token(TokenType::Employee);
    let encrypted_token =
        encrypt(&token).map_err(|_| AppError::Internal("Failed to hash token".to_string()))?;

    let employee_id = db
        .create_employee(DBEmployeeCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            department: body.department.clone(),
            home_postal_code: body.home_postal_code.clone(),
            office_id: body.office_id,
            token: encrypted_token,
        })
        .await?;

    let access_token = construct_token(employee_id, &token);

    Ok(ApiResponse::Created(EmployeeCreateRes {
        id: employee_id,
        token: access_token,
    }))
}
