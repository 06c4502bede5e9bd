use crate::db::postgres_service::PostgresService;
use crate::types::{employee::DBEmployeeCreate, error::AppError, token::TokenType};
use crate::utils::token::{encrypt, new_token};
use chrono::Utc;
use entity::commute_option::Entity as CommuteOption;
use entity::commute_session::{self, SessionStatus};
use entity::employee::{ActiveModel as EmployeeActive, Entity as Employee, Model as EmployeeModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl PostgresService {
    pub async fn employee_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Employee::find()
            .filter(entity::employee::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_employee(&self, id: i32) -> Result<EmployeeModel, AppError> {
        Ok(Employee::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee not found.".into()))?)
    }

    pub async fn create_employee(&self, payload: DBEmployeeCreate) -> Result<i32, AppError> {
        if self.employee_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let row = EmployeeActive {
            name: Set(payload.name),
            email: Set(payload.email),
            department: Set(payload.department),
            status: Set(entity::employee::STATUS_ACTIVE.to_string()),
            home_postal_code: Set(payload.home_postal_code),
            token: Set(payload.token),
            office_id: Set(payload.office_id),
            preferred_option_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        Ok(row.id)
    }

    pub async fn list_employees_paginated(
        &self,
        department: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EmployeeModel>, u64), AppError> {
        let mut finder = Employee::find().order_by_asc(entity::employee::Column::Id);
        if let Some(dep) = department {
            finder = finder.filter(entity::employee::Column::Department.eq(dep));
        }
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder
            .paginate(&self.database_connection, per_page)
            .fetch_page(page)
            .await?;
        Ok((items, total))
    }

    pub async fn list_all_employees(&self) -> Result<Vec<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .order_by_asc(entity::employee::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn count_employees(&self) -> Result<u64, AppError> {
        Ok(Employee::find().count(&self.database_connection).await?)
    }

    pub async fn list_employees_for_office(
        &self,
        office_id: i32,
    ) -> Result<Vec<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .filter(entity::employee::Column::OfficeId.eq(office_id))
            .order_by_asc(entity::employee::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn regenerate_employee_token(&self, employee_id: i32) -> Result<String, AppError> {
        let employee = self.get_employee(employee_id).await?;
        let token = new_token(TokenType::Employee);
        let encrypted = encrypt(&token).map_err(|_| DbErr::RecordNotUpdated)?;
        let mut am: EmployeeActive = employee.into();
        am.token = Set(encrypted);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(token)
    }

    /// Set the employee's preferred option and record one completed session
    /// awarding the option's points. Both writes land or neither does.
    pub async fn select_commute_option(
        &self,
        employee_id: i32,
        option_id: i32,
    ) -> Result<i32, AppError> {
        let txn = self.database_connection.begin().await?;

        let option = CommuteOption::find_by_id(option_id)
            .one(&txn)
            .await?
            .filter(|o| o.active)
            .ok_or_else(|| AppError::NotFound("Invalid option.".to_string()))?;

        let employee = Employee::find_by_id(employee_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee not found.".into()))?;

        let mut am: EmployeeActive = employee.into();
        am.preferred_option_id = Set(Some(option.id));
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        let now = Utc::now();
        let session = commute_session::ActiveModel {
            employee_id: Set(employee_id),
            date: Set(now.date_naive()),
            status: Set(SessionStatus::Completed),
            points_earned: Set(option.points_per_session),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(session.id)
    }
}
