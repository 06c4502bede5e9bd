use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::commute_option::Entity as CommuteOption;
use entity::enrollment::{
    ActiveModel as EnrollmentActive, Column, Entity as Enrollment, EnrollmentStatus,
    Model as EnrollmentModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl PostgresService {
    /// Creates an `active` enrollment. Duplicate active (employee, option)
    /// pairs are rejected here and, for racing requests, by the partial
    /// unique index (which surfaces as `Conflict`).
    pub async fn create_enrollment(
        &self,
        employee_id: i32,
        option_id: i32,
    ) -> Result<EnrollmentModel, AppError> {
        self.get_employee(employee_id).await?;
        CommuteOption::find_by_id(option_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Option not found.".into()))?;

        let duplicate = Enrollment::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .filter(Column::OptionId.eq(option_id))
            .filter(Column::Status.eq(EnrollmentStatus::Active))
            .count(&self.database_connection)
            .await?
            > 0;
        if duplicate {
            return Err(AppError::Conflict(
                "Employee already has an active enrollment for this option.".to_string(),
            ));
        }

        Ok(EnrollmentActive {
            employee_id: Set(employee_id),
            option_id: Set(option_id),
            status: Set(EnrollmentStatus::Active),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// `active -> canceled`, one-way. Canceling twice is a no-op.
    pub async fn cancel_enrollment(&self, id: i32) -> Result<EnrollmentModel, AppError> {
        let enrollment = Enrollment::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Enrollment not found.".into()))?;

        if enrollment.status == EnrollmentStatus::Canceled {
            return Ok(enrollment);
        }

        let mut am: EnrollmentActive = enrollment.into();
        am.status = Set(EnrollmentStatus::Canceled);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn list_enrollments(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<EnrollmentModel>, AppError> {
        let mut finder = Enrollment::find().order_by_desc(Column::CreatedAt);
        if let Some(status) = status {
            finder = finder.filter(Column::Status.eq(status));
        }
        Ok(finder.all(&self.database_connection).await?)
    }

    pub async fn list_active_enrollments(&self) -> Result<Vec<EnrollmentModel>, AppError> {
        self.list_enrollments(Some(EnrollmentStatus::Active)).await
    }
}
