use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::session::FALLBACK_SESSION_POINTS;
use chrono::Utc;
use entity::commute_option::Entity as CommuteOption;
use entity::commute_session::{
    ActiveModel as SessionActive, Column, Entity as CommuteSession, Model as SessionModel,
    SessionStatus,
};
use entity::employee::Entity as Employee;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl PostgresService {
    pub async fn start_session(&self, employee_id: i32) -> Result<SessionModel, AppError> {
        self.get_employee(employee_id).await?;
        let now = Utc::now();
        Ok(SessionActive {
            employee_id: Set(employee_id),
            date: Set(now.date_naive()),
            status: Set(SessionStatus::InProgress),
            points_earned: Set(0),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// `in_progress -> completed`, awarding the preferred option's points
    /// (demo fallback when none is selected). Finishing an already-completed
    /// session returns it untouched.
    pub async fn finish_session(&self, id: i32) -> Result<SessionModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let session = CommuteSession::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session not found.".into()))?;

        if session.status == SessionStatus::Completed {
            txn.commit().await?;
            return Ok(session);
        }

        let employee = Employee::find_by_id(session.employee_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee not found.".into()))?;

        let points = match employee.preferred_option_id {
            Some(option_id) => CommuteOption::find_by_id(option_id)
                .one(&txn)
                .await?
                .map(|o| o.points_per_session)
                .unwrap_or(FALLBACK_SESSION_POINTS),
            None => FALLBACK_SESSION_POINTS,
        };

        let mut am: SessionActive = session.into();
        am.status = Set(SessionStatus::Completed);
        am.points_earned = Set(points);
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    pub async fn list_completed_sessions(&self) -> Result<Vec<SessionModel>, AppError> {
        Ok(CommuteSession::find()
            .filter(Column::Status.eq(SessionStatus::Completed))
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_completed_sessions_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<SessionModel>, AppError> {
        Ok(CommuteSession::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .filter(Column::Status.eq(SessionStatus::Completed))
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_completed_sessions_for_employees(
        &self,
        employee_ids: Vec<i32>,
    ) -> Result<Vec<SessionModel>, AppError> {
        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(CommuteSession::find()
            .filter(Column::EmployeeId.is_in(employee_ids))
            .filter(Column::Status.eq(SessionStatus::Completed))
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }
}
