use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, option::DBOptionCreate};
use chrono::Utc;
use entity::commute_option::{
    ActiveModel as OptionActive, Column, Entity as CommuteOption, Model as OptionModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

impl PostgresService {
    pub async fn create_option(&self, payload: DBOptionCreate) -> Result<i32, AppError> {
        let row = OptionActive {
            name: Set(payload.name),
            description: Set(payload.description),
            active: Set(payload.active),
            monthly_cost_before_tax: Set(payload.monthly_cost_before_tax),
            monthly_cost_after_tax: Set(payload.monthly_cost_after_tax),
            co2_kg_per_month: Set(payload.co2_kg_per_month),
            points_per_session: Set(payload.points_per_session),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        Ok(row.id)
    }

    pub async fn get_option(&self, id: i32) -> Result<OptionModel, AppError> {
        Ok(CommuteOption::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Option not found.".into()))?)
    }

    /// Includes inactive options; dashboards still need to price a
    /// preferred option that was deactivated after selection.
    pub async fn list_all_options(&self) -> Result<Vec<OptionModel>, AppError> {
        Ok(CommuteOption::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_active_options(&self) -> Result<Vec<OptionModel>, AppError> {
        Ok(CommuteOption::find()
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
