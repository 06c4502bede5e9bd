use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::reward::{
    ActiveModel as RewardActive, Column, Entity as Reward, Model as RewardModel, RewardType,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl PostgresService {
    pub async fn create_reward(
        &self,
        office_id: i32,
        name: String,
        reward_type: RewardType,
        description: String,
        target_points: i32,
    ) -> Result<i32, AppError> {
        let row = RewardActive {
            office_id: Set(office_id),
            name: Set(name),
            reward_type: Set(reward_type),
            description: Set(description),
            target_points: Set(target_points),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        Ok(row.id)
    }

    pub async fn list_rewards_for_office(
        &self,
        office_id: i32,
    ) -> Result<Vec<RewardModel>, AppError> {
        Ok(Reward::find()
            .filter(Column::OfficeId.eq(office_id))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
