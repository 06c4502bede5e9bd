use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, office::DBOfficeCreate};
use chrono::Utc;
use entity::office::{ActiveModel as OfficeActive, Entity as Office, Model as OfficeModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};

impl PostgresService {
    pub async fn create_office(&self, payload: DBOfficeCreate) -> Result<i32, AppError> {
        let row = OfficeActive {
            name: Set(payload.name),
            city: Set(payload.city),
            address: Set(payload.address),
            monthly_budget: Set(payload.monthly_budget),
            baseline_monthly_cost: Set(payload.baseline_monthly_cost),
            baseline_co2_kg: Set(payload.baseline_co2_kg),
            payroll_tax_rate: Set(payload.payroll_tax_rate),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        Ok(row.id)
    }

    pub async fn get_office(&self, id: i32) -> Result<OfficeModel, AppError> {
        Ok(Office::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Office not found.".into()))?)
    }
}
