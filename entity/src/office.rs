use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "office")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub monthly_budget: f64,
    // Demo defaults, not derived from any other row.
    pub baseline_monthly_cost: f64,
    pub baseline_co2_kg: f64,
    pub payroll_tax_rate: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
    #[sea_orm(has_many = "super::reward::Entity")]
    Reward,
}

impl ActiveModelBehavior for ActiveModel {}
