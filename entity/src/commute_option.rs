use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ways someone can commute (rail, bike, carpool, ...). Cost and CO2 figures
/// are static per option, not time-varying.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commute_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub monthly_cost_before_tax: f64,
    pub monthly_cost_after_tax: f64,
    pub co2_kg_per_month: f64,
    pub points_per_session: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl ActiveModelBehavior for ActiveModel {}
