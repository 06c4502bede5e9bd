use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub status: String,
    pub home_postal_code: Option<String>,
    /// Argon2 hash of the employee's api key. Never serialized to the wire.
    #[serde(skip_serializing)]
    pub token: String,
    pub office_id: Option<i32>,            // FK -> office.id (nullable)
    pub preferred_option_id: Option<i32>,  // FK -> commute_option.id (nullable)
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

pub const STATUS_ACTIVE: &str = "active";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::office::Entity",
        from = "Column::OfficeId",
        to   = "super::office::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Office,
    #[sea_orm(
        belongs_to = "super::commute_option::Entity",
        from = "Column::PreferredOptionId",
        to   = "super::commute_option::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PreferredOption,
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
