use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DBOptionCreate {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub monthly_cost_before_tax: f64,
    pub monthly_cost_after_tax: f64,
    pub co2_kg_per_month: f64,
    pub points_per_session: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OptionRes {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl From<entity::commute_option::Model> for OptionRes {
    fn from(m: entity::commute_option::Model) -> Self {
        OptionRes {
            id: m.id,
            name: m.name,
            description: m.description,
            active: m.active,
        }
    }
}
