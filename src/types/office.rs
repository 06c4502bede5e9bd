use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DBOfficeCreate {
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub monthly_budget: f64,
    pub baseline_monthly_cost: f64,
    pub baseline_co2_kg: f64,
    pub payroll_tax_rate: f64,
}
