use entity::reward::RewardType;
use serde::{Deserialize, Serialize};

// ---- HR dashboard ----

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HrOfficeRes {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub monthly_budget: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HrSummaryRes {
    pub total_employees: u64,
    pub participating_employees: u64,
    pub participation_rate: f64,
    pub payroll_tax_rate: f64,
    pub total_pre_tax_spend: f64,
    pub estimated_employer_savings_monthly: f64,
    pub estimated_employer_savings_yearly: f64,
    pub total_co2_saved_monthly_kg: f64,
    pub total_co2_saved_yearly_kg: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MoneyByMonth {
    pub month: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Co2ByMonth {
    pub month: String,
    pub kg: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HrChartsRes {
    pub money_saved_by_month: Vec<MoneyByMonth>,
    pub co2_saved_by_month: Vec<Co2ByMonth>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HrRewardRes {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub description: String,
    pub target_points: i32,
    pub current_points: i64,
    pub progress_percent: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HrDashboardRes {
    pub office: HrOfficeRes,
    pub summary: HrSummaryRes,
    pub charts: HrChartsRes,
    pub rewards: Vec<HrRewardRes>,
}

// ---- Employee dashboard ----

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfoRes {
    pub id: i32,
    pub name: String,
    pub department: Option<String>,
    pub home_postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OfficeInfoRes {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOptionRes {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub monthly_cost_before_tax: f64,
    pub monthly_cost_after_tax: f64,
    pub co2_kg_per_month: f64,
    pub selected: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatsRes {
    pub money_saved_monthly: f64,
    pub money_saved_yearly: f64,
    pub co2_saved_monthly_kg: f64,
    pub co2_saved_yearly_kg: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProgressBlockRes {
    pub label: String,
    pub percent: i64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProgressRes {
    pub individual_reward: ProgressBlockRes,
    pub team_reward: ProgressBlockRes,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DailyMoneyPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DailyCo2Point {
    pub date: String,
    pub kg: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChartsRes {
    pub daily_money_saved: Vec<DailyMoneyPoint>,
    pub daily_co2_saved: Vec<DailyCo2Point>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboardRes {
    pub employee: EmployeeInfoRes,
    pub office: OfficeInfoRes,
    pub commute_options: Vec<DashboardOptionRes>,
    pub stats: EmployeeStatsRes,
    pub progress: EmployeeProgressRes,
    pub charts: EmployeeChartsRes,
}

// ---- Select action ----

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RSelectOption {
    pub option_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionRes {
    pub employee_id: i32,
    pub selected_option_id: i32,
    pub session_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::reward::RewardType;

    #[test]
    fn reward_rows_expose_type_not_reward_type() {
        let row = HrRewardRes {
            id: 1,
            name: "Team lunch".to_string(),
            reward_type: RewardType::Team,
            description: String::new(),
            target_points: 500,
            current_points: 120,
            progress_percent: 24,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], "team");
        assert_eq!(json["targetPoints"], 500);
        assert_eq!(json["progressPercent"], 24);
        assert!(json.get("rewardType").is_none());
    }

    #[test]
    fn select_body_and_response_use_camel_case() {
        let body: RSelectOption = serde_json::from_str(r#"{"optionId": 3}"#).unwrap();
        assert_eq!(body.option_id, 3);

        let res = SelectOptionRes {
            employee_id: 1,
            selected_option_id: 3,
            session_id: 9,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["employeeId"], 1);
        assert_eq!(json["selectedOptionId"], 3);
        assert_eq!(json["sessionId"], 9);
    }

    #[test]
    fn dashboard_option_rows_keep_the_cost_key_spelling() {
        let row = DashboardOptionRes {
            id: 2,
            name: "Go Train".to_string(),
            description: String::new(),
            active: true,
            monthly_cost_before_tax: 260.0,
            monthly_cost_after_tax: 182.0,
            co2_kg_per_month: 150.0,
            selected: true,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["monthlyCostBeforeTax"], 260.0);
        assert_eq!(json["co2KgPerMonth"], 150.0);
        assert_eq!(json["selected"], true);
    }
}
