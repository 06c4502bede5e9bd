use crate::reports::{monthly_co2_saved, monthly_savings, round2};
use crate::types::dashboard::{
    DailyCo2Point, DailyMoneyPoint, DashboardOptionRes, EmployeeChartsRes, EmployeeDashboardRes,
    EmployeeInfoRes, EmployeeProgressRes, EmployeeStatsRes, OfficeInfoRes, ProgressBlockRes,
};
use chrono::{Duration, NaiveDate};
use entity::{commute_option, commute_session, employee, office};

/// Completed sessions needed for the individual reward (progress is
/// `sessions * 100 / 10`, clamped).
const INDIVIDUAL_TARGET_SESSIONS: i64 = 10;
/// Completed office sessions needed for the team reward.
const TEAM_TARGET_SESSIONS: i64 = 100;
/// Working days per month assumed when spreading a monthly figure over the
/// daily chart. A fixed demo assumption, not configurable.
const WORKING_DAYS_PER_MONTH: f64 = 20.0;

const INDIVIDUAL_LABEL: &str = "Individual reward";
const TEAM_LABEL: &str = "Team reward";

/// Personal dashboard: savings stats from the preferred option against the
/// office baseline, reward progress, and a 7-day money/CO2 chart.
/// `employee_sessions` are the employee's completed sessions;
/// `office_completed_sessions` counts completed sessions across the office.
pub fn employee_dashboard(
    employee: &employee::Model,
    office: &office::Model,
    options: &[commute_option::Model],
    employee_sessions: &[commute_session::Model],
    office_completed_sessions: u64,
    today: NaiveDate,
) -> EmployeeDashboardRes {
    let selected = employee
        .preferred_option_id
        .and_then(|id| options.iter().find(|o| o.id == id));

    let (money_monthly, co2_monthly) = match selected {
        Some(option) => (
            round2(monthly_savings(option.monthly_cost_before_tax, office.payroll_tax_rate)),
            round2(monthly_co2_saved(office.baseline_co2_kg, option.co2_kg_per_month)),
        ),
        None => (0.0, 0.0),
    };

    let completed = employee_sessions.len() as i64;
    let individual_percent = (completed * 100 / INDIVIDUAL_TARGET_SESSIONS).min(100);
    let team_percent = (office_completed_sessions as i64 * 100 / TEAM_TARGET_SESSIONS).min(100);

    let mut daily_money = Vec::with_capacity(7);
    let mut daily_co2 = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let day = today - Duration::days(offset);
        let runs = employee_sessions.iter().filter(|s| s.date == day).count() as f64;
        let (money, co2) = if runs > 0.0 {
            (
                round2(money_monthly / WORKING_DAYS_PER_MONTH * runs),
                round2(co2_monthly / WORKING_DAYS_PER_MONTH * runs),
            )
        } else {
            (0.0, 0.0)
        };
        daily_money.push(DailyMoneyPoint {
            date: day.to_string(),
            amount: money,
        });
        daily_co2.push(DailyCo2Point {
            date: day.to_string(),
            kg: co2,
        });
    }

    EmployeeDashboardRes {
        employee: EmployeeInfoRes {
            id: employee.id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            home_postal_code: employee.home_postal_code.clone(),
        },
        office: OfficeInfoRes {
            id: office.id,
            name: office.name.clone(),
            city: office.city.clone(),
        },
        commute_options: options
            .iter()
            .map(|o| DashboardOptionRes {
                id: o.id,
                name: o.name.clone(),
                description: o.description.clone(),
                active: o.active,
                monthly_cost_before_tax: o.monthly_cost_before_tax,
                monthly_cost_after_tax: o.monthly_cost_after_tax,
                co2_kg_per_month: o.co2_kg_per_month,
                selected: employee.preferred_option_id == Some(o.id),
            })
            .collect(),
        stats: EmployeeStatsRes {
            money_saved_monthly: money_monthly,
            money_saved_yearly: round2(money_monthly * 12.0),
            co2_saved_monthly_kg: co2_monthly,
            co2_saved_yearly_kg: round2(co2_monthly * 12.0),
        },
        progress: EmployeeProgressRes {
            individual_reward: ProgressBlockRes {
                label: INDIVIDUAL_LABEL.to_string(),
                percent: individual_percent,
            },
            team_reward: ProgressBlockRes {
                label: TEAM_LABEL.to_string(),
                percent: team_percent,
            },
        },
        charts: EmployeeChartsRes {
            daily_money_saved: daily_money,
            daily_co2_saved: daily_co2,
        },
    }
}
