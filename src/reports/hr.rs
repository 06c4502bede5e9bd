use crate::reports::{monthly_co2_saved, monthly_savings, round1, round2, CHART_MONTHS};
use crate::types::dashboard::{
    Co2ByMonth, HrChartsRes, HrDashboardRes, HrOfficeRes, HrRewardRes, HrSummaryRes, MoneyByMonth,
};
use entity::{commute_option, commute_session, employee, office, reward};
use std::collections::HashMap;

/// Office-level cost/CO2/reward aggregation over a snapshot of the office's
/// employees, the option catalogue, its rewards, and the completed sessions
/// of its employees.
pub fn hr_dashboard(
    office: &office::Model,
    employees: &[employee::Model],
    options: &[commute_option::Model],
    rewards: &[reward::Model],
    completed_sessions: &[commute_session::Model],
) -> HrDashboardRes {
    let options_by_id: HashMap<i32, &commute_option::Model> =
        options.iter().map(|o| (o.id, o)).collect();

    let active: Vec<&employee::Model> = employees
        .iter()
        .filter(|e| e.status == employee::STATUS_ACTIVE)
        .collect();
    let total_employees = active.len() as u64;

    let mut participating = 0u64;
    let mut pre_tax_spend = 0.0;
    let mut savings_monthly = 0.0;
    let mut co2_monthly = 0.0;
    for emp in &active {
        let Some(option) = emp.preferred_option_id.and_then(|id| options_by_id.get(&id)) else {
            continue;
        };
        participating += 1;
        pre_tax_spend += option.monthly_cost_before_tax;
        savings_monthly += monthly_savings(option.monthly_cost_before_tax, office.payroll_tax_rate);
        co2_monthly += monthly_co2_saved(office.baseline_co2_kg, option.co2_kg_per_month);
    }

    let participation_rate = if total_employees > 0 {
        round1(participating as f64 / total_employees as f64 * 100.0)
    } else {
        0.0
    };

    let total_points: i64 = completed_sessions
        .iter()
        .map(|s| s.points_earned as i64)
        .sum();

    let rewards = rewards
        .iter()
        .map(|r| {
            let progress = if r.target_points > 0 {
                (100 * total_points / r.target_points as i64).min(100)
            } else {
                0
            };
            HrRewardRes {
                id: r.id,
                name: r.name.clone(),
                reward_type: r.reward_type,
                description: r.description.clone(),
                target_points: r.target_points,
                current_points: total_points,
                progress_percent: progress,
            }
        })
        .collect();

    HrDashboardRes {
        office: HrOfficeRes {
            id: office.id,
            name: office.name.clone(),
            city: office.city.clone(),
            address: office.address.clone(),
            monthly_budget: office.monthly_budget,
        },
        summary: HrSummaryRes {
            total_employees,
            participating_employees: participating,
            participation_rate,
            payroll_tax_rate: office.payroll_tax_rate,
            total_pre_tax_spend: round2(pre_tax_spend),
            estimated_employer_savings_monthly: round2(savings_monthly),
            estimated_employer_savings_yearly: round2(savings_monthly * 12.0),
            total_co2_saved_monthly_kg: round2(co2_monthly),
            total_co2_saved_yearly_kg: round2(co2_monthly * 12.0),
        },
        charts: HrChartsRes {
            money_saved_by_month: ramp(savings_monthly)
                .map(|(month, v)| MoneyByMonth { month, amount: v })
                .collect(),
            co2_saved_by_month: ramp(co2_monthly)
                .map(|(month, v)| Co2ByMonth { month, kg: v })
                .collect(),
        },
        rewards,
    }
}

/// Linear ramp to `total` across the fixed month labels: point i (1-based)
/// carries `total * i / 6`. Demo smoothing, not history.
fn ramp(total: f64) -> impl Iterator<Item = (String, f64)> {
    CHART_MONTHS
        .iter()
        .enumerate()
        .map(move |(i, month)| (month.to_string(), round2(total * (i + 1) as f64 / 6.0)))
}
