//! Pure report computations. Every function here takes a snapshot of entity
//! rows and returns a response DTO; nothing touches the database, so the
//! dashboard math is testable without Postgres.

pub mod employee;
pub mod hr;
pub mod lobby;
pub mod participation;

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Labels for the 6-point dashboard charts. The series is a linear ramp to
/// the current monthly totals, not a real history; the frontend renders it
/// as-is, so the shape is load-bearing.
pub const CHART_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Employer-side monthly saving for one option: pre-tax cost times the
/// office payroll tax rate.
pub fn monthly_savings(cost_before_tax: f64, payroll_tax_rate: f64) -> f64 {
    cost_before_tax * payroll_tax_rate / 100.0
}

/// CO2 saved against the office baseline, floored at zero.
pub fn monthly_co2_saved(baseline_co2_kg: f64, option_co2_kg: f64) -> f64 {
    (baseline_co2_kg - option_co2_kg).max(0.0)
}
