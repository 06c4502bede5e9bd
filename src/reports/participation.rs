use crate::reports::round2;
use crate::types::lobby::ParticipationRes;
use entity::enrollment;
use std::collections::BTreeSet;

/// Share of employees with at least one active enrollment. The enrollment
/// count is distinct-by-employee, so double-enrolled employees count once.
pub fn participation_report(
    total_employees: u64,
    active_enrollments: &[enrollment::Model],
) -> ParticipationRes {
    let participating: BTreeSet<i32> = active_enrollments
        .iter()
        .map(|e| e.employee_id)
        .collect();
    let active = participating.len() as u64;

    let rate = if total_employees > 0 {
        round2(active as f64 / total_employees as f64 * 100.0)
    } else {
        0.0
    };

    ParticipationRes {
        participation_rate: rate,
        active_enrollments: active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entity::enrollment::EnrollmentStatus;

    fn enrollment(id: i32, employee_id: i32, option_id: i32) -> enrollment::Model {
        enrollment::Model {
            id,
            employee_id,
            option_id,
            status: EnrollmentStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn zero_employees_is_zero_rate_not_a_panic() {
        let report = participation_report(0, &[]);
        assert_eq!(report.participation_rate, 0.0);
        assert_eq!(report.active_enrollments, 0);
    }

    #[test]
    fn employees_with_multiple_enrollments_count_once() {
        let enrollments = vec![enrollment(1, 7, 1), enrollment(2, 7, 2), enrollment(3, 9, 1)];
        let report = participation_report(4, &enrollments);
        assert_eq!(report.active_enrollments, 2);
        assert_eq!(report.participation_rate, 50.0);
    }

    #[test]
    fn rate_is_rounded_to_two_decimals() {
        let enrollments = vec![enrollment(1, 1, 1)];
        let report = participation_report(3, &enrollments);
        assert_eq!(report.participation_rate, 33.33);
    }

    #[test]
    fn rate_stays_within_bounds() {
        let enrollments: Vec<_> = (1..=5).map(|i| enrollment(i, i, 1)).collect();
        let report = participation_report(5, &enrollments);
        assert_eq!(report.participation_rate, 100.0);
    }
}
