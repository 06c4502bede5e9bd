use crate::types::lobby::{LobbyCoworker, LobbyRes, LobbyTeamTotal};
use chrono::{Datelike, Duration, NaiveDate};
use entity::commute_session::{self, SessionStatus};
use entity::employee;
use std::collections::HashMap;

/// Fixed 4-element status cycle for the coworker list. Presentation filler
/// keyed off the employee index, not real presence.
pub const STATUS_CYCLE: [&str; 4] = [
    "In the lobby ☕",
    "Starting my commute 🚋",
    "Already on the way 🚶",
    "WFH today 🏠",
];

const UNASSIGNED_TEAM: &str = "Unassigned";
const DEFAULT_TEAM: &str = "General";
const MAX_COWORKERS: usize = 12;

pub fn lobby_summary(
    office_name: &str,
    today: NaiveDate,
    employees: &[employee::Model],
    sessions: &[commute_session::Model],
) -> LobbyRes {
    // Week starts Monday.
    let start_of_week = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    let runs_today = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed && s.date == today)
        .count() as u64;

    let week_sessions: Vec<&commute_session::Model> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed && s.date >= start_of_week)
        .collect();
    let runs_this_week = week_sessions.len() as u64;

    let team_by_employee: HashMap<i32, &str> = employees
        .iter()
        .map(|e| {
            let team = e
                .department
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(UNASSIGNED_TEAM);
            (e.id, team)
        })
        .collect();

    let mut totals: HashMap<&str, u64> = HashMap::new();
    for session in &week_sessions {
        let team = team_by_employee
            .get(&session.employee_id)
            .copied()
            .unwrap_or(UNASSIGNED_TEAM);
        *totals.entry(team).or_insert(0) += 1;
    }
    let mut team_totals: Vec<LobbyTeamTotal> = totals
        .into_iter()
        .map(|(team, runs)| LobbyTeamTotal {
            team: team.to_string(),
            runs_this_week: runs,
        })
        .collect();
    team_totals.sort_by(|a, b| {
        b.runs_this_week
            .cmp(&a.runs_this_week)
            .then_with(|| a.team.cmp(&b.team))
    });

    let coworkers: Vec<LobbyCoworker> = employees
        .iter()
        .filter(|e| e.status == employee::STATUS_ACTIVE)
        .take(MAX_COWORKERS)
        .enumerate()
        .map(|(idx, e)| LobbyCoworker {
            name: e.name.clone(),
            team: e
                .department
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            status: STATUS_CYCLE[idx % STATUS_CYCLE.len()].to_string(),
        })
        .collect();

    LobbyRes {
        office_name: office_name.to_string(),
        runs_today,
        runs_this_week,
        team_totals,
        coworkers,
    }
}
