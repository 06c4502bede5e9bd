use chrono::Utc;
use fleet_commute::reports::employee::employee_dashboard;
use fleet_commute::reports::hr::hr_dashboard;
use fleet_commute::reports::lobby::lobby_summary;
use fleet_commute::reports::participation::participation_report;

mod common;
use common::{fixtures, TestContext};

#[tokio::test]
async fn participation_report_over_an_empty_database_is_all_zeros() {
    let ctx = TestContext::new().await;

    let total = ctx.db.count_employees().await.unwrap();
    let active = ctx.db.list_active_enrollments().await.unwrap();
    let report = participation_report(total, &active);

    assert_eq!(report.participation_rate, 0.0);
    assert_eq!(report.active_enrollments, 0);
}

#[tokio::test]
async fn participation_report_counts_distinct_enrolled_employees() {
    let ctx = TestContext::new().await;

    let ada = fixtures::sample_employee(&ctx.db, "ada@test.com", None, None).await;
    fixtures::sample_employee(&ctx.db, "grace@test.com", None, None).await;
    let bike = fixtures::sample_option(&ctx.db, "Bike", 60.0, 0.0, 40, true).await;
    let train = fixtures::sample_option(&ctx.db, "Go Train", 260.0, 150.0, 30, true).await;

    ctx.db.create_enrollment(ada, bike).await.unwrap();
    ctx.db.create_enrollment(ada, train).await.unwrap();

    let total = ctx.db.count_employees().await.unwrap();
    let active = ctx.db.list_active_enrollments().await.unwrap();
    let report = participation_report(total, &active);

    assert_eq!(report.active_enrollments, 1);
    assert_eq!(report.participation_rate, 50.0);
}

#[tokio::test]
async fn hr_dashboard_aggregates_office_savings_and_reward_progress() {
    let ctx = TestContext::new().await;

    let office_id = fixtures::sample_office(&ctx.db).await;
    let ada =
        fixtures::sample_employee(&ctx.db, "ada@test.com", Some("Engineering"), Some(office_id))
            .await;
    fixtures::sample_employee(&ctx.db, "grace@test.com", Some("Sales"), Some(office_id)).await;
    let train = fixtures::sample_option(&ctx.db, "Go Train", 260.0, 150.0, 30, true).await;
    fixtures::sample_reward(&ctx.db, office_id, 60).await;

    // Ada selects the train (one completed session, 30 points) and finishes
    // one more run for another 30.
    ctx.db.select_commute_option(ada, train).await.unwrap();
    let session = ctx.db.start_session(ada).await.unwrap();
    ctx.db.finish_session(session.id).await.unwrap();

    let office = ctx.db.get_office(office_id).await.unwrap();
    let employees = ctx.db.list_employees_for_office(office_id).await.unwrap();
    let options = ctx.db.list_all_options().await.unwrap();
    let rewards = ctx.db.list_rewards_for_office(office_id).await.unwrap();
    let sessions = ctx
        .db
        .list_completed_sessions_for_employees(employees.iter().map(|e| e.id).collect())
        .await
        .unwrap();

    let dash = hr_dashboard(&office, &employees, &options, &rewards, &sessions);

    assert_eq!(dash.office.name, "Toronto HQ");
    assert_eq!(dash.summary.total_employees, 2);
    assert_eq!(dash.summary.participating_employees, 1);
    assert_eq!(dash.summary.participation_rate, 50.0);
    assert_eq!(dash.summary.total_pre_tax_spend, 260.0);
    assert_eq!(dash.summary.estimated_employer_savings_monthly, 19.89);
    assert_eq!(dash.summary.estimated_employer_savings_yearly, 238.68);
    assert_eq!(dash.summary.total_co2_saved_monthly_kg, 70.0);
    assert_eq!(dash.summary.total_co2_saved_yearly_kg, 840.0);

    assert_eq!(dash.rewards.len(), 1);
    assert_eq!(dash.rewards[0].current_points, 60);
    assert_eq!(dash.rewards[0].progress_percent, 100);

    assert_eq!(dash.charts.money_saved_by_month.len(), 6);
    assert_eq!(dash.charts.money_saved_by_month[5].amount, 19.89);
}

#[tokio::test]
async fn employee_dashboard_reflects_selection_and_runs() {
    let ctx = TestContext::new().await;

    let office_id = fixtures::sample_office(&ctx.db).await;
    let ada =
        fixtures::sample_employee(&ctx.db, "ada@test.com", Some("Engineering"), Some(office_id))
            .await;
    let train = fixtures::sample_option(&ctx.db, "Go Train", 260.0, 150.0, 30, true).await;
    fixtures::sample_option(&ctx.db, "Bike", 60.0, 0.0, 40, true).await;

    ctx.db.select_commute_option(ada, train).await.unwrap();

    let employee = ctx.db.get_employee(ada).await.unwrap();
    let office = ctx.db.get_office(office_id).await.unwrap();
    let options = ctx.db.list_active_options().await.unwrap();
    let my_sessions = ctx
        .db
        .list_completed_sessions_for_employee(ada)
        .await
        .unwrap();
    let colleagues = ctx.db.list_employees_for_office(office_id).await.unwrap();
    let office_sessions = ctx
        .db
        .list_completed_sessions_for_employees(colleagues.iter().map(|e| e.id).collect())
        .await
        .unwrap();

    let dash = employee_dashboard(
        &employee,
        &office,
        &options,
        &my_sessions,
        office_sessions.len() as u64,
        Utc::now().date_naive(),
    );

    assert_eq!(dash.stats.money_saved_monthly, 19.89);
    assert_eq!(dash.stats.co2_saved_monthly_kg, 70.0);
    let selected: Vec<bool> = dash.commute_options.iter().map(|o| o.selected).collect();
    assert_eq!(selected.iter().filter(|s| **s).count(), 1);
    // One completed session so far: 10% individual, 1% team.
    assert_eq!(dash.progress.individual_reward.percent, 10);
    assert_eq!(dash.progress.team_reward.percent, 1);
    // Today's point of the chart carries the selection session.
    assert_eq!(dash.charts.daily_money_saved.len(), 7);
    assert!(dash.charts.daily_money_saved[6].amount > 0.0);
}

#[tokio::test]
async fn lobby_counts_completed_runs_for_the_current_week() {
    let ctx = TestContext::new().await;

    let office_id = fixtures::sample_office(&ctx.db).await;
    let ada =
        fixtures::sample_employee(&ctx.db, "ada@test.com", Some("Engineering"), Some(office_id))
            .await;
    fixtures::sample_employee(&ctx.db, "grace@test.com", None, Some(office_id)).await;

    let session = ctx.db.start_session(ada).await.unwrap();
    ctx.db.finish_session(session.id).await.unwrap();
    // Still in progress, must not count.
    ctx.db.start_session(ada).await.unwrap();

    let office = ctx.db.get_office(office_id).await.unwrap();
    let employees = ctx.db.list_all_employees().await.unwrap();
    let sessions = ctx.db.list_completed_sessions().await.unwrap();
    let lobby = lobby_summary(
        &office.name,
        Utc::now().date_naive(),
        &employees,
        &sessions,
    );

    assert_eq!(lobby.office_name, "Toronto HQ");
    assert_eq!(lobby.runs_today, 1);
    assert_eq!(lobby.runs_this_week, 1);
    assert_eq!(lobby.team_totals.len(), 1);
    assert_eq!(lobby.team_totals[0].team, "Engineering");
    assert_eq!(lobby.coworkers.len(), 2);
}
