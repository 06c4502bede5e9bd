use entity::commute_session::SessionStatus;
use fleet_commute::types::error::AppError;
use fleet_commute::types::session::FALLBACK_SESSION_POINTS;

mod common;
use common::{fixtures, TestContext};

#[tokio::test]
async fn start_and_finish_awards_fallback_points_without_a_selection() {
    let ctx = TestContext::new().await;

    let employee_id = fixtures::sample_employee(&ctx.db, "ada@test.com", None, None).await;

    let session = ctx
        .db
        .start_session(employee_id)
        .await
        .expect("Failed to start session");
    assert_eq!(session.status, SessionStatus::InProgress);
    assert_eq!(session.points_earned, 0);

    let finished = ctx
        .db
        .finish_session(session.id)
        .await
        .expect("Failed to finish session");
    assert_eq!(finished.status, SessionStatus::Completed);
    assert_eq!(finished.points_earned, FALLBACK_SESSION_POINTS);
}

#[tokio::test]
async fn finish_twice_never_changes_the_stored_points() {
    let ctx = TestContext::new().await;

    let employee_id = fixtures::sample_employee(&ctx.db, "grace@test.com", None, None).await;
    let option_id = fixtures::sample_option(&ctx.db, "Bike", 60.0, 0.0, 40, true).await;
    ctx.db
        .select_commute_option(employee_id, option_id)
        .await
        .unwrap();

    let session = ctx.db.start_session(employee_id).await.unwrap();
    let finished = ctx.db.finish_session(session.id).await.unwrap();
    assert_eq!(finished.points_earned, 40);

    // A second finish is a no-op even if the priced option changes between
    // the two calls.
    let cheaper = fixtures::sample_option(&ctx.db, "Walking", 0.0, 0.0, 50, true).await;
    ctx.db
        .select_commute_option(employee_id, cheaper)
        .await
        .unwrap();

    let finished_again = ctx.db.finish_session(session.id).await.unwrap();
    assert_eq!(finished_again.status, SessionStatus::Completed);
    assert_eq!(finished_again.points_earned, 40);
}

#[tokio::test]
async fn finishing_an_unknown_session_is_not_found() {
    let ctx = TestContext::new().await;
    let result = ctx.db.finish_session(424242).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn select_option_sets_preference_and_records_a_completed_session() {
    let ctx = TestContext::new().await;

    let employee_id = fixtures::sample_employee(&ctx.db, "linus@test.com", None, None).await;
    let option_id = fixtures::sample_option(&ctx.db, "Go Train", 260.0, 150.0, 30, true).await;

    let session_id = ctx
        .db
        .select_commute_option(employee_id, option_id)
        .await
        .expect("Failed to select option");

    let employee = ctx.db.get_employee(employee_id).await.unwrap();
    assert_eq!(employee.preferred_option_id, Some(option_id));

    let sessions = ctx
        .db
        .list_completed_sessions_for_employee(employee_id)
        .await
        .unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, session_id);
    assert_eq!(sessions[0].points_earned, 30);
    assert_eq!(sessions[0].status, SessionStatus::Completed);
}

#[tokio::test]
async fn selecting_an_invalid_option_changes_nothing() {
    let ctx = TestContext::new().await;

    let employee_id = fixtures::sample_employee(&ctx.db, "alan@test.com", None, None).await;
    let inactive = fixtures::sample_option(&ctx.db, "Retired shuttle", 80.0, 90.0, 10, false).await;

    let result = ctx.db.select_commute_option(employee_id, inactive).await;
    match result {
        Err(AppError::NotFound(detail)) => assert_eq!(detail, "Invalid option."),
        other => panic!("Expected NotFound, got {other:?}"),
    }

    let missing = ctx.db.select_commute_option(employee_id, inactive + 999).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Neither attempt touched the employee or recorded a session.
    let employee = ctx.db.get_employee(employee_id).await.unwrap();
    assert_eq!(employee.preferred_option_id, None);
    let sessions = ctx
        .db
        .list_completed_sessions_for_employee(employee_id)
        .await
        .unwrap();
    assert!(sessions.is_empty());
}
