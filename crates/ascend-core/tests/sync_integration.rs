//! Integration tests for the best-effort mirroring client against a
//! mock endpoint.

use ascend_core::archetype::ArchetypeId;
use ascend_core::schedule::{generate_schedule, CalibrationData};
use ascend_core::sync::{CalibrationRow, ProfileRow, SyncClient, TaskRow};
use ascend_core::{SyncError, UserProfile};

use chrono::NaiveDate;

#[tokio::test]
async fn push_profile_posts_row() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/profiles")
        .match_header("apikey", "test-key")
        .with_status(201)
        .create_async()
        .await;

    let client = SyncClient::new(server.url(), "test-key");
    let mut profile = UserProfile::new("Hunter");
    profile.set_archetype(ArchetypeId::Baki);

    client
        .push_profile(&ProfileRow::from_profile(&profile))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn push_tasks_posts_day_batch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/tasks")
        .with_status(201)
        .create_async()
        .await;

    let client = SyncClient::new(server.url(), "test-key");
    let tasks = generate_schedule(ArchetypeId::Baki, &CalibrationData::default());
    let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|t| TaskRow::from_task("user-1", date, t))
        .collect();

    client.push_tasks(&rows).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_status_is_reported_not_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/rest/v1/calibrations")
        .with_status(500)
        .create_async()
        .await;

    let client = SyncClient::new(server.url(), "test-key");
    let row = CalibrationRow::from_calibration("user-1", &CalibrationData::default());

    let err = client.push_calibration(&row).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::RejectedStatus { status: 500, .. }
    ));
}

#[test]
fn from_env_requires_both_variables() {
    // Neither variable is set in the test environment.
    std::env::remove_var("ASCEND_SYNC_URL");
    std::env::remove_var("ASCEND_SYNC_KEY");
    assert!(SyncClient::from_env().is_none());
}
