use axum::http::StatusCode;

use crate::tests::fixtures::http::{participants, send};
use crate::tests::fixtures::state::make_app;

#[tokio::test]
async fn signs_up_a_new_participant() {
    let app = make_app();

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("newstudent@mergington.edu")
    );
    assert!(
        participants(&app, "Chess Club")
            .await
            .contains(&"newstudent@mergington.edu".to_string())
    );
}

#[tokio::test]
async fn sign_up_increases_the_participant_count_by_one() {
    let app = make_app();
    let before = participants(&app, "Basketball Team").await.len();

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Basketball%20Team/signup?email=newplayer@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(participants(&app, "Basketball Team").await.len(), before + 1);
}

#[tokio::test]
async fn rejects_a_duplicate_sign_up_without_changing_the_roster() {
    let app = make_app();

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));
    assert_eq!(participants(&app, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn rejects_a_sign_up_for_an_unknown_activity() {
    let app = make_app();

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Fake%20Club/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["detail"].as_str().unwrap().contains("Activity not found"));
}

#[tokio::test]
async fn treats_activity_names_case_sensitively() {
    let app = make_app();

    let (status, _) = send(
        &app,
        "POST",
        "/activities/chess%20club/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn accepts_sign_ups_past_max_participants() {
    let app = make_app();

    for i in 0..12 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Tennis%20Club/signup?email=student{i}@mergington.edu"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(participants(&app, "Tennis Club").await.len(), 13);
}

#[tokio::test]
async fn signs_up_multiple_participants_in_order() {
    let app = make_app();
    let emails = [
        "alice@mergington.edu",
        "bob@mergington.edu",
        "charlie@mergington.edu",
    ];

    for email in emails {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Programming%20Class/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(
        participants(&app, "Programming Class").await,
        vec![
            "emma@mergington.edu",
            "sophia@mergington.edu",
            "alice@mergington.edu",
            "bob@mergington.edu",
            "charlie@mergington.edu",
        ]
    );
}

#[tokio::test]
async fn keeps_state_isolated_between_apps() {
    let first = make_app();
    let second = make_app();

    send(
        &first,
        "POST",
        "/activities/Science%20Club/signup?email=isolated@mergington.edu",
    )
    .await;

    assert_eq!(participants(&first, "Science Club").await.len(), 2);
    assert_eq!(participants(&second, "Science Club").await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn accepts_every_concurrent_sign_up_for_distinct_emails() {
    let app = make_app();

    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    "POST",
                    &format!("/activities/Chess%20Club/signup?email=student{i}@mergington.edu"),
                )
                .await
                .0
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(participants(&app, "Chess Club").await.len(), 102);
}
