use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use crate::modules::activities::core::seed::seed_activities;
use crate::tests::fixtures::http::send;
use crate::tests::fixtures::state::make_app;

#[tokio::test]
async fn lists_every_seeded_activity_with_all_fields() {
    let app = make_app();

    let (status, json) = send(&app, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let listed = json.as_object().unwrap();
    for name in seed_activities().keys() {
        let activity = &listed[name];
        assert!(activity["description"].is_string());
        assert!(activity["schedule"].is_string());
        assert!(activity["max_participants"].is_u64());
        assert!(activity["participants"].is_array());
    }
    assert_eq!(listed.len(), 9);
}

#[tokio::test]
async fn lists_the_seeded_chess_club_participants() {
    let app = make_app();

    let (_, json) = send(&app, "GET", "/activities").await;

    assert_eq!(
        json["Chess Club"]["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[tokio::test]
async fn redirects_the_root_to_the_front_end() {
    let app = make_app();

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/static/index.html"
    );
}

#[tokio::test]
async fn serves_the_front_end_page() {
    let app = make_app();

    let response = app
        .oneshot(Request::get("/static/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
