use actix_web::test;
use problems_backend::{AppState, Problem};
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::fixtures::{p1, p2, sample_state, unreachable_state};

async fn get_json(state: AppState, uri: &str) -> (u16, Value) {
    let app = create_test_app(state).build().await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn list_all_returns_every_problem() {
    let (status, body) = get_json(sample_state(), "/api/problems").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([p1(), p2()]));
}

#[actix_web::test]
async fn list_all_accepts_trailing_slash() {
    let (status, body) = get_json(sample_state(), "/api/problems/").await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn list_all_is_idempotent() {
    let app = create_test_app(sample_state()).build().await;

    let first: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/problems").to_request(),
    )
    .await;
    let second: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/problems").to_request(),
    )
    .await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn list_all_on_empty_store_is_empty_array() {
    let (status, body) = get_json(AppState::with_problems(Vec::new()), "/api/problems").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_all_length_matches_store_size() {
    let problems: Vec<Problem> = (0..25)
        .map(|i| Problem::new(format!("p{i}"), if i % 2 == 0 { "arrays" } else { "graphs" }))
        .collect();
    let (status, body) = get_json(AppState::with_problems(problems), "/api/problems").await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(25));
}

#[actix_web::test]
async fn get_by_id_returns_exactly_that_problem() {
    for expected in [p1(), p2()] {
        let uri = format!("/api/problems/{}", expected.id);
        let (status, body) = get_json(sample_state(), &uri).await;

        assert_eq!(status, 200);
        assert_eq!(body, serde_json::to_value(&expected).unwrap());
    }
}

#[actix_web::test]
async fn get_by_integer_id() {
    let state = AppState::with_problems(vec![
        Problem::try_from(json!({"id": 7, "category": "trees", "title": "Invert Tree"})).unwrap(),
    ]);
    let (status, body) = get_json(state, "/api/problems/7").await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Invert Tree");
}

#[actix_web::test]
async fn get_by_absent_id_is_not_found() {
    let app = create_test_app(sample_state()).build().await;
    let req = test::TestRequest::get().uri("/api/problems/p3").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_structure(resp, 404, "PROBLEM_NOT_FOUND").await;
    assert!(problem.detail.contains("p3"));
}

#[actix_web::test]
async fn list_by_category_returns_exact_subset() {
    let (status, body) = get_json(sample_state(), "/api/problems/category/graphs").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([p2()]));
}

#[actix_web::test]
async fn list_by_category_is_case_sensitive() {
    let (status, body) = get_json(sample_state(), "/api/problems/category/Graphs").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_by_unknown_category_is_empty_not_error() {
    let (status, body) = get_json(sample_state(), "/api/problems/category/trees").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_by_category_with_encoded_label() {
    let state = AppState::with_problems(vec![
        Problem::new("dp1", "dynamic programming"),
        Problem::new("g1", "graphs"),
    ]);
    let (status, body) = get_json(state, "/api/problems/category/dynamic%20programming").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([Problem::new("dp1", "dynamic programming")]));
}

#[actix_web::test]
async fn category_route_is_not_shadowed_by_id_route() {
    // A problem whose id is literally "category" stays reachable by id.
    let state = AppState::with_problems(vec![Problem::new("category", "meta")]);
    let (status, body) = get_json(state, "/api/problems/category").await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], "category");
}

#[actix_web::test]
async fn store_outage_yields_server_error_on_every_problem_route() {
    let app = create_test_app(unreachable_state()).build().await;

    for uri in [
        "/api/problems",
        "/api/problems/p1",
        "/api/problems/category/arrays",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 500, "DB_UNAVAILABLE").await;
    }
}

#[actix_web::test]
async fn non_get_methods_are_not_routed() {
    let app = create_test_app(sample_state()).build().await;
    let req = test::TestRequest::delete().uri("/api/problems/p1").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
}
