//! HTTP routes over the Postgres store, with the connection mocked.

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::test;
use problems_backend::store::PostgresStore;
use problems_backend::AppState;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;

fn postgres_state(db: MockDatabase) -> AppState {
    AppState::new(Arc::new(PostgresStore::from_connection(
        db.into_connection(),
        "problems",
    )))
}

fn record(json: &str) -> BTreeMap<&'static str, sea_orm::Value> {
    BTreeMap::from([("record", sea_orm::Value::from(json))])
}

#[actix_web::test]
async fn rows_are_served_as_stored() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
        record(r#"{"id":"p2","category":"graphs","title":"Course Schedule"}"#),
    ]]);
    let app = create_test_app(postgres_state(db)).build().await;

    let req = test::TestRequest::get()
        .uri("/api/problems/category/graphs")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([{"id": "p2", "category": "graphs", "title": "Course Schedule"}])
    );
}

#[actix_web::test]
async fn no_matching_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, sea_orm::Value>>::new()]);
    let app = create_test_app(postgres_state(db)).build().await;

    let req = test::TestRequest::get().uri("/api/problems/two-sum").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 404, "PROBLEM_NOT_FOUND").await;
}

#[actix_web::test]
async fn lost_connection_is_db_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Conn(
        RuntimeErr::Internal("connection refused".into()),
    )]);
    let app = create_test_app(postgres_state(db)).build().await;

    let req = test::TestRequest::get().uri("/api/problems").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_structure(resp, 500, "DB_UNAVAILABLE").await;
    assert!(!problem.detail.contains("connection refused"));
}

#[actix_web::test]
async fn unparseable_row_is_malformed_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![record("{truncated")]]);
    let app = create_test_app(postgres_state(db)).build().await;

    let req = test::TestRequest::get().uri("/api/problems").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 500, "MALFORMED_RECORD").await;
}
