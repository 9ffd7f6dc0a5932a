use std::time::Duration;

use problems_backend::config::SupabaseConfig;
use problems_backend::store::{check_connectivity, ProblemFilter, ProblemStore, SupabaseStore};
use problems_backend::{ProblemId, StoreError};
use serde_json::json;

use crate::support::fake_postgrest::{spawn_fake_postgrest, TEST_KEY};
use crate::support::fixtures::sample_rows;

fn store(url: String, key: &str, collection: &str) -> SupabaseStore {
    SupabaseStore::new(&SupabaseConfig {
        url,
        key: key.to_string(),
        collection: collection.to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("build supabase store")
}

#[actix_web::test]
async fn fetch_maps_rows_to_problems() {
    let url = spawn_fake_postgrest(sample_rows());
    let problems = store(url, TEST_KEY, "problems")
        .fetch(&ProblemFilter::All)
        .await
        .unwrap();

    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].id, ProblemId::Text("p1".into()));
    assert_eq!(problems[0].category, "arrays");
    assert_eq!(problems[0].details["title"], "Two Sum");
}

#[actix_web::test]
async fn filters_are_sent_as_exact_matches() {
    let url = spawn_fake_postgrest(sample_rows());
    let s = store(url, TEST_KEY, "problems");

    let by_id = s.fetch(&ProblemFilter::Id("p2".into())).await.unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].category, "graphs");

    let by_category = s
        .fetch(&ProblemFilter::Category("arrays".into()))
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, ProblemId::Text("p1".into()));

    assert!(s
        .fetch(&ProblemFilter::Category("trees".into()))
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn integer_ids_filter_by_text_form() {
    let url = spawn_fake_postgrest(vec![json!({"id": 12, "category": "math"})]);
    let found = store(url, TEST_KEY, "problems")
        .fetch(&ProblemFilter::Id("12".into()))
        .await
        .unwrap();

    assert_eq!(found[0].id, ProblemId::Int(12));
}

#[actix_web::test]
async fn non_numeric_id_on_integer_keys_matches_nothing() {
    let url = spawn_fake_postgrest(vec![json!({"id": 12, "category": "math"})]);
    let found = store(url, TEST_KEY, "problems")
        .fetch(&ProblemFilter::Id("two-sum".into()))
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[actix_web::test]
async fn non_numeric_category_on_numeric_column_is_query_error() {
    let url = spawn_fake_postgrest(vec![json!({"id": "p1", "category": 7})]);
    let err = store(url, TEST_KEY, "problems")
        .fetch(&ProblemFilter::Category("graphs".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Query(ref d) if d.contains("22P02")));
}

#[actix_web::test]
async fn rejected_key_is_query_error() {
    let url = spawn_fake_postgrest(sample_rows());
    let err = store(url, "wrong-key", "problems")
        .fetch(&ProblemFilter::All)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Query(ref d) if d.contains("401")));
}

#[actix_web::test]
async fn missing_collection_is_query_error() {
    let url = spawn_fake_postgrest(sample_rows());
    let err = store(url, TEST_KEY, "nope")
        .fetch(&ProblemFilter::All)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Query(ref d) if d.contains("404")));
}

#[actix_web::test]
async fn connection_refused_is_unavailable() {
    let err = store("http://127.0.0.1:1".to_string(), TEST_KEY, "problems")
        .fetch(&ProblemFilter::All)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[actix_web::test]
async fn connectivity_check_reports_both_outcomes() {
    let url = spawn_fake_postgrest(sample_rows());
    assert!(check_connectivity(&store(url.clone(), TEST_KEY, "problems")).await);
    assert!(!check_connectivity(&store(url, "wrong-key", "problems")).await);
    assert!(
        !check_connectivity(&store("http://127.0.0.1:1".to_string(), TEST_KEY, "problems")).await
    );
}
