use axum::http::StatusCode;
use axum_test::TestServer;
use caption_splitter::KeywordDictionary;
use caption_splitter::api::{AppState, KEYWORD_WARNING_HEADER, router};
use caption_splitter::table::ColumnSelection;
use serde_json::{Value, json};
use std::sync::Arc;

const CSV: &str = "shortcode,caption\np1,Love this outfit! #fashion #ootd\np2,...\n";

fn create_test_server() -> TestServer {
    TestServer::new(router(Arc::new(AppState::default()))).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_returns_healthy() {
    let server = create_test_server();

    let response = server.get("/v1/health").await;

    response.assert_status_ok();
    response.assert_text("Healthy");
}

#[tokio::test]
async fn test_default_keywords_keep_category_order() {
    let server = create_test_server();

    let response = server.get("/v1/keywords/default").await;

    response.assert_status_ok();
    let body = response.text();
    let positions: Vec<usize> = ["Fashion", "Food", "Travel", "Fitness"]
        .iter()
        .map(|name| body.find(name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_keywords_endpoint_serves_configured_default() {
    let (dictionary, _) = KeywordDictionary::resolve(r#"{"Pets":["dog","cat"]}"#);
    let state = AppState::new(dictionary, ColumnSelection::default());
    let server = TestServer::new(router(Arc::new(state))).unwrap();

    let response = server.get("/v1/keywords/default").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "Pets": ["dog", "cat"] }));
}

#[tokio::test]
async fn test_columns_endpoint_lists_header() {
    let server = create_test_server();

    let response = server
        .post("/v1/columns")
        .text("shortcode,likes,caption\na,1,b\n")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!(["shortcode", "likes", "caption"]));
}

#[tokio::test]
async fn test_process_returns_csv_attachment() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": CSV, "classify": true }))
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=\"ig_posts_transformed_output.csv\""
    );
    assert!(headers.get(KEYWORD_WARNING_HEADER).is_none());
    response.assert_text(
        "ID,Sentence ID,Statement,Category\n\
         p1,1,Love this outfit!,Fashion\n\
         p1,2,#fashion,Fashion\n\
         p1,3,#ootd,Fashion\n",
    );
}

#[tokio::test]
async fn test_process_without_hashtags() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": CSV, "include_hashtags": false }))
        .await;

    response.assert_status_ok();
    response.assert_text("ID,Sentence ID,Statement\np1,1,Love this outfit! #fashion #ootd\n");
}

#[tokio::test]
async fn test_process_accepts_dictionary_as_json_text() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({
            "csv": "id,text\nx,Walked the dog\n",
            "id_column": "id",
            "context_column": "text",
            "classify": true,
            "keywords": r#"{"Pets":["dog"]}"#,
        }))
        .await;

    response.assert_status_ok();
    response.assert_text("ID,Sentence ID,Statement,Category\nx,1,Walked the dog,Pets\n");
}

#[tokio::test]
async fn test_process_falls_back_on_malformed_dictionary() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": CSV, "classify": true, "keywords": ["fashion"] }))
        .await;

    response.assert_status_ok();
    let warning = response.headers().get(KEYWORD_WARNING_HEADER).unwrap();
    assert!(warning.to_str().unwrap().contains("wrong shape"));
    assert!(response.text().contains("p1,1,Love this outfit!,Fashion"));
}

#[tokio::test]
async fn test_process_rejects_missing_columns() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": CSV, "context_column": "text" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["missing"], json!(["text"]));
    assert_eq!(body["available"], json!(["shortcode", "caption"]));
}

#[tokio::test]
async fn test_process_rejects_empty_table() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": "" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_process_ignores_dictionary_when_not_classifying() {
    let server = create_test_server();

    let response = server
        .post("/v1/process")
        .json(&json!({ "csv": CSV, "keywords": ["fashion"] }))
        .await;

    response.assert_status_ok();
    assert!(response.headers().get(KEYWORD_WARNING_HEADER).is_none());
    response.assert_text("ID,Sentence ID,Statement\np1,1,Love this outfit!\np1,2,#fashion\np1,3,#ootd\n");
}
