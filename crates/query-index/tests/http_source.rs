use query_index::error::IndexError;
use query_index::source::{HttpIndexSource, IndexSource, SAMPLE_INDEX_PATH};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetches_columns_in_index_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "columns": ["title", "releasedate", "author"],
        "total": 3,
        "data": []
    });

    Mock::given(method("GET"))
        .and(path(SAMPLE_INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpIndexSource::new(&server.uri(), SAMPLE_INDEX_PATH);
    let index = source.fetch().await.expect("fetch should succeed");

    assert_eq!(index.columns, vec!["title", "releasedate", "author"]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpIndexSource::new(&server.uri(), SAMPLE_INDEX_PATH);
    let err = source.fetch().await.unwrap_err();

    match err {
        IndexError::Status(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpIndexSource::new(&server.uri(), SAMPLE_INDEX_PATH);
    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, IndexError::Decode(_)));
}

#[tokio::test]
async fn base_url_trailing_slash_is_normalized() {
    let source = HttpIndexSource::new("https://example.test/", SAMPLE_INDEX_PATH);
    assert_eq!(
        source.url(),
        "https://example.test/tools/querypicker/sample-index.json"
    );
}
