use sentiment_dashboard::{Category, DashClient, DashError, ErrorKind};
use url::Url;

use crate::common::{client_for, mock_category, setup_server};

#[tokio::test]
async fn category_news_returns_status_error_on_non_2xx() {
    let server = setup_server();
    let mock = mock_category(&server, "Finance", 500, "oops");
    let client = client_for(&server);

    let err = client.category_news(Category::Finance).await.unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::HttpStatus);
    assert!(err.to_string().contains("500"), "message was: {err}");
    match err {
        DashError::Status { status, url, detail } => {
            assert_eq!(status, 500);
            assert!(url.contains("/api/news/category/Finance"));
            assert_eq!(detail, None);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_error_carries_server_error_text() {
    let server = setup_server();
    let mock = mock_category(&server, "Tech", 404, r#"{"error": "Category not found"}"#);
    let client = client_for(&server);

    let err = client.category_news(Category::Tech).await.unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "HTTP error! status: 404 (Category not found)"
    );
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = setup_server();
    let mock = mock_category(&server, "Tech", 200, r#"{"error": "not an array"}"#);
    let client = client_for(&server);

    let err = client.category_news(Category::Tech).await.unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, DashError::Json(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // nothing listens on the discard port
    let client = DashClient::builder()
        .base_news(Url::parse("http://127.0.0.1:9/api/news/category/").unwrap())
        .connect_timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.category_news(Category::Tech).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
