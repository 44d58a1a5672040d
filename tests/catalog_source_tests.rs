use toolshelf::catalog::{CatalogError, CatalogSource, HttpSource, Price, load_catalog, source_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const CATALOG_BODY: &str = r#"[
  {
    "id": 1,
    "name": "ChatGPT",
    "description": "Conversational assistant",
    "icon": "💬",
    "category": "text",
    "price": "freemium",
    "tags": ["chat", "writing"],
    "link": "https://chat.openai.com",
    "popular": true,
    "releaseDate": "2022-11-30",
    "company": "OpenAI",
    "pricingDetails": {"Free": "$0", "Plus": "$20/month"},
    "pros": ["Fast"],
    "cons": ["Can hallucinate"]
  },
  {
    "id": 2,
    "name": "Midjourney",
    "description": "Image generation",
    "icon": "🎨",
    "category": "image",
    "price": "paid",
    "tags": ["art"],
    "link": "https://midjourney.com",
    "popular": false
  }
]"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tools.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

fn url_for(server: &MockServer) -> String {
    format!("{}/tools.json", server.uri())
}

// ============================================================================
// HttpSource Tests
// ============================================================================

#[tokio::test]
async fn test_http_source_fetches_records() {
    let mock_server = serve(200, CATALOG_BODY).await;
    let source = HttpSource::new(url_for(&mock_server));

    let records = source.fetch().await.expect("fetch should succeed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "ChatGPT");
    assert_eq!(records[0].price, Price::Freemium);
    assert_eq!(records[0].company.as_deref(), Some("OpenAI"));

    let plans = records[0].pricing_details.as_ref().expect("plans present");
    assert_eq!(plans[0], ("Free".to_string(), "$0".to_string()));
    assert_eq!(plans[1], ("Plus".to_string(), "$20/month".to_string()));
    assert!(records[1].pricing_details.is_none());
}

#[tokio::test]
async fn test_http_source_reports_status_errors() {
    let mock_server = serve(404, "not here").await;
    let source = HttpSource::new(url_for(&mock_server));

    match source.fetch().await {
        Err(CatalogError::Http { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "not here");
        }
        other => panic!("expected HTTP error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_http_source_reports_parse_errors() {
    let mock_server = serve(200, "{\"not\": \"an array\"}").await;
    let source = HttpSource::new(url_for(&mock_server));

    let err = source.fetch().await.expect_err("body is not a record list");
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().contains("parse"));
}

#[tokio::test]
async fn test_http_source_reports_network_errors() {
    // Nothing listens on port 9 locally
    let source = HttpSource::new("http://127.0.0.1:9/tools.json".to_string());
    let err = source.fetch().await.expect_err("connection should fail");
    assert!(matches!(err, CatalogError::Network(_)));
}

// ============================================================================
// load_catalog Tests
// ============================================================================

#[tokio::test]
async fn test_load_catalog_over_http() {
    let mock_server = serve(200, CATALOG_BODY).await;
    let source = source_for(&url_for(&mock_server));

    let catalog = load_catalog(source.as_ref()).await;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories(), vec!["text", "image"]);
    assert_eq!(catalog.free_count(), 1);
}

#[tokio::test]
async fn test_load_catalog_keeps_good_records_next_to_a_bad_one() {
    let body = r#"[
      {"id": 1, "name": "Writer", "description": "d", "category": "text", "price": "free"},
      {"id": 2, "name": "Painter", "description": "d", "category": "image", "price": "paid",
       "pricingDetails": {"Pro": 20}},
      {"id": 3, "name": "Coder", "description": "d", "category": "code", "price": "freemium"}
    ]"#;
    let mock_server = serve(200, body).await;
    let source = source_for(&url_for(&mock_server));

    let catalog = load_catalog(source.as_ref()).await;
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains(1));
    assert!(!catalog.contains(2));
    assert!(catalog.contains(3));
}

#[tokio::test]
async fn test_load_catalog_degrades_to_empty() {
    let mock_server = serve(500, "boom").await;
    let source = source_for(&url_for(&mock_server));

    let catalog = load_catalog(source.as_ref()).await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("tools.json");
    std::fs::write(&file, CATALOG_BODY).unwrap();

    let source = source_for(file.to_str().unwrap());
    let catalog = load_catalog(source.as_ref()).await;
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get(2).is_some_and(|r| r.name == "Midjourney"));
}
