use super::*;

fn client(base_url: &str) -> CatalogClient {
    CatalogClient::new("test-key", base_url, 5, "shelf-test/0.1").unwrap()
}

#[test]
fn search_url_keeps_base_path() {
    let url = client("https://stageapi.monkcommerce.app/task")
        .search_url("shirt", 1, 10)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://stageapi.monkcommerce.app/task/products/search?search=shirt&page=1&limit=10"
    );
}

#[test]
fn search_url_tolerates_trailing_slash() {
    let url = client("https://stageapi.monkcommerce.app/task/")
        .search_url("", 3, 10)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://stageapi.monkcommerce.app/task/products/search?search=&page=3&limit=10"
    );
}

#[test]
fn search_url_bare_host() {
    let url = client("http://127.0.0.1:8080").search_url("a", 2, 25).unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/products/search?search=a&page=2&limit=25"
    );
}

#[test]
fn search_url_encodes_term() {
    let url = client("https://api.example.com")
        .search_url("linen & wool", 1, 10)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/products/search?search=linen+%26+wool&page=1&limit=10"
    );
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = CatalogClient::new("k", "not a url", 5, "ua");
    assert!(
        matches!(result, Err(CatalogError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got: {result:?}"
    );
}

#[test]
fn debug_redacts_api_key() {
    let rendered = format!("{:?}", client("https://api.example.com"));
    assert!(!rendered.contains("test-key"));
}
