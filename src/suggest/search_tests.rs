//! Tests for the search client and results parsing

use super::*;
use crate::test_utils::test_helpers::{SEARCH_PATH, endpoint, mock_service};
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

const TWO_HITS: &str = r#"{
  "show": true,
  "results": [
    {"Index": 0, "URL": "https://www.rust-lang.org/", "Title": "Rust Programming Language", "DateAdded": "2015-05-15 10:00:00", "Score": 2.75},
    {"Index": 1, "URL": "https://doc.rust-lang.org/book/", "Title": "The Rust Book", "DateAdded": "2016-01-02 08:30:00", "Score": 1.5}
  ]
}"#;

#[test]
fn test_parse_results_in_order() {
    let hits = parse_search_body(TWO_HITS).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "Rust Programming Language");
    assert_eq!(hits[0].url, "https://www.rust-lang.org/");
    assert_eq!(hits[0].date_added, "2015-05-15 10:00:00");
    assert_eq!(hits[0].score, 2.75);
    assert_eq!(hits[1].label(), "The Rust Book");
}

#[test]
fn test_null_results_means_no_hits() {
    let hits = parse_search_body(r#"{"show": false, "results": null}"#).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_missing_results_means_no_hits() {
    assert!(parse_search_body(r#"{"show": false}"#).unwrap().is_empty());
}

#[test]
fn test_undecodable_bookmarks_are_skipped() {
    let body = r#"{"show": true, "results": [
        {"Index": 0, "URL": "", "Title": "", "DateAdded": "", "Score": 0},
        {"Index": 1, "URL": "https://golang.org/", "Title": "Go", "DateAdded": "", "Score": 0.9}
    ]}"#;

    let hits = parse_search_body(body).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://golang.org/");
}

#[test]
fn test_untitled_hit_is_labelled_by_url() {
    let hit = SearchHit {
        title: " ".to_string(),
        url: "https://example.com/".to_string(),
        date_added: String::new(),
        score: 0.0,
    };
    assert_eq!(hit.label(), "https://example.com/");
}

#[test]
fn test_html_page_is_malformed() {
    let result = parse_search_body("<html><body>results</body></html>");
    assert!(matches!(result, Err(SuggestError::Malformed(_))));
}

#[test]
fn test_client_rejects_invalid_endpoint() {
    assert!(matches!(
        SearchClient::new("", TIMEOUT),
        Err(SuggestError::NotConfigured(_))
    ));
}

#[tokio::test]
async fn test_search_posts_term_as_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_string("term=rust+book"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TWO_HITS, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let client = SearchClient::new(&endpoint(&server, SEARCH_PATH), TIMEOUT).unwrap();

    let hits = client.search("rust book").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].url, "https://doc.rust-lang.org/book/");
}

#[tokio::test]
async fn test_search_error_status_is_api_error() {
    let server = mock_service(SEARCH_PATH, 500, "backend down").await;
    let client = SearchClient::new(&endpoint(&server, SEARCH_PATH), TIMEOUT).unwrap();

    let result = client.search("go").await;

    assert!(matches!(result, Err(SuggestError::Api { code: 500, .. })));
}
