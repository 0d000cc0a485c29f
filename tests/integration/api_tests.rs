//! API integration tests
//!
//! These run against live servers: start the catalog (`cargo run --bin
//! catalog`) and the gateway (`cargo run --bin gateway`) first, then run
//! with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const CATALOG_URL: &str = "http://127.0.0.1:8000";
const GATEWAY_URL: &str = "http://127.0.0.1:5000";

fn book_payload(title: &str, author: &str, year: i32, available: bool) -> Value {
    json!({
        "title": title,
        "author": author,
        "publication_year": year,
        "available": available,
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", CATALOG_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_service_info() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", CATALOG_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["documentation"], "/docs");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/books", CATALOG_URL))
        .json(&book_payload("1984", "George Orwell", 1949, true))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let book_id = created["id"].as_i64().expect("No book ID");
    assert_eq!(created["title"], "1984");
    assert_eq!(created["available"], true);

    // Read back: identical payload plus id
    let response = client
        .get(format!("{}/books/{}", CATALOG_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // Full replace, flipping availability
    let response = client
        .put(format!("{}/books/{}", CATALOG_URL, book_id))
        .json(&book_payload("1984", "George Orwell", 1949, false))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/books/{}", CATALOG_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["available"], false);

    // Delete, then the id is gone
    let response = client
        .delete(format!("{}/books/{}", CATALOG_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let confirmation: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(confirmation["id"], book_id);
    assert!(confirmation["message"]
        .as_str()
        .expect("No message")
        .contains("1984"));

    let response = client
        .get(format!("{}/books/{}", CATALOG_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_validation_failures() {
    let client = Client::new();

    for payload in [
        book_payload("", "George Orwell", 1949, true),
        book_payload("1984", "", 1949, true),
        book_payload("1984", "George Orwell", 0, true),
        book_payload("1984", "George Orwell", 2026, true),
    ] {
        let response = client
            .post(format!("{}/books", CATALOG_URL))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 422);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
#[ignore]
async fn test_missing_id_is_not_found() {
    let client = Client::new();
    let missing = 99_999_999;

    let response = client
        .get(format!("{}/books/{}", CATALOG_URL, missing))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .put(format!("{}/books/{}", CATALOG_URL, missing))
        .json(&book_payload("X", "Y", 2000, true))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/books/{}", CATALOG_URL, missing))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_gateway_proxy_lifecycle() {
    let client = Client::new();

    // Create through the proxy
    let response = client
        .post(format!("{}/api/books", GATEWAY_URL))
        .json(&book_payload("O Hobbit", "J.R.R. Tolkien", 1937, true))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let book_id = created["id"].as_i64().expect("No book ID");

    // Upstream 404 is enveloped with `erro` and the original status code
    let response = client
        .get(format!("{}/api/books/99999999", GATEWAY_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["erro"].is_string());
    assert_eq!(body["status_code"], 404);

    // Cleanup through the proxy
    let response = client
        .delete(format!("{}/api/books/{}", GATEWAY_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_gateway_rejects_empty_body() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/books", GATEWAY_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["erro"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_gateway_html_page() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", GATEWAY_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let page = response.text().await.expect("Failed to read page");
    assert!(page.contains("<h1>Estante</h1>"));
    assert!(page.contains("<form method=\"post\""));
}
