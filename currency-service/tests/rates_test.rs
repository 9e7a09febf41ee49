mod common;

use common::{assert_json_content_type, TestApp};
use currency_service::models::RatesResponse;

#[tokio::test]
async fn rates_lists_the_full_table() {
    let app = TestApp::spawn().await;

    let response = app.get("/rates").await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_json_content_type(&response);

    let body: RatesResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.base, "USD");
    assert_eq!(body.rates.len(), 10);
    assert_eq!(body.rates["USD"], 1.0);

    let expected = [
        ("USD", 1.0),
        ("EUR", 0.85),
        ("GBP", 0.73),
        ("JPY", 110.0),
        ("CAD", 1.25),
        ("AUD", 1.35),
        ("CHF", 0.92),
        ("CNY", 6.45),
        ("INR", 74.5),
        ("BRL", 5.2),
    ];
    for (code, value) in expected {
        assert_eq!(body.rates.get(code), Some(&value), "{}", code);
    }
}

#[tokio::test]
async fn rates_are_identical_across_requests() {
    let app = TestApp::spawn().await;

    let first = app.get("/rates").await.text().await.unwrap();
    let second = app.get("/rates").await.text().await.unwrap();

    assert_eq!(first, second);
}
