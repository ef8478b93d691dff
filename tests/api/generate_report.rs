//! tests/api/generate_report.rs

use crate::helpers::{spawn_app, spawn_app_with_gateway_key};
use aos::domain::Role;
use wiremock::matchers::{any, bearer_token, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn report_is_generated_without_login() {
    // Arrange
    let test_app = spawn_app(Role::Admin).await;
    Mock::given(path("/v1/chat/completions"))
        .and(method("POST"))
        .and(bearer_token("test-gateway-key"))
        .and(body_string_contains("detailed performance report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Alice is doing well.")))
        .expect(1)
        .mount(&test_app.gateway_server)
        .await;

    // Act
    let response = test_app
        .post_generate_report(&serde_json::json!({
            "reportType": "student-performance",
            "data": {"student": "Alice", "attendance": 92}
        }))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["report"], "Alice is doing well.");
}

#[tokio::test]
async fn compliance_prompt_is_forwarded_to_the_gateway() {
    // Arrange
    let test_app = spawn_app(Role::Admin).await;
    Mock::given(body_string_contains("NAAC/AICTE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Compliance report")))
        .expect(1)
        .mount(&test_app.gateway_server)
        .await;

    // Act
    let response = test_app
        .post_generate_report(&serde_json::json!({
            "reportType": "compliance",
            "data": {"criteria": [1, 2, 3]}
        }))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn missing_gateway_key_returns_500_with_error() {
    // Arrange
    let test_app = spawn_app_with_gateway_key(Role::Admin, None).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.gateway_server)
        .await;

    // Act
    let response = test_app
        .post_generate_report(&serde_json::json!({"reportType": "compliance", "data": {}}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn gateway_error_returns_500_with_error() {
    // Arrange
    let test_app = spawn_app(Role::Admin).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&test_app.gateway_server)
        .await;

    // Act
    let response = test_app
        .post_generate_report(&serde_json::json!({"reportType": "course-outcome", "data": {}}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "AI Gateway error: 503");
}

#[tokio::test]
async fn preflight_request_returns_200_without_body() {
    // Arrange
    let test_app = spawn_app_with_gateway_key(Role::Admin, None).await;

    // Act
    let response = test_app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/generate-report", test_app.address),
        )
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    assert!(response.text().await.unwrap().is_empty());
}
