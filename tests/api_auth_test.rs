//! Authentication API integration tests
//!
//! End-to-end tests for registration, login, and the current-user
//! endpoint. All of them require a reachable PostgreSQL instance
//! (`DATABASE_URL`), so they are `#[ignore]`d by default:
//!
//! ```sh
//! cargo test -- --ignored
//! ```

mod common;

use axum::http::StatusCode;

use common::{register_user, test_server, unique_email};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_returns_token_and_projection() {
    let server = test_server().await;
    let email = unique_email("register");

    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "email": email,
            "password": "password123",
            "name": "Ada",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["name"], "Ada");
    // The hash never leaves the server
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_duplicate_email() {
    let server = test_server().await;
    let email = unique_email("duplicate");

    register_user(&server, &email, "password123").await;

    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "email": email,
            "password": "another-password",
            "name": "Impostor",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Email already registered");

    // The first registration is unaffected
    let login = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": email,
            "password": "password123",
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_register_invalid_email() {
    let server = test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "email": "not-an-email",
            "password": "password123",
            "name": "Nobody",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_login_failures_are_indistinguishable() {
    let server = test_server().await;
    let email = unique_email("enumeration");

    register_user(&server, &email, "correct-password").await;

    // Wrong password for an existing user
    let wrong_password = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": email,
            "password": "wrong-password",
        }))
        .await;

    // Unknown email entirely
    let unknown_email = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": unique_email("never-registered"),
            "password": "whatever",
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    // Identical error shape — no user enumeration
    let body_a: serde_json::Value = wrong_password.json();
    let body_b: serde_json::Value = unknown_email.json();
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["detail"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_me_with_valid_token() {
    let server = test_server().await;
    let email = unique_email("me");
    let token = register_user(&server, &email, "password123").await;

    let response = server
        .get("/api/auth/me")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], email);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_me_without_token() {
    let server = test_server().await;

    let response = server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_me_with_invalid_token() {
    let server = test_server().await;

    let response = server
        .get("/api/auth/me")
        .add_header("Authorization", "Bearer not.a.real.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Invalid token");
}
