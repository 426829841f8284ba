//! Integration tests for the public `/contact` intake.
//!
//! - Valid submissions persist and come back newest first
//! - Each rejection carries its user-facing message
//! - Marking a message read is idempotent on the stored row

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get, post};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn contact_form(name: &str, email: &str, message: &str) -> serde_json::Value {
    json!({ "name": name, "email": email, "message": message })
}

// ---------------------------------------------------------------------------
// Test: Submit, then list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_then_list(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app.clone(),
        "/api/v1/contact",
        contact_form("João Pereira", "joao@example.com", "Preciso de um site para minha loja"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["data"]["id"].is_string());
    assert_eq!(created["data"]["read"], false);

    let response = get(app, "/api/v1/contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let messages = json["data"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["name"], "João Pereira");
    assert_eq!(messages[0]["message"], "Preciso de um site para minha loja");
}

// ---------------------------------------------------------------------------
// Test: Each invalid field gets its own message
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app,
        "/api/v1/contact",
        contact_form("  ", "joao@example.com", "Uma mensagem suficientemente longa"),
    )
    .await;

    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "Por favor, insira seu nome completo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app,
        "/api/v1/contact",
        contact_form("João", "joao.example.com", "Uma mensagem suficientemente longa"),
    )
    .await;

    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "Por favor, insira um email válido");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_message_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post(
        app,
        "/api/v1/contact",
        contact_form("João", "joao@example.com", "Oi"),
    )
    .await;

    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "A mensagem deve ter pelo menos 10 caracteres");

    // Rejected submissions never reach storage.
    let messages = carteira_db::repositories::ContactRepo::list(&pool).await.unwrap();
    assert!(messages.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Mark read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_flips_the_flag(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post(
            app.clone(),
            "/api/v1/contact",
            contact_form("Rita", "rita@example.com", "Quanto custa um blog simples?"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = post(app.clone(), &format!("/api/v1/contact/{id}/read"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["read"], true);

    // Marking again is a no-op that still succeeds.
    let response = post(app.clone(), &format!("/api/v1/contact/{id}/read"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/contact").await).await;
    assert_eq!(json["data"][0]["read"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = uuid::Uuid::new_v4();

    let response = post(app, &format!("/api/v1/contact/{id}/read"), json!({})).await;
    let json = assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(json["error"], format!("ContactMessage with id {id} not found"));
}
