//! Integration tests for the contact message repository.

use sqlx::PgPool;

use carteira_db::models::contact::CreateContactMessage;
use carteira_db::repositories::ContactRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_message(name: &str, email: &str) -> CreateContactMessage {
    CreateContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: "Gostaria de um orçamento para um site novo.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Insert, fetch and list newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list(pool: PgPool) {
    let first = ContactRepo::create(&pool, &new_message("Ana", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(first.name, "Ana");
    assert!(!first.read, "messages start unread");

    let second = ContactRepo::create(&pool, &new_message("Bia", "bia@example.com"))
        .await
        .unwrap();

    let fetched = ContactRepo::find_by_id(&pool, first.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(fetched.email, "ana@example.com");

    let all = ContactRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id, "newest message comes first");
}

// ---------------------------------------------------------------------------
// Test: Mark read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read(pool: PgPool) {
    let message = ContactRepo::create(&pool, &new_message("Caio", "caio@example.com"))
        .await
        .unwrap();

    assert!(ContactRepo::mark_read(&pool, message.id).await.unwrap());
    let reloaded = ContactRepo::find_by_id(&pool, message.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert!(reloaded.read);

    assert!(
        !ContactRepo::mark_read(&pool, uuid::Uuid::new_v4()).await.unwrap(),
        "missing id should report no row"
    );
}
