//! Repository for the `clients` document collection.

use sqlx::PgPool;

use carteira_core::types::{ClientId, Timestamp};

use crate::models::client::ClientRow;

const COLUMNS: &str = "id, doc, created_at, updated_at";

pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client document. Both timestamps start at `written_at`.
    pub async fn create(
        pool: &PgPool,
        doc: &serde_json::Value,
        written_at: Timestamp,
    ) -> Result<ClientRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (doc, created_at, updated_at)
             VALUES ($1, $2, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(doc)
            .bind(written_at)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single client row by id.
    pub async fn find_by_id(pool: &PgPool, id: ClientId) -> Result<Option<ClientRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every client row, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClientRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, ClientRow>(&query).fetch_all(pool).await
    }

    /// Look a client up by stored email, case-insensitively.
    ///
    /// Intake uses this to decide between creating a lead and annotating
    /// an existing client.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<ClientRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE lower(doc->>'email') = lower($1)
             LIMIT 1"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Merge a document patch into an existing client and bump `updated_at`.
    ///
    /// JSONB `||` replaces only the keys present in the patch, so fields the
    /// caller never touched (including unknown legacy ones) stay intact.
    pub async fn update_merge(
        pool: &PgPool,
        id: ClientId,
        patch: &serde_json::Value,
        written_at: Timestamp,
    ) -> Result<Option<ClientRow>, sqlx::Error> {
        let query = format!(
            "UPDATE clients
             SET doc = doc || $2, updated_at = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .bind(patch)
            .bind(written_at)
            .fetch_optional(pool)
            .await
    }

    /// Append an intake note to a client and refresh `last_contact`.
    ///
    /// Creates the `notes` array when the document predates it.
    pub async fn append_note(
        pool: &PgPool,
        id: ClientId,
        text: &str,
        written_at: Timestamp,
    ) -> Result<Option<ClientRow>, sqlx::Error> {
        let query = format!(
            "UPDATE clients
             SET doc = jsonb_set(
                     doc || jsonb_build_object('last_contact', $3::text),
                     '{{notes}}',
                     COALESCE(doc->'notes', '[]'::jsonb)
                         || jsonb_build_object('text', $2::text, 'at', $3::text),
                     true
                 ),
                 updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .bind(text)
            .bind(written_at.to_rfc3339())
            .bind(written_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a client. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: ClientId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
