//! Authoritative in-memory client cache and write mediator (PRD-04).
//!
//! [`ClientStore`] owns the service's view of the client collection: it
//! fetches rows through the repository, normalizes them into domain records,
//! and replaces the cached snapshot wholesale. Writes pass through to the
//! repository and are each followed by an implicit reload; the cache is
//! never patched optimistically. A failed fetch leaves the previous
//! snapshot serving and is only logged.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use carteira_core::client::ClientRecord;
use carteira_core::contact::ValidatedContact;
use carteira_core::session::EditSession;
use carteira_core::stats::{aggregate_stats, AggregateStats};
use carteira_core::types::{ClientId, Timestamp};
use carteira_core::validation::ValidatedClient;
use carteira_db::models::ClientRow;
use carteira_db::repositories::ClientRepo;
use carteira_db::DbPool;
use carteira_events::{DomainEvent, EventBus};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One immutable view of the cached client set.
///
/// Handlers take an `Arc<Snapshot>` and work against it; a reload never
/// mutates a snapshot in place, it swaps a new one in. Readers therefore
/// never observe a partially-updated list.
#[derive(Debug)]
pub struct Snapshot {
    /// Records in creation order, newest first.
    pub records: Vec<ClientRecord>,
    /// Aggregate stats recomputed at load time.
    pub stats: AggregateStats,
    /// When this snapshot was produced.
    pub loaded_at: Timestamp,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: aggregate_stats(&[]),
            loaded_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientStore
// ---------------------------------------------------------------------------

/// In-memory client cache plus the only write path to the collection.
///
/// Built once in `main` and shared through `AppState`. Two reloads racing
/// each other resolve last-write-wins at the snapshot swap; there is no
/// request cancellation.
pub struct ClientStore {
    pool: DbPool,
    event_bus: Arc<EventBus>,
    cache: RwLock<Arc<Snapshot>>,
    session: RwLock<EditSession>,
}

impl ClientStore {
    /// Create a store with an empty snapshot. Call [`load`](Self::load)
    /// once at startup to populate it.
    pub fn new(pool: DbPool, event_bus: Arc<EventBus>) -> Self {
        Self {
            pool,
            event_bus,
            cache: RwLock::new(Arc::new(Snapshot::empty())),
            session: RwLock::new(EditSession::default()),
        }
    }

    /// The current snapshot, cheaply (`Arc` clone).
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.cache.read().await)
    }

    /// Current edit-session state.
    pub async fn edit_session(&self) -> EditSession {
        *self.session.read().await
    }

    /// Refetch the whole collection and replace the cache.
    ///
    /// On success the swap is atomic and `clients.reloaded` is published so
    /// collaborating views refresh. On failure the previous snapshot keeps
    /// serving and the error is only logged: stale data beats a broken
    /// admin screen.
    pub async fn load(&self) {
        match ClientRepo::list(&self.pool).await {
            Ok(rows) => {
                let records: Vec<ClientRecord> =
                    rows.into_iter().map(ClientRow::into_record).collect();
                let stats = aggregate_stats(&records);
                let count = records.len();
                let snapshot = Arc::new(Snapshot {
                    records,
                    stats,
                    loaded_at: Utc::now(),
                });
                *self.cache.write().await = snapshot;
                self.publish(
                    DomainEvent::new("clients.reloaded")
                        .with_payload(serde_json::json!({ "count": count })),
                );
                tracing::debug!(count, "Client cache replaced");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Client list fetch failed, cache left untouched");
            }
        }
    }

    /// Persist a new client and reload the cache.
    pub async fn create(&self, input: &ValidatedClient) -> Result<ClientRecord, sqlx::Error> {
        let result = ClientRepo::create(&self.pool, &input.to_document(), input.updated_at).await;
        // The save attempt ends the editing session whatever its outcome.
        self.end_session().await;

        let record = result?.into_record();
        self.publish(DomainEvent::new("client.created").with_source("client", record.id));
        self.load().await;
        Ok(record)
    }

    /// Merge a validated submission over an existing client and reload.
    ///
    /// Returns `None` when no row carries the id; nothing is reloaded or
    /// published in that case.
    pub async fn update(
        &self,
        id: ClientId,
        input: &ValidatedClient,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        let result =
            ClientRepo::update_merge(&self.pool, id, &input.to_document(), input.updated_at).await;
        self.end_session().await;

        match result? {
            Some(row) => {
                let record = row.into_record();
                self.publish(DomainEvent::new("client.updated").with_source("client", id));
                self.load().await;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Hard-delete a client and reload. Returns `false` for a missing id.
    pub async fn delete(&self, id: ClientId) -> Result<bool, sqlx::Error> {
        let deleted = ClientRepo::delete(&self.pool, id).await?;
        if deleted {
            self.publish(DomainEvent::new("client.deleted").with_source("client", id));
            self.load().await;
        }
        Ok(deleted)
    }

    /// Fetch a record for form prefill and mark it as under edit.
    ///
    /// Looks in the current snapshot, which holds everything the admin
    /// screen can see; a miss is a plain not-found. A session already in
    /// progress is replaced without complaint.
    pub async fn begin_edit(&self, id: ClientId) -> Option<ClientRecord> {
        let snapshot = self.snapshot().await;
        let record = snapshot.records.iter().find(|r| r.id == id)?.clone();

        let mut session = self.session.write().await;
        *session = session.begin_edit(id);
        Some(record)
    }

    /// Close the editing session without saving.
    pub async fn cancel_edit(&self) {
        self.end_session().await;
    }

    /// Best-effort lead promotion after an accepted contact submission.
    ///
    /// Runs in a spawned task: failures are logged and never reach the
    /// submitter, who already got their confirmation.
    pub async fn promote_contact(&self, contact: &ValidatedContact) {
        if let Err(err) = self.try_promote_contact(contact).await {
            tracing::warn!(error = %err, email = %contact.email, "Contact promotion failed");
        }
    }

    /// Create a pending lead for an unknown email, or append the message
    /// as a note on the existing client. Either path reloads the cache.
    async fn try_promote_contact(&self, contact: &ValidatedContact) -> Result<(), sqlx::Error> {
        let now = Utc::now();
        match ClientRepo::find_by_email(&self.pool, &contact.email).await? {
            Some(row) => {
                ClientRepo::append_note(&self.pool, row.id, &contact.message, now).await?;
                self.publish(DomainEvent::new("client.updated").with_source("client", row.id));
                tracing::info!(client_id = %row.id, "Contact noted on existing client");
            }
            None => {
                let row = ClientRepo::create(&self.pool, &contact.lead_document(), now).await?;
                self.publish(DomainEvent::new("client.created").with_source("client", row.id));
                tracing::info!(client_id = %row.id, "Contact promoted to new lead");
            }
        }
        self.load().await;
        Ok(())
    }

    async fn end_session(&self) {
        let mut session = self.session.write().await;
        *session = session.finish();
    }

    fn publish(&self, event: DomainEvent) {
        self.event_bus.publish(event);
    }
}
