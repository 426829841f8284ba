/// Client records are keyed by opaque UUIDs assigned by the persistence
/// layer at creation. The collection was migrated from a hosted document
/// database, so ids carry no ordering or meaning.
pub type ClientId = uuid::Uuid;

/// Contact messages get their own UUID keyspace.
pub type MessageId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
