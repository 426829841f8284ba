//! Response envelope shared by every handler.

use serde::Serialize;

/// The `{ "data": T }` envelope.
///
/// Success payloads always sit under a `data` key so list, record, and
/// summary responses all parse the same way on the client side. Errors
/// use the `{ "error", "code" }` shape from [`crate::error`] instead.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
