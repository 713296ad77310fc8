//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use playa_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement for a successful create or update, naming the row.
#[derive(Debug, Serialize)]
pub struct WriteAck {
    pub pk: DbId,
}

/// Acknowledgement for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub pk: DbId,
    pub message: &'static str,
}
