//! Wire DTOs for the board API.
//!
//! # Design
//! Field names follow the Rust side (`display_id`, `storage_id`) and are
//! mapped to the wire names (`id`, `_id`) with serde renames. The wire may
//! attach extra fields to a record; serde ignores unknown fields by default,
//! which is relied on here. These types mirror the mock-server's schema but
//! are defined independently; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A single board record as exchanged with the remote service.
///
/// `display_id` is the user-facing small integer assigned client-side;
/// `storage_id` is the backend's opaque identifier, required for update and
/// delete, never shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "id")]
    pub display_id: u32,
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub message: String,
}

/// Response body of `GET /api/getData`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
}

/// Request payload for `POST /api/putData`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecord {
    pub id: u32,
    pub message: String,
}

/// Request payload for `DELETE /api/deleteData`.
///
/// The `id` array has one entry per record in the snapshot the request was
/// built from: the storage id where the display id matched, `null` where it
/// did not. The backend ignores the nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecord {
    pub id: Vec<Option<String>>,
}

/// Request payload for `POST /api/updateData`. Same positional id array as
/// [`DeleteRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub id: Vec<Option<String>>,
    pub update: UpdateBody,
}

/// The fields an update overwrites on every matched record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBody {
    pub message: String,
}
