//! Polling sync client core for the message board service.
//!
//! # Overview
//! Maintains a local snapshot of a remote record collection by re-fetching it
//! once per second, and issues create/update/delete requests against the
//! remote service. Records carry two identifiers: a small-integer display id
//! assigned client-side and shown to the user, and an opaque storage id
//! assigned by the backend and required for update/delete.
//!
//! # Design
//! - `BoardClient` is stateless — it holds only `base_url`. It builds
//!   `HttpRequest` values and parses `HttpResponse` values without touching
//!   the network, so every request shape is testable without I/O.
//! - `Transport` is the async seam to the network; `ReqwestTransport` is the
//!   production implementation, tests substitute an in-memory one.
//! - `Synchronizer` owns the snapshot and the recurring poll task. Writes
//!   never touch the snapshot directly; their effect becomes visible on a
//!   later poll (eventual consistency, ~1 s worst-case staleness).
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::{map_storage_ids, next_display_id, BoardClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sync::Synchronizer;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateRecord, DeleteRecord, ListResponse, Record, UpdateBody, UpdateRecord};
