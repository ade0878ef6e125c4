//! Stateless request builder and response parser for the board API.
//!
//! # Design
//! `BoardClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation has a `build_*` method producing an `HttpRequest`;
//! only the list operation has a `parse_*` counterpart, because the server's
//! responses to writes are ignored. The display-id allocation and the
//! display-id → storage-id mapping are free functions over a snapshot slice,
//! so the id logic is testable without any client at all.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateRecord, DeleteRecord, ListResponse, Record, UpdateRecord};

/// Smallest non-negative integer not used as a display id in `snapshot`.
///
/// Linear scan from 0; `{0,1,3}` yields 2, an empty snapshot yields 0.
/// Computed from the local snapshot only, so two clients polling the same
/// board can race to the same id. That is inherent to the polling design.
pub fn next_display_id(snapshot: &[Record]) -> u32 {
    let mut id = 0;
    while snapshot.iter().any(|record| record.display_id == id) {
        id += 1;
    }
    id
}

/// Map every record in `snapshot` to its storage id if its display id equals
/// the base-10 parse of `input`, or `None` otherwise.
///
/// Parsing follows the UI's `parseInt` semantics: leading whitespace is
/// skipped and the longest leading digit run is taken, so `"2x"` addresses
/// display id 2. Input with no leading digit matches nothing, producing an
/// all-`None` mapping — the request is still sent and the backend treats it
/// as a no-op. The result always has the snapshot's length; non-matches
/// become `null` on the wire rather than being filtered out.
pub fn map_storage_ids(snapshot: &[Record], input: &str) -> Vec<Option<String>> {
    let target = leading_number(input);
    snapshot
        .iter()
        .map(|record| {
            if target == Some(record.display_id) {
                Some(record.storage_id.clone())
            } else {
                None
            }
        })
        .collect()
}

/// Base-10 value of the longest leading digit run of `input`, after
/// skipping leading whitespace. `None` when there is no leading digit.
fn leading_number(input: &str) -> Option<u32> {
    let trimmed = input.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

/// Stateless client for the board API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. A `Transport` executes the round-trip in between.
#[derive(Debug, Clone)]
pub struct BoardClient {
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/getData", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateRecord) -> Result<HttpRequest, ApiError> {
        self.build_json(HttpMethod::Post, "/api/putData", input)
    }

    pub fn build_remove(&self, input: &DeleteRecord) -> Result<HttpRequest, ApiError> {
        self.build_json(HttpMethod::Delete, "/api/deleteData", input)
    }

    pub fn build_update(&self, input: &UpdateRecord) -> Result<HttpRequest, ApiError> {
        self.build_json(HttpMethod::Post, "/api/updateData", input)
    }

    /// Parse the list response, returning the `data` array verbatim. Order is
    /// the server's; the caller replaces its snapshot wholesale.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Record>, ApiError> {
        if response.status != 200 {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        let parsed: ListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(parsed.data)
    }

    fn build_json<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        route: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
