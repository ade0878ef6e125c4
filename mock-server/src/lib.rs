//! In-memory implementation of the board API, for integration tests and
//! local development.
//!
//! Storage id assignment mirrors a document store: each created record gets
//! a fresh opaque `_id`, never reused. The `id` arrays of delete/update
//! requests may contain nulls (one entry per record of the client's
//! snapshot); nulls and unknown ids are ignored.

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
}

#[derive(Deserialize)]
pub struct CreateRecord {
    pub id: u32,
    pub message: String,
}

#[derive(Deserialize)]
pub struct DeleteRecord {
    pub id: Vec<Option<String>>,
}

#[derive(Deserialize)]
pub struct UpdateRecord {
    pub id: Vec<Option<String>>,
    pub update: UpdateBody,
}

#[derive(Deserialize)]
pub struct UpdateBody {
    pub message: String,
}

// Vec rather than a map: list order is insertion order, like the real
// backend's collection scan.
pub type Db = Arc<RwLock<Vec<Record>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/getData", get(get_data))
        .route("/api/putData", post(put_data))
        .route("/api/deleteData", delete(delete_data))
        .route("/api/updateData", post(update_data))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_data(State(db): State<Db>) -> Json<ListResponse> {
    let records = db.read().await;
    Json(ListResponse {
        data: records.clone(),
    })
}

async fn put_data(State(db): State<Db>, Json(input): Json<CreateRecord>) -> (StatusCode, Json<Record>) {
    let record = Record {
        id: input.id,
        storage_id: Uuid::new_v4().to_string(),
        message: input.message,
    };
    db.write().await.push(record.clone());
    (StatusCode::OK, Json(record))
}

async fn delete_data(State(db): State<Db>, Json(input): Json<DeleteRecord>) -> StatusCode {
    let targets: HashSet<String> = input.id.into_iter().flatten().collect();
    db.write()
        .await
        .retain(|record| !targets.contains(&record.storage_id));
    StatusCode::OK
}

async fn update_data(State(db): State<Db>, Json(input): Json<UpdateRecord>) -> StatusCode {
    let targets: HashSet<String> = input.id.into_iter().flatten().collect();
    let mut records = db.write().await;
    for record in records.iter_mut() {
        if targets.contains(&record.storage_id) {
            record.message = input.update.message.clone();
        }
    }
    StatusCode::OK
}
