//! # Redis
//!
//! Document store for boards and reviewers.
//!
//! ## Requirements
//!
//! - Whole-record reads and writes, no partial updates
//! - Small dataset, a board per scheduled interview round
//! - Idempotent saves, resubmitting the same board overwrites it
//!
//! ## Implementation
//!
//! - Hash `details`: field is the board id (sha256 of requirement + date),
//!   value is the JSON `Detail` document
//! - Hash `experts`: field is the reviewer name, value is the JSON
//!   `Expert` document, upserted from every saved board
//! - One multiplexed connection shared by all requests, cloned per call
use std::time::Duration;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use roster::models::{Detail, Expert};

use crate::error::AppError;

const DETAILS_KEY: &str = "details";
const EXPERTS_KEY: &str = "experts";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}

pub async fn put_detail(
    connection: &mut ConnectionManager,
    id: &str,
    detail: &Detail,
) -> Result<(), AppError> {
    let document = serde_json::to_string(detail)?;
    connection.hset::<_, _, _, ()>(DETAILS_KEY, id, document).await?;

    Ok(())
}

pub async fn get_detail(
    connection: &mut ConnectionManager,
    id: &str,
) -> Result<Option<Detail>, AppError> {
    let document: Option<String> = connection.hget(DETAILS_KEY, id).await?;

    match document {
        Some(document) => Ok(Some(serde_json::from_str(&document)?)),
        None => Ok(None),
    }
}

pub async fn all_details(connection: &mut ConnectionManager) -> Result<Vec<Detail>, AppError> {
    let documents: Vec<String> = connection.hvals(DETAILS_KEY).await?;

    documents
        .iter()
        .map(|document| serde_json::from_str(document).map_err(AppError::from))
        .collect()
}

pub async fn put_expert(
    connection: &mut ConnectionManager,
    expert: &Expert,
) -> Result<(), AppError> {
    let document = serde_json::to_string(expert)?;
    connection
        .hset::<_, _, _, ()>(EXPERTS_KEY, &expert.name, document)
        .await?;

    Ok(())
}

pub async fn all_experts(connection: &mut ConnectionManager) -> Result<Vec<Expert>, AppError> {
    let documents: Vec<String> = connection.hvals(EXPERTS_KEY).await?;

    documents
        .iter()
        .map(|document| serde_json::from_str(document).map_err(AppError::from))
        .collect()
}
