use std::{
    str::FromStr,
    sync::{Arc, OnceLock},
};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use thiserror::Error;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::status::StatusCheck;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not connected")]
    Unavailable,

    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("stored id is not a uuid: {0}")]
    Corrupt(#[from] uuid::Error),
}

/// Append-only storage for status checks.
///
/// Starts out disconnected. [`StatusStore::connect`] fills in the pool once,
/// [`StatusStore::close`] releases it; every operation fails fast with
/// [`StoreError::Unavailable`] outside of that window.
#[derive(Clone, Default)]
pub struct StatusStore {
    db_pool: Arc<OnceLock<SqlitePool>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.db_pool.get().is_some_and(|pool| !pool.is_closed())
    }

    pub async fn connect(&self, url: &str, max_connections: u32) -> Result<(), StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let db_pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS status_checks (
                id TEXT PRIMARY KEY NOT NULL,
                client_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&db_pool)
        .await?;

        if let Err(extra) = self.db_pool.set(db_pool) {
            tracing::warn!("store already connected, dropping the new pool");
            extra.close().await;
        }
        Ok(())
    }

    /// Connects without holding up the caller. Failure leaves the store
    /// disconnected and is only logged.
    pub fn connect_in_background(&self, url: String, max_connections: u32) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            match store.connect(&url, max_connections).await {
                Ok(()) => tracing::info!("connected to {url}"),
                Err(e) => {
                    tracing::error!("store connection error: {e}");
                    tracing::warn!(
                        "the server keeps running without persistence; \
                        set DATABASE_URL to a reachable sqlite database to enable /api/status"
                    );
                }
            }
        })
    }

    pub async fn close(&self) {
        if let Some(db_pool) = self.db_pool.get() {
            db_pool.close().await;
        }
    }

    /// Stops a pending background connect, waits for it to settle, then
    /// closes whatever pool ended up installed.
    pub async fn shutdown(&self, connecting: JoinHandle<()>) {
        connecting.abort();
        let _ = connecting.await;
        self.close().await;
    }

    fn db_pool(&self) -> Result<&SqlitePool, StoreError> {
        self.db_pool
            .get()
            .filter(|pool| !pool.is_closed())
            .ok_or(StoreError::Unavailable)
    }

    pub async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        let db_pool = self.db_pool()?;
        sqlx::query("INSERT INTO status_checks (id,client_name,created_at) VALUES (?,?,?)")
            .bind(record.id.to_string())
            .bind(&record.client_name)
            .bind(record.timestamp)
            .execute(db_pool)
            .await?;
        Ok(())
    }

    pub async fn list_all(&self, limit: u32) -> Result<Vec<StatusCheck>, StoreError> {
        let db_pool = self.db_pool()?;
        let rows: Vec<(String, String, OffsetDateTime)> = sqlx::query_as(
            "SELECT id,client_name,created_at FROM status_checks ORDER BY rowid LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(db_pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for (id, client_name, timestamp) in rows {
            records.push(StatusCheck {
                id: Uuid::parse_str(&id)?,
                client_name,
                timestamp,
            });
        }
        Ok(records)
    }
}
