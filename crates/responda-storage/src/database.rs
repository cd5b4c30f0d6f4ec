// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread: `Database` IS the single writer. Query modules accept
//! `&Database` and call through `connection().call()`. Do NOT create
//! additional Connection instances for writes.

use std::path::Path;

use responda_core::RespondaError;
use responda_config::model::StorageConfig;

use crate::migrations::run_migrations;

/// Handle to the single SQLite connection.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` with WAL mode enabled.
    pub async fn open(path: &str) -> Result<Self, RespondaError> {
        Self::open_with(path, true).await
    }

    /// Open the database described by the storage configuration section.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, RespondaError> {
        Self::open_with(&config.database_path, config.wal_mode).await
    }

    /// Open (or create) the database, applying PRAGMAs and migrations.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, RespondaError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| RespondaError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| map_tr_err(tokio_rusqlite::Error::from(e)))?;

        conn.call(move |conn| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")?;
            }
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(source) => RespondaError::Storage { source },
            tokio_rusqlite::Error::ConnectionClosed => RespondaError::Storage {
                source: "database connection closed".into(),
            },
            tokio_rusqlite::Error::Close((_, err)) => RespondaError::Storage {
                source: Box::new(err),
            },
            _ => RespondaError::Storage {
                source: "unknown database error".into(),
            },
        })?;

        tracing::debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection, for query modules.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Close the database, flushing pending writes.
    ///
    /// The connection handle is cheaply cloneable; closing any clone stops
    /// the shared background writer.
    pub async fn close(&self) -> Result<(), RespondaError> {
        self.conn.clone().close().await.map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> RespondaError {
    RespondaError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_runs_migrations_and_is_reopenable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let path = path.to_str().unwrap();

        let db = Database::open(path).await.unwrap();
        db.close().await.unwrap();

        // Second open re-runs the migration runner as a no-op.
        let db = Database::open(path).await.unwrap();
        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> rusqlite::Result<Vec<String>> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                let mut names = Vec::new();
                for row in rows {
                    names.push(row?);
                }
                Ok(names)
            })
            .await
            .unwrap();

        for expected in [
            "affiliates",
            "events",
            "instances",
            "reply_rules",
            "templates",
            "threads",
        ] {
            assert!(
                tables.iter().any(|t| t == expected),
                "missing table {expected}, got {tables:?}"
            );
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/test.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
        assert!(path.exists());
    }
}
