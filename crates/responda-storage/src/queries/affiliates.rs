// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tenant (affiliate) lookups.

use responda_core::{AffiliateRecord, RespondaError};
use rusqlite::params;

use crate::database::Database;

/// Look up an affiliate by id.
pub async fn get_affiliate(
    db: &Database,
    id: &str,
) -> Result<Option<AffiliateRecord>, RespondaError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, display_name, agent_name, agent_style, is_active
                 FROM affiliates WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                Ok(AffiliateRecord {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                    agent_name: row.get(2)?,
                    agent_style: row.get(3)?,
                    is_active: row.get(4)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert or replace an affiliate record.
pub async fn upsert_affiliate(
    db: &Database,
    record: &AffiliateRecord,
) -> Result<(), RespondaError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO affiliates (id, display_name, agent_name, agent_style, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     display_name = excluded.display_name,
                     agent_name = excluded.agent_name,
                     agent_style = excluded.agent_style,
                     is_active = excluded.is_active",
                params![
                    record.id,
                    record.display_name,
                    record.agent_name,
                    record.agent_style,
                    record.is_active,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn upsert_and_get_affiliate_roundtrips() {
        let (db, _dir) = setup_db().await;
        let record = AffiliateRecord {
            id: "aff-1".to_string(),
            display_name: Some("Afiliado Um".to_string()),
            agent_name: Some("Clara".to_string()),
            agent_style: Some("persuasivo_humano".to_string()),
            is_active: true,
        };
        upsert_affiliate(&db, &record).await.unwrap();
        assert_eq!(get_affiliate(&db, "aff-1").await.unwrap(), Some(record));
        assert!(get_affiliate(&db, "aff-2").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn optional_fields_may_be_null() {
        let (db, _dir) = setup_db().await;
        let record = AffiliateRecord {
            id: "aff-bare".to_string(),
            display_name: None,
            agent_name: None,
            agent_style: None,
            is_active: true,
        };
        upsert_affiliate(&db, &record).await.unwrap();
        let fetched = get_affiliate(&db, "aff-bare").await.unwrap().unwrap();
        assert!(fetched.agent_name.is_none());
        assert!(fetched.agent_style.is_none());
        db.close().await.unwrap();
    }
}
