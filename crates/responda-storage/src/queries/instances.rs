// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel-instance lookups.

use responda_core::{InstanceRecord, RespondaError};
use rusqlite::params;

use crate::database::Database;

/// Look up an instance by its credential.
pub async fn get_instance(
    db: &Database,
    instance_key: &str,
) -> Result<Option<InstanceRecord>, RespondaError> {
    let instance_key = instance_key.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT instance_key, affiliate_id, is_active
                 FROM instances WHERE instance_key = ?1",
            )?;
            let result = stmt.query_row(params![instance_key], |row| {
                Ok(InstanceRecord {
                    instance_key: row.get(0)?,
                    affiliate_id: row.get(1)?,
                    is_active: row.get(2)?,
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

/// Insert or replace an instance binding.
pub async fn upsert_instance(db: &Database, record: &InstanceRecord) -> Result<(), RespondaError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO instances (instance_key, affiliate_id, is_active)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(instance_key) DO UPDATE SET
                     affiliate_id = excluded.affiliate_id,
                     is_active = excluded.is_active",
                params![record.instance_key, record.affiliate_id, record.is_active],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
