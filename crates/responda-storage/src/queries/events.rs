// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only event log queries.

use std::str::FromStr;

use responda_core::{EventRecord, Intent, RespondaError, Stage};
use rusqlite::params;

use crate::database::Database;

/// Append one decision event.
pub async fn insert_event(db: &Database, event: &EventRecord) -> Result<(), RespondaError> {
    let event = event.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO events (source, thread_id, instance_key, sender, message,
                                     intent, style, stage, template_id, reply_preview,
                                     created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    event.source,
                    event.thread_id,
                    event.instance_key,
                    event.sender,
                    event.message,
                    event.intent.to_string(),
                    event.style,
                    event.stage.to_string(),
                    event.template_id,
                    event.reply_preview,
                    event.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List the most recent events, newest first (observability helper).
pub async fn list_recent_events(
    db: &Database,
    limit: usize,
) -> Result<Vec<EventRecord>, RespondaError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT source, thread_id, instance_key, sender, message, intent, style,
                        stage, template_id, reply_preview, created_at
                 FROM events ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit as i64], |row| {
                let intent_raw: String = row.get(5)?;
                let intent = Intent::from_str(&intent_raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        5,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                let stage_raw: String = row.get(7)?;
                let stage = Stage::from_str(&stage_raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        7,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(EventRecord {
                    source: row.get(0)?,
                    thread_id: row.get(1)?,
                    instance_key: row.get(2)?,
                    sender: row.get(3)?,
                    message: row.get(4)?,
                    intent,
                    style: row.get(6)?,
                    stage,
                    template_id: row.get(8)?,
                    reply_preview: row.get(9)?,
                    created_at: row.get(10)?,
                })
            })?;
            let mut events = Vec::new();
            for row in rows {
                events.push(row?);
            }
            Ok(events)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
