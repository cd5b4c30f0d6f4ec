// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread state fetches and idempotent upserts.

use std::str::FromStr;

use responda_core::{Intent, RespondaError, Stage, ThreadId, ThreadState, ThreadType};
use rusqlite::params;

use crate::database::Database;

/// Fetch a thread row by its deterministic id.
pub async fn get_thread(
    db: &Database,
    thread_id: &ThreadId,
) -> Result<Option<ThreadState>, RespondaError> {
    let id = thread_id.0.clone();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT thread_id, instance_key, affiliate_id, thread_type, thread_ref,
                        stage, intent, style, last_template_id, last_template_variant,
                        last_in_at, last_out_at, last_reply_preview
                 FROM threads WHERE thread_id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                let thread_type_raw: String = row.get(3)?;
                let thread_type = ThreadType::from_str(&thread_type_raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                let stage_raw: String = row.get(5)?;
                let stage = Stage::from_str(&stage_raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        5,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                let intent_raw: Option<String> = row.get(6)?;
                Ok(ThreadState {
                    thread_id: ThreadId(row.get(0)?),
                    instance_key: row.get(1)?,
                    affiliate_id: row.get(2)?,
                    thread_type,
                    thread_ref: row.get(4)?,
                    stage,
                    intent: intent_raw.and_then(|raw| Intent::from_str(&raw).ok()),
                    style: row.get(7)?,
                    last_template_id: row.get(8)?,
                    last_template_variant: row.get(9)?,
                    last_in_at: row.get(10)?,
                    last_out_at: row.get(11)?,
                    last_reply_preview: row.get(12)?,
                })
            });
            match result {
                Ok(state) => Ok(Some(state)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert or update the thread row keyed on `thread_id`.
pub async fn upsert_thread(db: &Database, state: &ThreadState) -> Result<(), RespondaError> {
    let state = state.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO threads (thread_id, instance_key, affiliate_id, thread_type,
                                      thread_ref, stage, intent, style, last_template_id,
                                      last_template_variant, last_in_at, last_out_at,
                                      last_reply_preview)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                 ON CONFLICT(thread_id) DO UPDATE SET
                     instance_key = excluded.instance_key,
                     affiliate_id = excluded.affiliate_id,
                     thread_type = excluded.thread_type,
                     thread_ref = excluded.thread_ref,
                     stage = excluded.stage,
                     intent = excluded.intent,
                     style = excluded.style,
                     last_template_id = excluded.last_template_id,
                     last_template_variant = excluded.last_template_variant,
                     last_in_at = excluded.last_in_at,
                     last_out_at = excluded.last_out_at,
                     last_reply_preview = excluded.last_reply_preview",
                params![
                    state.thread_id.0,
                    state.instance_key,
                    state.affiliate_id,
                    state.thread_type.to_string(),
                    state.thread_ref,
                    state.stage.to_string(),
                    state.intent.map(|i| i.to_string()),
                    state.style,
                    state.last_template_id,
                    state.last_template_variant,
                    state.last_in_at,
                    state.last_out_at,
                    state.last_reply_preview,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
