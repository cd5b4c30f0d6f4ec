// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template candidate reads and counter increments.
//!
//! Counter updates are single additive UPDATE statements so concurrent
//! decisions touching the same template compose instead of losing writes.

use responda_core::{Intent, RespondaError, TemplateRecord};
use rusqlite::params;

use crate::database::Database;

/// Fetch enabled candidates for `(intent, style)`, bounded by `limit`.
pub async fn candidates(
    db: &Database,
    intent: Intent,
    style: &str,
    limit: usize,
) -> Result<Vec<TemplateRecord>, RespondaError> {
    let intent = intent.to_string();
    let style = style.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, body, variant, score, uses, wins
                 FROM templates
                 WHERE enabled = 1 AND intent = ?1 AND style = ?2
                 LIMIT ?3",
            )?;
            let rows = stmt.query_map(params![intent, style, limit as i64], |row| {
                Ok(TemplateRecord {
                    id: row.get(0)?,
                    body: row.get(1)?,
                    variant: row.get(2)?,
                    score: row.get(3)?,
                    uses: row.get(4)?,
                    wins: row.get(5)?,
                })
            })?;
            let mut templates = Vec::new();
            for row in rows {
                templates.push(row?);
            }
            Ok(templates)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Record that a template was served: `uses += 1`.
pub async fn record_use(db: &Database, template_id: &str) -> Result<(), RespondaError> {
    let template_id = template_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE templates SET uses = uses + 1 WHERE id = ?1",
                params![template_id],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Record an engagement signal: `uses += 1`, `score += score_delta`.
pub async fn record_engagement(
    db: &Database,
    template_id: &str,
    score_delta: i64,
) -> Result<(), RespondaError> {
    let template_id = template_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE templates SET uses = uses + 1, score = score + ?2 WHERE id = ?1",
                params![template_id, score_delta],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Record a win signal: `wins += 1`, `score += score_delta`.
pub async fn record_win(
    db: &Database,
    template_id: &str,
    score_delta: i64,
) -> Result<(), RespondaError> {
    let template_id = template_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE templates SET wins = wins + 1, score = score + ?2 WHERE id = ?1",
                params![template_id, score_delta],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert or replace a template row (administrative/seeding path).
pub async fn upsert_template(
    db: &Database,
    intent: Intent,
    style: &str,
    enabled: bool,
    record: &TemplateRecord,
) -> Result<(), RespondaError> {
    let intent = intent.to_string();
    let style = style.to_string();
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO templates (id, intent, style, variant, body, enabled, score, uses, wins)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                     intent = excluded.intent,
                     style = excluded.style,
                     variant = excluded.variant,
                     body = excluded.body,
                     enabled = excluded.enabled",
                params![
                    record.id,
                    intent,
                    style,
                    record.variant,
                    record.body,
                    enabled,
                    record.score,
                    record.uses,
                    record.wins,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetch one template row regardless of scope (test/ops helper).
pub async fn get_template(
    db: &Database,
    template_id: &str,
) -> Result<Option<TemplateRecord>, RespondaError> {
    let template_id = template_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, body, variant, score, uses, wins FROM templates WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![template_id], |row| {
                Ok(TemplateRecord {
                    id: row.get(0)?,
                    body: row.get(1)?,
                    variant: row.get(2)?,
                    score: row.get(3)?,
                    uses: row.get(4)?,
                    wins: row.get(5)?,
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
