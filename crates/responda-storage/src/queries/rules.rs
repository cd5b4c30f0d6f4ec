// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply-rule reads for the decision path.

use std::str::FromStr;

use responda_core::{MatchKind, ReplyRule, RespondaError};
use rusqlite::params;

use crate::database::Database;

/// Fetch active rules visible to a tenant, ordered by ascending priority.
///
/// Global rules (`affiliate_id IS NULL`) apply to every tenant.
pub async fn active_rules(
    db: &Database,
    affiliate_id: &str,
) -> Result<Vec<ReplyRule>, RespondaError> {
    let affiliate_id = affiliate_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, affiliate_id, priority, match_kind, match_text, match_group,
                        match_sender, reply_text, is_active
                 FROM reply_rules
                 WHERE is_active = 1 AND (affiliate_id IS NULL OR affiliate_id = ?1)
                 ORDER BY priority ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![affiliate_id], |row| {
                let kind_raw: String = row.get(3)?;
                let match_kind = MatchKind::from_str(&kind_raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(ReplyRule {
                    id: row.get(0)?,
                    affiliate_id: row.get(1)?,
                    priority: row.get(2)?,
                    match_kind,
                    match_text: row.get(4)?,
                    match_group: row.get(5)?,
                    match_sender: row.get(6)?,
                    reply_text: row.get(7)?,
                    is_active: row.get(8)?,
                })
            })?;
            let mut rules = Vec::new();
            for row in rows {
                rules.push(row?);
            }
            Ok(rules)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a rule (administrative/seeding path). Returns the new row id.
pub async fn insert_rule(db: &Database, rule: &ReplyRule) -> Result<i64, RespondaError> {
    let rule = rule.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO reply_rules (affiliate_id, priority, match_kind, match_text,
                                          match_group, match_sender, reply_text, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    rule.affiliate_id,
                    rule.priority,
                    rule.match_kind.to_string(),
                    rule.match_text,
                    rule.match_group,
                    rule.match_sender,
                    rule.reply_text,
                    rule.is_active,
                ],
            )?;
            Ok(conn.last_insert_rowid())
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

    fn rule(affiliate_id: Option<&str>, priority: i64, text: &str) -> ReplyRule {
        ReplyRule {
            id: 0,
            affiliate_id: affiliate_id.map(str::to_string),
            priority,
            match_kind: MatchKind::Contains,
            match_text: text.to_string(),
            match_group: None,
            match_sender: None,
            reply_text: format!("resposta para {text}"),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn rules_are_scoped_to_tenant_plus_global() {
        let (db, _dir) = setup_db().await;
        insert_rule(&db, &rule(Some("aff-1"), 20, "promo")).await.unwrap();
        insert_rule(&db, &rule(None, 10, "horário")).await.unwrap();
        insert_rule(&db, &rule(Some("aff-2"), 1, "outro")).await.unwrap();

        let rules = active_rules(&db, "aff-1").await.unwrap();
        assert_eq!(rules.len(), 2);
        // Ascending priority: the global rule (10) precedes the tenant rule (20).
        assert_eq!(rules[0].match_text, "horário");
        assert_eq!(rules[1].match_text, "promo");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn inactive_rules_are_filtered_out() {
        let (db, _dir) = setup_db().await;
        let mut inactive = rule(Some("aff-1"), 1, "promo");
        inactive.is_active = false;
        insert_rule(&db, &inactive).await.unwrap();

        let rules = active_rules(&db, "aff-1").await.unwrap();
        assert!(rules.is_empty());
        db.close().await.unwrap();
    }
}
