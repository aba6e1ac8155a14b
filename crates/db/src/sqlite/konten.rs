//! SQLite-Implementierung des KontoRepository

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use thrive_core::{KontoId, Rolle};

use crate::error::{DbError, DbResult};
use crate::models::{KontoRecord, NeuesKonto};
use crate::repository::KontoRepository;
use crate::sqlite::pool::SqliteDb;

impl KontoRepository for SqliteDb {
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord> {
        let id = KontoId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO konten (id, email, first_name, last_name, password_hash, rolle, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.email)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.password_hash)
        .bind(data.rolle.als_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("E-Mail '{}' bereits registriert", data.email))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(KontoRecord {
            id,
            email: data.email.to_string(),
            first_name: data.first_name.to_string(),
            last_name: data.last_name.to_string(),
            password_hash: data.password_hash.to_string(),
            rolle: data.rolle,
            created_at: now,
        })
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<KontoRecord>> {
        let row = sqlx::query(
            "SELECT id, email, first_name, last_name, password_hash, rolle, created_at
             FROM konten WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_konto(&r)).transpose()
    }

    async fn get_by_id(&self, id: KontoId) -> DbResult<Option<KontoRecord>> {
        let row = sqlx::query(
            "SELECT id, email, first_name, last_name, password_hash, rolle, created_at
             FROM konten WHERE id = ?",
        )
        .bind(id.inner().to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_konto(&r)).transpose()
    }

    async fn list(&self) -> DbResult<Vec<KontoRecord>> {
        let rows = sqlx::query(
            "SELECT id, email, first_name, last_name, password_hash, rolle, created_at
             FROM konten ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_konto).collect()
    }
}

fn row_to_konto(row: &sqlx::sqlite::SqliteRow) -> DbResult<KontoRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let rolle_str: String = row.try_get("rolle")?;
    let rolle = Rolle::from_str(&rolle_str)
        .map_err(|e| DbError::intern(format!("Ungueltige Rolle in DB: {e}")))?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(KontoRecord {
        id: KontoId(id),
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        password_hash: row.try_get("password_hash")?,
        rolle,
        created_at,
    })
}
