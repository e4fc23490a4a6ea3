//! SQLite repository adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use payment_types::{
    CreatePaymentRequest, Payment, PaymentId, PaymentRepository, RepoError, UpdatePaymentRequest,
};

use crate::types::DbPayment;

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_payments.sql");
        sqlx::query(ddl).execute(&pool).await?;
        tracing::debug!("payments schema ready");

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_sqlx_err(err: sqlx::Error, number_card: Option<&str>) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let card = number_card.unwrap_or("?");
            return RepoError::Conflict(format!("payment already exists for card {card}"));
        }
    }
    RepoError::Database(err.to_string())
}

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn insert(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        let now = chrono::Utc::now();
        let created_at_str = now.to_rfc3339();

        let result =
            sqlx::query(r#"INSERT INTO payments (number_card, amount, created_at) VALUES (?, ?, ?)"#)
                .bind(&req.number_card)
                .bind(req.amount)
                .bind(&created_at_str)
                .execute(&self.pool)
                .await
                .map_err(|e| map_sqlx_err(e, Some(&req.number_card)))?;

        Ok(Payment::from_parts(
            PaymentId::from_i64(result.last_insert_rowid()),
            req.number_card,
            req.amount,
            now,
        ))
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT id, number_card, amount, created_at FROM payments WHERE id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_err(e, None))?;

        row.map(DbPayment::into_domain).transpose()
    }

    async fn update(&self, req: UpdatePaymentRequest) -> Result<Option<Payment>, RepoError> {
        let result = sqlx::query(
            r#"UPDATE payments
               SET number_card = COALESCE(?, number_card),
                   amount = COALESCE(?, amount)
               WHERE id = ?"#,
        )
        .bind(&req.number_card)
        .bind(req.amount)
        .bind(req.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_err(e, req.number_card.as_deref()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(req.id).await
    }

    async fn list(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPayment> = sqlx::query_as(
            r#"SELECT id, number_card, amount, created_at FROM payments ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_err(e, None))?;

        rows.into_iter().map(DbPayment::into_domain).collect()
    }

    async fn delete(&self, id: PaymentId) -> Result<u64, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err(e, None))?;

        Ok(result.rows_affected())
    }
}
