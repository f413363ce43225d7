use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use business::domain::errors::RepositoryError;
use business::domain::marketplace::model::UsageMonth;
use business::domain::marketplace::repository::ApiUsageRepository;

use crate::convert::db_error;

pub struct ApiUsageRepositoryMySql {
    pool: MySqlPool,
}

impl ApiUsageRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApiUsageRepository for ApiUsageRepositoryMySql {
    async fn try_reserve(
        &self,
        api_name: &str,
        endpoint: &str,
        month: &UsageMonth,
        monthly_limit: u32,
    ) -> Result<Option<u32>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            "INSERT IGNORE INTO api_usage (api_name, month, endpoint, call_count, last_called_at) VALUES (?, ?, ?, 0, ?)",
        )
        .bind(api_name)
        .bind(month.as_str())
        .bind(endpoint)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        // The row lock taken by the conditional update serializes concurrent reservations.
        let reserved = sqlx::query(
            r#"UPDATE api_usage
            SET call_count = call_count + 1, endpoint = ?, last_called_at = ?
            WHERE api_name = ? AND month = ? AND call_count < ?"#,
        )
        .bind(endpoint)
        .bind(Utc::now())
        .bind(api_name)
        .bind(month.as_str())
        .bind(monthly_limit)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?
        .rows_affected()
            == 1;

        let count = sqlx::query_scalar::<_, u32>(
            "SELECT call_count FROM api_usage WHERE api_name = ? AND month = ?",
        )
        .bind(api_name)
        .bind(month.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        if !reserved {
            tracing::info!("{} quota for {} reached at {} calls", api_name, month, count);
            return Ok(None);
        }

        tracing::info!("{} usage for {}: {} calls", api_name, month, count);
        Ok(Some(count))
    }
}
