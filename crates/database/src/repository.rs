use crate::catalog::DateAnchor;
use crate::dates;
use crate::error::DbError;
use chrono::NaiveDate;
use core_types::Value;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Row, TypeInfo, ValueRef};

/// The three externally populated price tables, in reporting order.
pub const PRICE_TABLES: [&str; 3] = ["crypto_prices", "oil_prices", "stock_prices"];

/// A value bound into a query placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// The `MarketRepository` provides the low-level, read-only interface to the
/// market data store. It executes parameterized SQL and decodes rows
/// dynamically; which SQL runs is decided above it, by the catalog.
#[derive(Debug, Clone)]
pub struct MarketRepository {
    pool: SqlitePool,
}

impl MarketRepository {
    /// Creates a new `MarketRepository` over an explicitly passed pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Closes the underlying pool. Reads issued afterward fail; callers use
    /// this to release the store deterministically at the end of a session.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Runs one parameterized query and decodes every row.
    pub async fn fetch_rows(
        &self,
        sql: &str,
        binds: &[BindValue],
    ) -> Result<Vec<Vec<Value>>, DbError> {
        let mut query = sqlx::query(sql);
        for bind in binds {
            query = match bind {
                BindValue::Text(v) => query.bind(v.clone()),
                BindValue::Integer(v) => query.bind(*v),
                BindValue::Float(v) => query.bind(*v),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        tracing::debug!(rows = rows.len(), "query returned");
        rows.iter().map(decode_row).collect()
    }

    /// The most recent date present in the anchored table, on the canonical
    /// key. `None` when the table holds no rows.
    pub async fn latest_date(&self, anchor: &DateAnchor) -> Result<Option<NaiveDate>, DbError> {
        let sql = format!(
            "SELECT MAX({}) AS latest FROM {}",
            anchor.date_expr, anchor.table
        );
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        let latest: Option<String> = row.try_get("latest")?;

        match latest {
            Some(raw) => {
                let date = dates::parse_date_key(&raw)
                    .map_err(|_| DbError::MalformedDate(raw.clone()))?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }

    /// Row count of one table. Reported per table so a single missing table
    /// shows up as its own error, not a blanket store failure.
    pub async fn count_rows(&self, table: &'static str) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) AS n FROM {table}");
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        Ok(row.try_get("n")?)
    }
}

/// Decodes one row cell by cell. SQLite types the stored value, not the
/// column, so the declared column affinity cannot be trusted here.
fn decode_row(row: &SqliteRow) -> Result<Vec<Value>, DbError> {
    let mut values = Vec::with_capacity(row.len());
    for idx in 0..row.len() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::Integer(row.try_get(idx)?),
                "REAL" => Value::Float(row.try_get(idx)?),
                _ => Value::Text(row.try_get(idx)?),
            }
        };
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_repository() -> MarketRepository {
        // One connection only: every connection to :memory: is its own store.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE crypto_prices (coin_id TEXT, date TEXT, price_usd REAL);",
        )
        .execute(&pool)
        .await
        .unwrap();
        for (date, price) in [("2025-01-01", 100.0), ("2025-01-02", 110.0)] {
            sqlx::query("INSERT INTO crypto_prices VALUES ('bitcoin', ?, ?)")
                .bind(date)
                .bind(price)
                .execute(&pool)
                .await
                .unwrap();
        }
        sqlx::query("CREATE TABLE oil_prices (Date TEXT, Price REAL);")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO oil_prices VALUES ('2025-01-02 00:00:00', 75.5)")
            .execute(&pool)
            .await
            .unwrap();

        MarketRepository::new(pool)
    }

    #[tokio::test]
    async fn rows_decode_with_per_cell_types() {
        let repo = seeded_repository().await;
        let rows = repo
            .fetch_rows(
                "SELECT coin_id, date, price_usd, NULL AS missing FROM crypto_prices ORDER BY date",
                &[],
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Value::Text("bitcoin".into()));
        assert_eq!(rows[0][1], Value::Text("2025-01-01".into()));
        assert_eq!(rows[0][2], Value::Float(100.0));
        assert_eq!(rows[0][3], Value::Null);
    }

    #[tokio::test]
    async fn binds_are_positional_and_typed() {
        let repo = seeded_repository().await;
        let rows = repo
            .fetch_rows(
                "SELECT date FROM crypto_prices WHERE coin_id = ? AND price_usd > ?",
                &[
                    BindValue::Text("bitcoin".into()),
                    BindValue::Float(105.0),
                ],
            )
            .await
            .unwrap();

        assert_eq!(rows, vec![vec![Value::Text("2025-01-02".into())]]);
    }

    #[tokio::test]
    async fn latest_date_truncates_timestamps_and_handles_empty_tables() {
        let repo = seeded_repository().await;

        let oil = catalog::find("oil-peak-price").unwrap().date_anchor.unwrap();
        let latest = repo.latest_date(&oil).await.unwrap();
        assert_eq!(latest, NaiveDate::from_ymd_opt(2025, 1, 2));

        sqlx::query("DELETE FROM oil_prices")
            .execute(&repo.pool)
            .await
            .unwrap();
        assert_eq!(repo.latest_date(&oil).await.unwrap(), None);
    }

    #[tokio::test]
    async fn a_missing_table_is_a_store_error() {
        let repo = seeded_repository().await;
        let result = repo.count_rows("stock_prices").await;
        assert!(matches!(result, Err(DbError::Unavailable(_))));
        assert_eq!(repo.count_rows("crypto_prices").await.unwrap(), 2);
    }
}
