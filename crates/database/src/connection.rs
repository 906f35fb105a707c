use crate::error::DbError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Opens the market data store read-only and returns a connection pool.
///
/// The store is populated by an external ingestion process; this side only
/// ever reads. `read_only` is enforced at the connection level so a bug in a
/// query can never mutate the file, and a missing file is an error rather
/// than a silently created empty database.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.as_ref().display(), "opened market data store");
    Ok(pool)
}
