use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("The market data store is unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("The store returned a malformed date '{0}'")]
    MalformedDate(String),
}
