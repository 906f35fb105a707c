use core_types::CoreError;
use database::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown query id '{0}'")]
    UnknownQuery(String),

    /// An invalid filter value or date boundary, rejected before execution.
    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error("Query '{query_id}' requires parameter '{name}'")]
    MissingParameter {
        query_id: &'static str,
        name: &'static str,
    },

    #[error("Parameter '{name}' must be {expected}, got '{value}'")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Catalog entry '{0}' declares a trailing window without a date anchor")]
    MissingDateAnchor(&'static str),

    #[error("Store access failed while running '{query_id}'")]
    Store {
        query_id: String,
        #[source]
        source: DbError,
    },
}
