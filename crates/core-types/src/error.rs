use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("'{value}' is not a valid {column}; expected one of: {allowed}")]
    InvalidFilterValue {
        column: &'static str,
        value: String,
        allowed: &'static str,
    },

    #[error("Unrecognized date '{0}'; expected YYYY-MM-DD or a timestamp")]
    InvalidDateFormat(String),
}
