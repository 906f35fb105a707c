use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write delimited output: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to finalize the export buffer: {0}")]
    Finalize(#[from] std::io::Error),
}
