use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to request the query index: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Query index request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode the query index body: {0}")]
    Decode(reqwest::Error),
}
