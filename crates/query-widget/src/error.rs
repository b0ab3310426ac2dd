use query_index::error::IndexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Failed to fetch the query index: {0}")]
    Index(#[from] IndexError),

    #[error("Failed to render the rule form: {0}")]
    Form(String),

    #[error("Failed to serialize the rule tree to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
