use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach the CRM data endpoint: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The CRM data endpoint returned HTTP status {0}")]
    Status(u16),

    #[error("Failed to deserialize the CRM dataset: {0}")]
    Deserialization(String),
}
