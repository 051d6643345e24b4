use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivationError {
    #[error(transparent)]
    Transport(#[from] ureq::Error),
    #[error("unexpected HTTP status {status}")]
    HttpStatus { status: u16, body: String },
    #[error("could not parse activation response JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("service error: {0}")]
    Service(String),
    #[error("unexpected activation response: {0}")]
    Schema(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
