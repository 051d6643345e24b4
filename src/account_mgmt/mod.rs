mod activate;
mod config;
mod credentials;
mod error;
mod progress;
mod request;
mod response;

pub use activate::{activate, activate_with_agent};
pub use config::{AccountConfig, StaticConfig};
pub use credentials::Credentials;
pub use error::ActivationError;
pub use progress::{ActivationProgress, LogProgress, NoProgress};
pub use request::{ActivationRequest, ACTIVATE_PATH};
pub use response::{check_service_error, ActivationResult};
