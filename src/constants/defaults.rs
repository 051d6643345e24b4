use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";
pub const ACCOUNT_KEY_HEADER: &str = "X-Account-Key";
