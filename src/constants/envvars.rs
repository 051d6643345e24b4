pub const DATA_DIR: &str = "ACTIVATOR_DATA_DIR";
pub const API_BASE_URL: &str = "ACTIVATOR_API_BASE_URL";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
