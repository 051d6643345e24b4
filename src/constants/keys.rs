pub const ACCOUNT_KEY: &str = "account_key";
pub const ACCOUNT_KEY_HEADER: &str = "account_key_header";
pub const API_BASE_URL: &str = "api_base_url";
pub const DATA_KEY: &str = "data_key";
