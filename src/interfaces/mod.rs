pub mod http_api;
pub mod kvpath;
