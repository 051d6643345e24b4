use std::env;

use kvstore::KVDb;
use serde::de::DeserializeOwned;

use crate::constants::{defaults, envvars, keys, REMOTE_DEFAULTS};

/// Source of the settings an activation request is built from.
pub trait AccountConfig {
    fn account_key(&self) -> String;
    fn account_key_header(&self) -> String;
    fn api_base_url(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct StaticConfig {
    pub account_key: String,
    pub account_key_header: String,
    pub api_base_url: String,
}

impl StaticConfig {
    pub fn new(api_base_url: impl Into<String>, account_key: impl Into<String>) -> Self {
        StaticConfig {
            account_key: account_key.into(),
            account_key_header: defaults::ACCOUNT_KEY_HEADER.to_string(),
            api_base_url: api_base_url.into(),
        }
    }
}

impl AccountConfig for StaticConfig {
    fn account_key(&self) -> String {
        self.account_key.clone()
    }

    fn account_key_header(&self) -> String {
        self.account_key_header.clone()
    }

    fn api_base_url(&self) -> String {
        self.api_base_url.clone()
    }
}

fn get_or_log<T: DeserializeOwned>(kvs: &KVDb, key: &str) -> Option<T> {
    match kvs.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read '{key}' from KV store: {e}");
            None
        }
    }
}

// Read on every call, so values written by `kvs-set` apply without restart
impl AccountConfig for KVDb {
    fn account_key(&self) -> String {
        get_or_log(self, keys::ACCOUNT_KEY).unwrap_or_default()
    }

    fn account_key_header(&self) -> String {
        get_or_log(self, keys::ACCOUNT_KEY_HEADER)
            .unwrap_or_else(|| defaults::ACCOUNT_KEY_HEADER.to_string())
    }

    fn api_base_url(&self) -> String {
        if let Ok(base_url) = env::var(envvars::API_BASE_URL) {
            return base_url;
        }
        get_or_log(self, keys::API_BASE_URL).unwrap_or_else(|| {
            REMOTE_DEFAULTS
                .get(keys::API_BASE_URL)
                .copied()
                .unwrap_or_default()
                .to_string()
        })
    }
}
