use std::{env, path::PathBuf};

use crate::constants::envvars;

pub fn data_dir() -> PathBuf {
    match env::var(envvars::DATA_DIR) {
        Ok(data_dir) if !data_dir.is_empty() => data_dir.into(),
        _ => PathBuf::from("./data"),
    }
}
