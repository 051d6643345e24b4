mod activate;
mod kvs;

pub use activate::activate;
pub use kvs::{kvs_get, kvs_set};
