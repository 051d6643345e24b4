use activator::account_mgmt::{self, LogProgress};
use activator::constants::keys;
use activator::interfaces::kvpath;
use anyhow::Result;
use kvstore::KVDb;

use crate::argsets::ActivateArgs;

pub fn activate(args: ActivateArgs) -> Result<()> {
    let mut kvs = KVDb::new(kvpath::SQLITE_STORE.as_path())?;

    let result = account_mgmt::activate(
        &kvs,
        &LogProgress,
        &args.team_key,
        &args.username,
        &args.password,
        &args.two_factor_code,
    )?;
    kvs.set_many(vec![
        (keys::ACCOUNT_KEY, &result.account_key),
        (keys::DATA_KEY, &result.data_key),
    ])?;
    log::info!("Activation successfully completed");

    Ok(())
}
