mod argsets;
mod command;

use activator::constants::{defaults, envvars};
use activator::helpers::load_dotenv;
use anyhow::{anyhow, Result};
use env_logger::Env;

const CMD_ACTIVATE: &str = "activate";
const CMD_KVS_GET: &str = "kvs-get";
const CMD_KVS_SET: &str = "kvs-set";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_ACTIVATE) => command::activate(argsets::ActivateArgs {
            team_key: args.opt_value_from_str("--team-key")?.unwrap_or_default(),
            username: args.opt_value_from_str("--username")?.unwrap_or_default(),
            password: args.opt_value_from_str("--password")?.unwrap_or_default(),
            two_factor_code: args
                .opt_value_from_str("--two-factor-code")?
                .unwrap_or_default(),
        }),
        Some(CMD_KVS_GET) => command::kvs_get(argsets::KvsGetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_KVS_SET) => command::kvs_set(argsets::KvsSetArgs {
            key: args.free_from_str()?,
            value: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'activate', 'kvs-get', 'kvs-set'"
        )),
    }
}
