//! Dashboard CLI: dialoguer menus on a terminal, a line-oriented script mode
//! when `LIFEHUB_CLI_SCRIPT` is set (used for piping and integration tests).

pub mod context;
pub mod filter;
pub mod io;
pub mod menus;
pub mod output;
pub mod script;

use crate::errors::CliError;

use context::HubContext;

const SCRIPT_MODE_ENV: &str = "LIFEHUB_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let context = HubContext::from_env();
    if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        script::run(&context)
    } else {
        menus::run(&context)
    }
}
