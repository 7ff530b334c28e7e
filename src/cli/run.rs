//! Dispatches parsed arguments to their command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and mismatch count
//! - `Err` if the command fails (config error, git failure, unwritable dictionary)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check_word::check_word, extract::extract, init::init},
};

pub fn run(Arguments { config, command }: Arguments) -> Result<CommandResult> {
    let config = config.as_deref();
    match command {
        Some(Command::Extract(cmd)) => extract(cmd, config),
        Some(Command::CheckWord(cmd)) => check_word(cmd, config),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
