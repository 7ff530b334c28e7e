use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Writes the default config into the current directory, leaving an
/// existing one untouched.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let path = dir.join(CONFIG_FILE_NAME);

    let created = if path.exists() {
        false
    } else {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        true
    };

    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        path,
        created,
    })))
}
