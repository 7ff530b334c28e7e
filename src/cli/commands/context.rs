use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    workspace::scan_targets,
};

/// Configuration and target directory shared by the extraction commands.
pub struct CommandContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs, config_path: Option<&Path>) -> Result<Self> {
        let config_result = load_config(&args.dir, config_path)?;

        if args.verbose {
            match &config_result.path {
                Some(path) => eprintln!("Using config file: {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }

        Ok(Self {
            config: config_result.config,
            root_dir: args.dir.clone(),
            verbose: args.verbose,
        })
    }

    /// The files named on the command line, or every discovered source file.
    pub fn target_files(&self, explicit: &[String]) -> Vec<String> {
        if !explicit.is_empty() {
            return explicit.to_vec();
        }

        let scan_result = scan_targets(&self.root_dir, &self.config.ignores, self.verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if self.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }
        scan_result.files
    }

    /// Dictionary directory, resolved against the documentation directory.
    pub fn dict_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.dict_dir)
    }
}
