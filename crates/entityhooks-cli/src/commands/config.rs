//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use entityhooks_core::config::AppConfig;
use entityhooks_core::config::hooks::BACKUP_SUFFIXES;
use entityhooks_core::error::HookError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), HookError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config)?,
            OutputFormat::Table => {
                println!("Hooks");
                output::print_kv("root", &config.hooks.root.display().to_string());
                output::print_kv("follow_symlinks", &config.hooks.follow_symlinks.to_string());
                let suffixes: Vec<&str> = BACKUP_SUFFIXES
                    .iter()
                    .copied()
                    .chain(config.hooks.backup_suffixes.iter().map(String::as_str))
                    .collect();
                output::print_kv("backup_suffixes", &suffixes.join(" "));
                println!("Logging");
                output::print_kv("level", &config.logging.level);
                output::print_kv("format", &config.logging.format);
            }
        },
    }

    Ok(())
}
