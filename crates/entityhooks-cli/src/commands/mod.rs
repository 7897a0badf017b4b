//! CLI command definitions and dispatch.

pub mod config;
pub mod hooks;
pub mod plan;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use entityhooks_core::config::AppConfig;
use entityhooks_core::error::HookError;
use entityhooks_registry::HookRegistry;

/// EntityHooks — inspect lifecycle hook scripts discovered on disk
#[derive(Debug, Parser)]
#[command(name = "entityhooks", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hooks root directory (overrides configuration)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every discovered hook
    List,
    /// List distinct event names, optionally for one type
    Events(hooks::EventsArgs),
    /// Show the hooks for one type and event, in execution order
    Find(hooks::FindArgs),
    /// Show the capabilities each hooked type would receive
    Plan,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration, applying the `--root` override.
    pub fn load_config(&self) -> Result<AppConfig, HookError> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(root) = &self.root {
            config.hooks.root = root.clone();
        }
        Ok(config)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), HookError> {
        match &self.command {
            Commands::List => hooks::list(&*build_registry(&config).await?, self.format),
            Commands::Events(args) => {
                hooks::events(args, &*build_registry(&config).await?, self.format)
            }
            Commands::Find(args) => hooks::find(args, &*build_registry(&config).await?, self.format),
            Commands::Plan => plan::execute(build_registry(&config).await?, self.format),
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Helper: build the registry off the async runtime
pub async fn build_registry(config: &AppConfig) -> Result<Arc<HookRegistry>, HookError> {
    let registry = Arc::new(HookRegistry::from_config(&config.hooks));

    let building = Arc::clone(&registry);
    tokio::task::spawn_blocking(move || building.hooks().map(|_| ()))
        .await
        .map_err(|e| HookError::internal(format!("Registry build task failed: {e}")))??;

    Ok(registry)
}
