//! `rfpctl config` - configuration management

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfpctl_core::RfpctlConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file to ~/.rfpctl/config.toml
    Init,
    /// Print the effective configuration (file + env overrides)
    Show,
    /// Print the config file path
    Path,
}

pub fn run(args: ConfigArgs, config: &RfpctlConfig) -> Result<()> {
    match args.command {
        ConfigCommand::Init => {
            let path = RfpctlConfig::config_path();
            if path.exists() {
                anyhow::bail!("config already exists at {path:?}; edit it directly");
            }
            RfpctlConfig::default().save()?;
            println!("Wrote default config to {path:?}");
        }
        ConfigCommand::Show => {
            println!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommand::Path => {
            println!("{}", RfpctlConfig::config_path().display());
        }
    }
    Ok(())
}
