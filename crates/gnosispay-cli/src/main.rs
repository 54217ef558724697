/*
[INPUT]:  CLI arguments, YAML configuration file, GNOSISPAY_* environment
[OUTPUT]: JSON printed to stdout for the requested command
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod commands;
mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "gnosispay", version, about = "Gnosis Pay API client")]
struct Cli {
    /// Defaults to <config dir>/gnosispay/config.yaml when present
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(
        base_url = config.base_url.as_deref().unwrap_or("default"),
        app_uri = %config.app_uri,
        "configuration loaded"
    );

    let output = commands::execute(args.command, &config).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ResourceCommand;

    #[test]
    fn test_parse_card_status() {
        let cli = Cli::try_parse_from(["gnosispay", "card-status", "--id", "card-1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Resource(ResourceCommand::CardStatus {
                id: "card-1".to_string()
            })
        );
        assert_eq!(cli.log_level, "info");
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn test_parse_transactions_filters() {
        let cli = Cli::try_parse_from([
            "gnosispay",
            "--config",
            "/tmp/gp.yaml",
            "transactions",
            "--billing-currency",
            "EUR",
        ])
        .unwrap();

        match cli.command {
            Command::Resource(ResourceCommand::Transactions(args)) => {
                assert_eq!(args.billing_currency.as_deref(), Some("EUR"));
                assert!(args.mcc.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/gp.yaml")));
    }

    #[test]
    fn test_session_and_resource_commands_split() {
        let cli = Cli::try_parse_from(["gnosispay", "login"]).unwrap();
        assert_eq!(cli.command, Command::Login);

        let cli = Cli::try_parse_from(["gnosispay", "safe-config"]).unwrap();
        assert_eq!(cli.command, Command::Resource(ResourceCommand::SafeConfig));
    }

    #[test]
    fn test_signup_requires_email() {
        assert!(Cli::try_parse_from(["gnosispay", "signup"]).is_err());
    }
}
