//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use ember_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "ember")]
#[command(version)]
#[command(about = "Sign in to Ember from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    login_args: LoginArgs,
}

/// Options for the sign-in screen. Global, so `ember --email X login` and
/// `ember login --email X` mean the same thing.
#[derive(clap::Args, Debug, Clone, Default)]
struct LoginArgs {
    /// Override the API base URL from config
    #[arg(long, global = true, value_name = "URL", env = "EMBER_BASE_URL")]
    base_url: Option<String>,

    /// Pre-fill the email field
    #[arg(long, global = true, value_name = "EMAIL")]
    email: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the sign-in screen (default)
    Login,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        login_args,
    } = cli;

    if let Some(Commands::Config { command }) = command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    // no subcommand or `login`: open the sign-in screen
    let mut config = config::Config::load().context("load config")?;
    if let Some(base_url) = login_args.base_url {
        config.auth.base_url = base_url;
    }

    commands::login::run(&config, login_args.email).await
}
