use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, info, warn};

use gamecache_token_setup::config::loader::needs_provisioning;
use gamecache_token_setup::config::parser::parse_config_file;
use gamecache_token_setup::error::SetupError;
use gamecache_token_setup::sinks::env_file::save_token;
use gamecache_token_setup::sources::worker::WorkerSource;
use gamecache_token_setup::utils::constants::{
    DEFAULT_CONFIG_FILE, KEY_BGG_USERNAME, MANUAL_TOKEN_URL, TOKEN_ENV_VAR,
};
use gamecache_token_setup::utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the GameCache flat config file
    #[arg(short, long, env = "GAMECACHE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Provision a new token even when one already resolves
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::run(args.log_level);

    info!("BGG token setup for GameCache");

    // -------------------------------
    // 1. Read the BGG username from the flat config
    // -------------------------------

    let flat = match parse_config_file(&args.config) {
        Ok(flat) => flat,
        Err(SetupError::NotFound(path)) => {
            error!("config file '{}' not found", path.display());
            error!("create a config.ini with your BGG username");
            process::exit(1);
        }
        Err(e) => {
            error!("error reading config file: {e}");
            process::exit(1);
        }
    };

    if !needs_provisioning(&flat, args.force) {
        info!("a BGG token is already configured; rerun with --force to replace it");
        return Ok(());
    }

    let Some(username) = flat.get(KEY_BGG_USERNAME).filter(|u| !u.is_empty()) else {
        error!("'{}' not found in {}", KEY_BGG_USERNAME, args.config);
        error!(
            "add your BGG username to the config file: {} = YOUR_BGG_USERNAME",
            KEY_BGG_USERNAME
        );
        process::exit(1);
    };
    info!("read BGG username from {}: {}", args.config, username);

    // -------------------------------
    // 2. Ask the worker to mint a token
    // -------------------------------

    info!("generating token for user '{username}'...");
    let source = WorkerSource::new()?;
    let token = match source.request_token(username).await {
        Ok(token) => token,
        Err(e) => {
            match e {
                SetupError::Timeout => {
                    error!("request timed out, please check your internet connection")
                }
                SetupError::Connection => {
                    error!("connection error, please check your internet connection")
                }
                SetupError::EmptyResponse => error!("token generation failed: no response data"),
                SetupError::UnexpectedResponse(payload) => {
                    error!("unexpected response from token generator: {payload}")
                }
                other => error!("error generating token: {other}"),
            }
            error!("you can create a token manually at: {MANUAL_TOKEN_URL}");
            process::exit(1);
        }
    };
    info!("token generated successfully");

    // -------------------------------
    // 3. Persist the token next to the config file
    // -------------------------------

    match save_token(&token, Path::new(&args.config)) {
        Ok(env_path) => {
            info!("token saved to {}", env_path.display());
            info!("it will be loaded automatically on the next GameCache run");
        }
        Err(e) => {
            warn!("token generated but not saved automatically: {e}");
            warn!("create a .env file containing: {TOKEN_ENV_VAR}={token}");
            process::exit(1);
        }
    }

    Ok(())
}
