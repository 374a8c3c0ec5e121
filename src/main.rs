//! Legal API Client - command-line front end
//!
//! Issues calls against the marketplace API through the caching pipeline.
//!
//! # Usage
//! - `legal_api_client get <path> [name=value ...]`
//! - `legal_api_client login <email> <password>`
//! - `legal_api_client logout`
//! - `legal_api_client whoami`

use std::sync::Arc;

use anyhow::{bail, Context};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legal_api_client::client::{FileSessionStore, Params};
use legal_api_client::models::LoginRequest;
use legal_api_client::services::AuthService;
use legal_api_client::{ApiClient, Config};

const USAGE: &str = "usage: legal_api_client <get <path> [name=value ...] | login <email> <password> | logout | whoami>";

/// Main entry point for the command-line client.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the persisted session and build the client
/// 4. Run the requested command
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legal_api_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, timeout={}ms, cache_max_entries={}, cache_ttl={}ms",
        config.api_base_url, config.request_timeout_ms, config.cache_max_entries, config.cache_ttl_ms
    );

    let session = Arc::new(FileSessionStore::open(&config.session_file));
    let client = ApiClient::from_config(&config)
        .context("failed to build HTTP client")?
        .with_session_store(session);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let auth = AuthService::new(&client);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["get", path, rest @ ..] => {
            let params = parse_params(rest)?;
            let value = client.get(path, params).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ["login", email, password] => {
            let response = auth.login(&LoginRequest::new(*email, *password)).await?;
            println!("{}", serde_json::to_string_pretty(&response.user)?);
        }
        ["logout"] => auth.logout().await,
        ["whoami"] => match auth.current_user() {
            Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            None => println!("not signed in"),
        },
        _ => bail!(USAGE),
    }

    Ok(())
}

/// Parses `name=value` arguments into query parameters.
///
/// Values that parse as JSON keep their type (`page=2` is a number); anything
/// else is sent as a string.
fn parse_params(args: &[&str]) -> anyhow::Result<Option<Params>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut params = Params::new();
    for arg in args {
        let Some((name, raw)) = arg.split_once('=') else {
            bail!("expected name=value, got '{}'", arg);
        };
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        params.insert(name.to_string(), value);
    }
    Ok(Some(params))
}
