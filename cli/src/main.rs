use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;
use spa_auth::store::FileStore;
use spa_auth::transport::HttpTransport;
use spa_auth::{AuthConfig, AuthError, AuthService, Credentials, TransportError};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing password; pass --password or set SPA_AUTH_PASSWORD")]
    MissingPassword,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "spa-auth", about = "Bearer-token login, refresh and logout against an SPA backend")]
struct Cli {
    #[arg(long, env = "SPA_AUTH_BASE_URL", default_value = spa_auth::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SPA_AUTH_STORE", default_value = ".spa-auth.json", help = "Token store file")]
    store: PathBuf,

    #[arg(long, env = "SPA_AUTH_TOKEN_KEY", default_value = spa_auth::config::DEFAULT_TOKEN_KEY)]
    token_key: String,

    #[arg(long, env = "SPA_AUTH_REQUEST_TIMEOUT_SECS", help = "Per-request timeout; none by default")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Log in and store the returned token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "SPA_AUTH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Exchange the stored token for a fresh one.
    Refresh,
    /// Forget the stored token.
    Logout,
    /// Report whether a token is stored.
    Status,
    /// Print the Authorization header value.
    Header,
}

impl Cli {
    fn config(&self) -> AuthConfig {
        AuthConfig::default()
            .with_base_url(self.base_url.clone())
            .with_token_key(self.token_key.clone())
            .with_request_timeout(self.timeout_secs.map(Duration::from_secs))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(store = %cli.store.display(), base_url = %config.base_url, "using token store");
    let transport = HttpTransport::new(config.request_timeout)?;
    let service = AuthService::new(config, transport, FileStore::new(&cli.store))?;

    match cli.command {
        Command::Login { username, password } => {
            let password = password.ok_or(CliError::MissingPassword)?;
            let response = service.login(&Credentials::new(username, password)).await?;
            print_json(&response)
        }
        Command::Refresh => {
            let response = service.refresh_token().await?;
            print_json(&response)
        }
        Command::Logout => {
            service.logout()?;
            println!("logged out");
            Ok(())
        }
        Command::Status => {
            println!("{}", status_label(*service.is_authenticated().borrow()));
            Ok(())
        }
        Command::Header => {
            println!("{}", service.authorization_header()?);
            Ok(())
        }
    }
}

fn status_label(authenticated: bool) -> &'static str {
    if authenticated { "authenticated" } else { "anonymous" }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
