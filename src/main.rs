use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use google_auth::analytics::{AnalyticsClient, ReportQuery};
use google_auth::credentials::ClientCredentials;
use google_auth::http::{HttpClientBuilder, HttpClientConfig};
use google_auth::oauth::{AuthorizationUrlBuilder, Endpoints, TokenExchanger, TokenRefresher, Tokens};
use log::*;
use secrecy::SecretString;
use service::{config::Config, logging::Logger};
use std::error::Error as StdError;

/// Walk through Google's installed-app OAuth flow and query YouTube Analytics.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the consent URL the user must visit to grant access.
    AuthorizeUrl,
    /// Exchange the authorization code from the consent page for tokens.
    Exchange {
        /// Single-use authorization code.
        #[arg(long)]
        code: String,
        /// Print Google's response body verbatim instead of the parsed token.
        #[arg(long)]
        raw: bool,
    },
    /// Get a fresh access token using a refresh token.
    Refresh {
        #[arg(long, env = "GOOGLE_REFRESH_TOKEN", hide_env_values = true)]
        refresh_token: String,
        /// Print Google's response body verbatim instead of the parsed token.
        #[arg(long)]
        raw: bool,
    },
    /// Query YouTube Analytics for the authorized user's channel.
    Report {
        #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        #[arg(long, default_value = "2013-05-07")]
        start_date: NaiveDate,
        #[arg(long, default_value = "2013-05-07")]
        end_date: NaiveDate,
        /// Comma separated list of metrics.
        #[arg(long, value_delimiter = ',', default_value = "views")]
        metrics: Vec<String>,
    },
}

type BoxError = Box<dyn StdError + Send + Sync>;

#[tokio::main]
async fn main() {
    Config::load_dotenv();
    let cli = Cli::parse();

    if let Err(e) = Logger::init_logger(&cli.config) {
        eprintln!("Failed to start logger: {e}");
    }

    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    let config = cli.config;
    let credentials = client_credentials(&config);
    let endpoints = Endpoints::new(
        config.google_auth_url().to_string(),
        config.google_token_url().to_string(),
    );
    let http_config = http_client_config(&config);

    match cli.command {
        Command::AuthorizeUrl => {
            let url = AuthorizationUrlBuilder::new(credentials, &endpoints).build();
            info!("Visit the URL below and grant access, then run `exchange --code <CODE>`");
            println!("{url}");
        }
        Command::Exchange { code, raw } => {
            let client = HttpClientBuilder::new().with_config(http_config).build()?;
            let exchanger = TokenExchanger::new(client, credentials, &endpoints);
            if raw {
                println!("{}", exchanger.exchange_code_raw(&code).await?);
            } else {
                let response = exchanger.exchange_code(&code).await?;
                log_expiry(&Tokens::from(response.clone()));
                if response.refresh_token.is_none() {
                    warn!("No refresh token returned; the user may have granted access before");
                }
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::Refresh { refresh_token, raw } => {
            let client = HttpClientBuilder::new().with_config(http_config).build()?;
            let refresher = TokenRefresher::new(client, credentials, &endpoints);
            if raw {
                println!("{}", refresher.refresh_raw(&refresh_token).await?);
            } else {
                let response = refresher.refresh(&refresh_token).await?;
                log_expiry(&Tokens::from(response.clone()));
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::Report {
            access_token,
            start_date,
            end_date,
            metrics,
        } => {
            let client = AnalyticsClient::new(
                SecretString::from(access_token),
                config.youtube_analytics_base_url(),
                http_config,
            )?;
            let query = ReportQuery::my_channel(start_date, end_date, metrics);
            let report = client.query(&query).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Credentials are passed through unvalidated; Google reports bad values as `invalid_client`.
fn client_credentials(config: &Config) -> ClientCredentials {
    let client_id = config.google_client_id().unwrap_or_else(|| {
        warn!("GOOGLE_CLIENT_ID is not set");
        String::new()
    });
    let client_secret = config.google_client_secret().unwrap_or_else(|| {
        warn!("GOOGLE_CLIENT_SECRET is not set");
        String::new()
    });

    ClientCredentials::new(
        client_id,
        SecretString::from(client_secret),
        config.google_redirect_uri().to_string(),
    )
}

fn http_client_config(config: &Config) -> HttpClientConfig {
    HttpClientConfig {
        timeout: config.http_timeout(),
        ..HttpClientConfig::default()
    }
}

fn log_expiry(tokens: &Tokens) {
    if let Some(expires_at) = tokens.expires_at {
        info!("Access token expires at {}", expires_at.to_rfc3339());
    }
}
