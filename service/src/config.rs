use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use google_auth::analytics::DEFAULT_BASE_URL as DEFAULT_YOUTUBE_ANALYTICS_BASE_URL;
use google_auth::oauth::{
    DEFAULT_AUTH_URL as DEFAULT_GOOGLE_AUTH_URL, DEFAULT_TOKEN_URL as DEFAULT_GOOGLE_TOKEN_URL,
};
use log::LevelFilter;
use std::time::Duration;

/// Out-of-band redirect: Google shows the code to the user to paste back.
pub const DEFAULT_GOOGLE_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Client configuration shared by every command. Each value can also come from the
/// environment or a `.env` file.
#[derive(Clone, Debug, Parser)]
pub struct Config {
    /// The OAuth client ID from the Google Cloud console credentials page.
    #[arg(long, env)]
    google_client_id: Option<String>,

    /// The OAuth client secret matching the client ID.
    #[arg(long, env, hide_env_values = true)]
    google_client_secret: Option<String>,

    /// The redirect URI registered for the OAuth client.
    #[arg(long, env, default_value = DEFAULT_GOOGLE_REDIRECT_URI)]
    google_redirect_uri: String,

    /// The consent page users are sent to.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_GOOGLE_AUTH_URL)]
    google_auth_url: String,

    /// The token endpoint used for code exchange and refresh.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_GOOGLE_TOKEN_URL)]
    google_token_url: String,

    /// The base URL of the YouTube Analytics API.
    #[arg(long, env, default_value = DEFAULT_YOUTUBE_ANALYTICS_BASE_URL)]
    youtube_analytics_base_url: String,

    /// Optional timeout in seconds for outbound HTTP requests. Unset means no timeout.
    #[arg(long, env)]
    http_timeout_secs: Option<u64>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    /// Load a `.env` file into the process environment, if one exists.
    ///
    /// Call before parsing so `.env` values act as argument defaults.
    pub fn load_dotenv() {
        dotenv().ok();
    }

    pub fn google_client_id(&self) -> Option<String> {
        self.google_client_id.clone()
    }

    pub fn google_client_secret(&self) -> Option<String> {
        self.google_client_secret.clone()
    }

    pub fn google_redirect_uri(&self) -> &str {
        &self.google_redirect_uri
    }

    pub fn google_auth_url(&self) -> &str {
        &self.google_auth_url
    }

    pub fn google_token_url(&self) -> &str {
        &self.google_token_url
    }

    /// Returns the YouTube Analytics API base URL.
    pub fn youtube_analytics_base_url(&self) -> &str {
        &self.youtube_analytics_base_url
    }

    /// Returns the HTTP timeout, if one is configured.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}
