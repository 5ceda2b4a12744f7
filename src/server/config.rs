use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_NEWS_FEED_URL: &str = "https://www.playthroneandliberty.com/en-us/news/rss";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Frontend origin. Allowed by CORS and used as the post-login redirect.
    pub app_url: Option<String>,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Guild whose members may log in.
    pub discord_guild_id: u64,
    /// Members holding this guild role are promoted to admin on login.
    pub discord_admin_role_id: Option<u64>,

    pub news_feed_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_admin_role_id = optional("DISCORD_ADMIN_ROLE_ID")
            .map(|value| parse_id("DISCORD_ADMIN_ROLE_ID", value))
            .transpose()?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: optional("APP_URL"),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_guild_id: parse_id("DISCORD_GUILD_ID", required("DISCORD_GUILD_ID")?)?,
            discord_admin_role_id,
            news_feed_url: optional("NEWS_FEED_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_FEED_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables both count as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
