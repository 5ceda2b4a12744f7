//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection
//! and the HTTP client share their pools, and the OAuth2 client is plain data.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API calls and the news feed.
    ///
    /// Built without redirect following.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Guild a member must belong to in order to log in.
    pub guild_id: u64,

    /// Guild role that promotes a member to admin on login.
    pub admin_role_id: Option<u64>,

    /// Where the login callback redirects once the session is established.
    pub app_url: Option<String>,

    pub news_feed_url: String,
}

impl AppState {
    /// Creates the application state from its connections and the loaded configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `config` - Configuration supplying guild, admin role, app and feed URLs
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            guild_id: config.discord_guild_id,
            admin_role_id: config.discord_admin_role_id,
            app_url: config.app_url.clone(),
            news_feed_url: config.news_feed_url.clone(),
        }
    }
}
