use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table lives in the same SQLite database and is created on first run.
/// Cookies use `SameSite=Lax` so the session survives the redirect back from Discord.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::InternalError)` - The session table could not be created
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let secure = config
        .app_url
        .as_deref()
        .is_some_and(|url| url.starts_with("https://"));

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Builds the HTTP client used for Discord API calls and the news feed.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(ConfigError::InvalidUrl)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::from)?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?,
        );

    Ok(client)
}
