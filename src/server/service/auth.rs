//! Discord OAuth2 login.
//!
//! Exchanges the authorization code, reads the Discord user and their guild member
//! object, and hands the resulting identity assertion to the identity resolver.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use reqwest::StatusCode;
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::{DiscordGuildMember, IdentityAssertion, Member},
    service::identity::IdentityService,
    state::OAuth2Client,
};

const DISCORD_API_URL: &str = "https://discord.com/api";

/// Service for Discord OAuth2 authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the scopes needed to read the user's identity and their member object
    /// in the guild.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds.members.read".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback and resolves the member.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    /// - `guild_id` - Guild the user must belong to
    /// - `admin_role` - Discord role granting admin, if configured
    ///
    /// # Returns
    /// - `Ok(Member)` - The logged in member
    /// - `Err(AuthError::RequestTokenErr)` - Token exchange failed
    /// - `Err(AuthError::NotGuildMember)` - The user is not in the guild
    /// - `Err(AppError::ReqwestErr)` - Discord API request failed
    pub async fn callback(
        &self,
        authorization_code: String,
        guild_id: u64,
        admin_role: Option<u64>,
    ) -> Result<Member, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let user = self.fetch_discord_user(&token).await?;
        let guild_member = self
            .fetch_guild_member(&token, guild_id)
            .await?
            .ok_or(AuthError::NotGuildMember(user.id.get()))?;

        let assertion = IdentityAssertion::from_discord(&user, &guild_member);

        IdentityService::new(self.db)
            .resolve(assertion, admin_role)
            .await
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the user's member object in the guild.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuildMember))` - The user is in the guild
    /// - `Ok(None)` - Discord reports the user is not in the guild
    async fn fetch_guild_member(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
        guild_id: u64,
    ) -> Result<Option<DiscordGuildMember>, AppError> {
        let response = self
            .http_client
            .get(format!(
                "{}/users/@me/guilds/{}/member",
                DISCORD_API_URL, guild_id
            ))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let guild_member = response
            .error_for_status()?
            .json::<DiscordGuildMember>()
            .await?;

        Ok(Some(guild_member))
    }
}
