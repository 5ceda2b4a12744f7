//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` and exposes only the keys of its
//! concern:
//! - `AuthSession` - Logged in member id
//! - `CsrfSession` - CSRF token of an OAuth login in progress

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_MEMBER_ID: &str = "auth:member";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the internal id of the logged in member. The id is set after a
/// successful Discord login and read by `AuthGuard` on every protected request.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member id, establishing a logged-in session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Member id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_member_id(&self, member_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_MEMBER_ID, member_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged in member id.
    ///
    /// # Returns
    /// - `Ok(Some(member_id))` - A member is logged in
    /// - `Ok(None)` - Not logged in
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_member_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_MEMBER_ID).await?)
    }

    /// Removes all session data and the session record.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login starts and consumed by the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token, so each token is usable once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Consumes the stored token and checks it against the callback's `state`.
    ///
    /// # Returns
    /// - `Ok(())` - Tokens match
    /// - `Err(AuthError::CsrfValidationFailed)` - Missing or different token
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(crate::server::error::auth::AuthError::CsrfValidationFailed.into()),
        }
    }
}
