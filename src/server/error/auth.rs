use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member id stored in the session; the user is not logged in.
    #[error("No member is logged in for this session")]
    UserNotInSession,

    /// The session references a member that no longer exists.
    #[error("Member {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The member lacks a required permission.
    ///
    /// # Fields
    /// - Member id
    /// - Description of the denied action, logged only
    #[error("Member {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authenticated Discord account is not a member of the configured guild.
    #[error("Discord user {0} is not a member of the guild")]
    NotGuildMember(u64),

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    RequestTokenErr(
        #[from]
        Box<
            RequestTokenError<
                HttpClientError<reqwest::Error>,
                StandardErrorResponse<BasicErrorResponseType>,
            >,
        >,
    ),
}

impl
    From<
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    > for AuthError
{
    fn from(
        err: RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ) -> Self {
        Self::RequestTokenErr(Box::new(err))
    }
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures and failed code exchanges
/// - 401 Unauthorized - When no member is logged in or the session member is gone
/// - 403 Forbidden - For denied permissions and non guild members
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::NotGuildMember(_) => (
                StatusCode::FORBIDDEN,
                "You must be a member of the guild's Discord server to log in.",
            ),
            Self::CsrfValidationFailed | Self::RequestTokenErr(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
