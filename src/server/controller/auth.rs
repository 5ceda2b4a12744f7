use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// Start a Discord login.
///
/// Stores a CSRF token in the session and redirects to Discord's authorization page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete a Discord login.
///
/// Validates the CSRF state, exchanges the code, resolves the member and stores them
/// in the session. Redirects to the frontend when one is configured, otherwise returns
/// the member.
///
/// # Returns
/// - `200 OK` / `307 Temporary Redirect` - Logged in
/// - `400 Bad Request` - CSRF mismatch or failed code exchange
/// - `403 Forbidden` - The Discord account is not in the guild
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Discord"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Logged in", body = MemberDto),
        (status = 307, description = "Logged in, redirect to the frontend"),
        (status = 400, description = "CSRF validation or token exchange failed", body = ErrorDto),
        (status = 403, description = "Not a member of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let member = AuthService::new(&state.db, &state.http_client, &state.oauth_client)
        .callback(params.code, state.guild_id, state.admin_role_id)
        .await?;

    AuthSession::new(&session).set_member_id(member.id).await?;
    tracing::info!("Member {} logged in", member.id);

    Ok(match state.app_url {
        Some(app_url) => Redirect::temporary(&app_url).into_response(),
        None => (StatusCode::OK, Json(member.into_dto())).into_response(),
    })
}

/// Log out and delete the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in member.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in member", body = MemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
