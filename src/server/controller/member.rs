use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        ledger::{BalanceDto, LeaderboardEntryDto, LedgerEntryDto},
        member::{MemberDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{ledger::LedgerEntry, member::UpdateProfileParam},
        service::{identity::IdentityService, ledger::LedgerService},
        state::AppState,
    },
};

/// Tag for grouping member and ledger endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Update the logged in member's profile.
///
/// # Returns
/// - `200 OK` - The updated member
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/members/me",
    tag = MEMBER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = MemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = IdentityService::new(&state.db)
        .update_profile(UpdateProfileParam {
            member_id: member.id,
            preferred_combat_role: payload.preferred_combat_role,
            last_used_class: payload.last_used_class,
        })
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Get the logged in member's ledger entries, newest first.
#[utoipa::path(
    get,
    path = "/api/members/me/ledger",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Ledger entries", body = Vec<LedgerEntryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_ledger(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries: Vec<LedgerEntryDto> = LedgerService::new(&state.db)
        .entries(member.id)
        .await?
        .into_iter()
        .map(LedgerEntry::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Get a member's balance.
///
/// # Returns
/// - `200 OK` - The balance
/// - `404 Not Found` - No member with that id
#[utoipa::path(
    get,
    path = "/api/members/{member_id}/balance",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member balance", body = BalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    IdentityService::new(&state.db).get_member(member_id).await?;
    let balance = LedgerService::new(&state.db).balance(member_id).await?;

    Ok((StatusCode::OK, Json(BalanceDto { member_id, balance })))
}

/// Get every member's balance, highest first.
#[utoipa::path(
    get,
    path = "/api/ledger/leaderboard",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let leaderboard: Vec<LeaderboardEntryDto> = LedgerService::new(&state.db)
        .leaderboard()
        .await?
        .into_iter()
        .map(|entry| entry.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(leaderboard)))
}
