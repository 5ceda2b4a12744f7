use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        participation::{
            AttendanceBatchDto, AttendanceBatchResultDto, ParticipantDto, ParticipationKind,
            SignUpDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::participation::{AttendanceUpdate, Participant, SignUpParam},
        service::{ledger::LedgerService, roster::RosterService},
        state::AppState,
    },
};

/// Tag for grouping roster and attendance endpoints in OpenAPI documentation
pub static PARTICIPATION_TAG: &str = "participation";

#[derive(Deserialize)]
pub struct KindParams {
    #[serde(rename = "type")]
    pub kind: Option<ParticipationKind>,
}

/// Get an event's roster.
///
/// Lists every participation of the event, or only those of the given `type`.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants",
    tag = PARTICIPATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id"),
        ("type" = Option<ParticipationKind>, Query, description = "Restrict to one roster category")
    ),
    responses(
        (status = 200, description = "Participants in sign-up order", body = Vec<ParticipantDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Query(params): Query<KindParams>,
) -> Result<impl IntoResponse, AppError> {
    let participants: Vec<ParticipantDto> = RosterService::new(&state.db)
        .list_participants(event_id, params.kind)
        .await?
        .into_iter()
        .map(Participant::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(participants)))
}

/// Sign the logged in member up for an event.
///
/// Signing up again for the same `type` updates role and class.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/participants",
    tag = PARTICIPATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Signed up", body = ParticipantDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participation = RosterService::new(&state.db)
        .sign_up(SignUpParam {
            event_id,
            member_id: member.id,
            kind: payload.kind,
            role: payload.role,
            class: payload.class,
        })
        .await?;

    let participant = Participant {
        participation,
        server_name: member.server_name,
    };

    Ok((StatusCode::OK, Json(participant.into_dto())))
}

/// Withdraw the logged in member from an event.
///
/// Removes the `type` participation (default `signup`). An attendance grant that no
/// longer has an attended row is revoked.
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/participants",
    tag = PARTICIPATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id"),
        ("type" = Option<ParticipationKind>, Query, description = "Roster category to leave")
    ),
    responses(
        (status = 204, description = "Withdrawn"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event or participation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Query(params): Query<KindParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    RosterService::new(&state.db)
        .withdraw(event_id, member.id, params.kind.unwrap_or_default())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply a batch of attendance updates.
///
/// Each update commits on its own. Failed updates are reported per item and do not
/// stop the rest; `success` is true only when every update committed.
///
/// # Access Control
/// - `Admin` - Only admins can record attendance
#[utoipa::path(
    post,
    path = "/api/participations/attendance",
    tag = PARTICIPATION_TAG,
    request_body = AttendanceBatchDto,
    responses(
        (status = 200, description = "Per-update outcome", body = AttendanceBatchResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttendanceBatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let updates = payload
        .updates
        .into_iter()
        .map(|update| AttendanceUpdate {
            participation_id: update.participation_id,
            attended: update.attended,
        })
        .collect();

    let result = LedgerService::new(&state.db)
        .apply_attendance_batch(updates)
        .await;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
