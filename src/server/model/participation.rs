//! Roster domain models and attendance parameters.

use crate::{
    model::{
        member::CombatRole,
        participation::{
            AttendanceBatchResultDto, AttendanceResultDto, ParticipantDto, ParticipationKind,
        },
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub id: i32,
    pub event_id: i32,
    pub member_id: i32,
    pub kind: ParticipationKind,
    pub role: Option<CombatRole>,
    pub class: Option<String>,
    /// `None` until an admin records attendance.
    pub attended: Option<bool>,
}

impl Participation {
    pub fn from_entity(entity: entity::participation::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .as_deref()
            .map(|role| parse_stored("participation.role", role))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            member_id: entity.member_id,
            kind: parse_stored("participation.kind", &entity.kind)?,
            role,
            class: entity.class,
            attended: entity.attended,
        })
    }
}

/// A roster row joined with the member's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub participation: Participation,
    pub server_name: String,
}

impl Participant {
    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            participation_id: self.participation.id,
            member_id: self.participation.member_id,
            server_name: self.server_name,
            kind: self.participation.kind,
            role: self.participation.role,
            class: self.participation.class,
            attended: self.participation.attended,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignUpParam {
    pub event_id: i32,
    pub member_id: i32,
    pub kind: ParticipationKind,
    pub role: Option<CombatRole>,
    pub class: Option<String>,
}

/// One item of an attendance batch, addressed by participation id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceUpdate {
    pub participation_id: i32,
    pub attended: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceOutcome {
    pub participation_id: i32,
    /// `None` when the update committed, otherwise the reason it did not.
    pub error: Option<String>,
}

impl AttendanceOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of an attendance batch: one outcome per submitted update, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceBatchResult {
    pub outcomes: Vec<AttendanceOutcome>,
}

impl AttendanceBatchResult {
    /// True iff every item committed.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(AttendanceOutcome::is_success)
    }

    pub fn into_dto(self) -> AttendanceBatchResultDto {
        let success = self.success();
        AttendanceBatchResultDto {
            success,
            results: self
                .outcomes
                .into_iter()
                .map(|outcome| AttendanceResultDto {
                    participation_id: outcome.participation_id,
                    success: outcome.error.is_none(),
                    error: outcome.error,
                })
                .collect(),
        }
    }
}
