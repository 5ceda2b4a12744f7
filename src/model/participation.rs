use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::member::CombatRole;

/// Roster category of a participation.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationKind {
    #[default]
    Signup,
    Waitlist,
}

impl ParticipationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Waitlist => "waitlist",
        }
    }
}

impl FromStr for ParticipationKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "signup" => Ok(Self::Signup),
            "waitlist" => Ok(Self::Waitlist),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParticipantDto {
    pub participation_id: i32,
    pub member_id: i32,
    pub server_name: String,
    pub kind: ParticipationKind,
    pub role: Option<CombatRole>,
    pub class: Option<String>,
    pub attended: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SignUpDto {
    #[serde(rename = "type", default)]
    pub kind: ParticipationKind,
    pub role: Option<CombatRole>,
    pub class: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceUpdateDto {
    pub participation_id: i32,
    pub attended: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceBatchDto {
    pub updates: Vec<AttendanceUpdateDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceResultDto {
    pub participation_id: i32,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceBatchResultDto {
    pub success: bool,
    pub results: Vec<AttendanceResultDto>,
}
