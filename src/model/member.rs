use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::api::{deserialize_u64_from_string, serialize_u64_as_string};

/// Guild permission level of a member.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    User,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(other.to_string()),
        }
    }
}

/// Combat role a member plays in group content.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CombatRole {
    Tank,
    Heal,
    Dps,
}

impl CombatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::Heal => "heal",
            Self::Dps => "dps",
        }
    }
}

impl FromStr for CombatRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tank" => Ok(Self::Tank),
            "heal" => Ok(Self::Heal),
            "dps" => Ok(Self::Dps),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub discord_id: u64,
    pub global_name: String,
    pub server_name: String,
    pub role: MemberRole,
    pub preferred_combat_role: CombatRole,
    pub last_used_class: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub preferred_combat_role: CombatRole,
    pub last_used_class: Option<String>,
}
