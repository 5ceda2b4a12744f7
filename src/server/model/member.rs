//! Member domain models, identity assertions and parameters.

use serde::Deserialize;
use serenity::all::{RoleId, User as DiscordUser};

use crate::{
    model::member::{CombatRole, MemberDto, MemberRole},
    server::{
        error::AppError,
        util::parse::{parse_stored, parse_u64_from_string},
    },
};

/// A guild member as known to the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    /// Discord ID of the member
    pub discord_id: u64,
    pub global_name: String,
    /// Name shown in the guild, used on rosters and the leaderboard.
    pub server_name: String,
    pub role: MemberRole,
    pub preferred_combat_role: CombatRole,
    pub last_used_class: Option<String>,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            discord_id: self.discord_id,
            global_name: self.global_name,
            server_name: self.server_name,
            role: self.role,
            preferred_combat_role: self.preferred_combat_role,
            last_used_class: self.last_used_class,
        }
    }

    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted domain model
    /// - `Err(AppError::InternalErr(_))` - Stored discord id or enum columns are invalid
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(entity.discord_id)?,
            global_name: entity.global_name,
            server_name: entity.server_name,
            role: parse_stored("member.role", &entity.role)?,
            preferred_combat_role: parse_stored(
                "member.preferred_combat_role",
                &entity.preferred_combat_role,
            )?,
            last_used_class: entity.last_used_class,
        })
    }
}

/// Guild member object returned by Discord's `/users/@me/guilds/{guild}/member`.
///
/// Only the fields the identity resolver reads are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordGuildMember {
    /// Guild-specific nickname.
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// Identity asserted by the external provider after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityAssertion {
    pub discord_id: u64,
    pub global_name: String,
    pub server_name: String,
    /// Provider group ids (Discord role ids) the identity belongs to.
    pub groups: Vec<u64>,
}

impl IdentityAssertion {
    /// Builds an assertion from Discord's user and guild member responses.
    ///
    /// `global_name` falls back to the username; `server_name` is the guild nickname,
    /// else the global name, else the username.
    pub fn from_discord(user: &DiscordUser, guild_member: &DiscordGuildMember) -> Self {
        let global_name = user.global_name.clone().unwrap_or_else(|| user.name.clone());
        let server_name = guild_member
            .nick
            .clone()
            .unwrap_or_else(|| global_name.clone());

        Self {
            discord_id: user.id.get(),
            global_name,
            server_name,
            groups: guild_member.roles.iter().map(|role| role.get()).collect(),
        }
    }

    /// Whether the assertion carries the configured admin group.
    pub fn has_group(&self, group: Option<u64>) -> bool {
        group.is_some_and(|group| self.groups.contains(&group))
    }
}

/// Parameters for upserting a member on login.
///
/// `promote_to_admin` only ever raises the stored role; `false` preserves it.
#[derive(Debug, Clone)]
pub struct UpsertMemberParam {
    pub discord_id: u64,
    pub global_name: String,
    pub server_name: String,
    pub promote_to_admin: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub member_id: i32,
    pub preferred_combat_role: CombatRole,
    pub last_used_class: Option<String>,
}
