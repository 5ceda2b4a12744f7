//! Member fixtures for in-memory models.

use chrono::{TimeZone, Utc};

/// Creates a member model with default values.
///
/// Defaults: id `1`, discord_id `"123456789"`, role `"user"`, combat role `"dps"`.
pub fn entity() -> entity::member::Model {
    entity_builder().build()
}

/// Creates a builder for a customized member model.
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder {
        id: 1,
        discord_id: "123456789".to_string(),
        global_name: "Test Member".to_string(),
        server_name: "Tester".to_string(),
        role: "user".to_string(),
        preferred_combat_role: "dps".to_string(),
        last_used_class: None,
    }
}

pub struct MemberEntityBuilder {
    id: i32,
    discord_id: String,
    global_name: String,
    server_name: String,
    role: String,
    preferred_combat_role: String,
    last_used_class: Option<String>,
}

impl MemberEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn preferred_combat_role(mut self, combat_role: impl Into<String>) -> Self {
        self.preferred_combat_role = combat_role.into();
        self
    }

    pub fn last_used_class(mut self, class: Option<String>) -> Self {
        self.last_used_class = class;
        self
    }

    pub fn build(self) -> entity::member::Model {
        let timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap_or_default();
        entity::member::Model {
            id: self.id,
            discord_id: self.discord_id,
            global_name: self.global_name,
            server_name: self.server_name,
            role: self.role,
            preferred_combat_role: self.preferred_combat_role,
            last_used_class: self.last_used_class,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
