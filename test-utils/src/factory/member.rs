//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .discord_id("123456789")
///     .server_name("Tanky")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    global_name: String,
    server_name: String,
    role: String,
    preferred_combat_role: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented counter value
    /// - global_name: `"Member {id}"`
    /// - server_name: `"Nick {id}"`
    /// - role: `"user"`
    /// - preferred_combat_role: `"dps"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            global_name: format!("Member {}", id),
            server_name: format!("Nick {}", id),
            role: "user".to_string(),
            preferred_combat_role: "dps".to_string(),
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn global_name(mut self, global_name: impl Into<String>) -> Self {
        self.global_name = global_name.into();
        self
    }

    pub fn server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Sets the guild role, `"admin"` or `"user"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the preferred combat role, `"tank"`, `"heal"` or `"dps"`.
    pub fn preferred_combat_role(mut self, combat_role: impl Into<String>) -> Self {
        self.preferred_combat_role = combat_role.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            global_name: ActiveValue::Set(self.global_name),
            server_name: ActiveValue::Set(self.server_name),
            role: ActiveValue::Set(self.role),
            preferred_combat_role: ActiveValue::Set(self.preferred_combat_role),
            last_used_class: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with the `admin` role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).role("admin").build().await
}
