//! Identity resolution: external identity assertions to members.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{IdentityAssertion, Member, UpdateProfileParam, UpsertMemberParam},
};

/// Service mapping provider identities to members and managing member profiles.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves an identity assertion to a member, creating it on first sight.
    ///
    /// Display names are synced on every call. If the assertion carries `admin_group`
    /// the member is upgraded to admin; otherwise the stored role is kept.
    ///
    /// # Arguments
    /// - `assertion` - Identity asserted by the provider
    /// - `admin_group` - Provider group granting admin, if configured
    ///
    /// # Returns
    /// - `Ok(Member)` - The resolved member
    /// - `Err(AppError)` - Database error during upsert
    pub async fn resolve(
        &self,
        assertion: IdentityAssertion,
        admin_group: Option<u64>,
    ) -> Result<Member, AppError> {
        let promote_to_admin = assertion.has_group(admin_group);

        let member = MemberRepository::new(self.db)
            .upsert(UpsertMemberParam {
                discord_id: assertion.discord_id,
                global_name: assertion.global_name,
                server_name: assertion.server_name,
                promote_to_admin,
            })
            .await?;

        if promote_to_admin {
            tracing::info!("Member {} holds the admin role", member.server_name);
        }

        Ok(member)
    }

    /// Gets a member by id.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::NotFound)` - No member with that id
    pub async fn get_member(&self, member_id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))
    }

    /// Updates the member's preferred combat role and last used class.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No member with that id
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Member, AppError> {
        self.get_member(param.member_id).await?;

        MemberRepository::new(self.db).update_profile(param).await
    }
}
