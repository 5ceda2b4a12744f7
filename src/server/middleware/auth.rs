use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged in member and checks every permission.
    ///
    /// An empty permission list only requires a logged in member.
    ///
    /// # Returns
    /// - `Ok(Member)` - The logged in member
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session refers to a missing member
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(member) = MemberRepository::new(self.db).find_by_id(member_id).await? else {
            return Err(AuthError::UserNotInDatabase(member_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !member.is_admin() {
                        return Err(AuthError::AccessDenied(
                            member_id,
                            "Member attempted an admin action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}
