//! Member data repository for database operations.
//!
//! Handles member creation on login, profile updates and lookups, converting entity
//! models to domain models at the repository boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::member::{CombatRole, MemberRole},
    server::{
        error::AppError,
        model::member::{Member, UpdateProfileParam, UpsertMemberParam},
    },
};

/// Repository providing database operations for members.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a member or syncs the names of an existing one.
    ///
    /// A single `INSERT ... ON CONFLICT (discord_id) DO UPDATE` statement, so concurrent
    /// first logins for the same identity converge on one row. New members start as
    /// `user` with the `dps` combat role. The stored role is only overwritten when
    /// `promote_to_admin` is set, which means a login never demotes.
    ///
    /// # Arguments
    /// - `param` - Discord id, names and whether to promote to admin
    ///
    /// # Returns
    /// - `Ok(Member)` - The created or updated member
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertMemberParam) -> Result<Member, AppError> {
        let mut update_columns = vec![
            entity::member::Column::GlobalName,
            entity::member::Column::ServerName,
            entity::member::Column::UpdatedAt,
        ];

        let role = if param.promote_to_admin {
            update_columns.push(entity::member::Column::Role);
            MemberRole::Admin
        } else {
            MemberRole::User
        };

        let now = Utc::now();
        let entity = entity::prelude::Member::insert(entity::member::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            global_name: ActiveValue::Set(param.global_name),
            server_name: ActiveValue::Set(param.server_name),
            role: ActiveValue::Set(role.as_str().to_string()),
            preferred_combat_role: ActiveValue::Set(CombatRole::Dps.as_str().to_string()),
            last_used_class: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::member::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Finds a member by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(AppError)` - Database error or invalid stored data
    pub async fn find_by_id(&self, member_id: i32) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Gets every member ordered by server name.
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::ServerName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Updates a member's preferred combat role and last used class.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - No member with that id
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Member, AppError> {
        let entity = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(param.member_id),
            preferred_combat_role: ActiveValue::Set(
                param.preferred_combat_role.as_str().to_string(),
            ),
            last_used_class: ActiveValue::Set(param.last_used_class),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Touches the member row inside the caller's transaction.
    ///
    /// The write takes the row lock, so two transactions touching the same member
    /// run one after the other. Bidding uses this to serialise one member's bids.
    ///
    /// # Returns
    /// - `Ok(true)` - The member exists and is now locked by this transaction
    /// - `Ok(false)` - No member with that id
    pub async fn lock(&self, member_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::member::Column::Id.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
