//! Participation (roster) data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::participation::ParticipationKind,
    server::{
        error::AppError,
        model::{
            member::Member,
            participation::{Participant, Participation, SignUpParam},
        },
    },
};

pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or updates the participation for (member, event, kind).
    ///
    /// Uses `ON CONFLICT (member_id, event_id, kind) DO UPDATE`, so concurrent sign-ups
    /// for the same key both succeed and leave a single row. An existing row keeps its
    /// attendance; only role and class change.
    ///
    /// # Returns
    /// - `Ok(Participation)` - The created or updated row
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, param: SignUpParam) -> Result<Participation, AppError> {
        let now = Utc::now();

        entity::prelude::Participation::insert(entity::participation::ActiveModel {
            event_id: ActiveValue::Set(param.event_id),
            member_id: ActiveValue::Set(param.member_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            role: ActiveValue::Set(param.role.map(|role| role.as_str().to_string())),
            class: ActiveValue::Set(param.class),
            attended: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::participation::Column::MemberId,
                entity::participation::Column::EventId,
                entity::participation::Column::Kind,
            ])
            .update_columns([
                entity::participation::Column::Role,
                entity::participation::Column::Class,
                entity::participation::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let entity = entity::prelude::Participation::find()
            .filter(entity::participation::Column::EventId.eq(param.event_id))
            .filter(entity::participation::Column::MemberId.eq(param.member_id))
            .filter(entity::participation::Column::Kind.eq(param.kind.as_str()))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("participation after upsert".to_string()))?;

        Participation::from_entity(entity)
    }

    pub async fn find_by_id(&self, participation_id: i32) -> Result<Option<Participation>, AppError> {
        entity::prelude::Participation::find_by_id(participation_id)
            .one(self.db)
            .await?
            .map(Participation::from_entity)
            .transpose()
    }

    /// Sets `attended` on every row of (member, event).
    ///
    /// Marks the member for the whole event, whichever roster they are on. Run as the
    /// first statement of the attendance transaction so concurrent updates to the
    /// same pair run in sequence.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of participation rows updated
    pub async fn set_attended(
        &self,
        event_id: i32,
        member_id: i32,
        attended: Option<bool>,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Participation::update_many()
            .col_expr(entity::participation::Column::Attended, Expr::value(attended))
            .col_expr(entity::participation::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::participation::Column::EventId.eq(event_id))
            .filter(entity::participation::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets `attended` on a single participation row.
    ///
    /// # Returns
    /// - `Ok(1)` - The row was updated
    /// - `Ok(0)` - No participation with that id
    pub async fn set_attended_by_id(
        &self,
        participation_id: i32,
        attended: Option<bool>,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Participation::update_many()
            .col_expr(entity::participation::Column::Attended, Expr::value(attended))
            .col_expr(entity::participation::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::participation::Column::Id.eq(participation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Whether any participation row of (member, event) is marked attended.
    pub async fn any_attended(&self, event_id: i32, member_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Participation::find()
            .filter(entity::participation::Column::EventId.eq(event_id))
            .filter(entity::participation::Column::MemberId.eq(member_id))
            .filter(entity::participation::Column::Attended.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the participation for (member, event, kind).
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No such participation
    pub async fn delete(
        &self,
        event_id: i32,
        member_id: i32,
        kind: ParticipationKind,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Participation::delete_many()
            .filter(entity::participation::Column::EventId.eq(event_id))
            .filter(entity::participation::Column::MemberId.eq(member_id))
            .filter(entity::participation::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets an event's roster joined with member names, in sign-up order.
    ///
    /// # Arguments
    /// - `event_id` - Event to list
    /// - `kind` - Restrict to one roster category, or `None` for all
    pub async fn get_participants(
        &self,
        event_id: i32,
        kind: Option<ParticipationKind>,
    ) -> Result<Vec<Participant>, AppError> {
        let mut query = entity::prelude::Participation::find()
            .filter(entity::participation::Column::EventId.eq(event_id));

        if let Some(kind) = kind {
            query = query.filter(entity::participation::Column::Kind.eq(kind.as_str()));
        }

        let rows = query
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::participation::Column::CreatedAt)
            .order_by_asc(entity::participation::Column::Id)
            .all(self.db)
            .await?;

        let mut participants = Vec::with_capacity(rows.len());
        for (participation, member) in rows {
            let Some(member) = member else {
                continue;
            };
            let member = Member::from_entity(member)?;
            participants.push(Participant {
                participation: Participation::from_entity(participation)?,
                server_name: member.server_name,
            });
        }

        Ok(participants)
    }
}
