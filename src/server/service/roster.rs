//! Participation roster: sign-ups, withdrawals and event rosters.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::participation::ParticipationKind,
    server::{
        data::{event::EventRepository, participation::ParticipationRepository},
        error::AppError,
        model::participation::{Participant, Participation, SignUpParam},
        service::ledger::reconcile_attendance,
    },
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a member up for an event, or updates their role and class.
    ///
    /// Concurrent sign-ups for the same (member, event, kind) both succeed and leave
    /// one row.
    ///
    /// # Returns
    /// - `Ok(Participation)` - The created or updated participation
    /// - `Err(AppError::NotFound)` - The event does not exist
    pub async fn sign_up(&self, param: SignUpParam) -> Result<Participation, AppError> {
        if !EventRepository::new(self.db).exists(param.event_id).await? {
            return Err(AppError::NotFound(format!(
                "Event {} not found",
                param.event_id
            )));
        }

        ParticipationRepository::new(self.db).upsert(param).await
    }

    /// Removes a member's participation of one kind and reconciles their grant.
    ///
    /// When the removed row was the member's only attended row for the event, their
    /// attendance grant is removed with it.
    ///
    /// # Returns
    /// - `Ok(())` - The participation was removed
    /// - `Err(AppError::NotFound)` - The event or the participation does not exist
    pub async fn withdraw(
        &self,
        event_id: i32,
        member_id: i32,
        kind: ParticipationKind,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let deleted = ParticipationRepository::new(&txn)
            .delete(event_id, member_id, kind)
            .await?;

        let event = EventRepository::new(&txn)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Member {} has no {} for event {}",
                member_id,
                kind.as_str(),
                event_id
            )));
        }

        reconcile_attendance(&txn, &event, member_id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Gets an event's roster, optionally restricted to one kind.
    ///
    /// # Returns
    /// - `Ok(Vec<Participant>)` - Participants in sign-up order
    /// - `Err(AppError::NotFound)` - The event does not exist
    pub async fn list_participants(
        &self,
        event_id: i32,
        kind: Option<ParticipationKind>,
    ) -> Result<Vec<Participant>, AppError> {
        if !EventRepository::new(self.db).exists(event_id).await? {
            return Err(AppError::NotFound(format!("Event {} not found", event_id)));
        }

        ParticipationRepository::new(self.db)
            .get_participants(event_id, kind)
            .await
    }
}
