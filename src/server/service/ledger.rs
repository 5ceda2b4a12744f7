//! Ledger engine: attendance-driven point grants, balances and the leaderboard.
//!
//! The ledger mirrors attendance. For every (member, event) pair an attendance entry
//! exists iff one of the member's participation rows for the event is attended, and
//! its amount is the event type's `dkp` at the moment of the grant.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{
        event::EventRepository, ledger::LedgerRepository, member::MemberRepository,
        participation::ParticipationRepository,
    },
    error::AppError,
    model::{
        event::Event,
        ledger::{LeaderboardEntry, LedgerEntry},
        participation::{AttendanceBatchResult, AttendanceOutcome, AttendanceUpdate},
    },
};

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records attendance for (event, member) and reconciles the ledger.
    ///
    /// Sets `attended` on every participation row the member holds for the event.
    /// Runs in one transaction whose first statement is that write, which serialises
    /// concurrent updates to the same pair. The grant is then inserted
    /// (insert-or-ignore) or deleted to match the new attendance. Repeating the call
    /// with the same value changes nothing.
    ///
    /// # Arguments
    /// - `event_id` - Event attended
    /// - `member_id` - Member whose attendance is recorded
    /// - `attended` - `Some(true)` grants, `Some(false)` and `None` revoke
    ///
    /// # Returns
    /// - `Ok(Some(LedgerEntry))` - The member now holds this grant
    /// - `Ok(None)` - The member holds no grant for the event
    /// - `Err(AppError::NotFound)` - Event, its type, or the participation is missing
    pub async fn set_attendance(
        &self,
        event_id: i32,
        member_id: i32,
        attended: Option<bool>,
    ) -> Result<Option<LedgerEntry>, AppError> {
        let txn = self.db.begin().await?;

        let updated = ParticipationRepository::new(&txn)
            .set_attended(event_id, member_id, attended)
            .await?;

        let event = EventRepository::new(&txn)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if updated == 0 {
            return Err(AppError::NotFound(format!(
                "Member {} has no participation in event {}",
                member_id, event_id
            )));
        }

        let entry = reconcile_and_fetch(&txn, &event, member_id).await?;
        txn.commit().await?;

        Ok(entry)
    }

    /// Records attendance on a single participation row and reconciles the ledger.
    ///
    /// Other rows the member holds for the same event keep their attendance, so the
    /// grant stays while any of them is attended.
    ///
    /// # Returns
    /// - `Ok(Option<LedgerEntry>)` - As for `set_attendance`
    /// - `Err(AppError::NotFound)` - No participation with that id, or its event is missing
    pub async fn set_participation_attendance(
        &self,
        participation_id: i32,
        attended: Option<bool>,
    ) -> Result<Option<LedgerEntry>, AppError> {
        let txn = self.db.begin().await?;
        let participation_repo = ParticipationRepository::new(&txn);

        let not_found =
            || AppError::NotFound(format!("Participation {} not found", participation_id));

        if participation_repo
            .set_attended_by_id(participation_id, attended)
            .await?
            == 0
        {
            return Err(not_found());
        }

        let participation = participation_repo
            .find_by_id(participation_id)
            .await?
            .ok_or_else(not_found)?;

        let event = EventRepository::new(&txn)
            .find_by_id(participation.event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event {} not found", participation.event_id))
            })?;

        let entry = reconcile_and_fetch(&txn, &event, participation.member_id).await?;
        txn.commit().await?;

        Ok(entry)
    }

    /// Applies a batch of attendance updates, each in its own transaction.
    ///
    /// A failing item is logged and reported in its outcome; the remaining items are
    /// still applied and committed items stay committed. Nothing is retried.
    ///
    /// # Returns
    /// - `AttendanceBatchResult` - One outcome per update, in input order
    pub async fn apply_attendance_batch(
        &self,
        updates: Vec<AttendanceUpdate>,
    ) -> AttendanceBatchResult {
        let mut outcomes = Vec::with_capacity(updates.len());

        for update in updates {
            let error = match self
                .set_participation_attendance(update.participation_id, update.attended)
                .await
            {
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(
                        "Attendance update for participation {} failed: {}",
                        update.participation_id,
                        err
                    );
                    Some(err.public_message())
                }
            };

            outcomes.push(AttendanceOutcome {
                participation_id: update.participation_id,
                error,
            });
        }

        AttendanceBatchResult { outcomes }
    }

    /// Gets the member's balance: grants minus auction debits.
    pub async fn balance(&self, member_id: i32) -> Result<i64, AppError> {
        Ok(LedgerRepository::new(self.db).balance(member_id).await?)
    }

    /// Gets the member's ledger entries, newest first.
    pub async fn entries(&self, member_id: i32) -> Result<Vec<LedgerEntry>, AppError> {
        LedgerRepository::new(self.db).get_by_member(member_id).await
    }

    /// Gets every member's balance, highest first, ties by name.
    ///
    /// Members without entries are listed with a balance of 0.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;
        let amounts = LedgerRepository::new(self.db).get_all_amounts().await?;

        let mut balances: HashMap<i32, i64> = HashMap::new();
        for (member_id, amount) in amounts {
            *balances.entry(member_id).or_default() += amount;
        }

        let mut leaderboard: Vec<LeaderboardEntry> = members
            .into_iter()
            .map(|member| LeaderboardEntry {
                balance: balances.get(&member.id).copied().unwrap_or(0),
                member_id: member.id,
                server_name: member.server_name,
            })
            .collect();

        leaderboard.sort_by(|a, b| {
            b.balance
                .cmp(&a.balance)
                .then_with(|| a.server_name.cmp(&b.server_name))
        });

        Ok(leaderboard)
    }
}

/// Makes the attendance grant for (member, event) match the participation rows.
///
/// Grants `event.dkp()` when any row is attended, otherwise removes the grant. Must run
/// inside the transaction that changed the rows.
pub(crate) async fn reconcile_attendance<C: ConnectionTrait>(
    db: &C,
    event: &Event,
    member_id: i32,
) -> Result<(), AppError> {
    let ledger_repo = LedgerRepository::new(db);

    if ParticipationRepository::new(db)
        .any_attended(event.id, member_id)
        .await?
    {
        if ledger_repo
            .grant_attendance(member_id, event.id, event.dkp())
            .await?
        {
            tracing::debug!(
                "Granted {} points to member {} for event {}",
                event.dkp(),
                member_id,
                event.id
            );
        }
    } else if ledger_repo.revoke_attendance(member_id, event.id).await? {
        tracing::debug!(
            "Revoked attendance grant of member {} for event {}",
            member_id,
            event.id
        );
    }

    Ok(())
}

async fn reconcile_and_fetch<C: ConnectionTrait>(
    db: &C,
    event: &Event,
    member_id: i32,
) -> Result<Option<LedgerEntry>, AppError> {
    reconcile_attendance(db, event, member_id).await?;

    LedgerRepository::new(db)
        .find_attendance(member_id, event.id)
        .await
}
