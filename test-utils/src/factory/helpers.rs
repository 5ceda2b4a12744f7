//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event type worth `dkp` points and one event referencing it.
///
/// # Arguments
/// - `db` - Database connection
/// - `dkp` - Point value of the event type
///
/// # Returns
/// - `Ok((event_type, event))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_type(
    db: &DatabaseConnection,
    dkp: i64,
) -> Result<(entity::event_type::Model, entity::event::Model), DbErr> {
    let event_type = crate::factory::event_type::EventTypeFactory::new(db)
        .dkp(dkp)
        .build()
        .await?;
    let event = crate::factory::event::create_event(db, event_type.id).await?;

    Ok((event_type, event))
}

/// Creates a member signed up to a fresh event worth `dkp` points.
///
/// The participation starts with `attended = None`.
///
/// # Returns
/// - `Ok((member, event_type, event, participation))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_participation_with_dependencies(
    db: &DatabaseConnection,
    dkp: i64,
) -> Result<
    (
        entity::member::Model,
        entity::event_type::Model,
        entity::event::Model,
        entity::participation::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let (event_type, event) = create_event_with_type(db, dkp).await?;
    let participation =
        crate::factory::participation::create_participation(db, event.id, member.id).await?;

    Ok((member, event_type, event, participation))
}

/// Creates a member holding `balance` points through a single attendance grant.
///
/// Inserts an event type worth `balance`, an attended participation and the matching
/// ledger entry, so the ledger invariant holds for the seeded data.
///
/// # Returns
/// - `Ok(member)` - The funded member
/// - `Err(DbErr)` - Database error during creation
pub async fn create_funded_member(
    db: &DatabaseConnection,
    balance: i64,
) -> Result<entity::member::Model, DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    fund_member(db, member.id, balance).await?;
    Ok(member)
}

/// Grants `amount` points to an existing member through an attended event.
///
/// # Returns
/// - `Ok(entry)` - The inserted ledger entry
/// - `Err(DbErr)` - Database error during creation
pub async fn fund_member(
    db: &DatabaseConnection,
    member_id: i32,
    amount: i64,
) -> Result<entity::ledger_entry::Model, DbErr> {
    let (_event_type, event) = create_event_with_type(db, amount).await?;
    crate::factory::participation::ParticipationFactory::new(db, event.id, member_id)
        .attended(Some(true))
        .build()
        .await?;
    crate::factory::ledger_entry::create_grant(db, member_id, event.id, amount).await
}
