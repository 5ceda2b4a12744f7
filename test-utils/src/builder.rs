use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, EventType};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(EventType)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Use a temporary database file instead of `sqlite::memory:`.
    on_disk: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            on_disk: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed by the event catalog and roster.
    ///
    /// Member, EventType, Event and Participation, in dependency order. Participation
    /// gets the unique (member, event, kind) key the migration defines, which sign-up
    /// upserts conflict on.
    pub fn with_event_tables(self) -> Self {
        let mut builder = self
            .with_table(Member)
            .with_table(EventType)
            .with_table(Event);

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut participation = schema.create_table_from_entity(Participation);
        participation.index(
            Index::create()
                .unique()
                .name("idx_participation_member_event_kind")
                .col(entity::participation::Column::MemberId)
                .col(entity::participation::Column::EventId)
                .col(entity::participation::Column::Kind),
        );
        builder.tables.push(participation);

        builder
    }

    /// Adds every table the ledger touches.
    ///
    /// Ledger entries reference both events and auction orders, so this includes the
    /// auction tables as well. Use this for ledger and auction tests alike.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_ledger_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_ledger_tables(self) -> Self {
        self.with_event_tables()
            .with_table(AuctionItem)
            .with_table(AuctionBid)
            .with_table(AuctionOrder)
            .with_table(LedgerEntry)
    }

    /// Backs the test database with a temporary file.
    ///
    /// An in-memory database lives on a single connection, so concurrent callers are
    /// simply queued. A file lets the pool open several connections that contend for
    /// SQLite's locks the way the server does.
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk().await?
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
