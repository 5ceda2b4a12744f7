pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_member_table;
mod m20250601_000002_create_event_type_table;
mod m20250601_000003_create_event_table;
mod m20250601_000004_create_participation_table;
mod m20250610_000005_create_auction_item_table;
mod m20250610_000006_create_auction_bid_table;
mod m20250610_000007_create_auction_order_table;
mod m20250612_000008_create_ledger_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_member_table::Migration),
            Box::new(m20250601_000002_create_event_type_table::Migration),
            Box::new(m20250601_000003_create_event_table::Migration),
            Box::new(m20250601_000004_create_participation_table::Migration),
            Box::new(m20250610_000005_create_auction_item_table::Migration),
            Box::new(m20250610_000006_create_auction_bid_table::Migration),
            Box::new(m20250610_000007_create_auction_order_table::Migration),
            Box::new(m20250612_000008_create_ledger_entry_table::Migration),
        ]
    }
}
