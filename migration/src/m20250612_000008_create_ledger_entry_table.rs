use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_member_table::Member, m20250601_000003_create_event_table::Event,
    m20250610_000007_create_auction_order_table::AuctionOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LedgerEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(LedgerEntry::Id))
                    .col(integer(LedgerEntry::MemberId))
                    .col(string(LedgerEntry::Kind))
                    .col(integer_null(LedgerEntry::EventId))
                    .col(integer_null(LedgerEntry::AuctionOrderId))
                    .col(big_integer(LedgerEntry::Amount))
                    .col(string_uniq(LedgerEntry::GrantKey))
                    .col(
                        timestamp(LedgerEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_entry_member_id")
                            .from(LedgerEntry::Table, LedgerEntry::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_entry_event_id")
                            .from(LedgerEntry::Table, LedgerEntry::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_entry_auction_order_id")
                            .from(LedgerEntry::Table, LedgerEntry::AuctionOrderId)
                            .to(AuctionOrder::Table, AuctionOrder::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entry_member_id")
                    .table(LedgerEntry::Table)
                    .col(LedgerEntry::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LedgerEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LedgerEntry {
    Table,
    Id,
    MemberId,
    Kind,
    EventId,
    AuctionOrderId,
    Amount,
    GrantKey,
    CreatedAt,
}
