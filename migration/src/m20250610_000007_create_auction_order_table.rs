use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_member_table::Member,
    m20250610_000005_create_auction_item_table::AuctionItem,
    m20250610_000006_create_auction_bid_table::AuctionBid,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionOrder::Id))
                    .col(integer_uniq(AuctionOrder::AuctionItemId))
                    .col(big_integer(AuctionOrder::FinalPrice))
                    .col(integer_null(AuctionOrder::WinnerId))
                    .col(integer_null(AuctionOrder::WinningBidId))
                    .col(string(AuctionOrder::Status))
                    .col(
                        timestamp(AuctionOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_order_auction_item_id")
                            .from(AuctionOrder::Table, AuctionOrder::AuctionItemId)
                            .to(AuctionItem::Table, AuctionItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_order_winner_id")
                            .from(AuctionOrder::Table, AuctionOrder::WinnerId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_order_winning_bid_id")
                            .from(AuctionOrder::Table, AuctionOrder::WinningBidId)
                            .to(AuctionBid::Table, AuctionBid::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionOrder {
    Table,
    Id,
    AuctionItemId,
    FinalPrice,
    WinnerId,
    WinningBidId,
    Status,
    CreatedAt,
}
