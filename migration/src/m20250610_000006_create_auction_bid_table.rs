use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_member_table::Member,
    m20250610_000005_create_auction_item_table::AuctionItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionBid::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionBid::Id))
                    .col(integer(AuctionBid::AuctionItemId))
                    .col(integer(AuctionBid::MemberId))
                    .col(big_integer(AuctionBid::BidAmount))
                    .col(boolean(AuctionBid::IsWinning).default(false))
                    .col(
                        timestamp(AuctionBid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_bid_auction_item_id")
                            .from(AuctionBid::Table, AuctionBid::AuctionItemId)
                            .to(AuctionItem::Table, AuctionItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_bid_member_id")
                            .from(AuctionBid::Table, AuctionBid::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_auction_bid_item_winning")
                    .table(AuctionBid::Table)
                    .col(AuctionBid::AuctionItemId)
                    .col(AuctionBid::IsWinning)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionBid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionBid {
    Table,
    Id,
    AuctionItemId,
    MemberId,
    BidAmount,
    IsWinning,
    CreatedAt,
}
