use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionItem::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionItem::Id))
                    .col(string(AuctionItem::Name))
                    .col(big_integer(AuctionItem::LowestBid))
                    .col(big_integer(AuctionItem::CurrentBid).default(0))
                    .col(boolean(AuctionItem::IsActive).default(true))
                    .col(string(AuctionItem::Status).default("open"))
                    .col(string_null(AuctionItem::ImageUrl))
                    .col(string_null(AuctionItem::QuestlogUrl))
                    .col(timestamp_null(AuctionItem::EndsAt))
                    .col(integer_null(AuctionItem::CreatedBy))
                    .col(
                        timestamp(AuctionItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(AuctionItem::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_item_created_by")
                            .from(AuctionItem::Table, AuctionItem::CreatedBy)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionItem {
    Table,
    Id,
    Name,
    LowestBid,
    CurrentBid,
    IsActive,
    Status,
    ImageUrl,
    QuestlogUrl,
    EndsAt,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
