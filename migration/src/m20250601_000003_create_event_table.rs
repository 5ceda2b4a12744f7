use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_event_type_table::EventType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(timestamp(Event::Datetime))
                    .col(string_null(Event::Image))
                    .col(string_uniq(Event::Slug))
                    .col(integer(Event::EventTypeId))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_event_type_id")
                            .from(Event::Table, Event::EventTypeId)
                            .to(EventType::Table, EventType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_datetime")
                    .table(Event::Table)
                    .col(Event::Datetime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Datetime,
    Image,
    Slug,
    EventTypeId,
    CreatedAt,
    UpdatedAt,
}
