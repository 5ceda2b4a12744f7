use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_member_table::Member, m20250601_000003_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(pk_auto(Participation::Id))
                    .col(integer(Participation::EventId))
                    .col(integer(Participation::MemberId))
                    .col(string(Participation::Kind))
                    .col(string_null(Participation::Role))
                    .col(string_null(Participation::Class))
                    .col(boolean_null(Participation::Attended))
                    .col(
                        timestamp(Participation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Participation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_event_id")
                            .from(Participation::Table, Participation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_member_id")
                            .from(Participation::Table, Participation::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_participation_member_event_kind")
                            .col(Participation::MemberId)
                            .col(Participation::EventId)
                            .col(Participation::Kind),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participation {
    Table,
    Id,
    EventId,
    MemberId,
    Kind,
    Role,
    Class,
    Attended,
    CreatedAt,
    UpdatedAt,
}
