use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_uniq(Member::DiscordId))
                    .col(string(Member::GlobalName))
                    .col(string(Member::ServerName))
                    .col(string(Member::Role).default("user"))
                    .col(string(Member::PreferredCombatRole).default("dps"))
                    .col(string_null(Member::LastUsedClass))
                    .col(
                        timestamp(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Member::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    DiscordId,
    GlobalName,
    ServerName,
    Role,
    PreferredCombatRole,
    LastUsedClass,
    CreatedAt,
    UpdatedAt,
}
