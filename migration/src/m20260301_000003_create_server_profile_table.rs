use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerProfile::Table)
                    .if_not_exists()
                    .col(string(ServerProfile::GuildId).primary_key())
                    .col(string_null(ServerProfile::WelcomeMessageId))
                    .col(string_null(ServerProfile::WelcomeChannelId))
                    .col(string_null(ServerProfile::LeaveMessageId))
                    .col(string_null(ServerProfile::LeaveChannelId))
                    .col(string_null(ServerProfile::BanMessageId))
                    .col(
                        timestamp_with_time_zone(ServerProfile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ServerProfile::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerProfile {
    Table,
    GuildId,
    WelcomeMessageId,
    WelcomeChannelId,
    LeaveMessageId,
    LeaveChannelId,
    BanMessageId,
    CreatedAt,
    UpdatedAt,
}
