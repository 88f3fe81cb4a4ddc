use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string_uniq(Message::PublicId))
                    .col(string(Message::OwnerId))
                    .col(text_null(Message::Content))
                    .col(text(Message::Embeds).default("[]"))
                    .col(string(Message::MessageType))
                    .col(boolean(Message::IsPublic).default(false))
                    .col(string_null(Message::Title))
                    .col(string_null(Message::Category))
                    .col(string_null(Message::Language))
                    .col(text(Message::Tags).default("[]"))
                    .col(text(Message::Keywords).default("[]"))
                    .col(timestamp_with_time_zone_null(Message::PublishedAt))
                    .col(
                        timestamp_with_time_zone(Message::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Message::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_owner_id")
                            .from(Message::Table, Message::OwnerId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_owner_id")
                    .table(Message::Table)
                    .col(Message::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    PublicId,
    OwnerId,
    Content,
    Embeds,
    MessageType,
    IsPublic,
    Title,
    Category,
    Language,
    Tags,
    Keywords,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
