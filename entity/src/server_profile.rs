use sea_orm::entity::prelude::*;

/// Per-guild bindings of saved messages to member lifecycle events.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub welcome_message_id: Option<String>,
    pub welcome_channel_id: Option<String>,
    pub leave_message_id: Option<String>,
    pub leave_channel_id: Option<String>,
    pub ban_message_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
