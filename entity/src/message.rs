use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 7 character alphanumeric identifier shared with users.
    #[sea_orm(unique)]
    pub public_id: String,
    pub owner_id: String,
    pub content: Option<String>,
    /// Embeds serialized as a JSON array.
    pub embeds: String,
    pub message_type: String,
    pub is_public: bool,
    pub title: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    /// JSON array of tags.
    pub tags: String,
    /// JSON array of search keywords.
    pub keywords: String,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::DiscordId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
