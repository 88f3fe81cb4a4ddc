use crate::{
    model::message::{
        CreateMessageDto, Embed, Message, MessageType, PublicSearchParams, PublishMessageDto,
        UpdateMessageDto, Visibility,
    },
    server::{
        error::{auth::AuthError, AppError},
        service::message::MessageService,
        util::id::is_public_id,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, message::MessageFactory},
};

mod create;
mod get_for_viewer;
mod publish;
mod update;

fn owner_id(user: &entity::user::Model) -> u64 {
    user.discord_id.parse().unwrap()
}

fn card(title: &str) -> Message {
    Message {
        content: None,
        embeds: vec![Embed {
            title: Some(title.to_string()),
            ..Default::default()
        }],
    }
}
