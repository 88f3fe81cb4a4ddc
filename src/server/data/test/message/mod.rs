use crate::{
    model::message::{Embed, Message, MessageType, Visibility},
    server::{
        data::message::MessageRepository,
        error::{internal::InternalError, AppError},
        model::message::{
            CreateMessageParam, PublishMessageParam, SearchMessagesParam, UpdateMessageParam,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, message::MessageFactory},
};

mod create;
mod delete;
mod find_by_public_id;
mod get_by_owner;
mod publish;
mod search_public;
mod unpublish;
mod update;

fn titled(title: &str) -> Message {
    Message {
        content: Some("Hello {user}".to_string()),
        embeds: vec![Embed {
            title: Some(title.to_string()),
            color: Some(0x3b82f6),
            ..Default::default()
        }],
    }
}
