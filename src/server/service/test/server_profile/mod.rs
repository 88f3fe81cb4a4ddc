use crate::{
    model::server_profile::{BindingKind, SetBindingDto},
    server::{
        error::AppError, model::server_profile::Binding,
        service::server_profile::ServerProfileService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, message::MessageFactory},
};

mod remove_binding;
mod set_binding;

const GUILD_ID: u64 = 4242;

fn body(message_id: &str, channel_id: Option<&str>) -> SetBindingDto {
    SetBindingDto {
        message_id: message_id.to_string(),
        channel_id: channel_id.map(str::to_string),
    }
}
