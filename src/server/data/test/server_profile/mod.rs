use crate::{
    model::server_profile::BindingKind,
    server::{
        data::server_profile::ServerProfileRepository,
        error::AppError,
        model::server_profile::{Binding, SetBindingParam},
    },
};
use test_utils::{builder::TestBuilder, factory::server_profile::ServerProfileFactory};

mod clear_binding;
mod get_or_create;
mod set_binding;
