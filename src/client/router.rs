use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    Builder, Community, Dashboard, EditBuilder, Home, Login, NotFound, Servers, TemplateBuilder,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/community")]
        Community {},

        #[layout(RequiresLoggedIn)]
            #[route("/community/:message_id/use")]
            TemplateBuilder { message_id: String },

            #[nest("/servers")]
                #[route("/")]
                Servers {},

                #[route("/:guild_id")]
                Dashboard { guild_id: u64 },

                #[route("/:guild_id/builder")]
                Builder { guild_id: u64 },

                #[route("/:guild_id/builder/:message_id")]
                EditBuilder { guild_id: u64, message_id: String },
            #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
