use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, callback, get_user, login, logout},
        discord::{self, get_mutual_guilds},
        message::{
            self, create_message, delete_message, get_message, get_messages,
            get_public_messages, publish_message, search_public_messages, unpublish_message,
            update_message,
        },
        rating::{self, check_rating, submit_rating},
        server_profile::{
            self, create_server_profile, get_server_profile, remove_binding, set_binding,
        },
        stats::{self, get_stats},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Embedboard API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        message::create_message,
        message::get_messages,
        message::get_message,
        message::update_message,
        message::delete_message,
        message::publish_message,
        message::unpublish_message,
        message::get_public_messages,
        message::search_public_messages,
        server_profile::get_server_profile,
        server_profile::create_server_profile,
        server_profile::set_binding,
        server_profile::remove_binding,
        discord::get_mutual_guilds,
        stats::get_stats,
        rating::submit_rating,
        rating::check_rating,
    ),
    tags(
        (name = auth::AUTH_TAG, description = "Discord OAuth2 login"),
        (name = message::MESSAGE_TAG, description = "Saved messages of the logged in user"),
        (name = message::COMMUNITY_TAG, description = "Published messages anyone can browse"),
        (name = server_profile::SERVER_PROFILE_TAG, description = "Per guild event bindings"),
        (name = discord::DISCORD_TAG, description = "Guilds shared with the bot"),
        (name = stats::STATS_TAG, description = "Landing page numbers"),
        (name = rating::RATING_TAG, description = "Dashboard ratings"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/messages", get(get_messages).post(create_message))
        .route("/api/messages/public", get(get_public_messages))
        .route("/api/messages/public/search", get(search_public_messages))
        .route(
            "/api/messages/{id}",
            get(get_message).put(update_message).delete(delete_message),
        )
        .route(
            "/api/messages/{id}/public",
            put(publish_message).delete(unpublish_message),
        )
        .route(
            "/api/server-profile/{guild_id}",
            get(get_server_profile).post(create_server_profile),
        )
        .route(
            "/api/server-profile/{guild_id}/{kind}",
            put(set_binding).delete(remove_binding),
        )
        .route("/api/guilds/mutual", get(get_mutual_guilds))
        .route("/api/stats", get(get_stats))
        .route("/api/rating/submit", post(submit_rating))
        .route("/api/rating/check/{discord_id}", get(check_rating))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
