use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Landing page numbers. `avg_rating` is formatted to one decimal, or `"N/A"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_servers: u64,
    pub total_members: u64,
    pub online_users: u64,
    pub avg_rating: String,
}
