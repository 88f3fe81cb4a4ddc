use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::{
    model::stats::StatsDto,
    server::{data::rating::RatingRepository, error::AppError},
};

/// Landing page numbers: bot reach and the average dashboard rating.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    discord_http: &'a Http,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, discord_http: &'a Http) -> Self {
        Self { db, discord_http }
    }

    /// Counts the bot's guilds and sums their approximate member and online counts.
    ///
    /// Guilds whose counts cannot be fetched still count as a server.
    pub async fn stats(&self) -> Result<StatsDto, AppError> {
        let guilds = self.discord_http.get_guilds(None, None).await?;

        let mut total_members = 0;
        let mut online_users = 0;
        for guild in &guilds {
            match self.discord_http.get_guild_with_counts(guild.id).await {
                Ok(partial) => {
                    total_members += partial.approximate_member_count.unwrap_or(0);
                    online_users += partial.approximate_presence_count.unwrap_or(0);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch counts for guild {}: {}", guild.id, e);
                }
            }
        }

        let average = RatingRepository::new(self.db).average().await?;

        Ok(StatsDto {
            total_servers: guilds.len() as u64,
            total_members,
            online_users,
            avg_rating: format_rating(average),
        })
    }
}

/// One decimal place, `"N/A"` when nobody has rated.
pub fn format_rating(average: Option<f64>) -> String {
    match average {
        Some(average) => format!("{:.1}", average),
        None => "N/A".to_string(),
    }
}
