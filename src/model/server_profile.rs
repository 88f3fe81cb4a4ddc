use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Lifecycle event a saved message can be bound to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Welcome,
    Leave,
    Ban,
}

impl BindingKind {
    pub const ALL: [BindingKind; 3] = [BindingKind::Welcome, BindingKind::Leave, BindingKind::Ban];

    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Welcome => "welcome",
            BindingKind::Leave => "leave",
            BindingKind::Ban => "ban",
        }
    }

    /// Ban messages are sent to the banned user directly and have no channel.
    pub fn requires_channel(&self) -> bool {
        !matches!(self, BindingKind::Ban)
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BindingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown binding type '{}'", s))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BindingDto {
    pub message_id: String,
    pub channel_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ServerProfileDto {
    pub guild_id: String,
    pub welcome_message: Option<BindingDto>,
    pub leave_message: Option<BindingDto>,
    pub ban_message: Option<BindingDto>,
}

impl ServerProfileDto {
    pub fn binding(&self, kind: BindingKind) -> Option<&BindingDto> {
        match kind {
            BindingKind::Welcome => self.welcome_message.as_ref(),
            BindingKind::Leave => self.leave_message.as_ref(),
            BindingKind::Ban => self.ban_message.as_ref(),
        }
    }
}

/// Body of `PUT /api/server-profile/{guildId}/{type}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SetBindingDto {
    pub message_id: String,
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_segment() {
        assert_eq!("leave".parse::<BindingKind>(), Ok(BindingKind::Leave));
        assert!("kick".parse::<BindingKind>().is_err());
        assert!(!BindingKind::Ban.requires_channel());
    }

    #[test]
    fn binding_body_is_camel_case() {
        let body: SetBindingDto = serde_json::from_str(r#"{"messageId":"abc1234"}"#).unwrap();

        assert_eq!(body.message_id, "abc1234");
        assert_eq!(body.channel_id, None);
    }
}
