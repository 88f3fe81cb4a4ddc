//! Message categories and the placeholder tokens each one offers.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Category of a saved message.
///
/// Picks the placeholder vocabulary offered by the editor and filters community search.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Welcome,
    Leave,
    Ban,
    Announcement,
    Ticket,
    #[default]
    Other,
}

/// A substitution token offered in the editor's placeholder palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub token: &'static str,
    pub description: &'static str,
}

const USER: Placeholder = Placeholder {
    token: "{user}",
    description: "Mentions the member",
};
const USER_NAME: Placeholder = Placeholder {
    token: "{user.name}",
    description: "Member's username",
};
const USER_ID: Placeholder = Placeholder {
    token: "{user.id}",
    description: "Member's Discord ID",
};
const SERVER: Placeholder = Placeholder {
    token: "{server}",
    description: "Server name",
};
const SERVER_MEMBER_COUNT: Placeholder = Placeholder {
    token: "{server.memberCount}",
    description: "Current member count",
};
const DATE: Placeholder = Placeholder {
    token: "{date}",
    description: "Today's date",
};
const TICKET_ID: Placeholder = Placeholder {
    token: "{ticket.id}",
    description: "Ticket number",
};

const MEMBER_EVENT: &[Placeholder] = &[USER, USER_NAME, USER_ID, SERVER, SERVER_MEMBER_COUNT];
const ANNOUNCEMENT: &[Placeholder] = &[SERVER, SERVER_MEMBER_COUNT, DATE];
const TICKET: &[Placeholder] = &[USER, USER_NAME, TICKET_ID, SERVER];
const OTHER: &[Placeholder] = &[USER, SERVER];

impl MessageType {
    pub const ALL: [MessageType; 6] = [
        MessageType::Welcome,
        MessageType::Leave,
        MessageType::Ban,
        MessageType::Announcement,
        MessageType::Ticket,
        MessageType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Welcome => "welcome",
            MessageType::Leave => "leave",
            MessageType::Ban => "ban",
            MessageType::Announcement => "announcement",
            MessageType::Ticket => "ticket",
            MessageType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageType::Welcome => "Welcome",
            MessageType::Leave => "Leave",
            MessageType::Ban => "Ban",
            MessageType::Announcement => "Announcement",
            MessageType::Ticket => "Ticket",
            MessageType::Other => "Other",
        }
    }

    /// Placeholder tokens available for this category.
    pub fn placeholders(&self) -> &'static [Placeholder] {
        match self {
            MessageType::Welcome | MessageType::Leave | MessageType::Ban => MEMBER_EVENT,
            MessageType::Announcement => ANNOUNCEMENT,
            MessageType::Ticket => TICKET,
            MessageType::Other => OTHER,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown message type '{}'", s))
    }
}

/// Values substituted for placeholder tokens when a message is delivered.
///
/// Tokens whose value is `None` are left in the text as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderContext {
    pub user_id: Option<u64>,
    pub user_name: Option<String>,
    pub server_name: Option<String>,
    pub member_count: Option<u64>,
    pub date: Option<String>,
    pub ticket_id: Option<String>,
}

/// Replaces every known placeholder token in `text`.
pub fn render_placeholders(text: &str, ctx: &PlaceholderContext) -> String {
    let substitutions = [
        (USER.token, ctx.user_id.map(|id| format!("<@{}>", id))),
        (USER_NAME.token, ctx.user_name.clone()),
        (USER_ID.token, ctx.user_id.map(|id| id.to_string())),
        (SERVER.token, ctx.server_name.clone()),
        (
            SERVER_MEMBER_COUNT.token,
            ctx.member_count.map(|count| count.to_string()),
        ),
        (DATE.token, ctx.date.clone()),
        (TICKET_ID.token, ctx.ticket_id.clone()),
    ];

    let mut rendered = text.to_string();
    for (token, value) in substitutions {
        if let Some(value) = value {
            rendered = rendered.replace(token, &value);
        }
    }

    rendered
}
