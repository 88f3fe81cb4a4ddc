//! Discord platform limits on message payloads.

use thiserror::Error;

use super::Message;

pub const MAX_CONTENT_LENGTH: usize = 2000;
pub const MAX_EMBEDS: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;
pub const MAX_AUTHOR_NAME_LENGTH: usize = 256;
pub const MAX_FOOTER_TEXT_LENGTH: usize = 2048;
pub const MAX_FIELDS: usize = 25;
pub const MAX_FIELD_NAME_LENGTH: usize = 256;
pub const MAX_FIELD_VALUE_LENGTH: usize = 1024;
/// Combined character budget of all embeds in one message.
pub const MAX_EMBED_TOTAL_LENGTH: usize = 6000;
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// A single limit a message exceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("{field} is {actual} characters long (limit {limit})")]
    TooLong {
        field: String,
        actual: usize,
        limit: usize,
    },

    #[error("Embed {embed} has {actual} fields (limit {limit})")]
    TooManyFields {
        embed: usize,
        actual: usize,
        limit: usize,
    },

    #[error("Message has {actual} embeds (limit {limit})")]
    TooManyEmbeds { actual: usize, limit: usize },

    #[error("Embeds contain {actual} characters in total (limit {limit})")]
    EmbedsTooLarge { actual: usize, limit: usize },

    #[error("Embed {embed} color {color} is not a 24-bit RGB value")]
    ColorOutOfRange { embed: usize, color: u32 },
}

/// Checks only the embed colors. Run on raw input before [`super::normalize`], which
/// drops colors it cannot represent.
pub fn check_colors(message: &Message) -> Result<(), Vec<LimitViolation>> {
    let violations: Vec<LimitViolation> = message
        .embeds
        .iter()
        .enumerate()
        .filter_map(|(index, embed)| color_violation(index + 1, embed.color))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn color_violation(embed: usize, color: Option<u32>) -> Option<LimitViolation> {
    color
        .filter(|color| *color > MAX_COLOR)
        .map(|color| LimitViolation::ColorOutOfRange { embed, color })
}

/// Checks a message against Discord's limits.
///
/// Lengths count characters, not bytes. Embed numbers in the reported violations are
/// 1-based to match what the editor shows.
///
/// # Returns
/// - `Ok(())` - Message fits every limit
/// - `Err(Vec<LimitViolation>)` - Every violated limit, in message order
pub fn validate(message: &Message) -> Result<(), Vec<LimitViolation>> {
    let mut violations = Vec::new();

    check_length(
        &mut violations,
        "Content".to_string(),
        message.content.as_deref(),
        MAX_CONTENT_LENGTH,
    );

    if message.embeds.len() > MAX_EMBEDS {
        violations.push(LimitViolation::TooManyEmbeds {
            actual: message.embeds.len(),
            limit: MAX_EMBEDS,
        });
    }

    let mut total = 0;
    for (index, embed) in message.embeds.iter().enumerate() {
        let number = index + 1;

        check_length(
            &mut violations,
            format!("Embed {} title", number),
            embed.title.as_deref(),
            MAX_TITLE_LENGTH,
        );
        check_length(
            &mut violations,
            format!("Embed {} description", number),
            embed.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        );

        let author_name = embed.author.as_ref().and_then(|a| a.name.as_deref());
        check_length(
            &mut violations,
            format!("Embed {} author name", number),
            author_name,
            MAX_AUTHOR_NAME_LENGTH,
        );

        let footer_text = embed.footer.as_ref().and_then(|f| f.text.as_deref());
        check_length(
            &mut violations,
            format!("Embed {} footer text", number),
            footer_text,
            MAX_FOOTER_TEXT_LENGTH,
        );

        if embed.fields.len() > MAX_FIELDS {
            violations.push(LimitViolation::TooManyFields {
                embed: number,
                actual: embed.fields.len(),
                limit: MAX_FIELDS,
            });
        }

        for (field_index, field) in embed.fields.iter().enumerate() {
            check_length(
                &mut violations,
                format!("Embed {} field {} name", number, field_index + 1),
                Some(&field.name),
                MAX_FIELD_NAME_LENGTH,
            );
            check_length(
                &mut violations,
                format!("Embed {} field {} value", number, field_index + 1),
                Some(&field.value),
                MAX_FIELD_VALUE_LENGTH,
            );
            total += char_count(Some(&field.name)) + char_count(Some(&field.value));
        }

        violations.extend(color_violation(number, embed.color));

        total += char_count(embed.title.as_deref())
            + char_count(embed.description.as_deref())
            + char_count(author_name)
            + char_count(footer_text);
    }

    if total > MAX_EMBED_TOTAL_LENGTH {
        violations.push(LimitViolation::EmbedsTooLarge {
            actual: total,
            limit: MAX_EMBED_TOTAL_LENGTH,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_length(
    violations: &mut Vec<LimitViolation>,
    field: String,
    value: Option<&str>,
    limit: usize,
) {
    let actual = char_count(value);
    if actual > limit {
        violations.push(LimitViolation::TooLong {
            field,
            actual,
            limit,
        });
    }
}

fn char_count(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}
