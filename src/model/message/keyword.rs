//! Search keyword extraction for published messages.

const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "any", "are", "as", "at", "be", "but", "by", "can", "do",
    "for", "from", "has", "have", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "my", "no", "not", "of", "on", "or", "our", "so", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "to", "up", "us", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "you", "your",
];

/// Derives a search keyword list from free text.
///
/// Splits on anything that is not alphanumeric, lowercases, drops stop words and
/// single-character tokens, and removes duplicates keeping the first occurrence.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for token in text.split(|c: char| !c.is_alphanumeric()) {
        let token = token.to_lowercase();
        if token.chars().count() < 2 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if !keywords.contains(&token) {
            keywords.push(token);
        }
    }

    keywords
}

/// Splits a comma separated tag list, trimming and lowercasing each tag.
pub fn parse_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for tag in text.split(',') {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_case_folds() {
        assert_eq!(
            extract_keywords("This is a Great Server"),
            vec!["great".to_string(), "server".to_string()]
        );
    }

    #[test]
    fn deduplicates_in_first_seen_order() {
        assert_eq!(
            extract_keywords("Gaming, gaming & more GAMING! Chill-zone 24/7"),
            vec!["gaming", "more", "chill", "zone", "24"]
        );
    }

    #[test]
    fn empty_text_has_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  the a of ").is_empty());
    }

    #[test]
    fn parses_comma_separated_tags() {
        assert_eq!(
            parse_tags(" Fun, rules ,, FUN ,"),
            vec!["fun".to_string(), "rules".to_string()]
        );
    }
}
