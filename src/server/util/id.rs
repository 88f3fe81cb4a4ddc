use rand::{distr::Alphanumeric, Rng};

/// Length of the public message id shared with users.
pub const PUBLIC_ID_LENGTH: usize = 7;

/// Generates a random alphanumeric public message id.
pub fn generate_public_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(PUBLIC_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// True if `value` has the shape of a public id.
pub fn is_public_id(value: &str) -> bool {
    value.len() == PUBLIC_ID_LENGTH && value.chars().all(|c| c.is_ascii_alphanumeric())
}
