use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A JSON column of a stored row no longer decodes.
    #[error("Stored {column} of message {id} is not valid JSON: {source}")]
    CorruptStoredJson {
        column: &'static str,
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// A stored enum column holds a value the application does not know.
    #[error("Stored {column} value '{value}' is not recognized")]
    UnknownStoredValue { column: &'static str, value: String },

    /// Could not find a free public id after several attempts.
    #[error("Failed to generate a unique message id after {0} attempts")]
    IdGenerationExhausted(usize),
}
