use thiserror::Error;

/// Reasons a vote token cannot be issued.
///
/// All of them are caller errors, detected before any randomness is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("vote value must be between 0 and 99, got {0}")]
    InvalidVote(i64),

    #[error("person identifier must contain digits only, got {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
