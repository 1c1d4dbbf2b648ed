use thiserror::Error;

use crate::coordinator::PodVersion;

pub type Result<T> = std::result::Result<T, CoordinatorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// A newer pod has taken over the identity since the command was issued.
    #[error("'{identity}' is owned by pod version '{current}', refusing command from '{requested}'")]
    Superseded {
        identity: String,
        requested: String,
        current: PodVersion,
    },

    #[error("invalid coordinator config: {0}")]
    InvalidConfig(String),
}
