// Panel error taxonomy
// Every variant is non-fatal: callers log a warning and drop the interaction

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unknown claim collection `{0}`")]
    InvalidCollectionReference(String),

    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("claim item id `{0}` is not an integer")]
    InvalidItemId(String),

    #[error("unknown snooze duration `{0}`")]
    InvalidSnoozeDuration(String),

    #[error("cannot parse date `{0}`")]
    InvalidDate(String),

    #[error("mount point `{0}` not found in document")]
    MissingMountPoint(&'static str),
}

pub type Result<T> = std::result::Result<T, PanelError>;
