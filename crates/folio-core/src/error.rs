use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("damping factor {0} is outside (0, 1]")]
    InvalidDamping(f32),
    #[error("a contact submission is already in flight")]
    RelayBusy,
    #[error("contact form is missing field `{0}`")]
    MissingField(&'static str),
    #[error("relay cannot handle {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FolioError>;
