use thiserror::Error;

/// Result type alias using AxonError
pub type Result<T> = std::result::Result<T, AxonError>;

/// Error taxonomy for Axon dispatch operations
///
/// The taxonomy is deliberately small: a name-keyed lookup that finds
/// nothing returns `None`/`false` rather than an error, because "not
/// registered" is a normal outcome. Errors are reserved for the removal
/// path hitting a missing observer list and for broadcasting through a
/// notifier that was never bound to a live facade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxonError {
    /// No observer list is registered under the notification name
    #[error("No observers registered for notification: {note_name}")]
    ObserversNotFound { note_name: String },

    /// The notifier has no live facade handle to route through
    #[error("Notifier is not attached to a live facade")]
    NotifierDetached,
}

impl AxonError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable across releases and safe to match on in tests
    /// and log pipelines.
    pub fn code(&self) -> &'static str {
        match self {
            AxonError::ObserversNotFound { .. } => "ERR_OBSERVERS_NOT_FOUND",
            AxonError::NotifierDetached => "ERR_NOTIFIER_DETACHED",
        }
    }
}
