use thiserror::Error;

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while binding the facade to a backend.
#[derive(Debug, Error)]
pub enum Error {
    /// No frame outside the boundary could be found on the current stack.
    #[error("no caller found outside boundary `{boundary}` in stack:{stack}")]
    CallerNotFound {
        /// The boundary or boundaries that were searched for
        boundary: String,
        /// Rendered stack that was searched
        stack: String,
    },

    /// A logger factory was already installed for this process.
    #[error(transparent)]
    FactoryAlreadySet(#[from] bridgelog_facade::SetFactoryError),
}
