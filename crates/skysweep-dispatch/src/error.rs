//! Error types for the dispatch layer.

use thiserror::Error;

/// Errors that can occur while queueing missions or tracking drones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A mission was requested but the queue holds none.
    #[error("No missions queued")]
    EmptyQueue,

    /// A drone identifier is not present in the registry.
    #[error("Unknown drone: {id}")]
    UnknownDrone {
        /// The identifier that was not found.
        id: String,
    },
}

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DispatchError::EmptyQueue.to_string(), "No missions queued");
        assert_eq!(
            DispatchError::UnknownDrone {
                id: "drone-7".to_string()
            }
            .to_string(),
            "Unknown drone: drone-7"
        );
    }
}
