use thiserror::Error;

/// Errors returned while assembling a [`super::LandmarkIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkIndexError {
    /// Two landmarks share a name.
    #[error("landmark name '{name}' is registered more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// The requested primary landmark is not in the registry.
    #[error("primary landmark '{name}' is not registered")]
    UnknownPrimary {
        /// Name that failed to resolve.
        name: String,
    },
}
