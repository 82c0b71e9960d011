use thiserror::Error;

use crate::api::ApiError;
use crate::sensor::{SensorId, ValidationError};

/// Failure of a create or delete. Reported once, never kept in the store.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to create sensor: {source}")]
    Create {
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete sensor {id}: {source}")]
    Delete {
        id: SensorId,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    /// Short text for the user. Validation errors explain themselves;
    /// transport details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Validation(err) => err.to_string(),
            ActionError::Create { .. } => "could not add the sensor".to_string(),
            ActionError::Delete { .. } => "could not delete the sensor".to_string(),
        }
    }
}
