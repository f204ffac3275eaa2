use thiserror::Error;

use crate::modules::vehicle::use_cases::car_server_actions::decide::DecideError;
use crate::shared::infrastructure::execution_sink::SinkError;

/// Failure of a single vehicle action, tagged with the stage that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] DecideError),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] SinkError),
}
