// Execution sink port.
//
// Purpose
// - Describe what the action layer needs from the transport: deliver one fully formed
//   message to the right on-vehicle domain and report the outcome.
//
// Responsibilities
// - Keep the action layer independent of BLE, cloud relays, sessions and signing.
//
// Boundaries
// - No concrete transport here. Adapters implement this trait.
// - Cancellation is carried in the call context and honored by the adapter.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::vehicle::core::messages::{ClosureMessage, VehicleControlMessage};
use crate::shared::core::call_context::CallContext;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("vehicle rejected the command: {0}")]
    Rejected(String),

    #[error("call was cancelled")]
    Cancelled,
}

#[async_trait]
pub trait ExecutionSink: Send + Sync {
    /// Deliver a command to the body-control domain.
    async fn submit_closure_action(
        &self,
        context: &CallContext,
        message: ClosureMessage,
    ) -> Result<(), SinkError>;

    /// Deliver a command to the vehicle-control domain.
    async fn submit_vehicle_control_action(
        &self,
        context: &CallContext,
        message: VehicleControlMessage,
    ) -> Result<(), SinkError>;
}
