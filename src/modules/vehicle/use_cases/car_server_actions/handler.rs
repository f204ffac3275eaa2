// Vehicle-control action handler.
//
// Responsibilities
// - Build the vehicle-control message for an intent. A level the wire field cannot hold
//   stops here and nothing is sent.
// - Submit it once through the vehicle-control side of the execution sink and return
//   the outcome as is.

use std::sync::Arc;

use crate::modules::vehicle::use_cases::car_server_actions::command::CarServerIntent;
use crate::modules::vehicle::use_cases::car_server_actions::decide::decide_car_server;
use crate::modules::vehicle::use_cases::errors::ActionError;
use crate::shared::core::call_context::CallContext;
use crate::shared::infrastructure::execution_sink::ExecutionSink;

pub struct CarServerActionHandler<TSink>
where
    TSink: ExecutionSink + 'static,
{
    sink: Arc<TSink>,
}

impl<TSink> CarServerActionHandler<TSink>
where
    TSink: ExecutionSink + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(
        &self,
        context: &CallContext,
        intent: CarServerIntent,
    ) -> Result<(), ActionError> {
        let message = decide_car_server(intent).inspect_err(|error| {
            tracing::warn!(
                request_id = %context.request_id,
                %error,
                "vehicle control message rejected before dispatch"
            );
        })?;
        tracing::debug!(
            request_id = %context.request_id,
            ?intent,
            ?message,
            "vehicle control message built"
        );

        self.sink
            .submit_vehicle_control_action(context, message)
            .await
            .map_err(|error| {
                tracing::warn!(
                    request_id = %context.request_id,
                    %error,
                    "vehicle control action failed"
                );
                ActionError::Dispatch(error)
            })
    }
}
