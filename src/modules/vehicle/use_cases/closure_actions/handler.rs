// Closure action handler.
//
// Responsibilities
// - Build the closure message for an intent.
// - Submit it once through the closure side of the execution sink and return the outcome as is.

use std::sync::Arc;

use crate::modules::vehicle::use_cases::closure_actions::command::ClosureIntent;
use crate::modules::vehicle::use_cases::closure_actions::decide::decide_closure;
use crate::modules::vehicle::use_cases::errors::ActionError;
use crate::shared::core::call_context::CallContext;
use crate::shared::infrastructure::execution_sink::ExecutionSink;

pub struct ClosureActionHandler<TSink>
where
    TSink: ExecutionSink + 'static,
{
    sink: Arc<TSink>,
}

impl<TSink> ClosureActionHandler<TSink>
where
    TSink: ExecutionSink + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(
        &self,
        context: &CallContext,
        intent: ClosureIntent,
    ) -> Result<(), ActionError> {
        let message = decide_closure(intent);
        tracing::debug!(
            request_id = %context.request_id,
            ?intent,
            ?message,
            "closure message built"
        );

        self.sink
            .submit_closure_action(context, message)
            .await
            .map_err(|error| {
                tracing::warn!(request_id = %context.request_id, %error, "closure action failed");
                ActionError::Dispatch(error)
            })
    }
}

#[cfg(test)]
mod closure_action_handler_tests {
    use super::*;
    use crate::modules::vehicle::core::closures::{ClosureTarget, MoveVerb};
    use crate::modules::vehicle::core::messages::{ClosureMessage, DomainMessage};
    use crate::shared::infrastructure::execution_sink::SinkError;
    use crate::shared::infrastructure::execution_sink::in_memory::InMemoryExecutionSink;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sink() -> Arc<InMemoryExecutionSink> {
        Arc::new(InMemoryExecutionSink::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_submit_exactly_one_closure_message(sink: Arc<InMemoryExecutionSink>) {
        let handler = ClosureActionHandler::new(sink.clone());
        handler
            .handle(&CallContext::new(), ClosureIntent::OpenTrunk)
            .await
            .expect("handle failed");
        assert_eq!(
            sink.messages().await,
            vec![DomainMessage::Closure(ClosureMessage {
                target: ClosureTarget::Trunk,
                verb: MoveVerb::Open,
            })]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_sink_failure_unchanged_without_retrying(
        sink: Arc<InMemoryExecutionSink>,
    ) {
        sink.toggle_offline();
        let handler = ClosureActionHandler::new(sink.clone());
        let result = handler
            .handle(&CallContext::new(), ClosureIntent::OpenFrunk)
            .await;
        assert_eq!(
            result,
            Err(ActionError::Dispatch(SinkError::Transport(
                "execution sink offline".into()
            )))
        );
        assert_eq!(sink.calls().await.len(), 1);
    }
}
