// Per-call context handed through every action down to the execution sink.
//
// Purpose
// - Give each call its own request id for log correlation.
//
// Boundaries
// - The mapping layer never looks at cancellation itself. It only forwards the token,
//   and the sink decides how to honor it.

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CallContext {
    /// Correlates log lines and sink records for one action call.
    pub request_id: Uuid,
    pub cancellation: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::with_cancellation(CancellationToken::new())
    }

    /// Build a context whose cancellation is driven by the caller's token.
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            cancellation,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}
