// In memory implementation of the ExecutionSink port.
//
// Purpose
// - Support handler tests and local dry runs without a vehicle.
//
// Responsibilities
// - Record every call it receives, in order, including calls that fail.
// - Keep at most `history` calls. The oldest call is dropped first.
// - Simulate an unreachable transport, any other sink failure and cancellation.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::vehicle::core::messages::{
    ClosureMessage, DomainMessage, VehicleControlMessage,
};
use crate::shared::core::call_context::CallContext;
use crate::shared::infrastructure::execution_sink::{ExecutionSink, SinkError};

pub const DEFAULT_HISTORY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkCall {
    pub request_id: Uuid,
    pub message: DomainMessage,
    pub submitted_at: i64,
}

pub struct InMemoryExecutionSink {
    history: usize,
    calls: Mutex<VecDeque<SinkCall>>,
    offline: AtomicBool,
    failure: Mutex<Option<SinkError>>,
}

impl Default for InMemoryExecutionSink {
    fn default() -> Self {
        Self::with_history(DEFAULT_HISTORY)
    }
}

impl InMemoryExecutionSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: usize) -> Self {
        Self {
            history,
            calls: Mutex::new(VecDeque::with_capacity(history)),
            offline: AtomicBool::new(false),
            failure: Mutex::new(None),
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Make every following call fail with `error`.
    pub async fn fail_with(&self, error: SinkError) {
        *self.failure.lock().await = Some(error);
    }

    /// Make every following call fail as if the vehicle refused it.
    pub async fn reject_with(&self, reason: impl Into<String>) {
        self.fail_with(SinkError::Rejected(reason.into())).await;
    }

    pub async fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().await.iter().cloned().collect()
    }

    pub async fn messages(&self) -> Vec<DomainMessage> {
        self.calls
            .lock()
            .await
            .iter()
            .map(|call| call.message)
            .collect()
    }

    async fn record(&self, call: SinkCall) {
        let mut calls = self.calls.lock().await;
        calls.push_back(call);
        while calls.len() > self.history {
            calls.pop_front();
        }
    }

    async fn submit(&self, context: &CallContext, message: DomainMessage) -> Result<(), SinkError> {
        self.record(SinkCall {
            request_id: context.request_id,
            message,
            submitted_at: Utc::now().timestamp_millis(),
        })
        .await;

        if context.is_cancelled() {
            return Err(SinkError::Cancelled);
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(SinkError::Transport("execution sink offline".into()));
        }
        if let Some(error) = self.failure.lock().await.clone() {
            return Err(error);
        }

        tracing::info!(
            request_id = %context.request_id,
            message = %serde_json::to_string(&message).unwrap_or_default(),
            "dry run: message accepted"
        );
        Ok(())
    }
}

#[async_trait]
impl ExecutionSink for InMemoryExecutionSink {
    async fn submit_closure_action(
        &self,
        context: &CallContext,
        message: ClosureMessage,
    ) -> Result<(), SinkError> {
        self.submit(context, message.into()).await
    }

    async fn submit_vehicle_control_action(
        &self,
        context: &CallContext,
        message: VehicleControlMessage,
    ) -> Result<(), SinkError> {
        self.submit(context, message.into()).await
    }
}
