use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::vehicle::core::intents::VehicleIntent;
use crate::modules::vehicle::use_cases::errors::ActionError;
use crate::shared::core::call_context::CallContext;
use crate::shared::infrastructure::execution_sink::SinkError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult {
    pub result: bool,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub response: CommandResult,
}

impl CommandResponse {
    fn new(result: bool, reason: impl Into<String>) -> Self {
        Self {
            response: CommandResult {
                result,
                reason: reason.into(),
            },
        }
    }
}

pub async fn list_vehicles(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.vins())
}

pub async fn handle_command(
    State(state): State<AppState>,
    Path((vin, command)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let Some(vehicle) = state.vehicle(&vin) else {
        return (
            StatusCode::NOT_FOUND,
            Json(CommandResponse::new(false, format!("unknown vehicle {vin}"))),
        )
            .into_response();
    };

    let intent = match parse_intent(&command, &body) {
        Ok(intent) => intent,
        Err(reason) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(CommandResponse::new(false, reason)),
            )
                .into_response();
        }
    };

    let context = CallContext::new();
    tracing::info!(request_id = %context.request_id, %vin, ?intent, "command received");

    match vehicle.execute(&context, intent).await {
        Ok(()) => (StatusCode::OK, Json(CommandResponse::new(true, ""))).into_response(),
        Err(error) => {
            let status = match &error {
                ActionError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                ActionError::Dispatch(SinkError::Rejected(_)) => StatusCode::OK,
                ActionError::Dispatch(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, Json(CommandResponse::new(false, error.to_string()))).into_response()
        }
    }
}

/// Read `{command}` plus its optional JSON object body as a [`VehicleIntent`].
fn parse_intent(command: &str, body: &[u8]) -> Result<VehicleIntent, String> {
    let mut fields = if body.iter().all(u8::is_ascii_whitespace) {
        Map::new()
    } else {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => return Err("command body must be a JSON object".into()),
            Err(error) => return Err(format!("invalid command body: {error}")),
        }
    };
    let supplied: Vec<String> = fields.keys().cloned().collect();
    fields.insert("command".into(), Value::String(command.to_string()));
    let intent: VehicleIntent = serde_json::from_value(Value::Object(fields))
        .map_err(|error| format!("unsupported command {command}: {error}"))?;

    let allowed = intent.allowed_fields();
    if let Some(field) = supplied.iter().find(|field| !allowed.contains(&field.as_str())) {
        return Err(format!("command {command} does not take a `{field}` field"));
    }
    Ok(intent)
}

#[cfg(test)]
mod vehicle_command_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use rstest::{fixture, rstest};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::vehicle::core::closures::{ClosureTarget, MoveVerb};
    use crate::modules::vehicle::core::messages::{
        ClosureMessage, DomainMessage, VehicleControlMessage,
    };
    use crate::shared::infrastructure::execution_sink::SinkError;
    use crate::shared::infrastructure::execution_sink::in_memory::InMemoryExecutionSink;
    use crate::shell::state::AppState;

    use super::{handle_command, list_vehicles};

    const VIN: &str = "5YJ3E1EA7KF000001";

    type BeforeEachReturn = (Arc<InMemoryExecutionSink>, Router);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let sink = Arc::new(InMemoryExecutionSink::new());
        let state = AppState::from_sinks([(VIN.to_string(), sink.clone())]);
        let router = Router::new()
            .route("/api/1/vehicles", get(list_vehicles))
            .route("/api/1/vehicles/{vin}/command/{command}", post(handle_command))
            .with_state(state);
        (sink, router)
    }

    async fn post_command(
        router: Router,
        path: String,
        body: &'static str,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_and_submit_the_closure_message(before_each: BeforeEachReturn) {
        let (sink, router) = before_each;
        let (status, json) =
            post_command(router, format!("/api/1/vehicles/{VIN}/command/open_frunk"), "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "response": { "result": true, "reason": "" } }));
        assert_eq!(
            sink.messages().await,
            vec![DomainMessage::Closure(ClosureMessage {
                target: ClosureTarget::Frunk,
                verb: MoveVerb::Move,
            })]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_pass_the_sunroof_level_from_the_body(before_each: BeforeEachReturn) {
        let (sink, router) = before_each;
        let (status, _) = post_command(
            router,
            format!("/api/1/vehicles/{VIN}/command/change_sunroof_state"),
            r#"{"level":15}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            sink.messages().await,
            vec![DomainMessage::VehicleControl(
                VehicleControlMessage::SunroofOpenClose { absolute_level: 15 }
            )]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_for_an_unrepresentable_sunroof_level(
        before_each: BeforeEachReturn,
    ) {
        let (sink, router) = before_each;
        let (status, json) = post_command(
            router,
            format!("/api/1/vehicles/{VIN}/command/change_sunroof_state"),
            r#"{"level":4294967296}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["response"]["result"], false);
        assert!(sink.calls().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_vehicle(before_each: BeforeEachReturn) {
        let (_, router) = before_each;
        let (status, _) =
            post_command(router, "/api/1/vehicles/UNKNOWN/command/honk_horn".into(), "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case("close_frunk", "")]
    #[case("change_sunroof_state", "")]
    #[case("honk_horn", "not-json")]
    #[case("honk_horn", "[1,2]")]
    #[case("honk_horn", r#"{"level":15}"#)]
    #[case("open_trunk", r#"{"command":"close_trunk"}"#)]
    #[case("change_sunroof_state", r#"{"level":15,"speed":2}"#)]
    #[tokio::test]
    async fn it_should_return_422_for_an_unsupported_command(
        before_each: BeforeEachReturn,
        #[case] command: &str,
        #[case] body: &'static str,
    ) {
        let (sink, router) = before_each;
        let (status, json) =
            post_command(router, format!("/api/1/vehicles/{VIN}/command/{command}"), body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["response"]["result"], false);
        assert!(sink.calls().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_vehicle_rejection_as_a_failed_result(
        before_each: BeforeEachReturn,
    ) {
        let (sink, router) = before_each;
        sink.reject_with("vehicle asleep").await;
        let (status, json) =
            post_command(router, format!("/api/1/vehicles/{VIN}/command/honk_horn"), "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["response"]["reason"],
            "dispatch failed: vehicle rejected the command: vehicle asleep"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_503_when_the_transport_is_down(before_each: BeforeEachReturn) {
        let (sink, router) = before_each;
        sink.toggle_offline();
        let (status, _) =
            post_command(router, format!("/api/1/vehicles/{VIN}/command/flash_lights"), "").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[case(SinkError::Authentication("session expired".into()))]
    #[case(SinkError::Transport("connection reset".into()))]
    #[case(SinkError::Cancelled)]
    #[tokio::test]
    async fn it_should_return_503_for_dispatch_failures_other_than_rejection(
        before_each: BeforeEachReturn,
        #[case] failure: SinkError,
    ) {
        let (sink, router) = before_each;
        sink.fail_with(failure).await;
        let (status, json) =
            post_command(router, format!("/api/1/vehicles/{VIN}/command/vent_windows"), "").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["response"]["result"], false);
        assert_eq!(sink.calls().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_the_served_vehicles(before_each: BeforeEachReturn) {
        let (_, router) = before_each;
        let response = router
            .oneshot(Request::get("/api/1/vehicles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([VIN]));
    }
}
