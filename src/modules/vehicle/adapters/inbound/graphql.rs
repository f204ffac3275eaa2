use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::vehicle::core::intents::VehicleIntent;
use crate::shared::core::call_context::CallContext;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GqlCommand {
    ActuateTrunk,
    OpenTrunk,
    CloseTrunk,
    OpenFrunk,
    HonkHorn,
    FlashLights,
    ChangeSunroofState,
    CloseWindows,
    VentWindows,
    ChargePortOpen,
    ChargePortClose,
}

impl GqlCommand {
    fn into_intent(self, level: Option<i64>) -> GqlResult<VehicleIntent> {
        let intent = match self {
            GqlCommand::ActuateTrunk => VehicleIntent::ActuateTrunk,
            GqlCommand::OpenTrunk => VehicleIntent::OpenTrunk,
            GqlCommand::CloseTrunk => VehicleIntent::CloseTrunk,
            GqlCommand::OpenFrunk => VehicleIntent::OpenFrunk,
            GqlCommand::HonkHorn => VehicleIntent::HonkHorn,
            GqlCommand::FlashLights => VehicleIntent::FlashLights,
            GqlCommand::ChangeSunroofState => VehicleIntent::ChangeSunroofState {
                level: level.ok_or("changeSunroofState requires a level")?,
            },
            GqlCommand::CloseWindows => VehicleIntent::CloseWindows,
            GqlCommand::VentWindows => VehicleIntent::VentWindows,
            GqlCommand::ChargePortOpen => VehicleIntent::ChargePortOpen,
            GqlCommand::ChargePortClose => VehicleIntent::ChargePortClose,
        };
        if level.is_some() && !intent.allowed_fields().contains(&"level") {
            return Err(format!("{self:?} does not take a level").into());
        }
        Ok(intent)
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct GqlCommandResult {
    pub result: bool,
    pub reason: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn vehicles(&self, context: &Context<'_>) -> Vec<String> {
        context.data_unchecked::<AppState>().vins()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn send_command(
        &self,
        context: &Context<'_>,
        vin: String,
        command: GqlCommand,
        level: Option<i64>,
    ) -> GqlResult<GqlCommandResult> {
        let state = context.data_unchecked::<AppState>();
        let vehicle = state
            .vehicle(&vin)
            .ok_or_else(|| async_graphql::Error::new(format!("unknown vehicle {vin}")))?;
        let intent = command.into_intent(level)?;

        let call = CallContext::new();
        tracing::info!(request_id = %call.request_id, %vin, ?intent, "command received");

        Ok(match vehicle.execute(&call, intent).await {
            Ok(()) => GqlCommandResult {
                result: true,
                reason: String::new(),
            },
            Err(error) => GqlCommandResult {
                result: false,
                reason: error.to_string(),
            },
        })
    }
}
