// Public command surface for one vehicle.
//
// Responsibilities
// - Select exactly one handler per action: trunk and frunk go to the closure domain,
//   everything else to the vehicle-control domain.
// - Build a fresh message per call and submit it once.
//
// Boundaries
// - Failures come back unchanged. Retrying is up to the caller or the transport.

use std::sync::Arc;

use crate::modules::vehicle::core::intents::VehicleIntent;
use crate::modules::vehicle::use_cases::car_server_actions::command::CarServerIntent;
use crate::modules::vehicle::use_cases::car_server_actions::handler::CarServerActionHandler;
use crate::modules::vehicle::use_cases::closure_actions::command::ClosureIntent;
use crate::modules::vehicle::use_cases::closure_actions::handler::ClosureActionHandler;
use crate::modules::vehicle::use_cases::errors::ActionError;
use crate::shared::core::call_context::CallContext;
use crate::shared::infrastructure::execution_sink::ExecutionSink;

pub struct Vehicle<TSink>
where
    TSink: ExecutionSink + 'static,
{
    sink: Arc<TSink>,
    closures: ClosureActionHandler<TSink>,
    car_server: CarServerActionHandler<TSink>,
}

impl<TSink> Vehicle<TSink>
where
    TSink: ExecutionSink + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self {
            closures: ClosureActionHandler::new(sink.clone()),
            car_server: CarServerActionHandler::new(sink.clone()),
            sink,
        }
    }

    pub fn sink(&self) -> &Arc<TSink> {
        &self.sink
    }

    /// Run a caller-facing intent through the named method it stands for.
    pub async fn execute(
        &self,
        context: &CallContext,
        intent: VehicleIntent,
    ) -> Result<(), ActionError> {
        match intent {
            VehicleIntent::ActuateTrunk => self.actuate_trunk(context).await,
            VehicleIntent::OpenTrunk => self.open_trunk(context).await,
            VehicleIntent::CloseTrunk => self.close_trunk(context).await,
            VehicleIntent::OpenFrunk => self.open_frunk(context).await,
            VehicleIntent::HonkHorn => self.honk_horn(context).await,
            VehicleIntent::FlashLights => self.flash_lights(context).await,
            VehicleIntent::ChangeSunroofState { level } => {
                self.change_sunroof_state(context, level).await
            }
            VehicleIntent::CloseWindows => self.close_windows(context).await,
            VehicleIntent::VentWindows => self.vent_windows(context).await,
            VehicleIntent::ChargePortOpen => self.charge_port_open(context).await,
            VehicleIntent::ChargePortClose => self.charge_port_close(context).await,
        }
    }

    /// Opens the trunk, or toggles it between open and closed, depending on the vehicle.
    ///
    /// Vehicles whose trunk can only be powered open will open it. Vehicles with a fully
    /// powered trunk will toggle it. Check `can_actuate_trunks` in the vehicle configuration
    /// before relying on either outcome.
    pub async fn actuate_trunk(&self, context: &CallContext) -> Result<(), ActionError> {
        self.closures.handle(context, ClosureIntent::ActuateTrunk).await
    }

    /// Opens the trunk on vehicles with a powered trunk. No effect on other vehicles.
    ///
    /// Check `can_actuate_trunks` in the vehicle configuration to know which applies.
    pub async fn open_trunk(&self, context: &CallContext) -> Result<(), ActionError> {
        self.closures.handle(context, ClosureIntent::OpenTrunk).await
    }

    /// Closes the trunk on vehicles with a powered trunk. No effect on other vehicles.
    ///
    /// Check `can_actuate_trunks` in the vehicle configuration to know which applies.
    pub async fn close_trunk(&self, context: &CallContext) -> Result<(), ActionError> {
        self.closures.handle(context, ClosureIntent::CloseTrunk).await
    }

    /// Opens the frunk. The frunk cannot be closed remotely.
    pub async fn open_frunk(&self, context: &CallContext) -> Result<(), ActionError> {
        self.closures.handle(context, ClosureIntent::OpenFrunk).await
    }

    pub async fn honk_horn(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::HonkHorn).await
    }

    pub async fn flash_lights(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::FlashLights).await
    }

    /// Moves the sunroof to an absolute level.
    ///
    /// The level is sent as is. Which levels are valid depends on the vehicle, and invalid
    /// ones are refused by the vehicle. Only a level that does not fit the 32-bit wire
    /// field is refused locally.
    pub async fn change_sunroof_state(
        &self,
        context: &CallContext,
        level: i64,
    ) -> Result<(), ActionError> {
        self.car_server
            .handle(context, CarServerIntent::ChangeSunroofState { level })
            .await
    }

    pub async fn close_windows(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::CloseWindows).await
    }

    pub async fn vent_windows(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::VentWindows).await
    }

    pub async fn charge_port_open(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::ChargePortOpen).await
    }

    pub async fn charge_port_close(&self, context: &CallContext) -> Result<(), ActionError> {
        self.car_server.handle(context, CarServerIntent::ChargePortClose).await
    }
}
