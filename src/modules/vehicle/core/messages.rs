// Domain messages handed to the execution sink.
//
// Purpose
// - Describe the fully formed command for each of the two on-vehicle domains.
//
// Responsibilities
// - Carry only the fields each action needs. A message is built per call and never reused.
//
// Boundaries
// - No byte-level encoding here. The transport behind the sink owns the wire format.

use serde::Serialize;

use crate::modules::vehicle::core::closures::{ClosureTarget, MoveVerb};

/// Command for the body-control (closure) domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClosureMessage {
    pub target: ClosureTarget,
    pub verb: MoveVerb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAction {
    Close,
    Vent,
}

/// Command for the vehicle-control (infotainment) domain. One variant per supported action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum VehicleControlMessage {
    HonkHorn,
    FlashLights,
    SunroofOpenClose { absolute_level: i32 },
    Window { selector: WindowAction },
    ChargePortDoorOpen,
    ChargePortDoorClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "domain", content = "message", rename_all = "snake_case")]
pub enum DomainMessage {
    Closure(ClosureMessage),
    VehicleControl(VehicleControlMessage),
}

impl From<ClosureMessage> for DomainMessage {
    fn from(message: ClosureMessage) -> Self {
        DomainMessage::Closure(message)
    }
}

impl From<VehicleControlMessage> for DomainMessage {
    fn from(message: VehicleControlMessage) -> Self {
        DomainMessage::VehicleControl(message)
    }
}
