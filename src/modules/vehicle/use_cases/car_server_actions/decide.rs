// Pure mapping from a vehicle-control intent to a vehicle-control message.
//
// Responsibilities
// - One table from intent to message variant. Every action only differs in which
//   variant is populated.
// - Reject a sunroof level the wire field cannot hold. Levels that fit are passed
//   through untouched; the vehicle decides whether a position is valid.
// - Never perform input or output.

use crate::modules::vehicle::core::messages::{VehicleControlMessage, WindowAction};
use crate::modules::vehicle::use_cases::car_server_actions::command::CarServerIntent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("sunroof level {level} is outside the representable range {min}..={max}")]
    SunroofLevelOutOfRange { level: i64, min: i32, max: i32 },
}

pub fn decide_car_server(intent: CarServerIntent) -> Result<VehicleControlMessage, DecideError> {
    let message = match intent {
        CarServerIntent::HonkHorn => VehicleControlMessage::HonkHorn,
        CarServerIntent::FlashLights => VehicleControlMessage::FlashLights,
        CarServerIntent::ChangeSunroofState { level } => VehicleControlMessage::SunroofOpenClose {
            absolute_level: sunroof_level(level)?,
        },
        CarServerIntent::CloseWindows => VehicleControlMessage::Window {
            selector: WindowAction::Close,
        },
        CarServerIntent::VentWindows => VehicleControlMessage::Window {
            selector: WindowAction::Vent,
        },
        CarServerIntent::ChargePortOpen => VehicleControlMessage::ChargePortDoorOpen,
        CarServerIntent::ChargePortClose => VehicleControlMessage::ChargePortDoorClose,
    };
    Ok(message)
}

fn sunroof_level(level: i64) -> Result<i32, DecideError> {
    i32::try_from(level).map_err(|_| DecideError::SunroofLevelOutOfRange {
        level,
        min: i32::MIN,
        max: i32::MAX,
    })
}
