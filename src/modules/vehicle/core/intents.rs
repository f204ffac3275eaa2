// Caller-facing actions, as named on the public command surface.
//
// Responsibilities
// - Inbound adapters read these from `{"command": "<name>", ...}`.
// - `allowed_fields` names the body fields each command accepts, so anything else can be
//   refused instead of silently dropped.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum VehicleIntent {
    ActuateTrunk,
    OpenTrunk,
    CloseTrunk,
    OpenFrunk,
    HonkHorn,
    FlashLights,
    ChangeSunroofState { level: i64 },
    CloseWindows,
    VentWindows,
    ChargePortOpen,
    ChargePortClose,
}

impl VehicleIntent {
    pub fn allowed_fields(&self) -> &'static [&'static str] {
        match self {
            VehicleIntent::ChangeSunroofState { .. } => &["level"],
            _ => &[],
        }
    }
}
