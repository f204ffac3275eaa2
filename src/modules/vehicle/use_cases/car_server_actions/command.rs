// Vehicle-control intents.
//
// Purpose
// - Express horn, lights, sunroof, window and charge port requests before any protocol detail.
//
// Responsibilities
// - Carry the caller's sunroof level as given. Whether it fits the wire field is decided later.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarServerIntent {
    HonkHorn,
    FlashLights,
    ChangeSunroofState { level: i64 },
    CloseWindows,
    VentWindows,
    ChargePortOpen,
    ChargePortClose,
}
