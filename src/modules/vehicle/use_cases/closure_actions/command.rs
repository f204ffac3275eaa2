// Closure intents.
//
// Purpose
// - Express what the caller wants a powered body panel to do, before any protocol detail.
//
// Boundaries
// - The frunk can only be opened remotely. There is deliberately no intent that closes it.

use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ClosureIntent {
    ActuateTrunk,
    OpenTrunk,
    CloseTrunk,
    OpenFrunk,
}
