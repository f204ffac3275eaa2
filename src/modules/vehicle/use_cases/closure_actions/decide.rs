// Pure mapping from a closure intent to a closure message.
//
// Responsibilities
// - Pick the target panel and the move verb.
// - Never perform input or output. This step cannot fail.

use crate::modules::vehicle::core::closures::{ClosureTarget, MoveVerb};
use crate::modules::vehicle::core::messages::ClosureMessage;
use crate::modules::vehicle::use_cases::closure_actions::command::ClosureIntent;

pub fn decide_closure(intent: ClosureIntent) -> ClosureMessage {
    let (target, verb) = match intent {
        ClosureIntent::ActuateTrunk => (ClosureTarget::Trunk, MoveVerb::Move),
        ClosureIntent::OpenTrunk => (ClosureTarget::Trunk, MoveVerb::Open),
        ClosureIntent::CloseTrunk => (ClosureTarget::Trunk, MoveVerb::Close),
        ClosureIntent::OpenFrunk => (ClosureTarget::Frunk, MoveVerb::Move),
    };
    ClosureMessage { target, verb }
}
