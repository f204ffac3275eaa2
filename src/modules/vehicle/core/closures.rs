// Closure vocabulary for the body-control domain.
//
// Purpose
// - Name the powered body panels that can be addressed remotely and the verbs they accept.
//
// Boundaries
// - Which verb a panel actually honors is a vehicle capability; this module does not know it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureTarget {
    Trunk,
    Frunk,
}

/// How a closure should move.
///
/// `Move` is the generic actuation: it opens a panel that can only be powered open
/// and toggles a panel that can be powered both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveVerb {
    Open,
    Close,
    Move,
}
