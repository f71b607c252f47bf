//! Events emitted back to the driving runtime.

use serde::{Deserialize, Serialize};

use crate::state::SessionState;

/// Event delivered to the runtime's observers after a tool call.
///
/// The only variant today is the state snapshot; the tagged representation
/// leaves room for the runtime to multiplex other event kinds on the same
/// channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Full copy of the session state as of the completing mutation.
    StateSnapshot { snapshot: SessionState },
}

/// Wrap the post-mutation state into a snapshot event.
///
/// The copy reflects the state at the moment the mutating call completed;
/// delivery ordering beyond that is the runtime's concern.
pub fn state_snapshot(state: &SessionState) -> SessionEvent {
    SessionEvent::StateSnapshot {
        snapshot: state.clone(),
    }
}
