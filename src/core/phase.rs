//! Grasp phases and transition events.
//!
//! Every classifier moves through three phases:
//!
//! ```text
//! Idle --raw true--> WarmingUp --warm-up met--> Grasping
//!   ^                    |                          |
//!   +----- raw false ----+------- raw false --------+
//! ```
//!
//! There is no terminal phase; a classifier lives until its driver evicts it.

use serde::{Deserialize, Serialize};

/// Debounced grasp phase of one (hand, object) classifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GraspPhase {
    #[default]
    Idle,
    WarmingUp,
    Grasping,
}

impl GraspPhase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::WarmingUp => "WarmingUp",
            Self::Grasping => "Grasping",
        }
    }

    /// True only for the stabilized grasp.
    pub fn is_grasping(&self) -> bool {
        matches!(self, Self::Grasping)
    }
}

/// Change of the stabilized grasp decision, emitted at most once per frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GraspEvent {
    Begin,
    End,
}

impl GraspEvent {
    /// Derives the event from the previous and current stabilized state.
    pub fn between(prev_grabbing: bool, is_grabbing: bool) -> Option<Self> {
        match (prev_grabbing, is_grabbing) {
            (false, true) => Some(Self::Begin),
            (true, false) => Some(Self::End),
            _ => None,
        }
    }
}

/// Record of a phase change observed on a given frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: GraspPhase,
    pub to: GraspPhase,
    /// Frame counter of the owning driver when the change happened.
    pub frame: u64,
}
