//! Tracked hand pose sample and identifiers.
//!
//! A [`HandPose`] is produced once per tracking frame by the hand-tracking
//! layer. The classifier only reads it for the duration of one step.

use super::math::Vec3;
use serde::{Deserialize, Serialize};

/// Identifies one tracked hand.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct HandId(pub u32);

/// Identifies one graspable object.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Identifies one collision surface reported by the proximity query.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// Which hand a pose belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Chirality {
    Left,
    Right,
}

impl Chirality {
    /// Sign applied to the lateral basis when building the thumb reference.
    pub fn thumb_sign(&self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// The five fingers, in probe order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position of this finger in per-finger arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::Thumb => 0,
            Self::Index => 1,
            Self::Middle => 2,
            Self::Ring => 3,
            Self::Pinky => 4,
        }
    }

    /// Whether this is the thumb.
    pub fn is_thumb(&self) -> bool {
        matches!(self, Self::Thumb)
    }
}

/// Direction and fingertip position of a single finger.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FingerPose {
    /// Unit direction of the distal finger segment.
    pub direction: Vec3,
    pub tip_position: Vec3,
}

/// One frame of hand-tracking data.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct HandPose {
    pub chirality: Chirality,
    /// Palm forward direction.
    pub direction: Vec3,
    /// Lateral basis vector of the palm frame.
    pub x_basis: Vec3,
    /// Indexed by [`Finger::index`].
    pub fingers: [FingerPose; 5],
}

impl HandPose {
    /// Pose of `finger`.
    pub fn finger(&self, finger: Finger) -> &FingerPose {
        &self.fingers[finger.index()]
    }

    /// Direction a finger points in when curled closed.
    ///
    /// The palm forward direction for the four fingers; the lateral basis,
    /// mirrored for the right hand, for the thumb.
    pub fn reference_direction(&self, finger: Finger) -> Vec3 {
        if finger.is_thumb() {
            self.x_basis.scale(self.chirality.thumb_sign())
        } else {
            self.direction
        }
    }

    /// Alignment of `finger` with its closed reference direction.
    pub fn curl(&self, finger: Finger) -> f32 {
        self.finger(finger)
            .direction
            .dot(&self.reference_direction(finger))
    }

    /// True when every vector in the sample is finite.
    pub fn is_well_formed(&self) -> bool {
        self.direction.is_finite()
            && self.x_basis.is_finite()
            && self
                .fingers
                .iter()
                .all(|f| f.direction.is_finite() && f.tip_position.is_finite())
    }
}
