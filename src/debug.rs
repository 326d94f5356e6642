//! Read-only snapshot of probe state for debug drawing.

use crate::core::{ClassifierState, Finger, HandPose, ObjectId, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RGBA colour hint for an inside probe.
pub const INSIDE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// A sphere to draw at a fingertip whose probe is inside an object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbeMarker {
    pub object: ObjectId,
    pub finger: Finger,
    pub position: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Yields one marker per inside probe of every classifier whose object is
/// still in `active`. Positions come from `pose`'s fingertips and radii from
/// the probe query radius.
pub fn probe_markers<'a>(
    classifiers: &'a BTreeMap<ObjectId, ClassifierState>,
    pose: &'a HandPose,
    active: &'a [ObjectId],
) -> impl Iterator<Item = ProbeMarker> + 'a {
    classifiers
        .iter()
        .filter(move |(object, _)| active.contains(*object))
        .flat_map(move |(object, classifier)| {
            classifier.inside_fingers().map(move |finger| ProbeMarker {
                object: *object,
                finger,
                position: pose.finger(finger).tip_position,
                radius: finger.probe_radius(),
                color: INSIDE_COLOR,
            })
        })
}
