//! Per-(hand, object) grasp classifier.
//!
//! One [`ClassifierState`] exists for every object a hand has evaluated
//! against. Each frame it measures every finger's curl, asks the proximity
//! query whether the fingertip touches the object, updates the probes and
//! feeds the resulting raw predicate through the warm-up debounce.

use super::debounce::Debounce;
use super::hand::{Finger, HandPose, SurfaceId};
use super::math::WarpTransform;
use super::phase::{GraspEvent, GraspPhase};
use super::probe::Probe;
use crate::ports::ProximityQuery;
use serde::{Deserialize, Serialize};

/// Classifier state for one hand against one object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierState {
    probes: [Probe; 5],
    debounce: Debounce,
    surface: SurfaceId,
    warp: WarpTransform,
}

impl ClassifierState {
    /// Creates an idle classifier targeting `surface`.
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            probes: [Probe::default(); 5],
            debounce: Debounce::new(),
            surface,
            warp: WarpTransform::default(),
        }
    }

    /// Updates every probe from `pose` and returns the raw grasp predicate.
    ///
    /// `hits` is scratch space for the proximity query and is left holding
    /// the pinky's result.
    pub fn classify<Q>(&mut self, pose: &HandPose, query: &Q, hits: &mut Vec<SurfaceId>) -> bool
    where
        Q: ProximityQuery + ?Sized,
    {
        for finger in Finger::ALL {
            let curl = pose.curl(finger);

            hits.clear();
            query.query_nearby(
                pose.finger(finger).tip_position,
                finger.probe_radius(),
                hits,
            );
            let colliding = hits.contains(&self.surface);

            self.probes[finger.index()].update(finger, curl, colliding);
        }
        self.raw_predicate()
    }

    /// Runs [`classify`](Self::classify) then the debounce, returning the event.
    pub fn step<Q>(
        &mut self,
        pose: &HandPose,
        query: &Q,
        hits: &mut Vec<SurfaceId>,
    ) -> Option<GraspEvent>
    where
        Q: ProximityQuery + ?Sized,
    {
        let raw = self.classify(pose, query, hits);
        self.debounce.update(raw)
    }

    /// Thumb inside and at least one other finger inside.
    pub fn raw_predicate(&self) -> bool {
        let (thumb, others) = self.probes.split_at(1);
        thumb[0].is_inside && others.iter().any(|p| p.is_inside)
    }

    /// All five probes, indexed by [`Finger::index`].
    pub fn probes(&self) -> &[Probe; 5] {
        &self.probes
    }

    /// Probe of `finger`.
    pub fn probe(&self, finger: Finger) -> &Probe {
        &self.probes[finger.index()]
    }

    /// Fingers whose probe is currently inside.
    pub fn inside_fingers(&self) -> impl Iterator<Item = Finger> + '_ {
        Finger::ALL
            .into_iter()
            .filter(move |f| self.probes[f.index()].is_inside)
    }

    /// Stabilized grasp decision.
    pub fn is_grabbing(&self) -> bool {
        self.debounce.is_grabbing()
    }

    pub fn prev_grabbing(&self) -> bool {
        self.debounce.prev_grabbing()
    }

    /// Consecutive raw-true frames, capped at three.
    pub fn warm_up(&self) -> u32 {
        self.debounce.warm_up()
    }

    /// Current grasp phase.
    pub fn phase(&self) -> GraspPhase {
        self.debounce.phase()
    }

    /// Surface the probes test against.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Keeps the target surface in sync if the object swapped colliders.
    pub fn set_surface(&mut self, surface: SurfaceId) {
        self.surface = surface;
    }

    /// Latest display transform of the object.
    pub fn warp(&self) -> &WarpTransform {
        &self.warp
    }

    /// Replaces the display transform.
    pub fn set_warp(&mut self, warp: WarpTransform) {
        self.warp = warp;
    }
}
