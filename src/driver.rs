//! Per-hand driver: picks candidate objects, runs their classifiers and
//! turns grasp events into grasp manager requests.

use crate::config::GraspConfig;
use crate::core::{
    ClassifierState, GraspEvent, HandId, HandPose, ObjectId, PhaseChange, SurfaceId,
};
use crate::debug::{probe_markers, ProbeMarker};
use crate::ports::{GraspManager, World};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// What happened during one call to [`HandDriver::evaluate_frame`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// The pose was missing or ill-formed; nothing was evaluated.
    pub skipped: bool,
    /// Objects classified this frame, in evaluation order.
    pub evaluated: Vec<ObjectId>,
    pub events: Vec<(ObjectId, GraspEvent)>,
    pub phase_changes: Vec<(ObjectId, PhaseChange)>,
}

impl FrameReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    /// Event emitted for `object` this frame, if any.
    pub fn event_for(&self, object: ObjectId) -> Option<GraspEvent> {
        self.events
            .iter()
            .find(|(o, _)| *o == object)
            .map(|(_, e)| *e)
    }
}

/// Grasp classification for a single hand.
///
/// Owns one [`ClassifierState`] per object the hand has evaluated against.
/// Drivers share no state with each other, so hands can be processed in any
/// order.
#[derive(Clone, Debug)]
pub struct HandDriver {
    hand: HandId,
    config: GraspConfig,
    classifiers: BTreeMap<ObjectId, ClassifierState>,
    last_pose: Option<HandPose>,
    frame: u64,
    hits: Vec<SurfaceId>,
    candidates: Vec<ObjectId>,
}

impl HandDriver {
    /// Driver for `hand` with no tracked objects.
    pub fn new(hand: HandId, config: GraspConfig) -> Self {
        Self {
            hand,
            config,
            classifiers: BTreeMap::new(),
            last_pose: None,
            frame: 0,
            hits: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Hand this driver evaluates.
    pub fn hand(&self) -> HandId {
        self.hand
    }

    /// Configuration the driver was built with.
    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    /// Number of frames evaluated so far; skipped frames are not counted.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Pose of the last evaluated frame.
    pub fn last_pose(&self) -> Option<&HandPose> {
        self.last_pose.as_ref()
    }

    pub fn classifier(&self, object: ObjectId) -> Option<&ClassifierState> {
        self.classifiers.get(&object)
    }

    /// Objects that currently have classifier state, in id order.
    pub fn tracked_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.classifiers.keys().copied()
    }

    /// Drops all classifier state, e.g. when tracking of the hand is lost.
    pub fn reset(&mut self) {
        self.classifiers.clear();
        self.last_pose = None;
    }

    /// Runs one tracking frame for this hand.
    ///
    /// If the manager reports this hand as already holding an object, only
    /// that object is classified. Otherwise every active object is.
    pub fn evaluate_frame<W, M>(
        &mut self,
        pose: Option<&HandPose>,
        world: &W,
        manager: &mut M,
    ) -> FrameReport
    where
        W: World + ?Sized,
        M: GraspManager + ?Sized,
    {
        let Some(pose) = pose.filter(|p| p.is_well_formed()) else {
            trace!(hand = self.hand.0, "no usable hand pose, skipping frame");
            return FrameReport::skipped();
        };
        self.frame += 1;
        self.last_pose = Some(*pose);

        let held = manager
            .grasped_objects()
            .into_iter()
            .find(|object| manager.is_grasped_by_hand(*object, self.hand));

        self.evict_inactive(world.active_objects(), held);

        let mut candidates = std::mem::take(&mut self.candidates);
        candidates.clear();
        match held {
            Some(object) => candidates.push(object),
            None => candidates.extend_from_slice(world.active_objects()),
        }

        let mut report = FrameReport::default();
        for &object in &candidates {
            if let Some(event) = self.classify_object(object, pose, world, &mut report) {
                self.apply_event(object, event, manager);
                report.events.push((object, event));
            }
        }
        self.candidates = candidates;
        report
    }

    fn classify_object<W>(
        &mut self,
        object: ObjectId,
        pose: &HandPose,
        world: &W,
        report: &mut FrameReport,
    ) -> Option<GraspEvent>
    where
        W: World + ?Sized,
    {
        let Some(surface) = world.surface_of(object) else {
            trace!(hand = self.hand.0, object = object.0, "object has no surface");
            return None;
        };

        let classifier = self
            .classifiers
            .entry(object)
            .or_insert_with(|| ClassifierState::new(surface));
        classifier.set_surface(surface);
        if let Some(warp) = world.pose_of(object) {
            classifier.set_warp(warp);
        }

        let before = classifier.phase();
        let event = classifier.step(pose, world, &mut self.hits);
        let after = classifier.phase();

        report.evaluated.push(object);
        if before != after {
            trace!(
                hand = self.hand.0,
                object = object.0,
                from = before.name(),
                to = after.name(),
                "grasp phase changed"
            );
            report.phase_changes.push((
                object,
                PhaseChange {
                    from: before,
                    to: after,
                    frame: self.frame,
                },
            ));
        }
        event
    }

    fn apply_event<M>(&self, object: ObjectId, event: GraspEvent, manager: &mut M)
    where
        M: GraspManager + ?Sized,
    {
        match event {
            GraspEvent::Begin => {
                if !self.config.two_handed_grasp {
                    manager.request_release_object(object);
                }
                debug!(hand = self.hand.0, object = object.0, "grasp began");
                manager.request_grasp(self.hand, object);
            }
            GraspEvent::End => {
                if manager.is_grasped_by_hand(object, self.hand) {
                    debug!(hand = self.hand.0, object = object.0, "grasp ended");
                    manager.request_release(self.hand);
                } else {
                    debug!(
                        hand = self.hand.0,
                        object = object.0,
                        "grasp ended but object is no longer held by this hand"
                    );
                }
            }
        }
    }

    fn evict_inactive(&mut self, active: &[ObjectId], held: Option<ObjectId>) {
        let before = self.classifiers.len();
        self.classifiers
            .retain(|object, _| held == Some(*object) || active.contains(object));
        let evicted = before - self.classifiers.len();
        if evicted > 0 {
            trace!(hand = self.hand.0, evicted, "evicted inactive classifiers");
        }
    }

    /// Markers for every inside probe of every still-active object, placed
    /// at the fingertips of the last evaluated pose.
    pub fn visualization_snapshot<'a>(
        &'a self,
        active: &'a [ObjectId],
    ) -> impl Iterator<Item = ProbeMarker> + 'a {
        self.last_pose
            .as_ref()
            .into_iter()
            .flat_map(move |pose| probe_markers(&self.classifiers, pose, active))
    }
}
