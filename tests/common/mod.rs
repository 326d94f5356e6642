//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use grasp_heuristic::core::{
    Chirality, FingerPose, HandId, HandPose, ObjectId, SurfaceId, Vec3, WarpTransform,
};
use grasp_heuristic::ports::{GraspManager, ObjectCatalog, ProximityQuery};
use std::collections::BTreeMap;

/// Curls of a hand holding something between thumb and index.
pub const PINCH: [f32; 5] = [0.2, 0.3, 0.9, 0.9, 0.9];

/// Every finger extended.
pub const OPEN: [f32; 5] = [0.9; 5];

/// Surface used for object `id`.
pub fn surface(object: ObjectId) -> SurfaceId {
    SurfaceId(object.0 * 10)
}

/// Left or right hand pose whose per-finger curls equal `curls` exactly.
///
/// Fingertip `i` sits at `x = i`, which [`FakeWorld`] uses to tell fingers
/// apart.
pub fn pose_with_curls(chirality: Chirality, curls: [f32; 5]) -> HandPose {
    let mut fingers = [FingerPose::default(); 5];
    for (i, finger) in fingers.iter_mut().enumerate() {
        let c = curls[i];
        let s = (1.0 - c * c).max(0.0).sqrt();
        finger.direction = if i == 0 {
            Vec3::new(c * chirality_sign(chirality), s, 0.0)
        } else {
            Vec3::new(0.0, s, c)
        };
        finger.tip_position = Vec3::new(i as f32, 0.0, 0.0);
    }
    HandPose {
        chirality,
        direction: Vec3::UNIT_Z,
        x_basis: Vec3::UNIT_X,
        fingers,
    }
}

fn chirality_sign(chirality: Chirality) -> f32 {
    match chirality {
        Chirality::Left => 1.0,
        Chirality::Right => -1.0,
    }
}

/// Scene where each object's fingertip contacts are set explicitly.
#[derive(Default)]
pub struct FakeWorld {
    pub active: Vec<ObjectId>,
    pub touching: BTreeMap<ObjectId, [bool; 5]>,
    pub queries: std::cell::Cell<usize>,
}

impl FakeWorld {
    pub fn with_active(active: &[ObjectId]) -> Self {
        Self {
            active: active.to_vec(),
            ..Self::default()
        }
    }

    pub fn touch(&mut self, object: ObjectId, fingers: [bool; 5]) {
        self.touching.insert(object, fingers);
    }
}

impl ProximityQuery for FakeWorld {
    fn query_nearby(&self, point: Vec3, _radius: f32, hits: &mut Vec<SurfaceId>) {
        self.queries.set(self.queries.get() + 1);
        let finger = point.x as usize;
        for (object, fingers) in &self.touching {
            if fingers[finger] {
                hits.push(surface(*object));
            }
        }
    }
}

impl ObjectCatalog for FakeWorld {
    fn active_objects(&self) -> &[ObjectId] {
        &self.active
    }

    fn surface_of(&self, object: ObjectId) -> Option<SurfaceId> {
        Some(surface(object))
    }

    fn pose_of(&self, _object: ObjectId) -> Option<WarpTransform> {
        Some(WarpTransform::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Grasp(HandId, ObjectId),
    Release(HandId),
    ReleaseObject(ObjectId),
}

/// Grasp manager that honours every request and logs it.
#[derive(Default)]
pub struct FakeManager {
    pub holders: BTreeMap<ObjectId, Vec<HandId>>,
    pub log: Vec<Request>,
}

impl FakeManager {
    /// Makes `hand` hold `object` without logging a request.
    pub fn assign(&mut self, hand: HandId, object: ObjectId) {
        self.drop_hand(hand);
        self.holders.entry(object).or_default().push(hand);
    }

    pub fn is_held(&self, hand: HandId, object: ObjectId) -> bool {
        self.is_grasped_by_hand(object, hand)
    }

    pub fn holders_of(&self, object: ObjectId) -> Vec<HandId> {
        self.holders.get(&object).cloned().unwrap_or_default()
    }

    fn drop_hand(&mut self, hand: HandId) {
        for hands in self.holders.values_mut() {
            hands.retain(|h| *h != hand);
        }
        self.holders.retain(|_, hands| !hands.is_empty());
    }
}

impl GraspManager for FakeManager {
    fn grasped_objects(&self) -> Vec<ObjectId> {
        self.holders.keys().copied().collect()
    }

    fn is_grasped_by_hand(&self, object: ObjectId, hand: HandId) -> bool {
        self.holders
            .get(&object)
            .is_some_and(|hands| hands.contains(&hand))
    }

    fn request_grasp(&mut self, hand: HandId, object: ObjectId) {
        self.log.push(Request::Grasp(hand, object));
        self.assign(hand, object);
    }

    fn request_release(&mut self, hand: HandId) {
        self.log.push(Request::Release(hand));
        self.drop_hand(hand);
    }

    fn request_release_object(&mut self, object: ObjectId) {
        self.log.push(Request::ReleaseObject(object));
        self.holders.remove(&object);
    }
}
