//! Collaborator ports.
//!
//! The classifier never owns physics, object activity or grasp ownership.
//! Hosts implement these traits over their engine; tests implement them over
//! plain collections.

use crate::core::{HandId, ObjectId, SurfaceId, Vec3, WarpTransform};

/// Spatial proximity query.
pub trait ProximityQuery {
    /// Pushes every surface overlapping the sphere at `point` into `hits`.
    ///
    /// `hits` is cleared by the caller before each query. Order and
    /// duplicates are irrelevant.
    fn query_nearby(&self, point: Vec3, radius: f32, hits: &mut Vec<SurfaceId>);
}

/// Objects eligible for grasp evaluation and their per-object providers.
pub trait ObjectCatalog {
    /// Objects currently active, in evaluation order.
    fn active_objects(&self) -> &[ObjectId];

    /// Collision surface the probes test against; `None` skips the object.
    fn surface_of(&self, object: ObjectId) -> Option<SurfaceId>;

    /// Current rigidbody transform from the object's pose/warp provider.
    fn pose_of(&self, object: ObjectId) -> Option<WarpTransform>;
}

/// Everything the driver reads from the scene in one frame.
pub trait World: ProximityQuery + ObjectCatalog {}

impl<T: ProximityQuery + ObjectCatalog + ?Sized> World for T {}

/// Owner of the global hand/object grasp relation.
///
/// Requests are fire-and-forget; the manager may refuse or override them.
pub trait GraspManager {
    /// Objects presently held by any hand.
    fn grasped_objects(&self) -> Vec<ObjectId>;

    fn is_grasped_by_hand(&self, object: ObjectId, hand: HandId) -> bool;

    fn request_grasp(&mut self, hand: HandId, object: ObjectId);

    /// Releases whatever `hand` holds.
    fn request_release(&mut self, hand: HandId);

    /// Releases `object` from every hand holding it.
    fn request_release_object(&mut self, object: ObjectId);
}
