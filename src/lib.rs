//! Grasp Heuristic: per-frame grasp classification for tracked hands
//!
//! Decides, once per tracking frame, whether a hand is grasping an object.
//! Each (hand, object) pair owns a classifier with five fingertip probes.
//! A probe goes inside when its fingertip touches the object while the
//! finger is curled, and comes back out only when the finger uncurls. The
//! hand grasps when the thumb and at least one other finger are inside for
//! three consecutive frames.
//!
//! # Core Concepts
//!
//! - **Probe**: per-finger inside/curl state with hysteresis
//! - **ClassifierState**: five probes plus the warm-up debounce
//! - **HandDriver**: one per hand; picks candidate objects and issues
//!   grasp/release requests to a [`ports::GraspManager`]
//!
//! # Example
//!
//! ```rust
//! use grasp_heuristic::core::{
//!     Chirality, FingerPose, HandId, HandPose, ObjectId, SurfaceId, Vec3, WarpTransform,
//! };
//! use grasp_heuristic::ports::{GraspManager, ObjectCatalog, ProximityQuery};
//! use grasp_heuristic::HandDriverBuilder;
//!
//! struct Scene {
//!     active: Vec<ObjectId>,
//! }
//!
//! impl ProximityQuery for Scene {
//!     fn query_nearby(&self, _point: Vec3, _radius: f32, hits: &mut Vec<SurfaceId>) {
//!         hits.push(SurfaceId(1));
//!     }
//! }
//!
//! impl ObjectCatalog for Scene {
//!     fn active_objects(&self) -> &[ObjectId] {
//!         &self.active
//!     }
//!     fn surface_of(&self, object: ObjectId) -> Option<SurfaceId> {
//!         Some(SurfaceId(object.0))
//!     }
//!     fn pose_of(&self, _object: ObjectId) -> Option<WarpTransform> {
//!         None
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Manager {
//!     held: Option<(HandId, ObjectId)>,
//! }
//!
//! impl GraspManager for Manager {
//!     fn grasped_objects(&self) -> Vec<ObjectId> {
//!         self.held.iter().map(|(_, o)| *o).collect()
//!     }
//!     fn is_grasped_by_hand(&self, object: ObjectId, hand: HandId) -> bool {
//!         self.held == Some((hand, object))
//!     }
//!     fn request_grasp(&mut self, hand: HandId, object: ObjectId) {
//!         self.held = Some((hand, object));
//!     }
//!     fn request_release(&mut self, hand: HandId) {
//!         self.held = self.held.filter(|(h, _)| *h != hand);
//!     }
//!     fn request_release_object(&mut self, object: ObjectId) {
//!         self.held = self.held.filter(|(_, o)| *o != object);
//!     }
//! }
//!
//! // A fist: every finger curled, every fingertip touching surface 1.
//! let fist = HandPose {
//!     chirality: Chirality::Right,
//!     direction: Vec3::UNIT_Z,
//!     x_basis: Vec3::UNIT_X,
//!     fingers: [FingerPose { direction: Vec3::UNIT_Y, tip_position: Vec3::ZERO }; 5],
//! };
//!
//! let scene = Scene { active: vec![ObjectId(1)] };
//! let mut manager = Manager::default();
//! let mut driver = HandDriverBuilder::new().hand(HandId(0)).build().unwrap();
//!
//! for _ in 0..3 {
//!     driver.evaluate_frame(Some(&fist), &scene, &mut manager);
//! }
//! assert!(manager.is_grasped_by_hand(ObjectId(1), HandId(0)));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod debug;
pub mod driver;
pub mod ports;

// Re-export commonly used types
pub use builder::{BuildError, HandDriverBuilder};
pub use config::{ConfigError, GraspConfig};
pub use crate::core::{ClassifierState, GraspEvent, GraspPhase, HandPose, Probe};
pub use debug::ProbeMarker;
pub use driver::{FrameReport, HandDriver};
