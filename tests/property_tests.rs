//! Property-based tests for the grasp classifier.
//!
//! These tests use proptest to verify the probe, debounce and predicate
//! rules hold across many randomly generated frame sequences.

mod common;

use common::{pose_with_curls, surface, FakeWorld};
use grasp_heuristic::core::{
    candidate_inside, Chirality, ClassifierState, Debounce, Finger, FingerPose, HandPose,
    ObjectId, Probe, Vec3, EXTENDED_CURL,
};
use grasp_heuristic::GraspEvent;
use proptest::prelude::*;

const OBJECT: ObjectId = ObjectId(3);

prop_compose! {
    fn arbitrary_finger()(index in 0..5usize) -> Finger {
        Finger::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_chirality()(left in any::<bool>()) -> Chirality {
        if left { Chirality::Left } else { Chirality::Right }
    }
}

prop_compose! {
    fn unit_vector()(x in -1.0f32..1.0, y in -1.0f32..1.0, z in -1.0f32..1.0) -> Vec3 {
        let v = Vec3::new(x, y, z).normalize();
        if v == Vec3::ZERO { Vec3::UNIT_Y } else { v }
    }
}

prop_compose! {
    fn arbitrary_pose()(
        chirality in arbitrary_chirality(),
        direction in unit_vector(),
        x_basis in unit_vector(),
        dirs in prop::array::uniform5(unit_vector()),
    ) -> HandPose {
        let mut fingers = [FingerPose::default(); 5];
        for (finger, dir) in fingers.iter_mut().zip(dirs) {
            finger.direction = dir;
        }
        HandPose { chirality, direction, x_basis, fingers }
    }
}

/// Feeds raw predicates through a debounce, collecting the events.
fn debounce_events(raws: &[bool]) -> Vec<Option<GraspEvent>> {
    let mut debounce = Debounce::new();
    raws.iter().map(|raw| debounce.update(*raw)).collect()
}

fn step(state: &mut ClassifierState, curls: [f32; 5], touching: [bool; 5]) -> Option<GraspEvent> {
    let mut world = FakeWorld::with_active(&[OBJECT]);
    world.touch(OBJECT, touching);
    state.step(
        &pose_with_curls(Chirality::Left, curls),
        &world,
        &mut Vec::new(),
    )
}

proptest! {
    #[test]
    fn extended_finger_is_never_a_candidate(curl in EXTENDED_CURL..=1.0f32, colliding in any::<bool>()) {
        prop_assert!(!candidate_inside(curl, colliding));
    }

    #[test]
    fn curl_of_unit_vectors_stays_in_dot_bounds(pose in arbitrary_pose(), finger in arbitrary_finger()) {
        let curl = pose.curl(finger);
        prop_assert!((-1.0 - 1e-5..=1.0 + 1e-5).contains(&curl));
    }

    #[test]
    fn inside_probe_holds_while_curl_stays_at_or_below_baseline(
        finger in arbitrary_finger(),
        entry_curl in -1.0f32..EXTENDED_CURL,
        frames in prop::collection::vec((0.0f32..=1.0, any::<bool>()), 1..20),
    ) {
        let mut probe = Probe::default();
        probe.update(finger, entry_curl, true);
        prop_assert!(probe.is_inside);
        let baseline = probe.curl;

        for (t, colliding) in frames {
            let curl = baseline - t * (baseline + 1.0);
            probe.update(finger, curl, colliding);
            prop_assert!(probe.is_inside);
            prop_assert_eq!(probe.curl, baseline);
        }
    }

    #[test]
    fn begin_only_after_three_consecutive_raw_frames(raws in prop::collection::vec(any::<bool>(), 0..60)) {
        let events = debounce_events(&raws);
        let mut run = 0usize;
        for (raw, event) in raws.iter().zip(&events) {
            let prev_run = run;
            run = if *raw { run + 1 } else { 0 };
            let expected = if run == 3 {
                Some(GraspEvent::Begin)
            } else if run == 0 && prev_run >= 3 {
                Some(GraspEvent::End)
            } else {
                None
            };
            prop_assert_eq!(*event, expected);
        }
    }

    #[test]
    fn begin_and_end_alternate(raws in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut grabbing = false;
        for event in debounce_events(&raws).into_iter().flatten() {
            match event {
                GraspEvent::Begin => prop_assert!(!grabbing),
                GraspEvent::End => prop_assert!(grabbing),
            }
            grabbing = event == GraspEvent::Begin;
        }
    }

    #[test]
    fn no_grasp_without_thumb(
        frames in prop::collection::vec(
            (prop::array::uniform4(-1.0f32..1.0), prop::array::uniform4(any::<bool>())),
            1..15,
        ),
        thumb_curl in -1.0f32..1.0,
    ) {
        let mut state = ClassifierState::new(surface(OBJECT));
        for (curls, touching) in frames {
            let curls = [thumb_curl, curls[0], curls[1], curls[2], curls[3]];
            let touching = [false, touching[0], touching[1], touching[2], touching[3]];
            let event = step(&mut state, curls, touching);
            prop_assert!(!state.probe(Finger::Thumb).is_inside);
            prop_assert!(!state.raw_predicate());
            prop_assert!(event.is_none());
        }
    }

    #[test]
    fn open_hand_stays_idle_even_when_colliding(frames in 1..30usize) {
        let mut state = ClassifierState::new(surface(OBJECT));
        for _ in 0..frames {
            prop_assert!(step(&mut state, [0.9; 5], [true; 5]).is_none());
            prop_assert!(!state.is_grabbing());
        }
    }
}
