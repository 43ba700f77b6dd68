//! AABB collision detection
//!
//! Coarse, non-swept overlap test over cached face coordinates. The moving
//! box contributes a one-frame lookahead on the vertical axis so the
//! integrator can respond to a ground contact before committing the position
//! update. Horizontal tunneling at extreme velocity is an accepted
//! limitation.

use super::body::Body;

/// True iff the two boxes overlap on all three axes, boundaries inclusive.
///
/// `moving` supplies the vertical velocity for the lookahead; `fixed` is
/// tested as-is.
pub fn overlaps(moving: &Body, fixed: &Body) -> bool {
    let a = moving.faces();
    let b = fixed.faces();

    let x_overlap = a.right >= b.left && a.left <= b.right;
    let y_overlap = a.bottom + moving.vel.y <= b.top && a.top >= b.bottom;
    let z_overlap = a.front >= b.back && a.back <= b.front;

    x_overlap && y_overlap && z_overlap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyConfig;
    use glam::Vec3;
    use proptest::prelude::*;

    /// Unit cube at `pos` with zero velocity
    fn cube_at(pos: Vec3) -> Body {
        let mut cfg = BodyConfig::player();
        cfg.position = pos;
        cfg.velocity = Vec3::ZERO;
        cfg.build().unwrap()
    }

    #[test]
    fn exact_face_touch_counts_as_overlap() {
        // a.right == b.left, all other axes coincident
        let a = cube_at(Vec3::ZERO);
        let b = cube_at(Vec3::new(1.0, 0.0, 0.0));
        assert!(overlaps(&a, &b));

        // Touching on top/bottom
        let below = cube_at(Vec3::ZERO);
        let above = cube_at(Vec3::new(0.0, 1.0, 0.0));
        assert!(overlaps(&above, &below));

        // Touching front/back
        let near = cube_at(Vec3::ZERO);
        let far = cube_at(Vec3::new(0.0, 0.0, 1.0));
        assert!(overlaps(&near, &far));
    }

    #[test]
    fn separated_boxes_miss_per_axis() {
        let origin = cube_at(Vec3::ZERO);
        assert!(!overlaps(&origin, &cube_at(Vec3::new(1.01, 0.0, 0.0))));
        assert!(!overlaps(&origin, &cube_at(Vec3::new(0.0, 1.01, 0.0))));
        assert!(!overlaps(&origin, &cube_at(Vec3::new(0.0, 0.0, 1.01))));
    }

    #[test]
    fn vertical_lookahead_triggers_before_contact() {
        // Falling box 0.05 above the other; the gap closes this tick
        let mut cfg = BodyConfig::player();
        cfg.position = Vec3::new(0.0, 1.05, 0.0);
        cfg.velocity = Vec3::new(0.0, -0.06, 0.0);
        let falling = cfg.build().unwrap();
        let resting = cube_at(Vec3::ZERO);

        assert!(overlaps(&falling, &resting));
        // Without the velocity the same positions miss
        let hovering = cube_at(Vec3::new(0.0, 1.05, 0.0));
        assert!(!overlaps(&hovering, &resting));
    }

    proptest! {
        #[test]
        fn zero_velocity_overlap_is_symmetric(
            ax in -3.0f32..3.0, ay in -3.0f32..3.0, az in -3.0f32..3.0,
            bx in -3.0f32..3.0, by in -3.0f32..3.0, bz in -3.0f32..3.0,
        ) {
            let a = cube_at(Vec3::new(ax, ay, az));
            let b = cube_at(Vec3::new(bx, by, bz));
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
