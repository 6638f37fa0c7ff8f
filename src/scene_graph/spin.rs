use std::{
    f32::consts::TAU,
    time::{Duration, Instant},
};

use glam::{Quat, Vec3};

use crate::scene_graph::{render_object::RenderObject, transform::Transform};

/// One full turn every five seconds of wall clock.
pub const SPIN_PERIOD: Duration = Duration::from_millis(5000);

/// Angle covered in `delta` when a full turn takes `period`. Not clamped: long gaps overshoot a turn.
pub fn rotation_angle(delta: Duration, period: Duration) -> f32 {
    (TAU as f64 * delta.as_secs_f64() / period.as_secs_f64()) as f32
}

/// The object's transform after spinning from its last update until `now`.
/// Objects without a rotation axis stay put.
pub fn spun(object: &RenderObject, now: Instant, period: Duration) -> Transform {
    if object.rotation_axis == Vec3::ZERO {
        return object.transform;
    }

    let delta = now.saturating_duration_since(object.last_update);
    let angle = rotation_angle(delta, period);

    object
        .transform
        .rotated(Quat::from_axis_angle(object.rotation_axis, angle))
}

pub fn update(object: &mut RenderObject, now: Instant, period: Duration) {
    object.transform = spun(object, now, period);
    object.last_update = now;
}

#[cfg(test)]
mod tests {
    use glam::Mat4;
    use id_arena::Arena;

    use super::*;
    use crate::{geometry::Mesh, geometry::ShapeKind, scene_graph::scene_mesh::SceneMesh};

    fn object_at(created: Instant, axis: Vec3) -> RenderObject {
        let mut meshes: Arena<SceneMesh> = Arena::new();
        let mesh = meshes.alloc(SceneMesh::new(Mesh::from_shape(ShapeKind::Octahedron)));
        RenderObject::new(
            "test",
            mesh,
            Vec3::new(2.0, -1.0, -10.0),
            axis,
            created,
        )
    }

    #[test]
    fn full_period_is_full_turn() {
        assert!((rotation_angle(SPIN_PERIOD, SPIN_PERIOD) - TAU).abs() < 1e-6);
        assert!((rotation_angle(SPIN_PERIOD / 4, SPIN_PERIOD) - TAU / 4.0).abs() < 1e-6);
        assert_eq!(rotation_angle(Duration::ZERO, SPIN_PERIOD), 0.0);
    }

    #[test]
    fn full_turn_restores_transform() {
        let start = Instant::now();
        let mut object = object_at(start, Vec3::new(1.0, 1.0, 0.2));
        let before = object.transform.matrix();

        update(&mut object, start + SPIN_PERIOD, SPIN_PERIOD);

        assert!(object.transform.matrix().abs_diff_eq(before, 1e-5));
        assert_eq!(object.last_update, start + SPIN_PERIOD);
    }

    #[test]
    fn split_updates_match_single_update() {
        let start = Instant::now();
        let axis = Vec3::new(0.0, 1.0, 1.0);

        let mut stepped = object_at(start, axis);
        update(&mut stepped, start + Duration::from_millis(1200), SPIN_PERIOD);
        update(&mut stepped, start + Duration::from_millis(3100), SPIN_PERIOD);

        let mut single = object_at(start, axis);
        update(&mut single, start + Duration::from_millis(3100), SPIN_PERIOD);

        assert!(stepped
            .transform
            .matrix()
            .abs_diff_eq(single.transform.matrix(), 1e-5));
    }

    #[test]
    fn halves_of_a_period_make_a_full_turn() {
        let start = Instant::now();
        let mut object = object_at(start, Vec3::Z);
        let before = object.transform.matrix();

        update(&mut object, start + SPIN_PERIOD / 2, SPIN_PERIOD);
        assert!(!object.transform.matrix().abs_diff_eq(before, 1e-3));

        update(&mut object, start + SPIN_PERIOD, SPIN_PERIOD);
        assert!(object.transform.matrix().abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn quarter_turn_about_y() {
        let start = Instant::now();
        let mut object = object_at(start, Vec3::Y);
        let translation = object.transform.translation();

        update(&mut object, start + SPIN_PERIOD / 4, SPIN_PERIOD);

        let expected = Mat4::from_translation(translation) * Mat4::from_rotation_y(TAU / 4.0);
        assert!(object.transform.matrix().abs_diff_eq(expected, 1e-5));

        // +X in local space swings round to -Z.
        let tip = object.transform.matrix().transform_point3(Vec3::X);
        assert!(tip.abs_diff_eq(translation - Vec3::Z, 1e-5));
    }

    #[test]
    fn long_gap_overshoots_without_clamping() {
        let start = Instant::now();
        let mut long_gap = object_at(start, Vec3::X);
        update(&mut long_gap, start + SPIN_PERIOD * 3 / 2, SPIN_PERIOD);

        let mut half_turn = object_at(start, Vec3::X);
        update(&mut half_turn, start + SPIN_PERIOD / 2, SPIN_PERIOD);

        assert!(long_gap
            .transform
            .matrix()
            .abs_diff_eq(half_turn.transform.matrix(), 1e-5));
    }

    #[test]
    fn first_update_measures_from_creation() {
        let scene_start = Instant::now();
        let created = scene_start + Duration::from_millis(1000);
        let object = object_at(created, Vec3::Y);

        let from_creation = spun(&object, created + SPIN_PERIOD / 4, SPIN_PERIOD);
        let expected = object
            .transform
            .rotated(Quat::from_axis_angle(Vec3::Y, TAU / 4.0));

        assert!(from_creation.matrix().abs_diff_eq(expected.matrix(), 1e-5));
    }

    #[test]
    fn clock_going_backwards_does_not_rotate() {
        let start = Instant::now() + Duration::from_secs(1);
        let object = object_at(start, Vec3::Y);

        let transform = spun(&object, start - Duration::from_millis(500), SPIN_PERIOD);

        assert_eq!(transform, object.transform);
    }

    #[test]
    fn zero_axis_leaves_transform_alone() {
        let start = Instant::now();
        let mut object = object_at(start, Vec3::ZERO);
        let before = object.transform;

        assert_eq!(object.rotation_axis, Vec3::ZERO);

        update(&mut object, start + SPIN_PERIOD / 4, SPIN_PERIOD);

        assert_eq!(object.transform, before);
        assert_eq!(object.last_update, start + SPIN_PERIOD / 4);
    }
}
