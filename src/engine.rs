use std::time::Instant;

use crate::scene_graph::Scene;

/// Hands out frame times, one per display refresh. `None` once the host is gone.
#[allow(dead_code)]
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Instant>;
}

pub trait FrameRenderer {
    type Error;

    fn render_frame(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Renders the scene as it stands, then spins it forward to `now` for the next frame.
pub fn frame<R: FrameRenderer>(
    renderer: &mut R,
    scene: &mut Scene,
    now: Instant,
) -> Result<(), R::Error> {
    let result = renderer.render_frame(scene);
    scene.update(now);
    result
}

/// Runs frames until the source dries up. Returns the number of frames run.
#[allow(dead_code)]
pub fn run<S, R>(source: &mut S, renderer: &mut R, scene: &mut Scene) -> Result<u64, R::Error>
where
    S: FrameSource,
    R: FrameRenderer,
{
    let mut frames = 0;

    while let Some(now) = source.next_frame() {
        frame(renderer, scene, now)?;
        frames += 1;
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, time::Duration};

    use glam::{Mat4, Vec3};

    use super::*;
    use crate::{geometry::ShapeKind, scene_graph::spin::SPIN_PERIOD};

    struct FakeClock {
        frames: VecDeque<Instant>,
    }

    impl FakeClock {
        fn every(start: Instant, interval: Duration, count: u32) -> Self {
            Self {
                frames: (1..=count).map(|i| start + interval * i).collect(),
            }
        }
    }

    impl FrameSource for FakeClock {
        fn next_frame(&mut self) -> Option<Instant> {
            self.frames.pop_front()
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Vec<Mat4>>,
    }

    impl FrameRenderer for RecordingRenderer {
        type Error = std::convert::Infallible;

        fn render_frame(&mut self, scene: &Scene) -> Result<(), Self::Error> {
            self.frames.push(
                scene
                    .objects
                    .iter()
                    .map(|(_, object)| object.transform.matrix())
                    .collect(),
            );
            Ok(())
        }
    }

    struct FailingRenderer;

    impl FrameRenderer for FailingRenderer {
        type Error = &'static str;

        fn render_frame(&mut self, _scene: &Scene) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }

    const PLACEMENTS: [(ShapeKind, Vec3); 3] = [
        (ShapeKind::Pyramid, Vec3::new(-5.0, 0.0, -10.0)),
        (ShapeKind::Scutoid, Vec3::new(0.0, 0.0, -10.0)),
        (ShapeKind::Octahedron, Vec3::new(5.0, 0.0, -10.0)),
    ];

    fn demo_scene(start: Instant) -> Scene {
        let mut scene = Scene::new();
        for (kind, translation) in PLACEMENTS {
            scene
                .spawn_shape(kind, translation, Vec3::new(1.0, 1.0, 0.2), start)
                .unwrap();
        }
        scene
    }

    #[test]
    fn first_frame_renders_initial_placement() {
        let start = Instant::now();
        let mut scene = demo_scene(start);
        let mut renderer = RecordingRenderer::default();
        let mut clock = FakeClock::every(start, Duration::from_millis(16), 1);

        run(&mut clock, &mut renderer, &mut scene).unwrap();

        let expected = PLACEMENTS
            .iter()
            .map(|(_, translation)| Mat4::from_translation(*translation))
            .collect::<Vec<_>>();
        assert_eq!(renderer.frames[0], expected);
    }

    #[test]
    fn render_uses_previous_frame_transforms() {
        let start = Instant::now();
        let mut scene = demo_scene(start);
        let mut renderer = RecordingRenderer::default();
        let mut clock = FakeClock::every(start, Duration::from_millis(100), 3);

        let frames = run(&mut clock, &mut renderer, &mut scene).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(renderer.frames.len(), 3);

        // Frame 1 shows the scene as updated at the end of frame 0.
        let mut replay = demo_scene(start);
        replay.update(start + Duration::from_millis(100));
        let replayed = replay
            .objects
            .iter()
            .map(|(_, object)| object.transform.matrix())
            .collect::<Vec<_>>();

        for (rendered, expected) in renderer.frames[1].iter().zip(&replayed) {
            assert!(rendered.abs_diff_eq(*expected, 1e-6));
        }

        // After the last frame the scene has already moved on.
        for ((_, object), rendered) in scene.objects.iter().zip(&renderer.frames[2]) {
            assert!(!object.transform.matrix().abs_diff_eq(*rendered, 1e-4));
            assert_eq!(object.last_update, start + Duration::from_millis(300));
        }
    }

    #[test]
    fn a_period_of_frames_returns_to_start() {
        let start = Instant::now();
        let mut scene = demo_scene(start);
        let mut renderer = RecordingRenderer::default();
        // 5000 ms in 20 ms frames.
        let mut clock = FakeClock::every(start, Duration::from_millis(20), 250);

        run(&mut clock, &mut renderer, &mut scene).unwrap();

        assert_eq!(start + Duration::from_millis(20) * 250, start + SPIN_PERIOD);
        for ((_, object), (_, translation)) in scene.objects.iter().zip(PLACEMENTS) {
            assert!(object
                .transform
                .matrix()
                .abs_diff_eq(Mat4::from_translation(translation), 1e-3));
        }
    }

    #[test]
    fn stopped_source_runs_no_frames() {
        let start = Instant::now();
        let mut scene = demo_scene(start);
        let mut renderer = RecordingRenderer::default();
        let mut clock = FakeClock::every(start, Duration::from_millis(16), 0);

        assert_eq!(run(&mut clock, &mut renderer, &mut scene).unwrap(), 0);
        assert!(renderer.frames.is_empty());
    }

    #[test]
    fn render_error_stops_the_loop_after_updating() {
        let start = Instant::now();
        let mut scene = demo_scene(start);
        let mut clock = FakeClock::every(start, Duration::from_millis(16), 5);

        let error = run(&mut clock, &mut FailingRenderer, &mut scene).unwrap_err();

        assert_eq!(error, "surface lost");
        assert_eq!(clock.frames.len(), 4);
        for (_, object) in scene.objects.iter() {
            assert_eq!(object.last_update, start + Duration::from_millis(16));
        }
    }
}
