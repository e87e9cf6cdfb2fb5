//! Frame loop driver
//!
//! Ties the world, tag library, and fixed timestep together. The host
//! calls [`Runtime::frame`] once per rendered frame with the real elapsed
//! time; the runtime handles start-up, input sampling, and the variable
//! to fixed step conversion.

use crate::hypertag::TagLibrary;
use crate::input::InputReader;
use crate::scene::SceneDef;
use crate::time::FixedTimestep;
use crate::world::World;

/// Owns a world plus the bookkeeping the frame loop needs.
pub struct Runtime {
    pub world: World,
    pub tags: TagLibrary,
    timestep: FixedTimestep,
    started: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            tags: TagLibrary::new(),
            timestep: FixedTimestep::default(),
            started: false,
        }
    }

    /// Build a runtime with a scene already instantiated into it.
    pub fn from_scene(scene: &SceneDef) -> Self {
        let mut runtime = Self::new();
        scene.instantiate(&mut runtime.world, &mut runtime.tags);
        runtime
    }

    /// Seconds simulated by one physics step
    pub fn fixed_step(&self) -> f32 {
        self.timestep.step()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Advance one rendered frame.
    ///
    /// The first call runs world start-up. Every call then samples input
    /// once, runs however many whole physics steps `frame_dt` pays for,
    /// and flushes deferred despawns. Movement sampled at the top of the
    /// frame is reused by every physics step within it.
    pub fn frame(&mut self, input: &impl InputReader, frame_dt: f32) {
        if !self.started {
            self.world.start();
            self.started = true;
        }

        self.world.update(input);

        let steps = self.timestep.advance(frame_dt);
        for _ in 0..steps {
            self.world.fixed_update(self.timestep.step());
        }

        self.world.flush_despawns();
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::math::Vec2;
    use crate::movement::MovementXY;
    use crate::scene::load_scene_from_str;
    use crate::variable::VariableInstance;

    fn drifting_runtime(speed: Vec2) -> (Runtime, crate::world::Entity) {
        let mut runtime = Runtime::new();
        let entity = runtime.world.spawn();
        let mut mover = MovementXY::new();
        mover.set_speed(speed);
        runtime.world.movers.insert(entity, mover);
        (runtime, entity)
    }

    #[test]
    fn test_first_frame_starts_world() {
        let mut runtime = Runtime::new();
        let entity = runtime.world.spawn();
        runtime
            .world
            .variables
            .insert(entity, VariableInstance::default());

        assert!(!runtime.has_started());
        runtime.frame(&ScriptedInput::new(), 0.0);
        assert!(runtime.has_started());

        let active = runtime
            .world
            .variables
            .get(entity)
            .map(|v| v.is_active());
        assert_eq!(active, Some(true));
    }

    #[test]
    fn test_frame_pays_out_whole_steps() {
        let (mut runtime, entity) = drifting_runtime(Vec2::new(100.0, 0.0));
        let input = ScriptedInput::new();

        // 0.05s buys two 0.02s steps, 0.01s stays banked
        runtime.frame(&input, 0.05);
        let x = runtime.world.transforms.get(entity).unwrap().position.x;
        assert_eq!(x, 4.0);

        // Two short frames bank up to one more step
        runtime.frame(&input, 0.01);
        let x = runtime.world.transforms.get(entity).unwrap().position.x;
        assert_eq!(x, 6.0);
    }

    #[test]
    fn test_sample_at_frame_start_feeds_every_step() {
        let mut runtime = Runtime::new();
        let entity = runtime.world.spawn();
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        runtime.world.movers.insert(entity, mover);

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 1.0);

        // One sample, three integrations
        runtime.frame(&input, 0.06);
        let x = runtime.world.transforms.get(entity).unwrap().position.x;
        assert_eq!(x, 6.0);

        // Released axis resamples to zero before the next steps run
        input.set_axis("Horizontal", 0.0);
        runtime.frame(&input, 0.04);
        let x = runtime.world.transforms.get(entity).unwrap().position.x;
        assert_eq!(x, 6.0);
    }

    #[test]
    fn test_despawns_flushed_at_frame_end() {
        let mut runtime = Runtime::new();
        let entity = runtime.world.spawn();

        runtime.world.despawn(entity);
        assert!(runtime.world.is_alive(entity));

        runtime.frame(&ScriptedInput::new(), 0.0);
        assert!(!runtime.world.is_alive(entity));
    }

    #[test]
    fn test_from_scene() {
        let scene = load_scene_from_str(
            r#"(
                tags: ["Checkpoint"],
                entities: [
                    (name: "flag", position: (x: 3.0, y: 1.0), tags: ["Checkpoint"]),
                ],
            )"#,
        )
        .unwrap();

        let runtime = Runtime::from_scene(&scene);
        assert_eq!(runtime.world.entity_count(), 1);

        let checkpoint = runtime.tags.find("Checkpoint").unwrap();
        let found = runtime.world.find_with_any_tag(&[checkpoint]);
        assert_eq!(found.len(), 1);
        assert_eq!(
            runtime.world.transforms.get(found[0]).map(|t| t.position),
            Some(Vec2::new(3.0, 1.0))
        );
    }
}
