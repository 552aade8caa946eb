use anyhow::Result;
use dragon_controller::engine::physics::body::presets;
use dragon_controller::{
    AnimationSink, AnimatorFrame, Button, CharacterPhysics, DragonConfig, DragonController,
    FrameClock, GroundProbe, InputCollector, InputEvent, PhysicsWorld, FIXED_TIMESTEP,
};
use glam::Vec2;
use log::info;

/// Sink that logs one-shot triggers as they fire
struct LogSink;

impl AnimationSink for LogSink {
    fn apply(&mut self, frame: &AnimatorFrame) {
        if frame.triggers.jump {
            info!("trigger: jump");
        }
        if frame.triggers.kick {
            info!("trigger: kick");
        }
        if frame.triggers.attack {
            info!("trigger: attack");
        }
    }
}

/// Scripted input: walk, jump, double-tap into flight, glide, land
fn script() -> Vec<(f32, InputEvent)> {
    vec![
        (0.0, InputEvent::MoveAxis(Vec2::new(1.0, 0.0))),
        // Grounded jump with an early release (jump cut); the jump also
        // counts as the first tap of the double-tap gesture
        (1.0, InputEvent::Pressed(Button::Jump)),
        (1.15, InputEvent::Released(Button::Jump)),
        // Airborne press inside the double-tap window enters flight; the
        // press stays held, so the dragon glides upward
        (1.25, InputEvent::Pressed(Button::Jump)),
        // Release ends the glide, flight descends until touchdown
        (3.0, InputEvent::Released(Button::Jump)),
        (3.5, InputEvent::MoveAxis(Vec2::new(-0.6, 0.0))),
        (4.5, InputEvent::Pressed(Button::Attack)),
        (4.6, InputEvent::Released(Button::Attack)),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting dragon controller demo...");

    let config = DragonConfig::default();
    config.validate()?;

    // Arena: one wide terrain slab, the dragon spawned standing on it
    let mut world = PhysicsWorld::new();
    world.set_timestep(FIXED_TIMESTEP);
    let ground = world.add_rigid_body(presets::terrain_body(0.0, -0.5));
    world.add_collider(presets::terrain_collider(60.0, 1.0), ground);
    let dragon_handle = world.add_rigid_body(presets::dragon_body(0.0, 1.0));
    world.add_collider(presets::dragon_collider(1.0, 2.0), dragon_handle);

    let probe = GroundProbe::below_feet(2.0, config.ground_check_radius);
    let mut dragon = DragonController::new(config);
    let mut collector = InputCollector::new();
    let mut sink = LogSink;
    let mut clock = FrameClock::new();

    let events = script();
    let mut next_event = 0;
    let mut previous_mode = dragon.mode();

    // Five seconds of simulation, stepped headless at the fixed rate
    let steps = (5.0 / FIXED_TIMESTEP) as u32;
    for step in 0..steps {
        let time = clock.step_time();

        // Deliver scripted events that became due, then snapshot
        while next_event < events.len() && events[next_event].0 <= time.now {
            collector.handle_event(events[next_event].1);
            next_event += 1;
        }
        let input = collector.snapshot();

        let mut character = CharacterPhysics::new(&mut world, dragon_handle, probe);
        dragon.update(time, &input, &mut character, &mut sink);
        let position = character.position();

        world.step();

        let mode = dragon.mode();
        if mode != previous_mode {
            info!("t={:.2}s mode {:?} -> {:?}", time.now, previous_mode, mode);
            previous_mode = mode;
        }
        if step % 30 == 0 {
            let frame = dragon.animator_frame();
            info!(
                "t={:.2}s pos=({:.2}, {:.2}) speed=({:.2}, {:.2}) mode={:?}",
                time.now, position.x, position.y, frame.horizontal_speed, frame.vertical_speed, mode
            );
        }
    }

    info!("Demo finished after {} steps", clock.step_count());
    Ok(())
}
