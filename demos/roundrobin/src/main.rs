//! roundrobin — smallest end-to-end liftsim run.
//!
//! Drives a 6-floor, 3-elevator building with a deliberately naive control
//! program: call buttons are assigned round-robin across the elevators,
//! in-car buttons are served directly, and idle cars are recalled to the
//! ground floor.  The challenge asks for 20 transported users within 300
//! simulated seconds, which even this program manages comfortably.

use std::time::Instant;

use anyhow::Result;

use lift_control::{ControlContext, ControlError, ControlProgram, ControlResult};
use lift_core::{UserId, WorldOptions};
use lift_motion::Direction;
use lift_sim::{
    ChallengeCondition, FixedStepFrames, SimObserver, World, WorldController, WorldStats,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_STEP: f64   = 1.0 / 60.0; // 60 Hz host loop
const TIME_SCALE: f64   = 20.0;       // simulated seconds per real second
const MAX_FRAMES: usize = 200_000;

const OPTIONS_JSON: &str = r#"{
    "floor_count": 6,
    "floor_height": 50.0,
    "elevator_count": 3,
    "elevator_capacities": [4, 4, 6],
    "spawn_rate": 0.6,
    "speed_floors_per_sec": 2.6,
    "seed": 42
}"#;

// ── Control program ───────────────────────────────────────────────────────────

struct RoundRobin {
    next: usize,
}

impl RoundRobin {
    fn new() -> Self {
        Self { next: 0 }
    }
}

impl ControlProgram for RoundRobin {
    fn update(&mut self, _dt: f64, _ctx: &mut ControlContext<'_>) -> ControlResult<()> {
        Ok(())
    }

    fn on_call_button(
        &mut self,
        floor:      usize,
        _direction: Direction,
        ctx:        &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        let pick = self.next % ctx.elevator_count();
        self.next += 1;
        ctx.elevators[pick].go_to_floor(floor, false);
        Ok(())
    }

    fn on_floor_button(
        &mut self,
        elevator: usize,
        floor:    usize,
        ctx:      &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        ctx.elevators[elevator].go_to_floor(floor, false);
        Ok(())
    }

    fn on_idle(&mut self, elevator: usize, ctx: &mut ControlContext<'_>) -> ControlResult<()> {
        ctx.elevators[elevator].go_to_floor(0, false);
        Ok(())
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints transport progress and the final verdict.
#[derive(Default)]
struct ProgressPrinter {
    last_report: f64,
}

impl SimObserver for ProgressPrinter {
    fn on_user_transported(&mut self, user: UserId, wait_time: f64) {
        println!("  {user} delivered after {wait_time:.1} s");
    }

    fn on_stats(&mut self, stats: &WorldStats) {
        if stats.elapsed_time - self.last_report >= 30.0 {
            self.last_report = stats.elapsed_time;
            println!(
                "t = {:>5.1} s | transported {:>3} | moves {:>4} | max wait {:>5.1} s",
                stats.elapsed_time, stats.transported, stats.move_count, stats.max_wait_time
            );
        }
    }

    fn on_usercode_error(&mut self, error: &ControlError) {
        eprintln!("control program fault: {error}");
    }

    fn on_challenge_end(&mut self, succeeded: bool, stats: &WorldStats) {
        let verdict = if succeeded { "SUCCESS" } else { "FAILURE" };
        println!();
        println!(
            "{verdict} at t = {:.1} s: {} transported",
            stats.elapsed_time, stats.transported
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== roundrobin — liftsim demo ===");

    // 1. Options and challenge.
    let options: WorldOptions = serde_json::from_str(OPTIONS_JSON)?;
    let condition = ChallengeCondition::UserCountWithinTime { count: 20, time_limit: 300.0 };
    println!(
        "Building: {} floors, {} elevators | spawn {:.1}/s | seed {}",
        options.floor_count, options.elevator_count, options.spawn_rate, options.seed
    );
    println!("Challenge: transport 20 users within 300 s");
    println!();

    // 2. World, controller, frame source.
    let mut world = World::new(options, condition)?;
    let mut controller = WorldController::new(FRAME_STEP);
    controller.set_time_scale(TIME_SCALE);
    let mut frames = FixedStepFrames::new(FRAME_STEP, MAX_FRAMES);

    // 3. Run.
    let mut program = RoundRobin::new();
    let mut observer = ProgressPrinter::default();
    let t0 = Instant::now();
    controller.run(&mut frames, &mut world, &mut program, &mut observer);
    let elapsed = t0.elapsed();

    // 4. Summary.
    let stats = world.stats();
    println!();
    println!("Run complete in {:.3} s wall time", elapsed.as_secs_f64());
    println!("  simulated time      : {:.1} s", stats.elapsed_time);
    println!("  transported         : {}", stats.transported);
    println!("  transported per sec : {:.3}", stats.transported_per_sec);
    println!("  elevator moves      : {}", stats.move_count);
    println!("  max wait time       : {:.1} s", stats.max_wait_time);

    Ok(())
}
