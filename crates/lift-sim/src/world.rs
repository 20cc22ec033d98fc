//! `World` — owner of every simulated entity and the per-tick orchestrator.
//!
//! # Tick structure
//!
//! Each `update(dt)` runs six phases in a fixed order:
//!
//! 1. advance world time and spawn users from the accumulator;
//! 2. advance elevator tasks (dwells) and integrate elevator motion;
//! 3. advance user tasks and apply their completion transitions;
//! 4. update the running max-wait statistic;
//! 5. drain entity event buffers to a fixpoint, in elevator-id order then
//!    floor order, translating what happened into scheduler calls, boarding
//!    attempts, and [`ProgramEvent`]s for the control program;
//! 6. prune despawned users.
//!
//! Entities never call each other directly; all cross-entity effects flow
//! through phase 5.  Combined with the single [`SimRng`], this makes a run
//! fully reproducible from `WorldOptions`.

use lift_control::{ControlContext, FacadeEvent, ProgramEvent, Scheduler};
use lift_core::{ElevatorId, SimRng, UserId, WorldOptions};
use lift_motion::{Direction, Elevator, ElevatorEvent, Floor, FloorEvent};

use crate::challenge::{ChallengeCondition, ChallengeStatus};
use crate::user::{User, UserState};
use crate::{SimObserver, SimResult};

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Running statistics, updated in place every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldStats {
    /// Simulated seconds since the world was created.
    pub elapsed_time: f64,
    /// Users delivered to their destination.
    pub transported: u64,
    /// Longest time any user has spent in the system so far.
    pub max_wait_time: f64,
    /// Floors crossed, summed over all elevators.
    pub move_count: u64,
    /// `transported / elapsed_time`.
    pub transported_per_sec: f64,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The complete simulation state for one challenge attempt.
///
/// A world is built fresh per attempt and dropped afterwards; nothing
/// outlives it, so there is no teardown protocol.
pub struct World {
    options: WorldOptions,

    floors:     Vec<Floor>,
    elevators:  Vec<Elevator>,
    schedulers: Vec<Scheduler>,
    users:      Vec<User>,

    rng:          SimRng,
    next_user_id: u32,
    /// Spawn accumulator.  Seeded just past one interval so the first user
    /// appears on the first update rather than a full interval in.
    elapsed_since_spawn: f64,

    stats:       WorldStats,
    stats_dirty: bool,

    condition:       ChallengeCondition,
    challenge_ended: bool,

    /// Events bound for the control program, drained by the controller.
    outbox: Vec<ProgramEvent>,
}

impl World {
    /// Build a world from validated options.
    ///
    /// Elevators start parked at floor 0; the construction-time queue check
    /// runs before any control program exists, so its idle announcements are
    /// discarded.
    pub fn new(options: WorldOptions, condition: ChallengeCondition) -> SimResult<Self> {
        options.validate()?;

        let floor_count = options.floor_count;
        let floors = (0..floor_count)
            .map(|level| {
                let y = (floor_count - 1 - level) as f64 * options.floor_height;
                Floor::new(level, y)
            })
            .collect();

        let mut elevators: Vec<Elevator> = (0..options.elevator_count)
            .map(|i| {
                Elevator::new(
                    options.speed_floors_per_sec,
                    floor_count,
                    options.floor_height,
                    options.capacity_of(i),
                )
            })
            .collect();

        let mut schedulers: Vec<Scheduler> = Vec::with_capacity(elevators.len());
        for elevator in &mut elevators {
            let mut scheduler = Scheduler::new();
            scheduler.try_dispatch(elevator);
            scheduler.take_events();
            schedulers.push(scheduler);
        }

        let spawn_interval = 1.0 / options.spawn_rate;
        Ok(Self {
            rng: SimRng::new(options.seed),
            floors,
            elevators,
            schedulers,
            users: Vec::new(),
            next_user_id: 0,
            elapsed_since_spawn: 1.001 * spawn_interval,
            stats: WorldStats::default(),
            stats_dirty: false,
            condition,
            challenge_ended: false,
            outbox: Vec::new(),
            options,
        })
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the world by `dt` simulated seconds.
    pub fn update<O: SimObserver>(&mut self, dt: f64, observer: &mut O) {
        // ── Phase 1: time & spawning ──────────────────────────────────────
        self.stats.elapsed_time += dt;
        self.elapsed_since_spawn += dt;
        let spawn_interval = 1.0 / self.options.spawn_rate;
        while self.elapsed_since_spawn > spawn_interval {
            self.elapsed_since_spawn -= spawn_interval;
            self.spawn_user(observer);
        }

        // ── Phase 2: elevators ────────────────────────────────────────────
        for i in 0..self.elevators.len() {
            if self.elevators[i].advance_task(dt) {
                // The arrival dwell elapsed; the scheduler may dispatch.
                self.schedulers[i].on_dwell_complete(&mut self.elevators[i]);
            }
            self.elevators[i].update_movement(dt);
        }

        // ── Phase 3: users ────────────────────────────────────────────────
        for u in 0..self.users.len() {
            if self.users[u].mobile.advance_task(dt) {
                if let Some((elevator, floor)) = self.users[u].on_task_complete() {
                    self.elevators[elevator.index()].press_floor_button(floor);
                }
            }
        }

        // ── Phase 4: max wait ─────────────────────────────────────────────
        for user in &self.users {
            if !user.done() {
                let wait = user.wait_time(self.stats.elapsed_time);
                if wait > self.stats.max_wait_time {
                    self.stats.max_wait_time = wait;
                    self.stats_dirty = true;
                }
            }
        }

        // ── Phase 5: event dispatch ───────────────────────────────────────
        self.flush_events(observer);

        // ── Phase 6: prune ────────────────────────────────────────────────
        self.users.retain(|user| !user.remove_me());
    }

    /// Drain every entity event buffer to a fixpoint.
    ///
    /// Handling one event may raise others (an arrival opens doors, boarding
    /// users press buttons, a full car re-presses a call button), so the
    /// drain loops until a full pass finds every buffer empty.  Also called
    /// by the controller after control-program hooks run, since hooks raise
    /// facade events too.
    pub(crate) fn flush_events<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let mut progressed = false;

            for i in 0..self.elevators.len() {
                for event in self.elevators[i].take_events() {
                    progressed = true;
                    self.handle_elevator_event(i, event, observer);
                }
            }

            for i in 0..self.schedulers.len() {
                for event in self.schedulers[i].take_events() {
                    progressed = true;
                    match event {
                        FacadeEvent::Idle => self.outbox.push(ProgramEvent::Idle { elevator: i }),
                    }
                }
            }

            for f in 0..self.floors.len() {
                for event in self.floors[f].take_events() {
                    progressed = true;
                    let FloorEvent::CallButtonPressed { floor, direction } = event;
                    self.outbox.push(ProgramEvent::CallButton { floor, direction });
                    self.offer_stopped_elevator(floor, direction);
                }
            }

            if !progressed {
                break;
            }
        }
    }

    fn handle_elevator_event<O: SimObserver>(
        &mut self,
        i:        usize,
        event:    ElevatorEvent,
        observer: &mut O,
    ) {
        match event {
            ElevatorEvent::Stopped { exact_floor } => {
                self.schedulers[i].on_stopped(&mut self.elevators[i], exact_floor);
            }
            ElevatorEvent::StoppedAtFloor { floor } => {
                self.outbox.push(ProgramEvent::StoppedAtFloor { elevator: i, floor });
            }
            ElevatorEvent::ExitAvailable { floor } => {
                self.handle_exit_available(i, floor, observer);
            }
            ElevatorEvent::EntranceAvailable => {
                self.handle_entrance_available(i);
            }
            ElevatorEvent::NewCurrentFloor { .. } => {
                let total: u64 = self.elevators.iter().map(Elevator::move_count).sum();
                if total != self.stats.move_count {
                    self.stats.move_count = total;
                    self.stats_dirty = true;
                }
            }
            ElevatorEvent::PassingFloor { floor, direction } => {
                self.outbox.push(ProgramEvent::PassingFloor { elevator: i, floor, direction });
            }
            ElevatorEvent::FloorButtonPressed { floor } => {
                self.outbox.push(ProgramEvent::FloorButton { elevator: i, floor });
            }
        }
    }

    /// Riders bound for `floor` step off elevator `i`.
    fn handle_exit_available<O: SimObserver>(&mut self, i: usize, floor: usize, observer: &mut O) {
        for u in 0..self.users.len() {
            let user = &mut self.users[u];
            let riding_this_car = matches!(
                user.state(),
                UserState::Riding { elevator, .. } if elevator.index() == i
            );
            if riding_this_car && user.destination_floor() == floor {
                let wait = user.wait_time(self.stats.elapsed_time);
                user.alight(&mut self.elevators[i], &mut self.rng);

                self.stats.transported += 1;
                self.stats.transported_per_sec =
                    self.stats.transported as f64 / self.stats.elapsed_time;
                self.stats_dirty = true;
                observer.on_user_transported(self.users[u].id(), wait);
            }
        }
    }

    /// Elevator `i` opened its doors: clear the floor's matching call
    /// buttons, then let waiting users attempt boarding in spawn order.
    fn handle_entrance_available(&mut self, i: usize) {
        let floor_idx = self.elevators[i].current_floor();
        let up = self.elevators[i].going_up_indicator();
        let down = self.elevators[i].going_down_indicator();
        self.floors[floor_idx].elevator_available(up, down);

        let id = ElevatorId(i as u32);
        for u in 0..self.users.len() {
            if self.users[u].current_floor() == floor_idx {
                self.users[u].offer_elevator(
                    id,
                    &mut self.elevators[i],
                    &mut self.floors[floor_idx],
                    &mut self.rng,
                );
            }
        }
    }

    /// A call button was pressed: if some suitable elevator is already
    /// sitting open on that floor, treat its doors as freshly available so
    /// the presser can board without waiting for the next arrival.
    ///
    /// The scan starts at a random offset so repeated presses don't always
    /// fill up the first elevator.
    fn offer_stopped_elevator(&mut self, floor: usize, direction: Direction) {
        let count = self.elevators.len();
        let offset = self.rng.gen_range(0..count);
        for i in 0..count {
            let idx = (i + offset) % count;
            let elevator = &self.elevators[idx];
            let indicator_lit = match direction {
                Direction::Up => elevator.going_up_indicator(),
                Direction::Down => elevator.going_down_indicator(),
            };
            if indicator_lit
                && elevator.current_floor() == floor
                && elevator.is_on_a_floor()
                && !elevator.is_busy()
                && !elevator.is_moving()
                && !elevator.is_full()
            {
                self.handle_entrance_available(idx);
                return;
            }
        }
    }

    /// Spawn one user with the standard arrival distribution: half of all
    /// traffic enters at the ground floor; users already upstairs usually
    /// head for the ground floor.
    fn spawn_user<O: SimObserver>(&mut self, observer: &mut O) {
        let floor_count = self.options.floor_count;
        let weight = self.rng.gen_range(55..=100) as f64;

        let spawn_floor = if self.rng.gen_bool(0.5) {
            0
        } else {
            self.rng.gen_range(0..floor_count)
        };
        let destination = if spawn_floor == 0 {
            self.rng.gen_range(1..floor_count)
        } else if self.rng.gen_bool(0.3) {
            (spawn_floor + self.rng.gen_range(1..floor_count)) % floor_count
        } else {
            0
        };

        let id = UserId(self.next_user_id);
        self.next_user_id += 1;

        let mut user = User::new(id, weight, self.stats.elapsed_time);
        user.mobile.x = 105.0 + self.rng.gen_range(0..=40) as f64;
        user.appear_on_floor(&mut self.floors[spawn_floor], destination);
        observer.on_user_spawned(id, spawn_floor, destination);
        self.users.push(user);
    }

    // ── Control-program plumbing ──────────────────────────────────────────

    /// Borrow the surfaces a control program may touch.
    pub fn control_context(&mut self) -> ControlContext<'_> {
        ControlContext::new(
            self.elevators.iter_mut().zip(self.schedulers.iter_mut()),
            &self.floors,
        )
    }

    /// Drain the events destined for the control program.
    pub fn take_program_events(&mut self) -> Vec<ProgramEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Whether the stats changed since the last call; clears the flag.
    pub fn take_stats_dirty(&mut self) -> bool {
        std::mem::take(&mut self.stats_dirty)
    }

    // ── Challenge ─────────────────────────────────────────────────────────

    /// Check the challenge condition against the current stats.
    pub fn evaluate_challenge(&self) -> ChallengeStatus {
        self.condition.evaluate(&self.stats)
    }

    #[inline]
    pub fn challenge_ended(&self) -> bool {
        self.challenge_ended
    }

    pub fn set_challenge_ended(&mut self, ended: bool) {
        self.challenge_ended = ended;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn options(&self) -> &WorldOptions {
        &self.options
    }

    #[inline]
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn users(&self) -> &[User] {
        &self.users
    }
}
