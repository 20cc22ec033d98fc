//! Unit tests for the destination scheduler and the program-facing handles.

#[cfg(test)]
mod facade {
    use crate::{FacadeEvent, Scheduler};
    use lift_motion::{Elevator, ElevatorEvent};

    const FLOORS: usize = 10;

    fn test_elevator() -> Elevator {
        Elevator::new(2.6, FLOORS, 50.0, 4)
    }

    fn queue_of(s: &Scheduler) -> Vec<usize> {
        s.destination_queue().collect()
    }

    /// Run the car until it settles, returning the exact stop position.
    fn run_to_stop(elevator: &mut Elevator) -> f64 {
        for _ in 0..200_000 {
            elevator.update_movement(1.0 / 60.0);
            for event in elevator.take_events() {
                if let ElevatorEvent::Stopped { exact_floor } = event {
                    return exact_floor;
                }
            }
        }
        panic!("elevator failed to settle");
    }

    #[test]
    fn enqueue_dispatches_the_head() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 5, false);
        assert_eq!(queue_of(&s), vec![5]);
        assert!(e.is_moving());
        assert_eq!(e.destination_floor(), 5.0);
    }

    #[test]
    fn later_destinations_queue_behind_the_head() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 3, false);
        s.enqueue(&mut e, 7, false);
        s.enqueue(&mut e, 2, false);
        assert_eq!(queue_of(&s), vec![3, 7, 2]);
        // Still bound for the original head.
        assert_eq!(e.destination_floor(), 3.0);
    }

    #[test]
    fn force_now_prepends_and_retargets() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 3, false);
        s.enqueue(&mut e, 7, false);
        s.enqueue(&mut e, 1, true);
        assert_eq!(queue_of(&s), vec![1, 3, 7]);
        assert_eq!(e.destination_floor(), 1.0);
    }

    #[test]
    fn repeated_force_now_stacks_at_the_front() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 3, false);
        s.enqueue(&mut e, 7, false);
        s.enqueue(&mut e, 2, true);
        s.enqueue(&mut e, 5, true);
        assert_eq!(queue_of(&s), vec![5, 2, 3, 7]);
        assert_eq!(e.destination_floor(), 5.0);
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 3, false);
        s.enqueue(&mut e, 3, false);
        assert_eq!(queue_of(&s), vec![3]);

        s.enqueue(&mut e, 3, true); // duplicate of the front
        assert_eq!(queue_of(&s), vec![3]);
    }

    #[test]
    fn non_consecutive_duplicates_are_kept() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 3, false);
        s.enqueue(&mut e, 5, false);
        s.enqueue(&mut e, 3, false);
        assert_eq!(queue_of(&s), vec![3, 5, 3]);
    }

    #[test]
    fn out_of_range_floors_are_clamped() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 99, false);
        assert_eq!(queue_of(&s), vec![FLOORS - 1]);
    }

    #[test]
    fn arrival_pops_head_then_dwells_then_redispatches() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 2, false);

        let exact_floor = run_to_stop(&mut e);
        assert_eq!(exact_floor, 2.0);
        s.on_stopped(&mut e, exact_floor);
        assert_eq!(queue_of(&s), Vec::<usize>::new());
        assert!(e.is_busy(), "doors stay open for the dwell");

        // The dwell suppresses dispatch until it elapses.
        assert!(!e.advance_task(0.6));
        assert!(e.advance_task(0.5));
        s.on_dwell_complete(&mut e);
        assert_eq!(s.take_events(), vec![FacadeEvent::Idle]);
    }

    #[test]
    fn idle_fires_on_every_empty_check() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.try_dispatch(&mut e);
        s.try_dispatch(&mut e);
        s.try_dispatch(&mut e);
        assert_eq!(s.take_events().len(), 3);
        assert!(!e.is_moving());
    }

    #[test]
    fn stop_clears_queue_and_brakes_to_projection() {
        let mut e = test_elevator();
        let mut s = Scheduler::new();
        s.enqueue(&mut e, 7, false);

        // Build up some speed first.
        for _ in 0..30 {
            e.update_movement(1.0 / 60.0);
        }
        e.take_events();
        assert!(e.velocity().abs() > 0.0);

        let projected = e.exact_future_floor_if_stopped();
        s.stop(&mut e);
        assert_eq!(queue_of(&s), Vec::<usize>::new());
        assert_eq!(e.destination_floor(), projected);
        assert!(e.is_moving(), "still braking toward the projection");
    }
}

#[cfg(test)]
mod handle {
    use crate::{ControlContext, Scheduler};
    use lift_motion::{Direction, Elevator, Floor};

    fn fixtures() -> (Elevator, Scheduler, Vec<Floor>) {
        let floors = (0..6).map(|i| Floor::new(i, (5 - i) as f64 * 50.0)).collect();
        (Elevator::new(2.6, 6, 50.0, 4), Scheduler::new(), floors)
    }

    #[test]
    fn commands_route_through_the_queue() {
        let (mut e, mut s, floors) = fixtures();
        let mut ctx = ControlContext::new([(&mut e, &mut s)], &floors);
        let handle = &mut ctx.elevators[0];

        assert_eq!(handle.destination_direction(), None);
        handle.go_to_floor(4, false);
        handle.go_to_floor(2, false);
        assert_eq!(handle.destination_queue(), vec![4, 2]);
        assert_eq!(handle.destination_direction(), Some(Direction::Up));

        handle.stop();
        assert_eq!(handle.destination_queue(), Vec::<usize>::new());
    }

    #[test]
    fn reads_come_from_the_car() {
        let (mut e, mut s, floors) = fixtures();
        e.press_floor_button(3);
        let mut ctx = ControlContext::new([(&mut e, &mut s)], &floors);
        let handle = &mut ctx.elevators[0];

        assert_eq!(handle.current_floor(), 0);
        assert_eq!(handle.pressed_floors(), vec![3]);
        assert_eq!(handle.max_users(), 4);
        assert_eq!(handle.load_factor(), 0.0);
    }

    #[test]
    fn indicator_setters_are_fluent() {
        let (mut e, mut s, floors) = fixtures();
        let mut ctx = ControlContext::new([(&mut e, &mut s)], &floors);
        ctx.elevators[0]
            .set_going_up_indicator(false)
            .set_going_down_indicator(false);
        assert!(!ctx.elevators[0].going_up_indicator());
        assert!(!ctx.elevators[0].going_down_indicator());
    }
}
