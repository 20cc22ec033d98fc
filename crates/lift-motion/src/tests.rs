//! Unit tests for the physical layer.

#[cfg(test)]
mod task {
    use crate::Task;
    use lift_core::Interpolation;

    #[test]
    fn wait_completes_strictly_after_duration() {
        let mut task = Task::wait(1.0);
        let (mut x, mut y) = (0.0, 0.0);
        assert!(!task.advance(0.5, &mut x, &mut y));
        assert!(!task.advance(0.5, &mut x, &mut y)); // exactly 1.0 — not done yet
        assert!(task.advance(0.01, &mut x, &mut y));
        assert_eq!((x, y), (0.0, 0.0)); // waits never move the owner
    }

    #[test]
    fn tween_interpolates_and_snaps() {
        let mut task = Task::tween((0.0, 0.0), (10.0, 20.0), 1.0, Interpolation::Linear);
        let (mut x, mut y) = (0.0, 0.0);
        assert!(!task.advance(0.5, &mut x, &mut y));
        assert_eq!((x, y), (5.0, 10.0));
        assert!(task.advance(0.6, &mut x, &mut y)); // overshoots the duration
        assert_eq!((x, y), (10.0, 20.0)); // exact endpoint, no drift
    }
}

#[cfg(test)]
mod mobile {
    use crate::{Mobile, MotionError};
    use lift_core::{ElevatorId, Interpolation};

    #[test]
    fn busy_iff_task_present() {
        let mut m = Mobile::new();
        assert!(!m.is_busy());
        m.start_wait(1.0).unwrap();
        assert!(m.is_busy());
        assert!(matches!(m.start_wait(1.0), Err(MotionError::Busy)));
        assert!(matches!(
            m.start_tween((1.0, 1.0), 1.0, Interpolation::Linear),
            Err(MotionError::Busy)
        ));
    }

    #[test]
    fn slot_frees_on_completion() {
        let mut m = Mobile::new();
        m.start_wait(0.1).unwrap();
        assert!(!m.advance_task(0.05));
        assert!(m.advance_task(0.1));
        assert!(!m.is_busy());
        // A follow-up task is legal immediately.
        m.start_wait(0.1).unwrap();
    }

    #[test]
    fn attach_and_detach_preserve_world_position() {
        let mut m = Mobile::new();
        m.x = 10.0;
        m.y = 100.0;

        let parent_pos = (4.0, 60.0);
        m.attach(ElevatorId(0), parent_pos);
        assert_eq!((m.x, m.y), (6.0, 40.0));
        assert_eq!(m.world_position(Some(parent_pos)), (10.0, 100.0));

        m.detach(parent_pos);
        assert_eq!(m.parent(), None);
        assert_eq!((m.x, m.y), (10.0, 100.0));
        assert_eq!(m.world_position(None), (10.0, 100.0));
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor, FloorEvent};

    #[test]
    fn buttons_fire_only_on_transition() {
        let mut f = Floor::new(2, 50.0);
        f.press_up_button();
        f.press_up_button();
        f.press_down_button();
        let events = f.take_events();
        assert_eq!(
            events,
            vec![
                FloorEvent::CallButtonPressed { floor: 2, direction: Direction::Up },
                FloorEvent::CallButtonPressed { floor: 2, direction: Direction::Down },
            ]
        );
        assert!(f.up_pressed() && f.down_pressed());
    }

    #[test]
    fn clearing_respects_indicators() {
        let mut f = Floor::new(0, 150.0);
        f.press_up_button();
        f.press_down_button();

        // Down-only elevator clears only the down button.
        f.elevator_available(false, true);
        assert!(f.up_pressed());
        assert!(!f.down_pressed());

        f.elevator_available(true, false);
        assert!(!f.up_pressed());
    }

    #[test]
    fn cleared_button_can_fire_again() {
        let mut f = Floor::new(1, 100.0);
        f.press_up_button();
        f.take_events();
        f.elevator_available(true, true);
        f.press_up_button();
        assert_eq!(f.take_events().len(), 1);
    }
}

#[cfg(test)]
mod elevator {
    use crate::{Direction, Elevator, ElevatorEvent};
    use lift_core::{SimRng, UserId};

    const FLOOR_HEIGHT: f64 = 50.0;
    const SPEED: f64 = 2.6;

    fn test_elevator(floor_count: usize) -> Elevator {
        Elevator::new(SPEED, floor_count, FLOOR_HEIGHT, 4)
    }

    /// Step the motion integrator until the car settles, returning all
    /// events in emission order.  Panics if it fails to settle.
    fn run_to_arrival(elevator: &mut Elevator, dt: f64) -> Vec<ElevatorEvent> {
        let mut events = Vec::new();
        for _ in 0..200_000 {
            elevator.update_movement(dt);
            events.extend(elevator.take_events());
            if !elevator.is_moving() {
                return events;
            }
        }
        panic!("elevator failed to settle (dt = {dt})");
    }

    #[test]
    fn reaches_exact_floor_position_across_tick_rates() {
        for &dt in &[0.005, 1.0 / 60.0, 0.03, 0.05] {
            for &target in &[1usize, 3, 5] {
                let mut e = test_elevator(6);
                e.go_to_floor(target).unwrap();
                run_to_arrival(&mut e, dt);
                assert_eq!(e.position().1, e.y_of_floor(target as f64), "dt = {dt}");
                assert_eq!(e.velocity(), 0.0);
                assert_eq!(e.current_floor(), target);
                assert!(e.is_on_a_floor());
            }
        }
    }

    #[test]
    fn downward_travel_settles_too() {
        let mut e = test_elevator(6);
        e.set_floor_position(5);
        e.go_to_floor(0).unwrap();
        run_to_arrival(&mut e, 1.0 / 60.0);
        assert_eq!(e.current_floor(), 0);
        assert_eq!(e.velocity(), 0.0);
    }

    #[test]
    fn no_overshoot_at_fine_tick_rate() {
        let mut e = test_elevator(8);
        let dest_y = e.y_of_floor(7.0);
        e.go_to_floor(7).unwrap();
        for _ in 0..200_000 {
            e.update_movement(1.0 / 60.0);
            e.take_events();
            // Travelling up means y decreasing toward dest_y; never go
            // meaningfully past it at any intermediate tick.
            assert!(e.position().1 >= dest_y - 0.5);
            if !e.is_moving() {
                break;
            }
        }
        assert_eq!(e.position().1, dest_y);
    }

    #[test]
    fn velocity_stays_bounded_by_max_speed() {
        let dt = 1.0 / 60.0;
        let mut e = test_elevator(10);
        e.go_to_floor(9).unwrap();
        let max = FLOOR_HEIGHT * SPEED;
        // The speed limit is enforced at the start of each step, so between
        // steps the velocity may exceed it by at most one acceleration step.
        let slack = FLOOR_HEIGHT * 2.1 * dt;
        for _ in 0..200_000 {
            e.update_movement(dt);
            e.take_events();
            assert!(e.velocity().abs() <= max + slack + 1e-9);
            if !e.is_moving() {
                break;
            }
        }
    }

    fn passing_floors(events: &[ElevatorEvent]) -> Vec<(usize, Direction)> {
        events
            .iter()
            .filter_map(|e| match e {
                ElevatorEvent::PassingFloor { floor, direction } => Some((*floor, *direction)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_floor_move_passes_nothing() {
        let mut e = test_elevator(6);
        e.go_to_floor(1).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);
        assert!(passing_floors(&events).is_empty());
    }

    #[test]
    fn two_floor_move_passes_the_middle_floor() {
        let mut e = test_elevator(6);
        e.go_to_floor(2).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);
        assert_eq!(passing_floors(&events), vec![(1, Direction::Up)]);
    }

    #[test]
    fn three_floor_move_passes_both_intermediates_in_order() {
        let mut e = test_elevator(6);
        e.go_to_floor(3).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);
        assert_eq!(
            passing_floors(&events),
            vec![(1, Direction::Up), (2, Direction::Up)]
        );
    }

    #[test]
    fn downward_passing_floor_direction() {
        let mut e = test_elevator(6);
        e.set_floor_position(3);
        e.go_to_floor(0).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);
        assert_eq!(
            passing_floors(&events),
            vec![(2, Direction::Down), (1, Direction::Down)]
        );
    }

    #[test]
    fn arrival_event_order_and_button_clearing() {
        let mut e = test_elevator(6);
        e.press_floor_button(2);
        e.take_events();
        e.go_to_floor(2).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);

        // The button memory for the arrival floor clears before anything fires.
        assert!(!e.button_state(2));

        // Exit strictly precedes entrance, with the stop notifications first.
        let tail: Vec<&ElevatorEvent> = events
            .iter()
            .filter(|ev| {
                matches!(
                    ev,
                    ElevatorEvent::Stopped { .. }
                        | ElevatorEvent::StoppedAtFloor { .. }
                        | ElevatorEvent::ExitAvailable { .. }
                        | ElevatorEvent::EntranceAvailable
                )
            })
            .collect();
        assert_eq!(tail.len(), 4);
        assert!(matches!(tail[0], ElevatorEvent::Stopped { .. }));
        assert!(matches!(tail[1], ElevatorEvent::StoppedAtFloor { floor: 2 }));
        assert!(matches!(tail[2], ElevatorEvent::ExitAvailable { floor: 2 }));
        assert!(matches!(tail[3], ElevatorEvent::EntranceAvailable));
    }

    #[test]
    fn same_floor_command_refires_arrival_events() {
        let mut e = test_elevator(4);
        e.go_to_floor(0).unwrap();
        let events = run_to_arrival(&mut e, 1.0 / 60.0);
        assert!(events.iter().any(|ev| matches!(ev, ElevatorEvent::StoppedAtFloor { floor: 0 })));
    }

    #[test]
    fn move_count_counts_floors_crossed() {
        let mut e = test_elevator(6);
        e.go_to_floor(3).unwrap();
        run_to_arrival(&mut e, 1.0 / 60.0);
        assert_eq!(e.move_count(), 3);
    }

    #[test]
    fn go_to_floor_while_dwelling_is_an_error() {
        let mut e = test_elevator(4);
        e.start_dwell(1.0).unwrap();
        assert!(e.go_to_floor(2).is_err());
        assert!(e.advance_task(1.1));
        assert!(e.go_to_floor(2).is_ok());
    }

    #[test]
    fn floor_button_fires_once_until_cleared() {
        let mut e = test_elevator(6);
        e.press_floor_button(4);
        e.press_floor_button(4);
        let presses = e
            .take_events()
            .into_iter()
            .filter(|ev| matches!(ev, ElevatorEvent::FloorButtonPressed { floor: 4 }))
            .count();
        assert_eq!(presses, 1);
        assert_eq!(e.pressed_floors(), vec![4]);
    }

    #[test]
    fn out_of_range_button_press_is_clamped() {
        let mut e = test_elevator(4);
        e.press_floor_button(99);
        assert_eq!(e.pressed_floors(), vec![3]);
    }

    #[test]
    fn boarding_slots_fill_and_free() {
        let mut rng = SimRng::new(7);
        let mut e = Elevator::new(SPEED, 4, FLOOR_HEIGHT, 2);
        assert!(e.is_empty());

        let a = e.user_entering(UserId(0), 100.0, &mut rng);
        let b = e.user_entering(UserId(1), 80.0, &mut rng);
        assert!(a.is_some() && b.is_some());
        assert_ne!(a.unwrap().0, b.unwrap().0, "distinct slots");
        assert!(e.is_full());
        assert!(e.user_entering(UserId(2), 60.0, &mut rng).is_none());
        assert_eq!(e.load_factor(), 180.0 / 200.0);

        e.user_exiting(UserId(0));
        assert!(!e.is_full());
        assert_eq!(e.load_factor(), 80.0 / 200.0);
    }

    #[test]
    fn suitability_follows_indicators() {
        let mut e = test_elevator(6);
        assert!(e.is_suitable_for_travel_between(0, 3));
        assert!(e.is_suitable_for_travel_between(3, 0));

        e.set_going_up_indicator(false);
        assert!(!e.is_suitable_for_travel_between(0, 3));
        assert!(e.is_suitable_for_travel_between(3, 0));
        assert!(e.is_suitable_for_travel_between(2, 2)); // same floor always fine

        e.set_going_down_indicator(false);
        assert!(!e.is_suitable_for_travel_between(3, 0));
    }

    #[test]
    fn floor_geometry_roundtrip() {
        let e = test_elevator(4);
        // Ground floor sits at the greatest y; top floor at 0.
        assert_eq!(e.y_of_floor(0.0), 150.0);
        assert_eq!(e.y_of_floor(3.0), 0.0);
        assert_eq!(e.exact_floor_of_y(e.y_of_floor(2.0)), 2.0);
    }
}
