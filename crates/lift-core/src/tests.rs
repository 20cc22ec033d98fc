//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, FloorId, UserId};

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ElevatorId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(UserId(0) < UserId(1));
        assert!(FloorId(10) > FloorId(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ElevatorId::INVALID.0, u32::MAX);
        assert_eq!(UserId::INVALID.0, u32::MAX);
        assert_eq!(FloorId::default(), FloorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
    }
}

#[cfg(test)]
mod interp {
    use crate::{Interpolation, clamp_number, cool_interpolate, epsilon_equals, linear_interpolate};

    #[test]
    fn clamp() {
        assert_eq!(clamp_number(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp_number(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp_number(2.0, 0.0, 3.0), 2.0);
    }

    #[test]
    fn epsilon_compare() {
        assert!(epsilon_equals(1.0, 1.0 + 1e-9));
        assert!(!epsilon_equals(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn linear_endpoints() {
        assert_eq!(linear_interpolate(10.0, 20.0, 0.0), 10.0);
        assert_eq!(linear_interpolate(10.0, 20.0, 1.0), 20.0);
        assert_eq!(linear_interpolate(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn cool_endpoints_and_midpoint() {
        assert!(epsilon_equals(cool_interpolate(0.0, 1.0, 0.0), 0.0));
        assert!(epsilon_equals(cool_interpolate(0.0, 1.0, 1.0), 1.0));
        // Symmetric sigmoid passes through the midpoint.
        assert!(epsilon_equals(cool_interpolate(0.0, 1.0, 0.5), 0.5));
    }

    #[test]
    fn interpolation_enum_dispatch() {
        assert_eq!(Interpolation::Linear.apply(0.0, 4.0, 0.25), 1.0);
        assert!(epsilon_equals(Interpolation::Cool.apply(0.0, 4.0, 0.5), 2.0));
    }
}

#[cfg(test)]
mod options {
    use crate::WorldOptions;

    #[test]
    fn defaults_are_valid() {
        let opts = WorldOptions::default();
        assert_eq!(opts.floor_count, 4);
        assert_eq!(opts.elevator_count, 2);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn capacity_fallback() {
        let opts = WorldOptions {
            elevator_count:      3,
            elevator_capacities: vec![6],
            ..WorldOptions::default()
        };
        assert_eq!(opts.capacity_of(0), 6);
        assert_eq!(opts.capacity_of(1), WorldOptions::DEFAULT_CAPACITY);
        assert_eq!(opts.capacity_of(2), WorldOptions::DEFAULT_CAPACITY);
    }

    #[test]
    fn rejects_degenerate_buildings() {
        let mut opts = WorldOptions { floor_count: 1, ..WorldOptions::default() };
        assert!(opts.validate().is_err());

        opts = WorldOptions { elevator_count: 0, ..WorldOptions::default() };
        assert!(opts.validate().is_err());

        opts = WorldOptions { spawn_rate: 0.0, ..WorldOptions::default() };
        assert!(opts.validate().is_err());

        opts = WorldOptions { elevator_capacities: vec![0], ..WorldOptions::default() };
        assert!(opts.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
