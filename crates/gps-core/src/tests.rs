//! Unit tests for gps-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, METERS_PER_DEGREE};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(36.8065, 10.1815);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(36.0, 10.0);
        let b = GeoPoint::new(37.0, 10.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn displaced_north_changes_latitude_only() {
        let p = GeoPoint::new(36.8065, 10.1815).displaced(30.0, 0.0);
        assert!((p.lat - (36.8065 + 30.0 / METERS_PER_DEGREE)).abs() < 1e-12);
        assert!((p.lon - 10.1815).abs() < 1e-12);
    }

    #[test]
    fn displaced_east_is_scaled_by_latitude() {
        let origin = GeoPoint::new(60.0, 0.0);
        let p = origin.displaced(111.0, 90.0);
        // cos(60°) = 0.5 → twice the equatorial longitude step.
        assert!((p.lon - 0.002).abs() < 1e-9, "got {}", p.lon);
        assert!((p.lat - 60.0).abs() < 1e-9);
    }

    #[test]
    fn displacement_matches_haversine_at_moderate_latitude() {
        let origin = GeoPoint::new(36.8065, 10.1815);
        for heading in [0.0, 45.0, 90.0, 135.0, 200.0, 315.0] {
            let p = origin.displaced(50.0, heading);
            let d = origin.distance_m(p);
            assert!((d - 50.0).abs() < 0.5, "heading {heading}: got {d}");
        }
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(36.8, 10.2).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod sample {
    use crate::{GeoPoint, LocationFix, PositionSample};

    #[test]
    fn bare_sample_has_no_optional_fields() {
        let s = PositionSample::at(GeoPoint::new(1.0, 2.0), 7);
        assert_eq!(s.point(), GeoPoint::new(1.0, 2.0));
        assert_eq!(s.altitude, None);
        assert_eq!(s.timestamp, 7);
    }

    #[test]
    fn fix_from_sample_and_absent() {
        let mut s = PositionSample::at(GeoPoint::new(3.0, 4.0), 0);
        s.accuracy = Some(5.0);
        let fix = LocationFix::from(s);
        assert!(fix.has_position());
        assert_eq!(fix.point(), Some(GeoPoint::new(3.0, 4.0)));
        assert_eq!(fix.accuracy, Some(5.0));

        let empty = LocationFix::from(None);
        assert!(!empty.has_position());
        assert_eq!(empty.point(), None);
        assert_eq!(empty, LocationFix::default());
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Clock, ManualClock, SystemClock, Tick, UpdateInterval};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(2).to_string(), "T2");
    }

    #[test]
    fn interval_conversions() {
        let i = UpdateInterval::from_millis(3000);
        assert_eq!(i.as_secs_f64(), 3.0);
        assert_eq!(i.as_duration(), Duration::from_secs(3));
        assert_eq!(UpdateInterval::default().as_millis(), 1000);
        assert_eq!(i.to_string(), "3000 ms");
    }

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let other = clock.clone();
        clock.advance(Duration::from_millis(250));
        assert_eq!(other.now_millis(), 1_250);
        other.set(5);
        assert_eq!(clock.now_millis(), 5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}

#[cfg(test)]
mod rng {
    use crate::{ConstantRng, RandomSource, SequenceRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        assert_ne!(r1.unit(), r2.unit());
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(8.0, 20.0);
            assert!((8.0..20.0).contains(&v), "got {v}");
            let j = rng.jitter(5.0);
            assert!((-5.0..5.0).contains(&j), "got {j}");
        }
    }

    #[test]
    fn constant_half_means_no_jitter() {
        let mut rng = ConstantRng(0.5);
        assert_eq!(rng.jitter(5.0), 0.0);
        assert_eq!(rng.jitter(2.0), 0.0);
        assert_eq!(rng.uniform(3.0, 7.0), 5.0);
    }

    #[test]
    fn sequence_cycles() {
        let mut rng = SequenceRng::new(vec![0.0, 0.25]);
        assert_eq!(rng.unit(), 0.0);
        assert_eq!(rng.unit(), 0.25);
        assert_eq!(rng.unit(), 0.0);
        assert_eq!(rng.draws(), 3);
    }
}

#[cfg(test)]
mod config {
    use crate::{GeoPoint, SimConfig, UpdateInterval};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.origin, GeoPoint::new(36.8065, 10.1815));
        assert_eq!(cfg.update_interval, UpdateInterval(1000));
        assert_eq!(cfg.altitude_baseline_m, 35.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimConfig { update_interval: UpdateInterval(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_origin_rejected() {
        let cfg = SimConfig { origin: GeoPoint::new(120.0, 0.0), ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("out of range"), "got {err}");
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_json {
    use crate::{GeoPoint, SimConfig, UpdateInterval};

    const DEMO_CONFIG: &str = include_str!("../../../demos/tunis-drive/config.json");

    #[test]
    fn demo_config_parses() {
        let cfg: SimConfig = serde_json::from_str(DEMO_CONFIG).unwrap();
        assert_eq!(cfg.origin, GeoPoint::new(36.8065, 10.1815));
        assert_eq!(cfg.update_interval, UpdateInterval(3000));
        assert_eq!(cfg.altitude_baseline_m, 35.0);
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(cfg, SimConfig { seed: Some(7), ..SimConfig::default() });

        let cfg: SimConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn zero_interval_parses_but_fails_validation() {
        let cfg: SimConfig = serde_json::from_str(r#"{ "update_interval": 0 }"#).unwrap();
        assert_eq!(cfg.update_interval, UpdateInterval(0));
        assert!(cfg.validate().is_err());
    }
}
