use crate::core::units::{Elapsed, round_to_3};

pub const GRAVITY_MPS2: f64 = 9.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trig {
    Cosine,
    Sine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cosine or sine of an angle given in degrees.
pub fn angle_component(trig: Trig, angle_deg: f64) -> f64 {
    let radians = angle_deg.to_radians();
    match trig {
        Trig::Cosine => radians.cos(),
        Trig::Sine => radians.sin(),
    }
}

/// Closed-form evaluator for ideal projectile motion (constant gravity,
/// no drag). Launch parameters are fixed at construction; every query is a
/// pure function of those parameters and the supplied elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct TrajectoryModel {
    start_speed_mps: f64,
    angle_deg: f64,
}

impl TrajectoryModel {
    pub fn new(start_speed_mps: f64, angle_deg: f64) -> Result<Self, String> {
        if !start_speed_mps.is_finite() || !angle_deg.is_finite() {
            return Err("Launch speed and angle must be finite numbers.".to_string());
        }
        if start_speed_mps < 0.0 {
            return Err("Launch speed cannot be negative.".to_string());
        }

        Ok(Self {
            start_speed_mps,
            angle_deg,
        })
    }

    pub fn start_speed_mps(&self) -> f64 {
        self.start_speed_mps
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn horizontal_position(&self, elapsed: Elapsed) -> f64 {
        let t = elapsed.as_secs_rounded();
        self.start_speed_mps * angle_component(Trig::Cosine, self.angle_deg) * t
    }

    pub fn vertical_position(&self, elapsed: Elapsed) -> f64 {
        let t = elapsed.as_secs_rounded();
        let sin = angle_component(Trig::Sine, self.angle_deg);
        self.start_speed_mps * sin * t - (GRAVITY_MPS2 * t * t) / 2.0
    }

    /// Horizontal "velocity" reading. Same formula as `horizontal_position`
    /// (speed x cosine x elapsed seconds), kept on purpose: the display layer
    /// consuming these readings was tuned against this value, not against the
    /// constant true horizontal velocity.
    pub fn horizontal_velocity(&self, elapsed: Elapsed) -> f64 {
        let t = elapsed.as_secs_rounded();
        self.start_speed_mps * angle_component(Trig::Cosine, self.angle_deg) * t
    }

    pub fn vertical_velocity(&self, elapsed: Elapsed) -> f64 {
        let t = elapsed.as_secs_rounded();
        self.start_speed_mps * angle_component(Trig::Sine, self.angle_deg) - GRAVITY_MPS2 * t
    }

    /// Combined speed reading, rounded to 3 decimal places. This is
    /// `|Vx^2 + Vy^2| / 10` over the two velocity readings above, not a
    /// Euclidean magnitude (no square root, fixed scale of 10); display
    /// consumers expect exactly this value. Never negative.
    pub fn speed_reading(&self, elapsed: Elapsed) -> f64 {
        let vx = self.horizontal_velocity(elapsed);
        let vy = self.vertical_velocity(elapsed);
        round_to_3((vx * vx + vy * vy).abs() / 10.0)
    }

    pub fn coordinate(&self, axis: Axis, elapsed: Elapsed) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal_position(elapsed),
            Axis::Vertical => self.vertical_position(elapsed),
        }
    }

    /// Time until the projectile returns to launch height, in seconds.
    /// Zero when the launch has no upward component.
    pub fn flight_time_secs(&self) -> f64 {
        let vy0 = self.start_speed_mps * angle_component(Trig::Sine, self.angle_deg);
        if vy0 <= 0.0 {
            return 0.0;
        }
        2.0 * vy0 / GRAVITY_MPS2
    }

    /// Samples `(x, y)` positions at evenly spaced times from launch to
    /// `duration`. Always returns at least 3 points.
    pub fn sample_flight(&self, duration: Elapsed, samples: usize) -> Vec<(f64, f64)> {
        let count = samples.max(2);
        (0..=count)
            .map(|i| {
                let t =
                    Elapsed::from_millis((i as f64 * duration.as_millis()) / count as f64);
                (self.horizontal_position(t), self.vertical_position(t))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, GRAVITY_MPS2, TrajectoryModel, Trig, angle_component};
    use crate::core::units::Elapsed;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn angle_components_at_cardinal_angles() {
        assert_eq!(angle_component(Trig::Cosine, 0.0), 1.0);
        assert_eq!(angle_component(Trig::Sine, 0.0), 0.0);
        assert_close(angle_component(Trig::Cosine, 90.0), 0.0, 1e-15);
        assert_eq!(angle_component(Trig::Sine, 90.0), 1.0);
    }

    #[test]
    fn worked_example_at_one_second() {
        let model = TrajectoryModel::new(100.0, 45.0).expect("valid launch");
        let t = Elapsed::from_millis(1000.0);

        assert_close(model.horizontal_position(t), 70.711, 0.001);
        assert_close(model.vertical_position(t), 65.811, 0.001);
        assert_close(model.vertical_velocity(t), 60.911, 0.001);
        assert_close(model.speed_reading(t), 871.011, 0.001);
    }

    #[test]
    fn zero_speed_reduces_to_free_fall() {
        let model = TrajectoryModel::new(0.0, 30.0).expect("valid launch");
        let t = Elapsed::from_millis(2500.0);

        assert_eq!(model.horizontal_position(t), 0.0);
        assert_eq!(model.vertical_velocity(t), -GRAVITY_MPS2 * 2.5);
    }

    #[test]
    fn horizontal_velocity_reading_matches_horizontal_position() {
        let model = TrajectoryModel::new(56.0, 34.0).expect("valid launch");
        for ms in [0.0, 1.0, 250.0, 1000.0, 4321.0, -500.0] {
            let t = Elapsed::from_millis(ms);
            assert_eq!(model.horizontal_velocity(t), model.horizontal_position(t));
        }
    }

    #[test]
    fn speed_reading_is_never_negative() {
        let model = TrajectoryModel::new(40.0, 80.0).expect("valid launch");
        for ms in [0.0, 500.0, 5000.0, 20_000.0, -3000.0] {
            assert!(model.speed_reading(Elapsed::from_millis(ms)) >= 0.0);
        }
    }

    #[test]
    fn repeated_queries_are_bit_identical() {
        let model = TrajectoryModel::new(72.5, 41.0).expect("valid launch");
        let t = Elapsed::from_millis(1337.0);

        assert_eq!(model.vertical_position(t), model.vertical_position(t));
        assert_eq!(model.speed_reading(t), model.speed_reading(t));
        assert_eq!(
            model.coordinate(Axis::Horizontal, t),
            model.coordinate(Axis::Horizontal, t)
        );
    }

    #[test]
    fn coordinate_dispatches_by_axis() {
        let model = TrajectoryModel::new(30.0, 60.0).expect("valid launch");
        let t = Elapsed::from_secs(0.75);

        assert_eq!(model.coordinate(Axis::Horizontal, t), model.horizontal_position(t));
        assert_eq!(model.coordinate(Axis::Vertical, t), model.vertical_position(t));
    }

    #[test]
    fn rejects_invalid_launch_parameters() {
        assert!(TrajectoryModel::new(-1.0, 45.0).is_err());
        assert!(TrajectoryModel::new(f64::NAN, 45.0).is_err());
        assert!(TrajectoryModel::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn flight_time_for_level_launch_is_zero() {
        let flat = TrajectoryModel::new(25.0, 0.0).expect("valid launch");
        assert_eq!(flat.flight_time_secs(), 0.0);

        let lofted = TrajectoryModel::new(10.0, 90.0).expect("valid launch");
        assert_close(lofted.flight_time_secs(), 20.0 / GRAVITY_MPS2, 1e-12);
    }

    #[test]
    fn sampled_flight_starts_at_origin_and_stays_dense() {
        let model = TrajectoryModel::new(50.0, 45.0).expect("valid launch");
        let duration = Elapsed::from_secs(model.flight_time_secs());
        let points = model.sample_flight(duration, 64);

        assert_eq!(points.len(), 65);
        assert_eq!(points[0], (0.0, 0.0));
        assert!(points.iter().all(|&(x, _)| x >= 0.0));
    }
}
