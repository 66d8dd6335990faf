//! One-shot sphere → cube switch.

use std::time::{Duration, Instant};

/// Primitive drawn for every entity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Sphere,
    Cube,
}

/// Flips spheres to cubes once, a fixed delay after the first frame.
///
/// Checked every frame against the time of the first observed frame; once
/// flipped it never reverts.
#[derive(Debug, Clone)]
pub struct ShapeSchedule {
    switch_after: Duration,
    first_frame: Option<Instant>,
    shape: Shape,
}

impl ShapeSchedule {
    pub fn new(switch_after: Duration) -> Self {
        Self {
            switch_after,
            first_frame: None,
            shape: Shape::Sphere,
        }
    }

    /// Shape to draw for a frame occurring at `now`
    pub fn update(&mut self, now: Instant) -> Shape {
        let first = *self.first_frame.get_or_insert(now);
        if self.shape == Shape::Sphere && now.saturating_duration_since(first) >= self.switch_after
        {
            log::info!("Switching to cubes after {:.1}s", self.switch_after.as_secs_f32());
            self.shape = Shape::Cube;
        }
        self.shape
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spheres_until_delay_elapses() {
        let mut schedule = ShapeSchedule::new(Duration::from_secs(60));
        let start = Instant::now();

        assert_eq!(schedule.update(start), Shape::Sphere);
        assert_eq!(schedule.update(start + Duration::from_secs(30)), Shape::Sphere);
        assert_eq!(
            schedule.update(start + Duration::from_millis(59_999)),
            Shape::Sphere
        );
        assert_eq!(schedule.update(start + Duration::from_secs(60)), Shape::Cube);
    }

    #[test]
    fn test_switch_never_reverts() {
        let mut schedule = ShapeSchedule::new(Duration::from_secs(1));
        let start = Instant::now();

        schedule.update(start);
        assert_eq!(schedule.update(start + Duration::from_secs(2)), Shape::Cube);

        // An earlier timestamp cannot undo the switch
        assert_eq!(schedule.update(start), Shape::Cube);
        assert_eq!(schedule.shape(), Shape::Cube);
    }

    #[test]
    fn test_delay_counts_from_first_frame() {
        let mut schedule = ShapeSchedule::new(Duration::from_secs(10));
        let first = Instant::now() + Duration::from_secs(100);

        assert_eq!(schedule.update(first), Shape::Sphere);
        assert_eq!(schedule.update(first + Duration::from_secs(9)), Shape::Sphere);
        assert_eq!(schedule.update(first + Duration::from_secs(10)), Shape::Cube);
    }

    #[test]
    fn test_zero_delay_switches_on_first_frame() {
        let mut schedule = ShapeSchedule::new(Duration::ZERO);
        assert_eq!(schedule.update(Instant::now()), Shape::Cube);
    }
}
