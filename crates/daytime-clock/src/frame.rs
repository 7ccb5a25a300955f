//! Frame driver seam
//!
//! The clock never reads a wall clock. The host's update loop hands it the
//! real time elapsed since the previous frame.

/// Supplies elapsed real time, in seconds, once per frame
pub trait FrameSource {
    fn delta_seconds(&mut self) -> f64;
}

/// Constant frame time, for fixed-step loops and tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    seconds: f64,
}

impl FixedStep {
    pub fn new(seconds: f64) -> Self {
        FixedStep { seconds }
    }

    /// One frame at the given rate; zero fps yields zero-length frames
    pub fn from_fps(fps: u32) -> Self {
        if fps == 0 {
            return FixedStep::new(0.0);
        }
        FixedStep::new(1.0 / fps as f64)
    }
}

impl FrameSource for FixedStep {
    fn delta_seconds(&mut self) -> f64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step() {
        let mut step = FixedStep::from_fps(50);
        assert_eq!(step.delta_seconds(), 0.02);
        assert_eq!(step.delta_seconds(), 0.02);
        assert_eq!(FixedStep::from_fps(0).delta_seconds(), 0.0);
    }
}
