/// Random rotation speed picked on every poke
use log::debug;
use rand::Rng;

use crate::transform::RotationSpeed;

/// Holds the speed the cube currently spins at
pub struct RotationDriver<R: Rng> {
    current: RotationSpeed,
    max: f32,
    rng: R,
}

impl<R: Rng> RotationDriver<R> {
    /// Start with a random speed, each axis within `[-max, max]`
    pub fn new(rng: R, max: f32) -> Self {
        let mut driver = Self {
            current: RotationSpeed::zero(),
            max: max.abs(),
            rng,
        };
        driver.current = driver.generate();
        driver
    }

    /// Draw a fresh speed, each axis independently uniform in `[-max, max]`
    pub fn generate(&mut self) -> RotationSpeed {
        let max = self.max;
        RotationSpeed::new(
            self.rng.gen_range(-max..=max),
            self.rng.gen_range(-max..=max),
            self.rng.gen_range(-max..=max),
        )
    }

    /// Pointer release or touch end: replace the current speed
    pub fn poke(&mut self) -> RotationSpeed {
        let speed = self.generate();
        self.set(speed);
        speed
    }

    pub fn set(&mut self, speed: RotationSpeed) {
        debug!(
            "rotation speed now ({:.4}, {:.4}, {:.4})",
            speed.x, speed.y, speed.z
        );
        self.current = speed;
    }

    pub fn current(&self) -> RotationSpeed {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}
