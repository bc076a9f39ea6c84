use anyhow::ensure;

use crate::consts;

pub const APP_VERSION: &str = "v0.1.0";

#[derive(Clone, PartialEq, Debug)]
pub struct WheelConfig {
    /// Lower bound of the initial spin speed, in degrees per frame.
    pub min_speed: f32,

    /// Upper bound (exclusive) of the initial spin speed, in degrees per frame.
    pub max_speed: f32,

    /// Per-frame velocity multiplier while spinning.
    /// Closer to 1 = longer deceleration. Must stay inside (0, 1).
    pub decay_factor: f32,

    /// The wheel settles once its speed drops below this value.
    pub stop_threshold: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_speed: consts::SPIN_SPEED_MIN,
            max_speed: consts::SPIN_SPEED_MAX,
            decay_factor: consts::DECAY_FACTOR,
            stop_threshold: consts::STOP_THRESHOLD,
        }
    }
}

impl WheelConfig {
    /// Rejects any configuration under which a spin could fail to terminate.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.decay_factor.is_finite() && self.decay_factor > 0.0 && self.decay_factor < 1.0,
            "decay factor must be in (0, 1), got {}",
            self.decay_factor
        );
        ensure!(
            self.stop_threshold.is_finite() && self.stop_threshold > 0.0,
            "stop threshold must be positive, got {}",
            self.stop_threshold
        );
        ensure!(
            self.min_speed.is_finite() && self.min_speed > 0.0,
            "minimum spin speed must be positive, got {}",
            self.min_speed
        );
        ensure!(
            self.max_speed.is_finite() && self.max_speed >= self.min_speed,
            "spin speed range is empty: [{}, {})",
            self.min_speed,
            self.max_speed
        );
        Ok(())
    }
}
