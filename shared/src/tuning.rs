use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CoreResult, DrawError};

/// Physics constants for one spin wheel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WheelTuning {
    /// Velocity multiplier applied once per reference frame, must be in (0, 1).
    pub decay_per_frame: f64,
    /// Initial velocity in degrees per reference frame for each unit of power.
    pub launch_factor: f64,
    /// The wheel stops once its velocity falls below this.
    pub stop_velocity: f64,
    pub reference_frame_seconds: f64,
}

impl Default for WheelTuning {
    fn default() -> Self {
        Self {
            decay_per_frame: DEFAULT_DECAY_PER_FRAME,
            launch_factor: DEFAULT_LAUNCH_FACTOR,
            stop_velocity: DEFAULT_STOP_VELOCITY,
            reference_frame_seconds: REFERENCE_FRAME_SECONDS,
        }
    }
}

impl WheelTuning {
    pub fn new(decay_per_frame: f64, launch_factor: f64, stop_velocity: f64) -> CoreResult<Self> {
        let tuning = Self {
            decay_per_frame,
            launch_factor,
            stop_velocity,
            ..Self::default()
        };
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.decay_per_frame > 0.0 && self.decay_per_frame < 1.0) {
            return Err(DrawError::InvalidConfiguration(format!(
                "decay must be in (0, 1), got {}",
                self.decay_per_frame
            )));
        }
        if !(self.launch_factor.is_finite() && self.launch_factor >= 0.0) {
            return Err(DrawError::InvalidConfiguration(format!(
                "launch factor must be a non-negative number, got {}",
                self.launch_factor
            )));
        }
        if !(self.stop_velocity > 0.0 && self.stop_velocity.is_finite()) {
            return Err(DrawError::InvalidConfiguration(format!(
                "stop velocity must be positive, got {}",
                self.stop_velocity
            )));
        }
        if !(self.reference_frame_seconds > 0.0 && self.reference_frame_seconds.is_finite()) {
            return Err(DrawError::InvalidConfiguration(format!(
                "reference frame must be positive, got {}",
                self.reference_frame_seconds
            )));
        }
        Ok(())
    }
}

/// Accumulation constants for one power charger.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ChargeTuning {
    /// Power gained per second of holding.
    pub rate_per_second: f64,
    /// Releases at or below this power count as a tap and never spin.
    pub tap_threshold: f64,
}

impl Default for ChargeTuning {
    fn default() -> Self {
        Self {
            rate_per_second: DEFAULT_CHARGE_RATE,
            tap_threshold: DEFAULT_TAP_THRESHOLD,
        }
    }
}

impl ChargeTuning {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.rate_per_second > 0.0 && self.rate_per_second.is_finite()) {
            return Err(DrawError::InvalidConfiguration(format!(
                "charge rate must be positive, got {}",
                self.rate_per_second
            )));
        }
        if !(0.0..MAX_POWER).contains(&self.tap_threshold) {
            return Err(DrawError::InvalidConfiguration(format!(
                "tap threshold must be in [0, {}), got {}",
                MAX_POWER, self.tap_threshold
            )));
        }
        Ok(())
    }
}

/// Everything a draw session needs to build its wheels and chargers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct DrawTuning {
    pub wheel: WheelTuning,
    pub charge: ChargeTuning,
}

impl DrawTuning {
    pub fn validate(&self) -> CoreResult<()> {
        self.wheel.validate()?;
        self.charge.validate()
    }

    /// Parses a stored override, keeping defaults for omitted fields.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let tuning: Self = serde_json::from_str(raw)?;
        tuning.validate()?;
        Ok(tuning)
    }
}
