use serde::{Deserialize, Serialize};

use crate::constants::MAX_POWER;
use crate::draw_model::Token;
use crate::error::{CoreResult, DrawError};
use crate::tuning::WheelTuning;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelPhase {
    Idle,
    Spinning,
}

/// Emitted once when a launched wheel comes to rest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelStop {
    pub index: usize,
    pub token: Token,
    pub angle: f64,
}

/// Index of the segment under the pointer at the top of the wheel.
///
/// Segment 0 starts at 0 degrees and segments run clockwise; `angle` is the
/// clockwise rotation applied to the wheel.
pub fn resolve_segment(angle: f64, segment_count: usize) -> usize {
    if segment_count == 0 {
        return 0;
    }
    let segment_angle = 360.0 / segment_count as f64;
    let normalized = (360.0 - angle) % 360.0;
    ((normalized / segment_angle).floor() as usize) % segment_count
}

/// A friction-decelerated wheel of labeled segments.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpinWheel {
    segments: Vec<Token>,
    angle: f64,
    velocity: f64,
    launch_velocity: f64,
    phase: WheelPhase,
    enabled: bool,
    launches: u32,
    tuning: WheelTuning,
}

impl SpinWheel {
    /// Builds an idle, enabled wheel with no segments.
    pub fn new(tuning: WheelTuning) -> CoreResult<Self> {
        tuning.validate()?;
        Ok(Self {
            segments: Vec::new(),
            angle: 0.0,
            velocity: 0.0,
            launch_velocity: 0.0,
            phase: WheelPhase::Idle,
            enabled: true,
            launches: 0,
            tuning,
        })
    }

    pub fn segments(&self) -> &[Token] {
        &self.segments
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn launch_count(&self) -> u32 {
        self.launches
    }

    /// Whether a launch would currently be accepted.
    pub fn can_launch(&self) -> bool {
        self.enabled && !self.is_spinning() && !self.segments.is_empty()
    }

    /// Remaining speed as a fraction of the launch speed, 0 when idle.
    pub fn spin_progress(&self) -> f64 {
        if !self.is_spinning() || self.launch_velocity <= 0.0 {
            return 0.0;
        }
        (self.velocity / self.launch_velocity).clamp(0.0, 1.0)
    }

    /// The segment currently under the pointer, if any.
    pub fn selected(&self) -> Option<&Token> {
        if self.segments.is_empty() {
            return None;
        }
        self.segments.get(resolve_segment(self.angle, self.segments.len()))
    }

    pub fn configure(&mut self, segments: Vec<Token>) -> CoreResult<()> {
        if self.is_spinning() {
            return Err(DrawError::invalid_transition("configure", "spinning"));
        }
        if segments.is_empty() {
            return Err(DrawError::InvalidConfiguration("wheel needs at least one segment".to_string()));
        }
        self.segments = segments;
        Ok(())
    }

    /// Drops all segments. Used when a wheel has nothing left to offer.
    pub fn clear(&mut self) -> CoreResult<()> {
        if self.is_spinning() {
            return Err(DrawError::invalid_transition("clear", "spinning"));
        }
        self.segments.clear();
        Ok(())
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Forbids future launches. A spin in progress runs to completion.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn launch(&mut self, power: f64) -> CoreResult<()> {
        if self.is_spinning() {
            return Err(DrawError::invalid_transition("launch", "spinning"));
        }
        if !self.enabled {
            return Err(DrawError::invalid_transition("launch", "disabled"));
        }
        if self.segments.is_empty() {
            return Err(DrawError::InvalidConfiguration("wheel has no segments".to_string()));
        }
        let power = if power.is_finite() { power.clamp(0.0, MAX_POWER) } else { 0.0 };
        self.velocity = power * self.tuning.launch_factor;
        self.launch_velocity = self.velocity;
        self.phase = WheelPhase::Spinning;
        self.launches += 1;
        log::debug!("Wheel launched with power {:.1} ({} segments)", power, self.segments.len());
        Ok(())
    }

    /// Advances the spin by `elapsed_seconds`, returning the stop exactly once.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Option<WheelStop> {
        if !self.is_spinning() {
            return None;
        }
        if elapsed_seconds > 0.0 && elapsed_seconds.is_finite() {
            let decay = self.tuning.decay_per_frame;
            let frames = elapsed_seconds / self.tuning.reference_frame_seconds;
            let decay_over = decay.powf(frames);
            // Sum of the per-frame steps `v * d^k` for k in 1..=frames
            let travelled = self.velocity * decay * (1.0 - decay_over) / (1.0 - decay);
            self.velocity *= decay_over;
            self.angle = (self.angle + travelled).rem_euclid(360.0);
        }
        if self.velocity < self.tuning.stop_velocity {
            return Some(self.stop());
        }
        None
    }

    fn stop(&mut self) -> WheelStop {
        self.phase = WheelPhase::Idle;
        self.velocity = 0.0;
        self.launch_velocity = 0.0;
        let index = resolve_segment(self.angle, self.segments.len());
        let token = self.segments[index].clone();
        log::debug!("Wheel stopped at {:.2} degrees on {:?}", self.angle, token);
        WheelStop {
            index,
            token,
            angle: self.angle,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_angle(&mut self, angle: f64) {
        self.angle = angle.rem_euclid(360.0);
    }
}
