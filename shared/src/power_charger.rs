use serde::{Deserialize, Serialize};

use crate::constants::MAX_POWER;
use crate::tuning::ChargeTuning;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ChargePhase {
    Idle,
    Charging,
    Released,
}

/// What a release produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Launch with this much power.
    Launch(f64),
    /// Too short a hold. Nothing should spin.
    Tap,
    /// The charger was not charging.
    Ignored,
}

/// Turns a press-and-hold into a launch power in [0, 100].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PowerCharger {
    value: f64,
    phase: ChargePhase,
    tuning: ChargeTuning,
}

impl PowerCharger {
    pub fn new(tuning: ChargeTuning) -> Self {
        Self {
            value: 0.0,
            phase: ChargePhase::Idle,
            tuning,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn phase(&self) -> ChargePhase {
        self.phase
    }

    pub fn is_charging(&self) -> bool {
        self.phase == ChargePhase::Charging
    }

    /// Begins a new charge cycle. Repeated presses while charging are ignored.
    pub fn start(&mut self) {
        match self.phase {
            ChargePhase::Idle => {
                self.value = 0.0;
                self.phase = ChargePhase::Charging;
            }
            ChargePhase::Charging => {}
            ChargePhase::Released => {
                log::warn!("Ignoring charge start while the previous release is still in flight");
            }
        }
    }

    /// Accumulates power for `elapsed_seconds` of holding.
    pub fn tick(&mut self, elapsed_seconds: f64) {
        if self.phase != ChargePhase::Charging || self.value >= MAX_POWER {
            return;
        }
        if !(elapsed_seconds > 0.0) {
            return;
        }
        self.value = (self.value + self.tuning.rate_per_second * elapsed_seconds).min(MAX_POWER);
    }

    pub fn release(&mut self) -> Release {
        if self.phase != ChargePhase::Charging {
            log::warn!("Release ignored in {:?}", self.phase);
            return Release::Ignored;
        }
        if self.value <= self.tuning.tap_threshold {
            self.value = 0.0;
            self.phase = ChargePhase::Idle;
            return Release::Tap;
        }
        self.phase = ChargePhase::Released;
        Release::Launch(self.value)
    }

    /// Returns to Idle once the launched spin has finished.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.phase = ChargePhase::Idle;
    }
}

impl Default for PowerCharger {
    fn default() -> Self {
        Self::new(ChargeTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charger(rate_per_second: f64, tap_threshold: f64) -> PowerCharger {
        PowerCharger::new(ChargeTuning {
            rate_per_second,
            tap_threshold,
        })
    }

    #[test]
    fn test_full_second_clamps_to_max() {
        let mut charger = charger(150.0, 5.0);
        charger.start();
        charger.tick(1.0);
        assert_eq!(charger.release(), Release::Launch(100.0));
        assert_eq!(charger.phase(), ChargePhase::Released);
    }

    #[test]
    fn test_short_hold_is_a_tap() {
        let mut charger = charger(3.0, 5.0);
        charger.start();
        charger.tick(1.0);
        assert_eq!(charger.value(), 3.0);
        assert_eq!(charger.release(), Release::Tap);
        assert_eq!(charger.value(), 0.0);
        assert_eq!(charger.phase(), ChargePhase::Idle);
    }

    #[test]
    fn test_value_at_threshold_is_a_tap() {
        let mut charger = charger(5.0, 5.0);
        charger.start();
        charger.tick(1.0);
        assert_eq!(charger.release(), Release::Tap);
    }

    #[test]
    fn test_accumulation_is_frame_rate_independent() {
        let mut fast = PowerCharger::default();
        let mut slow = PowerCharger::default();
        fast.start();
        slow.start();
        for _ in 0..120 {
            fast.tick(1.0 / 120.0);
        }
        for _ in 0..30 {
            slow.tick(1.0 / 30.0);
        }
        assert!((fast.value() - slow.value()).abs() < 1e-9);
        assert!((fast.value() - 39.0).abs() < 1e-9);
    }

    #[test]
    fn test_charging_stays_active_at_max() {
        let mut charger = charger(1000.0, 5.0);
        charger.start();
        charger.tick(1.0);
        charger.tick(1.0);
        assert_eq!(charger.value(), 100.0);
        assert!(charger.is_charging());
    }

    #[test]
    fn test_start_while_charging_keeps_value() {
        let mut charger = charger(10.0, 5.0);
        charger.start();
        charger.tick(2.0);
        charger.start();
        assert_eq!(charger.value(), 20.0);
        assert!(charger.is_charging());
    }

    #[test]
    fn test_release_while_idle_is_ignored() {
        let mut charger = PowerCharger::default();
        assert_eq!(charger.release(), Release::Ignored);
        assert_eq!(charger.phase(), ChargePhase::Idle);
    }

    #[test]
    fn test_new_cycle_requires_reset_after_launch() {
        let mut charger = charger(50.0, 5.0);
        charger.start();
        charger.tick(1.0);
        assert_eq!(charger.release(), Release::Launch(50.0));
        charger.tick(1.0);
        assert_eq!(charger.value(), 50.0);
        assert_eq!(charger.phase(), ChargePhase::Released);
        charger.start();
        assert_eq!(charger.phase(), ChargePhase::Released);
        charger.reset();
        charger.start();
        assert!(charger.is_charging());
        assert_eq!(charger.value(), 0.0);
    }

    #[test]
    fn test_ticks_outside_charging_do_nothing() {
        let mut charger = PowerCharger::default();
        charger.tick(1.0);
        assert_eq!(charger.value(), 0.0);
        charger.start();
        charger.tick(-1.0);
        charger.tick(f64::NAN);
        assert_eq!(charger.value(), 0.0);
    }
}
