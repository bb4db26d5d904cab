use serde::{Deserialize, Serialize};

use crate::draw_model::{undrawn_categories, undrawn_values, CategoryConfig, DrawResult, Token};
use crate::drawn_store::{DrawnSet, DrawnStore};
use crate::error::{CoreResult, DrawError};
use crate::power_charger::{PowerCharger, Release};
use crate::spin_wheel::{SpinWheel, WheelStop};
use crate::tuning::DrawTuning;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundStatus {
    AwaitingCategory,
    AwaitingValue { category: Token },
    Finished(DrawResult),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    Drawn(DrawResult),
    /// Every configured combination has been drawn.
    Exhausted,
}

/// Everything observable that happened during a call into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Launched { wheel: WheelKind, power: f64 },
    Stopped { wheel: WheelKind, token: Token },
    ValueWheelArmed { category: Token, values: usize },
    /// The chosen category had a single value left, so no value spin happens.
    ValueAutoSelected { category: Token, value: Token },
    Round(RoundEvent),
}

/// One round of the two-wheel draw: category first, then a value of that category.
#[derive(Debug, Clone)]
pub struct DrawSession {
    config: Vec<CategoryConfig>,
    drawn: DrawnSet,
    category_wheel: SpinWheel,
    value_wheel: SpinWheel,
    category_charger: PowerCharger,
    value_charger: PowerCharger,
    status: RoundStatus,
    pending: Vec<SessionEvent>,
}

impl DrawSession {
    pub fn start(config: Vec<CategoryConfig>, drawn: &dyn DrawnStore, tuning: DrawTuning) -> CoreResult<Self> {
        tuning.validate()?;
        let mut session = Self {
            config: Vec::new(),
            drawn: DrawnSet::new(),
            category_wheel: SpinWheel::new(tuning.wheel)?,
            value_wheel: SpinWheel::new(tuning.wheel)?,
            category_charger: PowerCharger::new(tuning.charge),
            value_charger: PowerCharger::new(tuning.charge),
            status: RoundStatus::AwaitingCategory,
            pending: Vec::new(),
        };
        session.next_round(config, drawn)?;
        Ok(session)
    }

    /// Re-arms the session for a new round, keeping wheel positions.
    ///
    /// `config` and `drawn` are re-read here and treated as fixed until the round ends.
    pub fn next_round(&mut self, config: Vec<CategoryConfig>, drawn: &dyn DrawnStore) -> CoreResult<()> {
        if self.category_wheel.is_spinning() || self.value_wheel.is_spinning() {
            return Err(DrawError::invalid_transition("start a round", "a wheel is spinning"));
        }
        self.config = config;
        self.drawn = DrawnSet::from_keys(drawn.all());
        self.category_charger.reset();
        self.value_charger.reset();
        self.pending.clear();

        self.value_wheel.clear()?;
        self.value_wheel.disable();

        let categories = undrawn_categories(&self.config, &self.drawn);
        if categories.is_empty() {
            log::info!("All {} drawn combinations exhausted the configuration", self.drawn.len());
            self.category_wheel.clear()?;
            self.category_wheel.disable();
            self.status = RoundStatus::Exhausted;
            self.pending.push(SessionEvent::Round(RoundEvent::Exhausted));
            return Ok(());
        }

        log::debug!("Round armed with categories {:?}", categories);
        self.category_wheel.configure(categories)?;
        self.category_wheel.enable();
        self.status = RoundStatus::AwaitingCategory;
        Ok(())
    }

    pub fn status(&self) -> &RoundStatus {
        &self.status
    }

    pub fn is_exhausted(&self) -> bool {
        self.status == RoundStatus::Exhausted
    }

    pub fn config(&self) -> &[CategoryConfig] {
        &self.config
    }

    pub fn wheel(&self, kind: WheelKind) -> &SpinWheel {
        match kind {
            WheelKind::Category => &self.category_wheel,
            WheelKind::Value => &self.value_wheel,
        }
    }

    pub fn charger(&self, kind: WheelKind) -> &PowerCharger {
        match kind {
            WheelKind::Category => &self.category_charger,
            WheelKind::Value => &self.value_charger,
        }
    }

    pub fn category_wheel(&self) -> &SpinWheel {
        &self.category_wheel
    }

    pub fn value_wheel(&self) -> &SpinWheel {
        &self.value_wheel
    }

    pub fn selected_category(&self) -> Option<&Token> {
        match &self.status {
            RoundStatus::AwaitingValue { category } => Some(category),
            RoundStatus::Finished(result) => Some(&result.category),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&DrawResult> {
        match &self.status {
            RoundStatus::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Whether the charger for `kind` can be pressed right now.
    pub fn can_charge(&self, kind: WheelKind) -> bool {
        self.wheel(kind).can_launch() && !self.charger(kind).is_charging()
    }

    /// Starts charging `kind`. Presses on a locked or busy wheel are ignored.
    pub fn press(&mut self, kind: WheelKind) -> bool {
        let (wheel, charger) = self.parts_mut(kind);
        if !wheel.can_launch() {
            log::warn!("Ignoring press on {:?} wheel: not ready", kind);
            return false;
        }
        charger.start();
        charger.is_charging()
    }

    /// Releases the charger for `kind`, launching its wheel unless the hold was a tap.
    pub fn release(&mut self, kind: WheelKind) -> Release {
        let (wheel, charger) = self.parts_mut(kind);
        let release = charger.release();
        let Release::Launch(power) = release else {
            return release;
        };
        if let Err(err) = wheel.launch(power) {
            log::warn!("Launch of {:?} wheel rejected: {}", kind, err);
            charger.reset();
            return Release::Ignored;
        }
        self.pending.push(SessionEvent::Launched { wheel: kind, power });
        release
    }

    /// Advances chargers and wheels by one frame and returns what happened.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Vec<SessionEvent> {
        self.category_charger.tick(elapsed_seconds);
        self.value_charger.tick(elapsed_seconds);

        if let Some(stop) = self.category_wheel.tick(elapsed_seconds) {
            self.on_category_stop(stop);
        }
        if let Some(stop) = self.value_wheel.tick(elapsed_seconds) {
            self.on_value_stop(stop);
        }
        std::mem::take(&mut self.pending)
    }

    /// Adds the finished result to `store`. Returns it, or `None` if the round is not over.
    pub fn commit(&self, store: &mut dyn DrawnStore) -> Option<DrawResult> {
        let result = self.result()?.clone();
        store.add(result.key());
        Some(result)
    }

    fn parts_mut(&mut self, kind: WheelKind) -> (&mut SpinWheel, &mut PowerCharger) {
        match kind {
            WheelKind::Category => (&mut self.category_wheel, &mut self.category_charger),
            WheelKind::Value => (&mut self.value_wheel, &mut self.value_charger),
        }
    }

    fn on_category_stop(&mut self, stop: WheelStop) {
        self.category_charger.reset();
        self.category_wheel.disable();
        let category = stop.token;
        self.pending.push(SessionEvent::Stopped {
            wheel: WheelKind::Category,
            token: category.clone(),
        });

        let mut values = undrawn_values(&self.config, &self.drawn, &category);
        match values.len() {
            0 => {
                log::error!("Category {} resolved with no undrawn values", category);
                self.status = RoundStatus::Exhausted;
                self.pending.push(SessionEvent::Round(RoundEvent::Exhausted));
            }
            1 => {
                let value = values.remove(0);
                self.pending.push(SessionEvent::ValueAutoSelected {
                    category: category.clone(),
                    value: value.clone(),
                });
                self.finish(DrawResult::new(category, value));
            }
            count => {
                if let Err(err) = self.value_wheel.configure(values) {
                    log::warn!("Could not arm value wheel: {}", err);
                    return;
                }
                self.value_wheel.enable();
                self.pending.push(SessionEvent::ValueWheelArmed {
                    category: category.clone(),
                    values: count,
                });
                self.status = RoundStatus::AwaitingValue { category };
            }
        }
    }

    fn on_value_stop(&mut self, stop: WheelStop) {
        self.value_charger.reset();
        self.pending.push(SessionEvent::Stopped {
            wheel: WheelKind::Value,
            token: stop.token.clone(),
        });
        let RoundStatus::AwaitingValue { category } = &self.status else {
            log::warn!("Value wheel stopped outside of a value round");
            return;
        };
        let result = DrawResult::new(category.clone(), stop.token);
        self.finish(result);
    }

    fn finish(&mut self, result: DrawResult) {
        self.category_wheel.disable();
        self.value_wheel.disable();
        log::info!("Drew {}", result);
        self.status = RoundStatus::Finished(result.clone());
        self.pending.push(SessionEvent::Round(RoundEvent::Drawn(result)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power_charger::ChargePhase;

    const FRAME: f64 = 1.0 / 60.0;

    fn session(config: Vec<CategoryConfig>, drawn: &[&str]) -> DrawSession {
        DrawSession::start(config, &DrawnSet::from_keys(drawn.iter().copied()), DrawTuning::default()).unwrap()
    }

    fn spin(session: &mut DrawSession, kind: WheelKind) -> Vec<SessionEvent> {
        assert!(session.press(kind));
        let mut events = session.tick(1.0);
        assert!(matches!(session.release(kind), Release::Launch(_)));
        for _ in 0..100_000 {
            events.extend(session.tick(FRAME));
            if !session.wheel(kind).is_spinning() {
                return events;
            }
        }
        panic!("wheel never stopped");
    }

    fn drawn_result(events: &[SessionEvent]) -> Option<DrawResult> {
        events.iter().find_map(|event| match event {
            SessionEvent::Round(RoundEvent::Drawn(result)) => Some(result.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_single_value_is_auto_selected() {
        let config = vec![CategoryConfig::new("A", ["1", "2"]), CategoryConfig::new("B", ["5", "6"])];
        let mut session = session(config, &["A1", "A2", "B6"]);
        assert_eq!(session.category_wheel().segments(), &["B".to_string()][..]);

        let events = spin(&mut session, WheelKind::Category);
        assert_eq!(drawn_result(&events), Some(DrawResult::new("B", "5")));
        assert!(events.contains(&SessionEvent::ValueAutoSelected {
            category: "B".to_string(),
            value: "5".to_string(),
        }));
        assert_eq!(session.value_wheel().launch_count(), 0);
        assert!(!session.value_wheel().is_enabled());
        assert!(!session.press(WheelKind::Value));
    }

    #[test]
    fn test_value_wheel_uses_undrawn_values() {
        let config = vec![CategoryConfig::new("A", ["1", "2", "3"])];
        let mut session = session(config, &["A2"]);

        let events = spin(&mut session, WheelKind::Category);
        assert!(events.contains(&SessionEvent::ValueWheelArmed {
            category: "A".to_string(),
            values: 2,
        }));
        assert_eq!(session.status(), &RoundStatus::AwaitingValue { category: "A".to_string() });
        assert_eq!(session.value_wheel().segments(), &["1".to_string(), "3".to_string()][..]);
        assert!(!session.category_wheel().is_enabled());

        let events = spin(&mut session, WheelKind::Value);
        let result = drawn_result(&events).unwrap();
        assert_eq!(result.category, "A");
        assert_eq!(Some(&result.value), session.value_wheel().selected());
        assert_ne!(result.value, "2");
        assert_eq!(session.value_wheel().launch_count(), 1);
    }

    #[test]
    fn test_value_wheel_locked_until_category_resolves() {
        let config = vec![CategoryConfig::new("A", ["1", "2"])];
        let mut session = session(config, &[]);
        assert!(!session.press(WheelKind::Value));
        assert_eq!(session.release(WheelKind::Value), Release::Ignored);
        assert_eq!(session.charger(WheelKind::Value).phase(), ChargePhase::Idle);
        assert_eq!(session.value_wheel().launch_count(), 0);
    }

    #[test]
    fn test_tap_does_not_spin() {
        let config = vec![CategoryConfig::new("A", ["1", "2"])];
        let mut session = session(config, &[]);
        assert!(session.press(WheelKind::Category));
        session.tick(FRAME);
        assert_eq!(session.release(WheelKind::Category), Release::Tap);
        assert!(!session.category_wheel().is_spinning());
        assert_eq!(session.charger(WheelKind::Category).value(), 0.0);
        assert!(session.can_charge(WheelKind::Category));
    }

    #[test]
    fn test_exhausted_configuration() {
        let config = vec![CategoryConfig::new("A", ["1"]), CategoryConfig::new("B", ["2"])];
        let mut session = session(config, &["A1", "B2"]);
        assert!(session.is_exhausted());
        assert!(session.category_wheel().segments().is_empty());
        assert!(session.value_wheel().segments().is_empty());
        assert!(!session.press(WheelKind::Category));
        assert_eq!(session.tick(FRAME), vec![SessionEvent::Round(RoundEvent::Exhausted)]);
        assert!(session.tick(FRAME).is_empty());
    }

    #[test]
    fn test_empty_configuration_is_exhausted() {
        let session = session(Vec::new(), &[]);
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_commit_and_next_round() {
        let config = vec![CategoryConfig::new("A", ["1"]), CategoryConfig::new("B", ["2"])];
        let mut store = DrawnSet::from_keys(["A1"]);
        let mut session = DrawSession::start(config.clone(), &store, DrawTuning::default()).unwrap();
        assert!(session.commit(&mut store).is_none());

        spin(&mut session, WheelKind::Category);
        assert_eq!(session.commit(&mut store), Some(DrawResult::new("B", "2")));
        session.commit(&mut store);
        assert_eq!(store.all(), vec!["A1", "B2"]);

        session.next_round(config, &store).unwrap();
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_next_round_refused_mid_spin() {
        let config = vec![CategoryConfig::new("A", ["1", "2"])];
        let store = DrawnSet::new();
        let mut session = DrawSession::start(config.clone(), &store, DrawTuning::default()).unwrap();
        session.press(WheelKind::Category);
        session.tick(1.0);
        session.release(WheelKind::Category);
        assert!(session.next_round(config, &store).unwrap_err().is_transition());
    }

    #[test]
    fn test_double_press_and_release_are_harmless() {
        let config = vec![CategoryConfig::new("A", ["1", "2"])];
        let mut session = session(config, &[]);
        assert!(session.press(WheelKind::Category));
        assert!(session.press(WheelKind::Category));
        session.tick(1.0);
        assert!(matches!(session.release(WheelKind::Category), Release::Launch(_)));
        assert_eq!(session.release(WheelKind::Category), Release::Ignored);
        assert!(!session.press(WheelKind::Category));
        assert_eq!(session.category_wheel().launch_count(), 1);
    }
}
