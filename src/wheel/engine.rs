use anyhow::ensure;
use log::{debug, info};

use crate::archive::FortuneEntry;
use crate::config::WheelConfig;
use crate::consts;

use super::sector::landing_index;

#[derive(Clone, Debug, Default)]
pub struct WheelState {
    /// Accumulated rotation in degrees. Never wrapped, so kept in f64 to
    /// stay precise after many spins.
    pub angle: f64,
    pub spinning: bool,
    /// Degrees per frame, 0 while idle.
    pub speed: f32,
    /// Entry under the pointer after the last completed spin.
    pub result: Option<&'static FortuneEntry>,
}

pub struct WheelEngine {
    config: WheelConfig,
    archive: &'static [FortuneEntry],
    state: WheelState,
    rng: fastrand::Rng,
}

impl WheelEngine {
    pub fn new(config: WheelConfig, archive: &'static [FortuneEntry]) -> anyhow::Result<Self> {
        Self::with_rng(config, archive, fastrand::Rng::new())
    }

    pub fn with_rng(
        config: WheelConfig,
        archive: &'static [FortuneEntry],
        rng: fastrand::Rng,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        ensure!(!archive.is_empty(), "archive must hold at least one entry");

        debug!(
            "Wheel engine ready: {} sectors, speed [{}, {}), decay={}, stop<{}",
            archive.len(),
            config.min_speed,
            config.max_speed,
            config.decay_factor,
            config.stop_threshold
        );

        Ok(Self {
            config,
            archive,
            state: WheelState::default(),
            rng,
        })
    }

    /// Same archive and rotation, new tuning. Only allowed while idle.
    pub fn reconfigured(&self, config: WheelConfig) -> anyhow::Result<Self> {
        ensure!(!self.state.spinning, "cannot change settings while the wheel spins");

        let mut engine = Self::with_rng(config, self.archive, self.rng.clone())?;
        engine.state = self.state.clone();
        Ok(engine)
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn archive(&self) -> &'static [FortuneEntry] {
        self.archive
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    /// Kicks off a spin. Presses while a spin is running are ignored.
    /// Returns whether a new spin actually started.
    pub fn start_spin(&mut self) -> bool {
        if self.state.spinning {
            return false;
        }

        let span = self.config.max_speed - self.config.min_speed;
        self.state.speed = self.config.min_speed + self.rng.f32() * span;
        self.state.spinning = true;

        debug!(
            "Spin started at {:.2} deg/frame from angle {:.1}",
            self.state.speed, self.state.angle
        );
        true
    }

    /// Advances the wheel by one frame. Yields the landed entry on the frame
    /// the wheel settles, `None` otherwise.
    pub fn advance(&mut self) -> Option<&'static FortuneEntry> {
        if !self.state.spinning {
            return None;
        }

        self.state.angle += f64::from(self.state.speed);
        self.state.speed *= self.config.decay_factor;

        if self.state.speed < self.config.stop_threshold {
            self.state.spinning = false;
            self.state.speed = 0.0;
            return Some(self.settle());
        }

        None
    }

    fn settle(&mut self) -> &'static FortuneEntry {
        let index = landing_index(self.state.angle, self.archive.len(), consts::POINTER_OFFSET);
        let entry = &self.archive[index];
        self.state.result = Some(entry);

        info!(
            "Wheel settled at {:.1} deg on sector {index}: {} ({})",
            self.state.angle.rem_euclid(360.0),
            entry.label_cn,
            entry.label_en
        );
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ARCHIVE;

    fn engine(seed: u64) -> WheelEngine {
        WheelEngine::with_rng(WheelConfig::default(), &ARCHIVE, fastrand::Rng::with_seed(seed))
            .unwrap()
    }

    fn run_to_rest(engine: &mut WheelEngine) -> (usize, &'static FortuneEntry) {
        for frame in 1..10_000 {
            if let Some(entry) = engine.advance() {
                return (frame, entry);
            }
        }
        panic!("wheel never settled");
    }

    #[test]
    fn starts_idle_at_zero() {
        let engine = engine(1);
        let state = engine.state();
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.speed, 0.0);
        assert!(!state.spinning);
        assert!(state.result.is_none());
    }

    #[test]
    fn idle_advance_is_a_noop() {
        let mut engine = engine(1);
        assert!(engine.advance().is_none());
        assert_eq!(engine.state().angle, 0.0);
    }

    #[test]
    fn initial_speed_within_range() {
        let mut engine = engine(42);
        for _ in 0..50 {
            assert!(engine.start_spin());
            let speed = engine.state().speed;
            assert!((20.0..=30.0).contains(&speed), "speed {speed}");
            run_to_rest(&mut engine);
        }
    }

    #[test]
    fn press_while_spinning_is_ignored() {
        let mut engine = engine(7);
        assert!(engine.start_spin());
        engine.advance();
        engine.advance();

        let before = engine.state().clone();
        assert!(!engine.start_spin());
        let after = engine.state();
        assert_eq!(after.speed, before.speed);
        assert_eq!(after.angle, before.angle);
        assert!(after.spinning);
    }

    #[test]
    fn speed_strictly_decreases_while_spinning() {
        let mut engine = engine(3);
        engine.start_spin();
        let mut last = engine.state().speed;
        while engine.advance().is_none() {
            let speed = engine.state().speed;
            assert!(speed < last);
            last = speed;
        }
        assert_eq!(engine.state().speed, 0.0);
    }

    #[test]
    fn decay_terminates_for_any_valid_tuning() {
        for (speed, decay) in [(0.5, 0.5), (30.0, 0.97), (500.0, 0.999), (1e6, 0.9999), (25.0, 1e-6)] {
            let config = WheelConfig {
                min_speed: speed,
                max_speed: speed,
                decay_factor: decay,
                ..Default::default()
            };
            let mut engine = WheelEngine::with_rng(config, &ARCHIVE, fastrand::Rng::with_seed(0))
                .unwrap();
            engine.start_spin();

            let mut frames = 0u32;
            while engine.advance().is_none() {
                frames += 1;
                assert!(frames < 1_000_000, "speed {speed} decay {decay} never settled");
            }
        }
    }

    #[test]
    fn result_is_set_once_on_settling() {
        let mut engine = engine(11);
        engine.start_spin();

        while engine.is_spinning() {
            assert!(engine.state().result.is_none());
            engine.advance();
        }

        let result = engine.state().result.expect("settled wheel has a result");
        let index = landing_index(engine.state().angle, ARCHIVE.len(), 270.0);
        assert_eq!(result, &ARCHIVE[index]);

        // further frames do not touch anything
        let angle = engine.state().angle;
        assert!(engine.advance().is_none());
        assert_eq!(engine.state().angle, angle);
    }

    #[test]
    fn advance_returns_the_stored_result() {
        let mut engine = engine(5);
        engine.start_spin();
        let (_, landed) = run_to_rest(&mut engine);
        assert_eq!(Some(landed), engine.state().result);
    }

    #[test]
    fn angle_accumulates_across_spins() {
        let mut engine = engine(9);
        engine.start_spin();
        run_to_rest(&mut engine);
        let first = engine.state().angle;
        assert!(first > 360.0);

        engine.start_spin();
        run_to_rest(&mut engine);
        assert!(engine.state().angle > first);
    }

    #[test]
    fn slow_frames_still_turn_a_heavily_wound_wheel() {
        let config = WheelConfig {
            min_speed: 0.9,
            max_speed: 0.9,
            decay_factor: 0.99,
            ..Default::default()
        };
        let mut engine =
            WheelEngine::with_rng(config, &ARCHIVE, fastrand::Rng::with_seed(0)).unwrap();
        engine.state.angle = 2.0e7;
        engine.start_spin();

        let mut last = engine.state().angle;
        while engine.advance().is_none() {
            let angle = engine.state().angle;
            assert!(angle > last, "frame lost at angle {angle}");
            last = angle;
        }
        assert!(engine.state().angle > last);
    }

    #[test]
    fn same_seed_same_outcome() {
        let mut a = engine(1234);
        let mut b = engine(1234);
        a.start_spin();
        b.start_spin();
        assert_eq!(run_to_rest(&mut a), run_to_rest(&mut b));
    }

    #[test]
    fn rejects_invalid_config_and_empty_archive() {
        let config = WheelConfig {
            decay_factor: 1.0,
            ..Default::default()
        };
        assert!(WheelEngine::new(config, &ARCHIVE).is_err());

        static EMPTY: [FortuneEntry; 0] = [];
        assert!(WheelEngine::new(WheelConfig::default(), &EMPTY).is_err());
    }

    #[test]
    fn reconfigure_keeps_rotation_but_not_mid_spin() {
        let mut engine = engine(21);
        engine.start_spin();
        assert!(engine.reconfigured(WheelConfig::default()).is_err());

        run_to_rest(&mut engine);
        let tuned = WheelConfig {
            decay_factor: 0.9,
            ..Default::default()
        };
        let rebuilt = engine.reconfigured(tuned.clone()).unwrap();
        assert_eq!(rebuilt.state().angle, engine.state().angle);
        assert_eq!(rebuilt.state().result, engine.state().result);
        assert_eq!(rebuilt.config(), &tuned);
    }
}
