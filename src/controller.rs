use crate::display::FortuneDisplay;
use crate::wheel::WheelEngine;

/// Glues the wheel to the fortune box. The frame driver calls `frame` once
/// per repaint, input handlers call `press`.
pub struct Controller {
    engine: WheelEngine,
    display: FortuneDisplay,
}

impl Controller {
    pub fn new(engine: WheelEngine) -> Self {
        Self {
            engine,
            display: FortuneDisplay::default(),
        }
    }

    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    pub fn display(&self) -> &FortuneDisplay {
        &self.display
    }

    pub fn replace_engine(&mut self, engine: WheelEngine) {
        self.engine = engine;
    }

    pub fn press(&mut self) {
        if self.engine.start_spin() {
            self.display.set_pending();
        }
    }

    pub fn frame(&mut self) {
        if let Some(entry) = self.engine.advance() {
            self.display.publish(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ARCHIVE;
    use crate::config::WheelConfig;

    fn controller(seed: u64) -> Controller {
        let engine =
            WheelEngine::with_rng(WheelConfig::default(), &ARCHIVE, fastrand::Rng::with_seed(seed))
                .unwrap();
        Controller::new(engine)
    }

    #[test]
    fn press_puts_display_in_pending() {
        let mut controller = controller(1);
        controller.press();
        assert!(controller.engine().is_spinning());
        assert_eq!(controller.display().lines(), ("Spinning…", None));
    }

    #[test]
    fn frames_publish_the_landed_entry() {
        let mut controller = controller(2);
        controller.press();
        while controller.engine().is_spinning() {
            controller.frame();
        }

        let landed = controller.engine().state().result.unwrap();
        let mut expected = FortuneDisplay::default();
        expected.publish(landed);
        assert_eq!(controller.display(), &expected);
    }

    #[test]
    fn press_mid_spin_keeps_pending_and_motion() {
        let mut controller = controller(3);
        controller.press();
        controller.frame();

        let speed = controller.engine().state().speed;
        let angle = controller.engine().state().angle;
        controller.press();

        assert_eq!(controller.engine().state().speed, speed);
        assert_eq!(controller.engine().state().angle, angle);
        assert_eq!(controller.display().lines(), ("Spinning…", None));
    }

    #[test]
    fn idle_frames_leave_display_alone() {
        let mut controller = controller(4);
        for _ in 0..10 {
            controller.frame();
        }
        assert_eq!(controller.display(), &FortuneDisplay::default());
    }
}
