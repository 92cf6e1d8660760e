//! Counter game with a session high score

use crate::config::Config;
use crate::effects::Transient;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterButton {
    Decrement,
    Reset,
    Increment,
}

impl CounterButton {
    pub fn all() -> &'static [CounterButton] {
        &[Self::Decrement, Self::Reset, Self::Increment]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Decrement => " - ",
            Self::Reset => "Reset",
            Self::Increment => " + ",
        }
    }
}

/// How the current value is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTone {
    Normal,
    /// Above the win threshold
    Winning,
    /// Below zero
    Negative,
    /// Briefly after a reset
    ResetFlash,
}

#[derive(Debug, Clone)]
pub struct CounterGame {
    count: i64,
    high_score: i64,
    win_threshold: i64,
    pressed: Option<CounterButton>,
    press_pulse: Transient,
    reset_flash: Transient,
    high_score_flash: Transient,
    pulse_duration: Duration,
    reset_flash_duration: Duration,
    high_score_flash_duration: Duration,
}

impl CounterGame {
    pub fn new(config: &Config) -> Self {
        Self {
            count: 0,
            high_score: 0,
            win_threshold: config.counter.win_threshold,
            pressed: None,
            press_pulse: Transient::new(),
            reset_flash: Transient::new(),
            high_score_flash: Transient::new(),
            pulse_duration: config.effects.button_pulse(),
            reset_flash_duration: config.effects.reset_flash(),
            high_score_flash_duration: config.effects.high_score_flash(),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn press(&mut self, button: CounterButton, now: Instant) {
        match button {
            CounterButton::Increment => self.increment(now),
            CounterButton::Decrement => self.decrement(now),
            CounterButton::Reset => self.reset(now),
        }
    }

    pub fn increment(&mut self, now: Instant) {
        self.count += 1;
        self.pulse(CounterButton::Increment, now);
        self.update(now);
    }

    pub fn decrement(&mut self, now: Instant) {
        self.count -= 1;
        self.pulse(CounterButton::Decrement, now);
        self.update(now);
    }

    /// Back to zero; the high score is kept
    pub fn reset(&mut self, now: Instant) {
        self.count = 0;
        self.update(now);
        self.reset_flash.arm(now, self.reset_flash_duration);
    }

    fn pulse(&mut self, button: CounterButton, now: Instant) {
        self.pressed = Some(button);
        self.press_pulse.arm(now, self.pulse_duration);
    }

    fn update(&mut self, now: Instant) {
        if self.count > self.high_score {
            self.high_score = self.count;
            self.high_score_flash.arm(now, self.high_score_flash_duration);
        }
    }

    pub fn value_tone(&self, now: Instant) -> ValueTone {
        if self.reset_flash.is_active(now) {
            ValueTone::ResetFlash
        } else if self.count > self.win_threshold {
            ValueTone::Winning
        } else if self.count < 0 {
            ValueTone::Negative
        } else {
            ValueTone::Normal
        }
    }

    pub fn is_high_score_flashing(&self, now: Instant) -> bool {
        self.high_score_flash.is_active(now)
    }

    /// Whether a button is in its pressed pulse
    pub fn is_pressed(&self, button: CounterButton, now: Instant) -> bool {
        self.pressed == Some(button) && self.press_pulse.is_active(now)
    }
}

impl Default for CounterGame {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
