//! Stat counters that run from 0 up to a target once their section is seen.
//!
//! A counter does nothing until [`Counter::activate`] is called. The first
//! [`Counter::tick`] after that pins the start time; every tick after
//! recomputes the value on an ease-out-quartic curve until the duration has
//! elapsed. `tick` reports whether it wants another frame, so the frame source
//! can stop re-arming as soon as every counter is done.

use log::debug;

use super::anim::{ease_out_quart, progress};
use crate::error::{ConfigurationError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterState {
    Idle,
    /// `start` is `None` until the first tick after activation.
    Running { start: Option<f64> },
    Done,
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    duration: f64,
    value: u32,
    state: CounterState,
    suffix: String,
}

impl Counter {
    pub fn new(target: u32, duration_secs: f64) -> Result<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(ConfigurationError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            target,
            duration: duration_secs,
            value: 0,
            state: CounterState::Idle,
            suffix: String::new(),
        })
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Current value with its suffix, e.g. `50+` or `98%`.
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CounterState::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        self.state == CounterState::Done
    }

    /// Starts the animation. Only the first call has any effect; a counter
    /// never goes back to idle.
    pub fn activate(&mut self) {
        if self.state == CounterState::Idle {
            debug!("Counter to {} activated ({}s)", self.target, self.duration);
            self.state = CounterState::Running { start: None };
        }
    }

    /// Skips the animation and shows the final value.
    pub fn complete(&mut self) {
        self.value = self.target;
        self.state = CounterState::Done;
    }

    /// Recomputes the value for time `now`. Returns `true` while another
    /// frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let start = match self.state {
            CounterState::Idle | CounterState::Done => return false,
            CounterState::Running { start: Some(start) } => start,
            CounterState::Running { start: None } => {
                self.state = CounterState::Running { start: Some(now) };
                now
            }
        };

        if self.target == 0 {
            self.complete();
            return false;
        }

        let progress = progress(start, now, self.duration);
        if progress >= 1.0 {
            self.complete();
            return false;
        }

        let eased = (ease_out_quart(progress) * self.target as f64).floor() as u32;
        // A clock that steps backwards must not pull the value down.
        self.value = self.value.max(eased.min(self.target));
        true
    }
}
