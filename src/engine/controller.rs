//! Playback state machine.
//!
//! [`PlaybackState::apply`] consumes one [`Event`] at a time and answers with the
//! timer [`Effects`] the caller must carry out. It never touches a clock itself,
//! which keeps every transition testable without timer infrastructure; see
//! [`super::player::Player`] for the substrate that executes the effects.

use std::time::Duration;

use log::{debug, trace};
use serde::Serialize;

use super::focal::{self, FocalSplit};
use super::pacing;
use super::tokenizer::{self, Sequence};

pub const COUNTDOWN_START: u8 = 3;
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Idle,
    CountdownPending,
    Playing,
    Paused,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown,
    Word,
}

/// Identifies one armed timer. Every arm bumps the generation, so a handle
/// from an earlier arm never matches the live one again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub kind: TimerKind,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmTimer {
    pub handle: TimerHandle,
    pub after: Duration,
}

/// What the timer substrate has to do after a transition. `cancel` is always
/// applied before `arm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub cancel: Option<TimerHandle>,
    pub arm: Option<ArmTimer>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.cancel.is_none() && self.arm.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start(String),
    Toggle,
    Resume,
    Stop,
    Reset,
    AdjustRate(i32),
    SkipCountdown,
    TimerFired(TimerHandle),
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub before: String,
    pub focal: String,
    pub after: String,
    pub position: usize,
    pub total: usize,
    pub mode: Mode,
    pub rate: u16,
    pub remaining_seconds: u64,
    pub countdown: Option<u8>,
    pub progress_percent: f64,
}

#[derive(Debug, Clone)]
pub struct PlaybackState {
    sequence: Sequence,
    position: usize,
    mode: Mode,
    rate: u16,
    countdown: Option<u8>,
    armed: Option<TimerHandle>,
    generation: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(300)
    }
}

impl PlaybackState {
    pub fn new(rate: u16) -> Self {
        Self {
            sequence: Sequence::default(),
            position: 0,
            mode: Mode::Idle,
            rate: pacing::clamp_rate(i64::from(rate)),
            countdown: None,
            armed: None,
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rate(&self) -> u16 {
        self.rate
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn countdown(&self) -> Option<u8> {
        self.countdown
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn armed_timer(&self) -> Option<TimerHandle> {
        self.armed
    }

    pub fn current_unit(&self) -> Option<&str> {
        self.sequence.get(self.position)
    }

    pub fn current_split(&self) -> FocalSplit<'_> {
        self.current_unit().map(focal::split).unwrap_or_default()
    }

    pub fn remaining_seconds(&self) -> u64 {
        pacing::remaining_seconds(&self.sequence, self.position, self.rate)
    }

    pub fn remaining_ms(&self) -> f64 {
        pacing::remaining_ms(&self.sequence, self.position, self.rate)
    }

    pub fn progress_percent(&self) -> f64 {
        match (self.mode, self.sequence.len()) {
            (_, 0) => 0.0,
            (Mode::Finished, _) => 100.0,
            (_, total) => self.position as f64 / total as f64 * 100.0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let split = self.current_split();
        Snapshot {
            before: split.before.to_string(),
            focal: split.focal.to_string(),
            after: split.after.to_string(),
            position: self.position,
            total: self.sequence.len(),
            mode: self.mode,
            rate: self.rate,
            remaining_seconds: self.remaining_seconds(),
            countdown: self.countdown,
            progress_percent: self.progress_percent(),
        }
    }

    pub fn apply(&mut self, event: Event) -> Effects {
        let mut fx = Effects::default();

        match event {
            Event::Start(text) => self.start(&text, &mut fx),
            Event::Toggle => match self.mode {
                Mode::Playing => self.pause(&mut fx),
                Mode::Paused | Mode::Finished => self.resume(&mut fx),
                Mode::Idle | Mode::CountdownPending => {}
            },
            Event::Resume => self.resume(&mut fx),
            Event::Stop => match self.mode {
                Mode::CountdownPending | Mode::Playing | Mode::Finished => self.pause(&mut fx),
                Mode::Idle | Mode::Paused => {}
            },
            Event::Reset => self.reset(&mut fx),
            Event::AdjustRate(delta) => {
                let next = pacing::clamp_rate(i64::from(self.rate) + i64::from(delta));
                if next != self.rate {
                    debug!("rate {} -> {} wpm", self.rate, next);
                    self.rate = next;
                }
            }
            Event::SkipCountdown => {
                if self.mode == Mode::CountdownPending {
                    self.enter_playing(&mut fx);
                }
            }
            Event::TimerFired(handle) => self.on_timer(handle, &mut fx),
        }

        fx
    }

    fn start(&mut self, text: &str, fx: &mut Effects) {
        let sequence = tokenizer::tokenize(text);
        if sequence.is_empty() {
            return;
        }

        debug!("session started with {} units", sequence.len());
        self.sequence = sequence;
        self.position = 0;
        self.countdown = Some(COUNTDOWN_START);
        self.set_mode(Mode::CountdownPending);
        self.arm(TimerKind::Countdown, COUNTDOWN_STEP, fx);
    }

    fn resume(&mut self, fx: &mut Effects) {
        let Some(last) = self.sequence.last_index() else {
            return;
        };
        match self.mode {
            Mode::Paused => self.enter_playing(fx),
            Mode::Finished if self.position < last => self.enter_playing(fx),
            _ => {}
        }
    }

    fn pause(&mut self, fx: &mut Effects) {
        self.cancel(fx);
        self.countdown = None;
        self.set_mode(Mode::Paused);
    }

    fn reset(&mut self, fx: &mut Effects) {
        self.cancel(fx);
        self.sequence = Sequence::default();
        self.position = 0;
        self.countdown = None;
        self.set_mode(Mode::Idle);
    }

    fn enter_playing(&mut self, fx: &mut Effects) {
        let Some(unit) = self.current_unit() else {
            return;
        };
        let after = pacing::delay(unit, self.rate);
        self.countdown = None;
        self.set_mode(Mode::Playing);
        self.arm(TimerKind::Word, after, fx);
    }

    fn on_timer(&mut self, handle: TimerHandle, fx: &mut Effects) {
        if self.armed != Some(handle) {
            trace!("dropping stale {:?} timer", handle.kind);
            return;
        }
        self.armed = None;

        match (handle.kind, self.mode) {
            (TimerKind::Countdown, Mode::CountdownPending) => {
                let left = self.countdown.unwrap_or(0).saturating_sub(1);
                if left == 0 {
                    self.enter_playing(fx);
                } else {
                    self.countdown = Some(left);
                    self.arm(TimerKind::Countdown, COUNTDOWN_STEP, fx);
                }
            }
            (TimerKind::Word, Mode::Playing) => {
                let last = self.sequence.last_index().unwrap_or(0);
                if self.position >= last {
                    self.set_mode(Mode::Finished);
                } else {
                    self.position += 1;
                    self.enter_playing(fx);
                }
            }
            (kind, mode) => trace!("{kind:?} timer fired while {mode:?}"),
        }
    }

    fn arm(&mut self, kind: TimerKind, after: Duration, fx: &mut Effects) {
        self.cancel(fx);
        self.generation += 1;
        let handle = TimerHandle {
            kind,
            generation: self.generation,
        };
        self.armed = Some(handle);
        fx.arm = Some(ArmTimer { handle, after });
    }

    fn cancel(&mut self, fx: &mut Effects) {
        if let Some(handle) = self.armed.take() {
            fx.cancel = Some(handle);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("{:?} -> {:?} at {}/{}", self.mode, mode, self.position, self.sequence.len());
            self.mode = mode;
        }
    }
}
