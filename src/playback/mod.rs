//! Playback of a step trace
//!
//! [`PlaybackController`] is the single source of truth for the playback
//! position and for whether the trace is auto-advancing. It owns the trace,
//! the current index, the speed setting and at most one [`timer::Timer`].
//!
//! # State machine
//!
//! ```text
//!            play()                    tick at last index
//!   Idle ───────────► Playing ───────────────────────────► Finished
//!    ▲  ◄── reset() ──   │ ▲                                  │
//!    │                pause() play()                          │ play() rewinds
//!    │                   ▼ │                                  │
//!    └──── reset() ──── Paused ◄──── step_back()/go_to_step() ┘
//! ```
//!
//! Out-of-range requests are clamped, never rejected: a scrubber being dragged
//! may send anything. With an empty trace every operation is a no-op.
//!
//! # Timer discipline
//!
//! Every operation that changes `is_playing` or `speed` drops the current
//! timer before deciding whether to arm a new one, so there is never a second
//! timer ticking at a stale rate.

pub mod clock;
pub mod command;
pub mod session;
pub mod timer;

use crate::trace::{Step, StepTrace};
use clock::{Clock, SystemClock};
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::Duration;
use timer::Timer;

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Half, Speed::Normal, Speed::Double, Speed::Quadruple];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
            Speed::Quadruple => 4.0,
        }
    }

    /// Time between two automatic steps
    pub fn interval(self) -> Duration {
        match self {
            Speed::Half => Duration::from_millis(2000),
            Speed::Normal => Duration::from_millis(1000),
            Speed::Double => Duration::from_millis(500),
            Speed::Quadruple => Duration::from_millis(250),
        }
    }

    /// Next faster speed, saturating at 4x
    pub fn faster(self) -> Self {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal => Speed::Double,
            Speed::Double | Speed::Quadruple => Speed::Quadruple,
        }
    }

    /// Next slower speed, saturating at 0.5x
    pub fn slower(self) -> Self {
        match self {
            Speed::Half | Speed::Normal => Speed::Half,
            Speed::Double => Speed::Normal,
            Speed::Quadruple => Speed::Double,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Half => write!(f, "0.5x"),
            Speed::Normal => write!(f, "1x"),
            Speed::Double => write!(f, "2x"),
            Speed::Quadruple => write!(f, "4x"),
        }
    }
}

impl TryFrom<f64> for Speed {
    type Error = String;

    fn try_from(multiplier: f64) -> Result<Self, Self::Error> {
        Speed::ALL
            .into_iter()
            .find(|s| s.multiplier() == multiplier)
            .ok_or_else(|| format!("unsupported speed {} (expected 0.5, 1, 2 or 4)", multiplier))
    }
}

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Stopped at the first step
    Idle,
    Playing,
    /// Stopped somewhere after the first step
    Paused,
    /// Stopped after trying to move past the last step
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Finished => "END",
        }
    }
}

/// Drives an index through an immutable [`StepTrace`]
#[derive(Debug)]
pub struct PlaybackController<C: Clock = SystemClock> {
    trace: StepTrace,
    current_step: usize,
    is_playing: bool,
    speed: Speed,
    finished: bool,
    timer: Option<Timer>,
    clock: C,
}

impl PlaybackController<SystemClock> {
    /// Create a controller on the wall clock
    pub fn new(trace: StepTrace) -> Self {
        Self::with_clock(trace, SystemClock)
    }
}

impl<C: Clock> PlaybackController<C> {
    pub fn with_clock(trace: StepTrace, clock: C) -> Self {
        PlaybackController {
            trace,
            current_step: 0,
            is_playing: false,
            speed: Speed::default(),
            finished: false,
            timer: None,
            clock,
        }
    }

    /// Replace the trace, discarding all in-flight playback state.
    ///
    /// The speed setting is kept.
    pub fn load(&mut self, trace: StepTrace) {
        self.cancel_timer();
        self.is_playing = false;
        self.finished = false;
        self.current_step = 0;
        self.trace = trace;
        log::debug!("playback: loaded trace with {} steps", self.trace.len());
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The active step, None for an empty trace
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.current_step)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_at_start(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.trace.last_index() == Some(self.current_step)
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else if self.finished {
            PlaybackState::Finished
        } else if self.current_step == 0 {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused
        }
    }

    /// Lines executed by the steps before the current one
    pub fn executed_lines(&self) -> FxHashSet<usize> {
        self.trace.executed_lines(self.current_step)
    }

    /// Whether a timer is armed
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Time until the next automatic step, None when not playing
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.remaining(self.clock.now()))
    }

    /// Advance one step; at the last step, stop playback instead
    pub fn step_forward(&mut self) {
        let Some(last) = self.trace.last_index() else {
            return;
        };

        if self.current_step < last {
            self.current_step += 1;
            self.finished = false;
        } else {
            if self.is_playing {
                self.cancel_timer();
                self.is_playing = false;
                log::debug!("playback: reached end at step {}", self.current_step);
            }
            self.finished = true;
        }
    }

    /// Go back one step, clamped at the first
    pub fn step_back(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        self.current_step = self.current_step.saturating_sub(1);
        self.finished = false;
    }

    /// Jump to `step`, clamped into the trace
    pub fn go_to_step(&mut self, step: usize) {
        let Some(last) = self.trace.last_index() else {
            return;
        };
        self.current_step = step.min(last);
        self.finished = false;
    }

    /// Stop and rewind to the first step
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.is_playing = false;
        self.finished = false;
        self.current_step = 0;
    }

    /// Start auto-advancing, rewinding first when already at the end
    pub fn play(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        if self.is_at_end() {
            self.current_step = 0;
        }
        self.cancel_timer();
        self.is_playing = true;
        self.finished = false;
        self.arm_timer();
        log::debug!(
            "playback: play from step {} at {}",
            self.current_step,
            self.speed
        );
    }

    /// Stop auto-advancing; idempotent
    pub fn pause(&mut self) {
        self.cancel_timer();
        self.is_playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Change speed; a running timer is replaced by one at the new interval
    pub fn set_speed(&mut self, speed: Speed) {
        self.cancel_timer();
        self.speed = speed;
        if self.is_playing {
            self.arm_timer();
        }
        log::debug!("playback: speed {}", speed);
    }

    /// Fire every tick that is due; returns how many fired.
    ///
    /// Each tick behaves exactly like [`step_forward`](Self::step_forward),
    /// including the stop at the last step, after which no more ticks fire.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some(timer) = self.timer.as_mut() {
            if !timer.is_due(now) {
                break;
            }
            timer.advance();
            fired += 1;
            self.step_forward();
        }

        fired
    }

    fn arm_timer(&mut self) {
        debug_assert!(self.timer.is_none(), "previous timer must be cancelled");
        self.timer = Some(Timer::start(self.clock.now(), self.speed.interval()));
    }

    fn cancel_timer(&mut self) {
        self.timer = None;
    }
}
