//! Time-travel playback over a [`StepSequence`].
//!
//! The engine owns the loaded sequence, the current index, the speed and at
//! most one [`ScheduledAdvance`]. Auto-advance is cooperative: the host calls
//! [`PlaybackEngine::tick`] from its event loop, and the engine moves forward
//! once the pending advance is due. Every arming replaces the previous handle
//! with a new generation token, so a stale advance can never fire.
//!
//! Explicit navigation pauses playback and cancels the pending advance, the
//! same way stepping in a debugger stops a running program.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::errors::{VizError, VizResult};
use crate::step::{Step, StepSequence};
use std::time::Duration;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

/// Auto-advance delay for a speed: `1100 - speed * 100` milliseconds
pub fn delay_for_speed(speed: u8) -> VizResult<Duration> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(VizError::InvalidSpeed(speed));
    }
    Ok(Duration::from_millis(1100 - u64::from(speed) * 100))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Coarse engine state for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No steps loaded
    Idle,
    Paused,
    Playing,
    /// Paused on the last step
    Finished,
}

/// The one pending auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub token: u64,
    /// Clock reading at which the advance fires
    pub due: Duration,
}

pub struct PlaybackEngine<C: Clock = SystemClock> {
    clock: C,
    sequence: StepSequence,
    index: usize,
    playing: bool,
    speed: u8,
    pending: Option<ScheduledAdvance>,
    generation: u64,
}

impl PlaybackEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for PlaybackEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlaybackEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        PlaybackEngine {
            clock,
            sequence: StepSequence::default(),
            index: 0,
            playing: false,
            speed: DEFAULT_SPEED,
            pending: None,
            generation: 0,
        }
    }

    /// Replace the sequence and rewind to its first step, paused
    pub fn load(&mut self, sequence: StepSequence) {
        self.cancel();
        self.sequence = sequence;
        self.index = 0;
        self.playing = false;
        log::trace!("loaded {} steps", self.sequence.len());
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.sequence.get(self.index)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn pending(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.sequence.len()
    }

    pub fn state(&self) -> PlaybackState {
        if self.sequence.is_empty() {
            PlaybackState::Idle
        } else if self.playing {
            PlaybackState::Playing
        } else if self.is_at_end() {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        }
    }

    /// Start auto-advance. Returns `false` when there is nothing left to play.
    pub fn play(&mut self) -> bool {
        if self.sequence.is_empty() || self.is_at_end() {
            return false;
        }
        self.playing = true;
        self.arm();
        log::trace!("play from step {}", self.index);
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.cancel();
        log::trace!("pause at step {}", self.index);
    }

    /// Play if paused, pause if playing. Returns whether playback is now running.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    /// Move one step, clamped to the sequence. Returns whether the index moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.stop();
        let before = self.index;
        match direction {
            Direction::Forward if !self.is_at_end() => self.index += 1,
            Direction::Backward if self.index > 0 => self.index -= 1,
            _ => {}
        }
        self.index != before
    }

    pub fn go_to_start(&mut self) {
        self.stop();
        self.index = 0;
    }

    pub fn go_to_end(&mut self) {
        self.stop();
        self.index = self.sequence.len().saturating_sub(1);
    }

    /// Change the auto-advance speed; a pending advance is re-armed with the
    /// new delay.
    pub fn set_speed(&mut self, speed: u8) -> VizResult<()> {
        if let Err(e) = delay_for_speed(speed) {
            log::warn!("rejected playback speed {speed}");
            return Err(e);
        }
        self.speed = speed;
        if self.playing {
            self.arm();
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        // speed is kept within range by set_speed
        Duration::from_millis(1100 - u64::from(self.speed) * 100)
    }

    /// Fire the pending advance if it is due. Returns whether the index moved.
    ///
    /// Advances at most one step per call, then re-arms, or pauses once the
    /// last step is reached.
    pub fn tick(&mut self) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if !self.playing || pending.token != self.generation {
            self.pending = None;
            return false;
        }
        if self.clock.now() < pending.due {
            return false;
        }

        self.pending = None;
        if !self.is_at_end() {
            self.index += 1;
        }
        if self.is_at_end() {
            self.playing = false;
            log::trace!("playback finished at step {}", self.index);
        } else {
            self.arm();
        }
        true
    }

    /// Time left until the pending advance fires, if one is armed
    pub fn time_until_due(&self) -> Option<Duration> {
        self.pending
            .map(|p| p.due.saturating_sub(self.clock.now()))
    }

    fn arm(&mut self) {
        self.generation += 1;
        self.pending = Some(ScheduledAdvance {
            token: self.generation,
            due: self.clock.now() + self.delay(),
        });
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    /// Navigation pauses and drops any pending advance
    fn stop(&mut self) {
        if self.playing {
            log::trace!("navigation paused playback at step {}", self.index);
        }
        self.playing = false;
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepBuilder;

    fn sequence(len: usize) -> StepSequence {
        (0..len)
            .map(|i| {
                StepBuilder::new(format!("step {i}"))
                    .numbers(&[1, 2, 3])
                    .build()
                    .unwrap()
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn engine(len: usize) -> (PlaybackEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut engine = PlaybackEngine::with_clock(clock.clone());
        engine.load(sequence(len));
        (engine, clock)
    }

    #[test]
    fn test_speed_formula() {
        assert_eq!(delay_for_speed(1).unwrap(), Duration::from_millis(1000));
        assert_eq!(delay_for_speed(5).unwrap(), Duration::from_millis(600));
        assert_eq!(delay_for_speed(10).unwrap(), Duration::from_millis(100));
        assert_eq!(delay_for_speed(0), Err(VizError::InvalidSpeed(0)));
        assert_eq!(delay_for_speed(11), Err(VizError::InvalidSpeed(11)));
    }

    #[test]
    fn test_load_resets() {
        let (mut engine, _) = engine(4);
        engine.go_to_end();
        engine.load(sequence(2));
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.state(), PlaybackState::Paused);
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_step_clamps() {
        let (mut engine, _) = engine(3);
        assert!(!engine.step(Direction::Backward));
        assert!(engine.step(Direction::Forward));
        assert!(engine.step(Direction::Forward));
        assert!(!engine.step(Direction::Forward));
        assert_eq!(engine.current_index(), 2);
        assert_eq!(engine.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_auto_advance_waits_for_delay() {
        let (mut engine, clock) = engine(3);
        engine.set_speed(10).unwrap();
        assert!(engine.play());
        clock.advance_ms(99);
        assert!(!engine.tick());
        clock.advance_ms(1);
        assert!(engine.tick());
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_playing());
    }

    #[test]
    fn test_tick_advances_once_per_call() {
        let (mut engine, clock) = engine(5);
        engine.play();
        clock.advance_ms(10_000);
        assert!(engine.tick());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_playback_stops_at_end() {
        let (mut engine, clock) = engine(3);
        engine.play();
        for _ in 0..2 {
            clock.advance(engine.delay());
            assert!(engine.tick());
        }
        assert_eq!(engine.current_index(), 2);
        assert!(!engine.is_playing());
        assert!(engine.pending().is_none());
        assert_eq!(engine.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_play_at_end_is_noop() {
        let (mut engine, _) = engine(3);
        engine.go_to_end();
        assert!(!engine.play());
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_play_on_empty_is_noop() {
        let mut engine = PlaybackEngine::with_clock(ManualClock::new());
        assert_eq!(engine.state(), PlaybackState::Idle);
        assert!(!engine.play());
    }

    #[test]
    fn test_navigation_cancels_pending() {
        let (mut engine, clock) = engine(5);
        engine.play();
        engine.step(Direction::Forward);
        assert!(!engine.is_playing());
        assert!(engine.pending().is_none());
        clock.advance_ms(5_000);
        assert!(!engine.tick());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_speed_change_rearms() {
        let (mut engine, clock) = engine(5);
        engine.play();
        let first = engine.pending().unwrap();
        clock.advance_ms(50);
        engine.set_speed(10).unwrap();
        let second = engine.pending().unwrap();
        assert!(second.token > first.token);
        assert_eq!(second.due, Duration::from_millis(150));
        assert_eq!(engine.time_until_due(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_invalid_speed_keeps_old() {
        let (mut engine, _) = engine(2);
        assert_eq!(engine.set_speed(0), Err(VizError::InvalidSpeed(0)));
        assert_eq!(engine.speed(), DEFAULT_SPEED);
    }

    #[test]
    fn test_toggle() {
        let (mut engine, _) = engine(3);
        assert!(engine.toggle());
        assert!(!engine.toggle());
        assert_eq!(engine.state(), PlaybackState::Paused);
    }
}
