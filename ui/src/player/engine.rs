//! Sequential navigation state machine for the wrap player.
//!
//! The engine is pure: it owns the current index and a generation counter
//! and hands the view a [`ScheduledAdvance`] whenever a dwell timer should be
//! (re)armed. Every index change bumps the generation, so a dwell timer
//! armed for an older slide is recognised as stale and ignored.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::WrapError;
use crate::slides::Wrap;

use super::progress::{indicator_states, IndicatorState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// How long each slide stays on screen before auto-advance.
    pub dwell_ms: u64,
    pub auto_advance: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 6_000,
            auto_advance: true,
        }
    }
}

/// A dwell timer request. The view sleeps `dwell_ms` then reports
/// `generation` back through [`PlayerEngine::dwell_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub generation: u64,
    pub dwell_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The index changed; re-arm the dwell timer with `schedule` (or leave it
    /// disarmed when `None`).
    Moved {
        from: usize,
        to: usize,
        schedule: Option<ScheduledAdvance>,
    },
    /// Already at the requested boundary.
    Unchanged,
    /// A dwell event from a timer that no longer owns the current slide.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEngine {
    pub config: PlayerConfig,
    len: usize,
    index: usize,
    generation: u64,
    paused: bool,
}

impl PlayerEngine {
    pub fn new(len: usize, config: PlayerConfig) -> Result<Self, WrapError> {
        if len == 0 {
            return Err(WrapError::EmptyWrap);
        }
        Ok(Self {
            config,
            len,
            index: 0,
            generation: 0,
            paused: false,
        })
    }

    /// A wrap is never empty, so this cannot fail.
    pub fn for_wrap(wrap: &Wrap, config: PlayerConfig) -> Self {
        Self {
            config,
            len: wrap.len(),
            index: 0,
            generation: 0,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    pub fn next(&mut self) -> Navigation {
        self.move_to(self.index.saturating_add(1))
    }

    pub fn prev(&mut self) -> Navigation {
        self.move_to(self.index.saturating_sub(1))
    }

    /// Jump to `target`, clamped into the sequence. Negative or oversized
    /// targets land on the nearest end instead of failing.
    pub fn jump_to(&mut self, target: i64) -> Navigation {
        let last = (self.len - 1) as i64;
        self.move_to(target.clamp(0, last) as usize)
    }

    /// Called when a dwell timer fires. Advances exactly one slide when the
    /// timer still belongs to the current slide.
    pub fn dwell_elapsed(&mut self, generation: u64) -> Navigation {
        if generation != self.generation || self.paused || !self.config.auto_advance {
            trace!(generation, current = self.generation, "ignoring stale dwell");
            return Navigation::Stale;
        }
        self.next()
    }

    /// Dwell timer for the current slide, if one should run. Nothing is
    /// scheduled on the last slide; the player never loops.
    pub fn schedule(&self) -> Option<ScheduledAdvance> {
        if !self.config.auto_advance || self.paused || self.is_last() {
            return None;
        }
        Some(ScheduledAdvance {
            generation: self.generation,
            dwell_ms: self.config.dwell_ms,
        })
    }

    /// Pause or resume auto-advance. Pausing cancels the running dwell;
    /// resuming starts a full dwell again. Returns the timer to arm.
    pub fn toggle_pause(&mut self) -> Option<ScheduledAdvance> {
        self.paused = !self.paused;
        self.generation = self.generation.wrapping_add(1);
        self.schedule()
    }

    /// Invalidate any outstanding dwell timer, e.g. when the view unmounts.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn indicators(&self) -> Vec<IndicatorState> {
        indicator_states(self.len, self.index)
    }

    fn move_to(&mut self, target: usize) -> Navigation {
        let target = target.min(self.len - 1);
        if target == self.index {
            return Navigation::Unchanged;
        }

        let from = self.index;
        self.index = target;
        self.generation = self.generation.wrapping_add(1);
        Navigation::Moved {
            from,
            to: target,
            schedule: self.schedule(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(len: usize) -> PlayerEngine {
        PlayerEngine::new(len, PlayerConfig::default()).unwrap()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(
            PlayerEngine::new(0, PlayerConfig::default()),
            Err(WrapError::EmptyWrap)
        ));
    }

    #[test]
    fn jump_to_any_valid_index_lands_there() {
        let mut eng = engine(7);
        for i in 0..7 {
            eng.jump_to(i);
            assert_eq!(eng.index(), i as usize);
        }
    }

    #[test]
    fn jump_out_of_range_clamps_to_nearest_end() {
        let mut eng = engine(5);
        eng.jump_to(-3);
        assert_eq!(eng.index(), 0);
        eng.jump_to(5);
        assert_eq!(eng.index(), 4);
        eng.jump_to(i64::MAX);
        assert_eq!(eng.index(), 4);
        eng.jump_to(i64::MIN);
        assert_eq!(eng.index(), 0);
    }

    #[test]
    fn next_is_idempotent_at_the_end() {
        let mut eng = engine(3);
        eng.jump_to(2);
        let generation = eng.generation();
        assert_eq!(eng.next(), Navigation::Unchanged);
        assert_eq!(eng.index(), 2);
        assert_eq!(eng.generation(), generation);
    }

    #[test]
    fn prev_is_idempotent_at_the_start() {
        let mut eng = engine(3);
        assert_eq!(eng.prev(), Navigation::Unchanged);
        assert_eq!(eng.index(), 0);
    }

    #[test]
    fn five_slide_walkthrough() {
        let mut eng = engine(5);
        eng.next();
        eng.next();
        eng.next();
        assert_eq!(eng.index(), 3);
        eng.next();
        assert_eq!(eng.index(), 4);
        assert!(eng.is_last());
        eng.next();
        assert_eq!(eng.index(), 4);
    }

    #[test]
    fn dwell_advances_exactly_one_step() {
        let mut eng = engine(4);
        let schedule = eng.schedule().unwrap();
        assert_eq!(schedule.dwell_ms, 6_000);

        match eng.dwell_elapsed(schedule.generation) {
            Navigation::Moved { from, to, schedule } => {
                assert_eq!((from, to), (0, 1));
                assert!(schedule.is_some());
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(eng.index(), 1);
    }

    #[test]
    fn manual_navigation_supersedes_pending_dwell() {
        let mut eng = engine(5);
        let first = eng.schedule().unwrap();

        let Navigation::Moved { schedule, .. } = eng.next() else {
            panic!("next should move");
        };
        let rearmed = schedule.unwrap();
        assert_ne!(rearmed.generation, first.generation);

        // The old timer fires late: it must not advance a second time.
        assert_eq!(eng.dwell_elapsed(first.generation), Navigation::Stale);
        assert_eq!(eng.index(), 1);

        eng.dwell_elapsed(rearmed.generation);
        assert_eq!(eng.index(), 2);
    }

    #[test]
    fn no_auto_advance_past_the_last_slide() {
        let mut eng = engine(2);
        let Navigation::Moved { schedule, .. } = eng.next() else {
            panic!("next should move");
        };
        assert!(schedule.is_none());
        assert!(eng.schedule().is_none());
        assert_eq!(eng.dwell_elapsed(eng.generation()), Navigation::Unchanged);
        assert_eq!(eng.index(), 1);
    }

    #[test]
    fn pause_cancels_and_resume_rearms() {
        let mut eng = engine(3);
        let armed = eng.schedule().unwrap();

        assert!(eng.toggle_pause().is_none());
        assert!(eng.is_paused());
        assert_eq!(eng.dwell_elapsed(armed.generation), Navigation::Stale);

        let resumed = eng.toggle_pause().unwrap();
        assert!(!eng.is_paused());
        assert_eq!(resumed.dwell_ms, eng.config.dwell_ms);
        eng.dwell_elapsed(resumed.generation);
        assert_eq!(eng.index(), 1);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut eng = engine(3);
        eng.toggle_pause();
        let Navigation::Moved { schedule, .. } = eng.next() else {
            panic!("next should move");
        };
        assert!(schedule.is_none());
        assert_eq!(eng.index(), 1);
    }

    #[test]
    fn auto_advance_can_be_disabled() {
        let config = PlayerConfig {
            auto_advance: false,
            ..PlayerConfig::default()
        };
        let mut eng = PlayerEngine::new(3, config).unwrap();
        assert!(eng.schedule().is_none());
        assert_eq!(eng.dwell_elapsed(0), Navigation::Stale);
        assert_eq!(eng.index(), 0);
    }

    #[test]
    fn cancel_invalidates_outstanding_timer() {
        let mut eng = engine(3);
        let armed = eng.schedule().unwrap();
        eng.cancel();
        assert_eq!(eng.dwell_elapsed(armed.generation), Navigation::Stale);
        assert_eq!(eng.index(), 0);
    }

    #[test]
    fn config_reads_partial_json() {
        let config: PlayerConfig = serde_json::from_str(r#"{ "dwellMs": 2500 }"#).unwrap();
        assert_eq!(config.dwell_ms, 2_500);
        assert!(config.auto_advance);
    }
}
