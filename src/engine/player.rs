use std::time::Duration;

use log::trace;

use super::controller::{Effects, Event, PlaybackState, Snapshot, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    handle: TimerHandle,
    deadline: Duration,
}

/// Single-slot timer queue around a [`PlaybackState`].
///
/// Time is whatever monotonic offset the caller passes in: `Instant::elapsed`
/// for the terminal host, a virtual clock for traces and tests.
#[derive(Debug, Clone, Default)]
pub struct Player {
    state: PlaybackState,
    pending: Option<Pending>,
}

impl Player {
    pub fn new(rate: u16) -> Self {
        Self {
            state: PlaybackState::new(rate),
            pending: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }

    /// Feeds a user command in. Any timer it arms counts from `now`.
    pub fn dispatch(&mut self, event: Event, now: Duration) -> bool {
        let before = self.state.snapshot();
        let fx = self.state.apply(event);
        self.schedule(fx, now);
        before != self.state.snapshot()
    }

    /// Fires every timer due at or before `now`. Re-armed timers count from the
    /// deadline that fired, not from `now`, so late polling never stretches a
    /// session. Returns whether anything fired.
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut fired = false;
        while let Some(due) = self.pending.filter(|p| p.deadline <= now) {
            self.pending = None;
            let fx = self.state.apply(Event::TimerFired(due.handle));
            self.schedule(fx, due.deadline);
            fired = true;
        }
        fired
    }

    fn schedule(&mut self, fx: Effects, base: Duration) {
        if let Some(cancel) = fx.cancel {
            if self.pending.is_some_and(|p| p.handle == cancel) {
                trace!("cancelled {:?} timer", cancel.kind);
                self.pending = None;
            }
        }
        if let Some(arm) = fx.arm {
            self.pending = Some(Pending {
                handle: arm.handle,
                deadline: base + arm.after,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::controller::Mode;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn countdown_runs_on_the_clock() {
        let mut player = Player::new(300);
        player.dispatch(Event::Start("a b".into()), ms(0));
        assert_eq!(player.next_deadline(), Some(ms(1_000)));

        assert!(!player.advance(ms(999)));
        assert!(player.advance(ms(2_000)));
        assert_eq!(player.state().countdown(), Some(1));

        player.advance(ms(3_000));
        assert_eq!(player.state().mode(), Mode::Playing);
        assert_eq!(player.next_deadline(), Some(ms(3_200)));
    }

    #[test]
    fn late_poll_catches_up_through_every_word() {
        let mut player = Player::new(300);
        player.dispatch(Event::Start("a b c".into()), ms(0));
        player.dispatch(Event::SkipCountdown, ms(0));

        player.advance(ms(10_000));
        assert_eq!(player.state().mode(), Mode::Finished);
        assert_eq!(player.state().position(), 2);
        assert_eq!(player.next_deadline(), None);
    }

    #[test]
    fn stop_clears_the_slot_synchronously() {
        let mut player = Player::new(300);
        player.dispatch(Event::Start("a b c".into()), ms(0));
        player.dispatch(Event::SkipCountdown, ms(0));
        player.dispatch(Event::Stop, ms(50));
        assert_eq!(player.next_deadline(), None);

        assert!(!player.advance(ms(10_000)));
        assert_eq!(player.state().position(), 0);
    }

    #[test]
    fn dispatch_reports_visible_changes() {
        let mut player = Player::new(300);
        assert!(!player.dispatch(Event::Toggle, ms(0)));
        assert!(player.dispatch(Event::AdjustRate(50), ms(0)));
        assert!(player.dispatch(Event::AdjustRate(5_000), ms(0)));
        assert!(!player.dispatch(Event::AdjustRate(50), ms(0)));
        assert_eq!(player.state().rate(), 1000);
    }
}
