use std::time::Duration;

use glint::engine::{focal, pacing, tokenize, Event, Mode, PlaybackState, Player};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn playing(text: &str, wpm: u16) -> Player {
    let mut player = Player::new(wpm);
    player.dispatch(Event::Start(text.to_string()), ms(0));
    player.dispatch(Event::SkipCountdown, ms(0));
    player
}

#[test]
fn remaining_time_drops_by_each_next_delay() {
    let text = "Stop. Then, slowly: read every word carefully!";
    let mut player = playing(text, 300);
    let sequence = tokenize(text);

    while player.state().mode() == Mode::Playing {
        let position = player.state().position();
        let before = player.state().remaining_ms();
        let Some(deadline) = player.next_deadline() else {
            break;
        };
        player.advance(deadline);

        if player.state().mode() == Mode::Finished {
            assert_eq!(position, sequence.len() - 1);
            assert_eq!(player.state().remaining_seconds(), 0);
            break;
        }
        let next = &sequence[position + 1];
        let dropped = before - player.state().remaining_ms();
        assert!((dropped - pacing::delay_ms(next, 300)).abs() < 1e-6);
    }

    assert_eq!(player.state().mode(), Mode::Finished);
    assert_eq!(player.state().position(), sequence.len() - 1);
}

#[test]
fn finishing_never_overruns_the_last_unit() {
    let mut player = playing("one two", 600);
    player.advance(ms(60_000));
    assert_eq!(player.state().mode(), Mode::Finished);
    assert_eq!(player.state().position(), 1);
    assert_eq!(player.snapshot().focal, "w");

    // nothing left to fire
    assert!(!player.advance(ms(120_000)));
}

#[test]
fn reset_leaves_no_live_timer() {
    let mut player = Player::new(300);
    player.dispatch(Event::Start("a b".into()), ms(0));
    player.advance(ms(3_000));
    assert_eq!(player.state().mode(), Mode::Playing);

    player.dispatch(Event::Toggle, ms(3_050));
    player.dispatch(Event::Toggle, ms(3_100));
    assert_eq!(player.next_deadline(), Some(ms(3_300)));

    player.dispatch(Event::Reset, ms(3_150));
    assert_eq!(player.state().mode(), Mode::Idle);
    assert!(player.state().sequence().is_empty());
    assert_eq!(player.next_deadline(), None);
    assert!(!player.advance(ms(100_000)));
    assert_eq!(player.state().mode(), Mode::Idle);
}

#[test]
fn resume_picks_up_where_it_paused() {
    let mut player = playing("a b c d", 300);
    player.advance(ms(400));
    assert_eq!(player.state().position(), 2);

    player.dispatch(Event::Stop, ms(450));
    player.advance(ms(5_000));
    assert_eq!(player.state().position(), 2);

    player.dispatch(Event::Resume, ms(5_000));
    assert_eq!(player.next_deadline(), Some(ms(5_200)));
    player.advance(ms(5_200));
    assert_eq!(player.state().position(), 3);
}

#[test]
fn stale_handles_cannot_touch_a_new_session() {
    let mut state = PlaybackState::new(300);
    let old = state.apply(Event::Start("first session".into()));
    let old = old.arm.unwrap().handle;

    let fresh = state.apply(Event::Start("second".into()));
    assert_eq!(fresh.cancel, Some(old));

    assert!(state.apply(Event::TimerFired(old)).is_empty());
    assert_eq!(state.countdown(), Some(3));
    assert_eq!(state.sequence().len(), 1);
}

#[test]
fn every_unit_splits_back_into_itself() {
    let text = "“Quoted,” she said — naïvely — at 3:45pm... ¿Sí? well-known (parenthetical) 42!";
    for unit in tokenize(text).iter() {
        let s = focal::split(unit);
        assert_eq!([s.before, s.focal, s.after].concat(), unit);
        assert_eq!(s.focal.chars().count(), 1);
    }
}
