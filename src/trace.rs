use crate::models::TraceFrame;
use anyhow::Result;
use glint::engine::{Event, Mode, Player};
use std::io::Write;
use std::time::Duration;

/// Plays `text` start to finish on a virtual clock, writing one JSON frame per
/// visible change. Nothing sleeps; time jumps straight to the next deadline.
pub fn run<W: Write>(out: &mut W, text: &str, wpm: u16, skip_countdown: bool) -> Result<()> {
    let mut player = Player::new(wpm);
    let mut now = Duration::ZERO;

    if !player.dispatch(Event::Start(text.to_string()), now) {
        log::warn!("nothing to read, input is blank");
        return Ok(());
    }
    emit(out, &player, now)?;

    if skip_countdown {
        player.dispatch(Event::SkipCountdown, now);
        emit(out, &player, now)?;
    }

    while player.state().mode() != Mode::Finished {
        let Some(deadline) = player.next_deadline() else {
            break;
        };
        now = deadline;
        if player.advance(now) {
            emit(out, &player, now)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn emit<W: Write>(out: &mut W, player: &Player, now: Duration) -> Result<()> {
    let frame = TraceFrame {
        at_ms: now.as_millis(),
        snapshot: player.snapshot(),
    };
    serde_json::to_writer(&mut *out, &frame)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn frames(text: &str, skip: bool) -> Vec<Value> {
        let mut buf = Vec::new();
        run(&mut buf, text, 300, skip).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn countdown_then_words_then_finish() {
        let out = frames("Hi, rabbit.", false);
        let modes: Vec<&str> = out.iter().map(|f| f["mode"].as_str().unwrap()).collect();
        assert_eq!(
            modes,
            ["CountdownPending", "CountdownPending", "CountdownPending", "Playing", "Playing", "Finished"]
        );
        assert_eq!(out[3]["atMs"], 3000);
        assert_eq!(out[3]["focal"], "H");
        assert_eq!(out[3]["after"], "i,");
        assert_eq!(out[4]["atMs"], 3220);
        assert_eq!(out[4]["before"], "ra");
        assert_eq!(out[5]["atMs"], 3520);
        assert_eq!(out[5]["remainingSeconds"], 0);
    }

    #[test]
    fn skipping_starts_at_zero() {
        let out = frames("a b", true);
        assert_eq!(out[1]["mode"], "Playing");
        assert_eq!(out[1]["atMs"], 0);
        assert_eq!(out.last().unwrap()["atMs"], 400);
    }

    #[test]
    fn blank_text_prints_nothing() {
        assert!(frames(" \n ", false).is_empty());
    }
}
