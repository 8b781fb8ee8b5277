//! Pacing and tokenization engine. No I/O, no clocks, no failure modes.

pub mod controller;
pub mod focal;
pub mod pacing;
pub mod player;
pub mod tokenizer;

pub use controller::{Effects, Event, Mode, PlaybackState, Snapshot, TimerHandle, TimerKind};
pub use focal::{split, FocalSplit};
pub use player::Player;
pub use tokenizer::{tokenize, Sequence};
