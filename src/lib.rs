//! Rapid serial reading: tokenizer, focal splitter, pacing model and playback
//! state machine, plus the small string helpers they share.

pub mod engine;
pub mod utils;
