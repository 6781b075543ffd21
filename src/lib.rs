//! Love Arcade: a terminal arcade of two-player casual mini-games.
//!
//! Eight games share one session vocabulary (phases, turns, scores,
//! countdowns) and one effects channel for tone cues and confetti.
//! Everything runs on a single tick-driven thread; randomness is
//! seeded and forkable so whole runs can be replayed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod confetti;
pub mod games;
pub mod rng;
pub mod session;
pub mod tui;

pub use audio::{ToneCue, TonePlayer};
pub use confetti::{BurstSpec, ConfettiOverlay, GlyphKind};
pub use config::ArcadeConfig;
pub use rng::ArcadeRng;
pub use session::{Countdown, Effect, Outcome, Phase, PlayerSlot, Scoreboard, TurnEngine};
