//! The mini-game collection.

pub mod grid_battle;
pub mod heart_hunt;
pub mod memory_match;
pub mod reaction_tile;
pub mod scripted_reveal;
pub mod tap_target;
pub mod trivia;
pub mod truth_or_dare;

use strum::{Display, EnumIter};

/// Every game on the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum GameKind {
    /// Three-in-a-row on a 3x3 grid.
    #[strum(to_string = "Grid Battle")]
    GridBattle,
    /// Flip cards, find the pairs.
    #[strum(to_string = "Memory Match")]
    MemoryMatch,
    /// Catch targets before they fade.
    #[strum(to_string = "Tap Target")]
    TapTarget,
    /// Hit the lit tile, fast.
    #[strum(to_string = "Reaction Tile")]
    ReactionTile,
    /// Five questions, no wrong vibes.
    #[strum(to_string = "Trivia Round")]
    TriviaRound,
    /// The love calculator.
    #[strum(to_string = "Love Calculator")]
    ScriptedReveal,
    /// Race to catch the blue heart.
    #[strum(to_string = "Heart Hunt")]
    HeartHunt,
    /// Prompts, no scores.
    #[strum(to_string = "Truth or Dare")]
    TruthOrDare,
}

impl GameKind {
    /// One-line tagline shown beside the menu entry.
    pub fn tagline(self) -> &'static str {
        match self {
            GameKind::GridBattle => "three in a row takes it",
            GameKind::MemoryMatch => "find every matching pair",
            GameKind::TapTarget => "ten seconds of target catching",
            GameKind::ReactionTile => "tap the lit tile before it dims",
            GameKind::TriviaRound => "five questions about us",
            GameKind::ScriptedReveal => "science-grade compatibility check",
            GameKind::HeartHunt => "first to the blue heart wins",
            GameKind::TruthOrDare => "answer honestly or pay up",
        }
    }
}
