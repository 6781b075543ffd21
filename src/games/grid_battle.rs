//! Three-in-a-row on a 3x3 grid.
//!
//! Player B plays O and moves first; player A plays X. The game is
//! board-ended: no clocks, no transition, just alternating placements
//! until a line or a full board.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::session::{Effect, Outcome, PlayerSlot};
use std::time::Duration;
use tracing::debug;

/// The eight winning lines by cell index.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Player A's mark.
    X,
    /// Player B's mark.
    O,
}

impl Mark {
    /// The player slot that owns this mark.
    pub fn slot(self) -> PlayerSlot {
        match self {
            Mark::X => PlayerSlot::A,
            Mark::O => PlayerSlot::B,
        }
    }

    fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The character drawn for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// One grid battle session.
#[derive(Debug, Clone)]
pub struct GridBattle {
    board: [Option<Mark>; 9],
    to_move: Mark,
    result: Option<Outcome>,
    winning_line: Option<[usize; 3]>,
    effects: Vec<Effect>,
}

impl Default for GridBattle {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBattle {
    /// A fresh board with O to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            to_move: Mark::O,
            result: None,
            winning_line: None,
            effects: Vec::new(),
        }
    }

    /// Cell contents.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.board[index]
    }

    /// The mark whose turn it is, or `None` once finished.
    pub fn to_move(&self) -> Option<Mark> {
        if self.result.is_some() {
            None
        } else {
            Some(self.to_move)
        }
    }

    /// The final result, once there is one.
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// The three cells of the winning line, if someone won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Places the current mark in a cell. Occupied cells and finished
    /// boards ignore the placement entirely.
    pub fn place(&mut self, cell: usize) {
        if cell >= 9 || self.result.is_some() || self.board[cell].is_some() {
            return;
        }
        let mark = self.to_move;
        self.board[cell] = Some(mark);
        self.effects.push(Effect::Tone(ToneCue::Click));

        if let Some(line) = self.winning_line_for(mark) {
            debug!(?mark, ?line, "grid battle won");
            self.winning_line = Some(line);
            self.result = Some(match mark.slot() {
                PlayerSlot::A => Outcome::PlayerA,
                PlayerSlot::B => Outcome::PlayerB,
            });
            self.effects.push(Effect::Tone(ToneCue::Win));
            let burst = match mark {
                Mark::O => BurstSpec::hearts(30, Duration::from_secs(2)),
                Mark::X => BurstSpec::sparkles(20, Duration::from_secs(2)),
            };
            self.effects.push(Effect::Confetti(burst));
        } else if self.board.iter().all(Option::is_some) {
            debug!("grid battle tied");
            self.result = Some(Outcome::Tie);
            self.effects.push(Effect::Tone(ToneCue::Pop));
        } else {
            self.to_move = mark.other();
        }
    }

    /// Clears the board back to a fresh start, O to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn winning_line_for(&self, mark: Mark) -> Option<[usize; 3]> {
        LINES
            .into_iter()
            .find(|line| line.iter().all(|&i| self.board[i] == Some(mark)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn o_moves_first() {
        let game = GridBattle::new();
        assert_eq!(game.to_move(), Some(Mark::O));
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let mut game = GridBattle::new();
        game.place(4);
        game.take_effects();
        game.place(4);
        assert_eq!(game.cell(4), Some(Mark::O));
        assert_eq!(game.to_move(), Some(Mark::X));
        assert!(game.take_effects().is_empty());
    }

    #[test]
    fn column_win_goes_to_the_first_mover() {
        let mut game = GridBattle::new();
        for cell in [0, 1, 3, 4, 6] {
            game.place(cell);
        }
        assert_eq!(game.result(), Some(Outcome::PlayerB));
        assert_eq!(game.winning_line(), Some([0, 3, 6]));
    }

    #[test]
    fn placements_after_a_win_are_ignored() {
        let mut game = GridBattle::new();
        for cell in [0, 1, 3, 4, 6] {
            game.place(cell);
        }
        game.take_effects();
        game.place(8);
        assert_eq!(game.cell(8), None);
        assert!(game.take_effects().is_empty());
    }

    #[test]
    fn full_board_without_a_line_ties() {
        let mut game = GridBattle::new();
        // O X O / O X X / X O O reading the placement order below.
        for cell in [0, 1, 2, 4, 3, 5, 8, 6, 7] {
            game.place(cell);
        }
        assert_eq!(game.result(), Some(Outcome::Tie));
        let effects = game.take_effects();
        assert!(effects.contains(&Effect::Tone(ToneCue::Pop)));
        assert!(!effects.iter().any(|e| matches!(e, Effect::Confetti(_))));
    }

    #[test]
    fn restart_clears_the_board() {
        let mut game = GridBattle::new();
        game.place(0);
        game.place(1);
        game.restart();
        assert!((0..9).all(|i| game.cell(i).is_none()));
        assert_eq!(game.to_move(), Some(Mark::O));
    }
}
