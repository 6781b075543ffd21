//! Flip-two-cards memory game.
//!
//! Ten cards, five symbol pairs, shuffled per session. A match credits
//! the current player and keeps their turn; a mismatch flips back after
//! one second and hands the turn over. Board-ended: the session
//! finishes when every pair is matched.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::rng::ArcadeRng;
use crate::session::{Countdown, Effect, SessionRules, TurnEngine};
use std::time::Duration;
use tracing::debug;

/// The five pair symbols on the cards.
pub const SYMBOLS: [&str; 5] = ["💖", "😘", "🐼", "🍕", "💍"];

const FLIP_BACK: Duration = Duration::from_secs(1);

/// One card on the table.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    symbol: usize,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// The card's symbol, shown only while face up or matched.
    pub fn symbol(&self) -> &'static str {
        SYMBOLS[self.symbol]
    }

    /// True while the card shows its face.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// True once the card's pair was found.
    pub fn is_matched(&self) -> bool {
        self.matched
    }
}

/// One memory match session.
#[derive(Debug, Clone)]
pub struct MemoryMatch {
    engine: TurnEngine,
    cards: Vec<Card>,
    pending: Vec<usize>,
    flip_back: Option<Countdown>,
}

impl MemoryMatch {
    fn rules() -> SessionRules {
        SessionRules {
            turn: None,
            transition: None,
            start_cue: None,
            finish_cue: ToneCue::End,
            finish_burst: Some(BurstSpec::hearts(40, Duration::from_millis(2500))),
        }
    }

    /// Deals a shuffled table and starts player A's turn immediately.
    pub fn new(rng: &mut ArcadeRng) -> Self {
        let mut symbols: Vec<usize> = (0..SYMBOLS.len()).chain(0..SYMBOLS.len()).collect();
        rng.shuffle(&mut symbols);
        let cards = symbols
            .into_iter()
            .map(|symbol| Card {
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();
        let mut engine = TurnEngine::new(Self::rules());
        engine.start();
        Self {
            engine,
            cards,
            pending: Vec::new(),
            flip_back: None,
        }
    }

    /// The session driver, for phase and scores.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The dealt cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True while a mismatched pair waits to flip back down.
    pub fn awaiting_flip_back(&self) -> bool {
        self.flip_back.is_some()
    }

    /// Flips a card face up. Ignored for matched or already face-up
    /// cards, while two cards are pending, or once finished.
    pub fn flip(&mut self, index: usize) {
        if index >= self.cards.len()
            || !self.engine.in_turn()
            || self.flip_back.is_some()
            || self.pending.len() >= 2
        {
            return;
        }
        let card = &mut self.cards[index];
        if card.matched || card.face_up {
            return;
        }
        card.face_up = true;
        self.pending.push(index);
        self.engine.emit(Effect::Tone(ToneCue::Click));

        if self.pending.len() == 2 {
            self.resolve_pair();
        }
    }

    /// Feeds elapsed time into the flip-back delay.
    pub fn advance(&mut self, dt: Duration) {
        self.engine.advance(dt);
        if let Some(clock) = &mut self.flip_back {
            clock.advance(dt);
            if clock.is_done() {
                self.flip_back = None;
                for &i in &self.pending {
                    self.cards[i].face_up = false;
                }
                self.pending.clear();
                self.engine.pass_turn();
            }
        }
    }

    /// Deals a fresh table and restarts the session.
    pub fn restart(&mut self, rng: &mut ArcadeRng) {
        *self = Self::new(rng);
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.engine.take_effects()
    }

    fn resolve_pair(&mut self) {
        let (first, second) = (self.pending[0], self.pending[1]);
        if self.cards[first].symbol == self.cards[second].symbol {
            debug!(symbol = self.cards[first].symbol, "pair matched");
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.pending.clear();
            self.engine.emit(Effect::Tone(ToneCue::Win));
            if let Some(slot) = self.engine.active_slot() {
                self.engine.credit(slot, 1);
            }
            if self.cards.iter().all(|c| c.matched) {
                self.engine.finish(self.engine.scoreboard().outcome());
            }
        } else {
            self.engine.emit(Effect::Tone(ToneCue::Pop));
            self.flip_back = Some(Countdown::new(FLIP_BACK));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlayerSlot;

    fn pair_positions(game: &MemoryMatch) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for symbol in 0..SYMBOLS.len() {
            let cells: Vec<usize> = game
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.symbol == symbol)
                .map(|(i, _)| i)
                .collect();
            pairs.push((cells[0], cells[1]));
        }
        pairs
    }

    #[test]
    fn deal_has_exactly_one_pair_per_symbol() {
        let mut rng = ArcadeRng::new(11);
        let game = MemoryMatch::new(&mut rng);
        assert_eq!(game.cards().len(), 10);
        for symbol in 0..SYMBOLS.len() {
            let count = game.cards().iter().filter(|c| c.symbol == symbol).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn match_credits_and_keeps_the_turn() {
        let mut rng = ArcadeRng::new(12);
        let mut game = MemoryMatch::new(&mut rng);
        let (first, second) = pair_positions(&game)[0];

        game.flip(first);
        game.flip(second);

        assert!(game.cards()[first].is_matched());
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::A), 1);
        assert_eq!(game.engine().active_slot(), Some(PlayerSlot::A));
    }

    #[test]
    fn mismatch_flips_back_and_passes_the_turn() {
        let mut rng = ArcadeRng::new(13);
        let mut game = MemoryMatch::new(&mut rng);
        let pairs = pair_positions(&game);
        let (a, _) = pairs[0];
        let (b, _) = pairs[1];

        game.flip(a);
        game.flip(b);
        assert!(game.awaiting_flip_back());
        assert!(game.cards()[a].is_face_up());

        game.advance(Duration::from_secs(1));
        assert!(!game.cards()[a].is_face_up());
        assert!(!game.cards()[b].is_face_up());
        assert_eq!(game.engine().active_slot(), Some(PlayerSlot::B));
    }

    #[test]
    fn third_flip_is_blocked_while_a_pair_is_pending() {
        let mut rng = ArcadeRng::new(14);
        let mut game = MemoryMatch::new(&mut rng);
        let pairs = pair_positions(&game);
        let (a, _) = pairs[0];
        let (b, _) = pairs[1];
        let (c, _) = pairs[2];

        game.flip(a);
        game.flip(b);
        game.flip(c);
        assert!(!game.cards()[c].is_face_up());
    }

    #[test]
    fn clearing_the_table_finishes_with_the_tally() {
        let mut rng = ArcadeRng::new(15);
        let mut game = MemoryMatch::new(&mut rng);
        for (a, b) in pair_positions(&game) {
            game.flip(a);
            game.flip(b);
        }
        // Player A matched all five pairs without ever losing the turn.
        assert_eq!(game.engine().outcome(), Some(crate::session::Outcome::PlayerA));
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::A), 5);
    }
}
