//! Truth or dare prompt cards.
//!
//! No scores, no clocks. Players alternate; each picks truth or dare
//! and gets a random prompt from that deck.

use crate::rng::ArcadeRng;
use crate::session::PlayerSlot;

/// The truth prompts.
pub static TRUTHS: [&str; 6] = [
    "What did you actually think on our first date?",
    "What's one thing I do that you secretly love?",
    "What's the most embarrassing thing you've done to impress me?",
    "Which of my habits would you steal if you could?",
    "What's a lie you told me that I never caught?",
    "When did you first know this was serious?",
];

/// The dare prompts.
pub static DARES: [&str; 8] = [
    "Serenade the other player for 20 seconds.",
    "Do your best impression of the other player.",
    "Speak in an accent until your next turn.",
    "Let the other player post anything from your phone.",
    "Recreate our first photo together, right now.",
    "Compliment the other player five times without repeating yourself.",
    "Dance with no music for 15 seconds.",
    "Let the other player style your hair however they want.",
];

/// Which deck a prompt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// An honest answer owed.
    Truth,
    /// A task owed.
    Dare,
}

/// One truth-or-dare session.
#[derive(Debug, Clone)]
pub struct TruthOrDare {
    player: PlayerSlot,
    current: Option<(PromptKind, &'static str)>,
    rng: ArcadeRng,
}

impl TruthOrDare {
    /// A fresh session, player A choosing first.
    pub fn new(rng: ArcadeRng) -> Self {
        Self {
            player: PlayerSlot::A,
            current: None,
            rng,
        }
    }

    /// The player currently choosing or answering.
    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    /// The prompt on screen, if one was drawn.
    pub fn current(&self) -> Option<(PromptKind, &'static str)> {
        self.current
    }

    /// Draws a random prompt from the chosen deck.
    pub fn choose(&mut self, kind: PromptKind) {
        let deck: &[&'static str] = match kind {
            PromptKind::Truth => &TRUTHS,
            PromptKind::Dare => &DARES,
        };
        if let Some(prompt) = self.rng.choose(deck) {
            self.current = Some((kind, prompt));
        }
    }

    /// Clears the prompt and hands the choice to the other player.
    pub fn next(&mut self) {
        if self.current.take().is_some() {
            self.player = self.player.other();
        }
    }

    /// Back to player A with no prompt drawn.
    pub fn restart(&mut self) {
        self.player = PlayerSlot::A;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_draws_from_the_right_deck() {
        let mut game = TruthOrDare::new(ArcadeRng::new(61));
        game.choose(PromptKind::Truth);
        let (kind, prompt) = game.current().unwrap();
        assert_eq!(kind, PromptKind::Truth);
        assert!(TRUTHS.contains(&prompt));
    }

    #[test]
    fn next_alternates_players_only_after_a_prompt() {
        let mut game = TruthOrDare::new(ArcadeRng::new(62));
        assert_eq!(game.player(), PlayerSlot::A);

        game.next();
        assert_eq!(game.player(), PlayerSlot::A);

        game.choose(PromptKind::Dare);
        game.next();
        assert_eq!(game.player(), PlayerSlot::B);
        assert!(game.current().is_none());
    }
}
