//! Five-question couples trivia.
//!
//! Both players answer all five questions on their own turn. Picking an
//! option locks the choice and flips a 70% coin for correctness; the
//! verdict shows for 800ms, the resolved question lingers another 1.5s,
//! then the next question comes up. A three-second bridge separates the
//! two turns.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::rng::ArcadeRng;
use crate::session::{Countdown, Effect, SessionRules, TurnEngine};
use std::time::Duration;
use tracing::debug;

/// One trivia question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// The prompt.
    pub text: &'static str,
    /// Three options to pick from.
    pub options: [&'static str; 3],
    /// Decorative emoji shown with the prompt.
    pub emoji: &'static str,
}

/// The fixed question deck, asked in order.
pub static QUESTIONS: [Question; 5] = [
    Question {
        text: "What's my ideal weekend?",
        options: ["Couch and movies", "A spontaneous trip", "Sleeping until noon"],
        emoji: "🌞",
    },
    Question {
        text: "Which food could I eat forever?",
        options: ["Pizza", "Biryani", "Momos"],
        emoji: "🍕",
    },
    Question {
        text: "What annoys me the most?",
        options: ["Slow walkers", "Loud chewing", "Being left on read"],
        emoji: "😤",
    },
    Question {
        text: "My dream vacation is...",
        options: ["Mountains", "A beach", "A city I've never seen"],
        emoji: "✈️",
    },
    Question {
        text: "What do I love most about us?",
        options: ["The inside jokes", "The comfortable silences", "The snack sharing"],
        emoji: "💞",
    },
];

const CORRECT_CHANCE: f64 = 0.7;
const REVEAL: Duration = Duration::from_millis(800);
const LINGER: Duration = Duration::from_millis(1500);
const TRANSITION: Duration = Duration::from_secs(3);

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for an option pick.
    Awaiting,
    /// Choice locked, verdict pending.
    Pending {
        /// The picked option index.
        choice: usize,
    },
    /// Verdict shown, next question pending.
    Answered {
        /// The picked option index.
        choice: usize,
        /// Whether the pick counted.
        correct: bool,
    },
}

/// One trivia session.
#[derive(Debug, Clone)]
pub struct Trivia {
    engine: TurnEngine,
    question: usize,
    stage: Stage,
    reveal: Option<(Countdown, bool)>,
    linger: Option<Countdown>,
    correct_chance: f64,
    rng: ArcadeRng,
}

impl Trivia {
    fn rules() -> SessionRules {
        SessionRules {
            turn: None,
            transition: Some(TRANSITION),
            start_cue: Some(ToneCue::Start),
            finish_cue: ToneCue::End,
            finish_burst: Some(BurstSpec::sparkles(50, Duration::from_millis(2500))),
        }
    }

    /// An idle session; call [`Trivia::start`] to begin.
    pub fn new(rng: ArcadeRng) -> Self {
        Self::with_chance(rng, CORRECT_CHANCE)
    }

    /// An idle session with a pinned correctness chance.
    pub fn with_chance(rng: ArcadeRng, correct_chance: f64) -> Self {
        Self {
            engine: TurnEngine::new(Self::rules()),
            question: 0,
            stage: Stage::Awaiting,
            reveal: None,
            linger: None,
            correct_chance,
            rng,
        }
    }

    /// The session driver, for phase and scores.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The question currently on screen.
    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.question]
    }

    /// One-based question number, for display.
    pub fn question_number(&self) -> usize {
        self.question + 1
    }

    /// Where the current question stands.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Begins player A's turn.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Locks in an option for the current question. Ignored while a
    /// verdict is pending or showing.
    pub fn select(&mut self, choice: usize) {
        if choice >= 3 || !self.engine.in_turn() || self.stage != Stage::Awaiting {
            return;
        }
        let correct = self.rng.gen_bool(self.correct_chance);
        debug!(question = self.question, choice, correct, "answer locked");
        self.stage = Stage::Pending { choice };
        self.reveal = Some((Countdown::new(REVEAL), correct));
        self.engine.emit(Effect::Tone(ToneCue::Click));
    }

    /// Feeds elapsed time into the verdict and advance delays.
    pub fn advance(&mut self, dt: Duration) {
        let before = self.engine.active_slot();
        self.engine.advance(dt);
        if self.engine.active_slot() != before {
            self.stage = Stage::Awaiting;
            self.reveal = None;
            self.linger = None;
        }

        if let Some((clock, correct)) = &mut self.reveal {
            clock.advance(dt);
            if clock.is_done() {
                let correct = *correct;
                let Stage::Pending { choice } = self.stage else {
                    return;
                };
                self.reveal = None;
                self.stage = Stage::Answered { choice, correct };
                self.linger = Some(Countdown::new(LINGER));
                if correct {
                    if let Some(slot) = self.engine.active_slot() {
                        self.engine.credit(slot, 1);
                    }
                    self.engine.emit(Effect::Tone(ToneCue::Win));
                } else {
                    self.engine.emit(Effect::Tone(ToneCue::Pop));
                }
            }
        } else if let Some(clock) = &mut self.linger {
            clock.advance(dt);
            if clock.is_done() {
                self.linger = None;
                self.stage = Stage::Awaiting;
                if self.question + 1 < QUESTIONS.len() {
                    self.question += 1;
                } else {
                    // Deck exhausted: the other player gets the same five.
                    self.question = 0;
                    self.engine.end_turn();
                }
            }
        }
    }

    /// Resets the session back to idle.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.question = 0;
        self.stage = Stage::Awaiting;
        self.reveal = None;
        self.linger = None;
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.engine.take_effects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Outcome, Phase, PlayerSlot};

    fn answer_one(game: &mut Trivia, choice: usize) {
        game.select(choice);
        game.advance(REVEAL);
        game.advance(LINGER);
    }

    #[test]
    fn a_pinned_coin_always_credits() {
        let mut game = Trivia::with_chance(ArcadeRng::new(41), 1.0);
        game.start();
        game.select(0);
        game.advance(REVEAL);
        assert!(matches!(game.stage(), Stage::Answered { correct: true, .. }));
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::A), 1);
    }

    #[test]
    fn a_pinned_coin_can_always_miss() {
        let mut game = Trivia::with_chance(ArcadeRng::new(42), 0.0);
        game.start();
        game.select(2);
        game.advance(REVEAL);
        assert!(matches!(
            game.stage(),
            Stage::Answered { correct: false, .. }
        ));
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::A), 0);
    }

    #[test]
    fn selecting_during_the_reveal_is_ignored() {
        let mut game = Trivia::with_chance(ArcadeRng::new(43), 1.0);
        game.start();
        game.select(0);
        game.select(1);
        assert_eq!(game.stage(), Stage::Pending { choice: 0 });
    }

    #[test]
    fn five_answers_end_the_turn_and_reset_the_deck() {
        let mut game = Trivia::with_chance(ArcadeRng::new(44), 1.0);
        game.start();
        for _ in 0..5 {
            answer_one(&mut game, 0);
        }
        assert!(matches!(
            game.engine().phase(),
            Phase::Transition {
                next: PlayerSlot::B,
                ..
            }
        ));
        assert_eq!(game.question_number(), 1);
    }

    #[test]
    fn both_players_answer_the_full_deck() {
        let mut game = Trivia::with_chance(ArcadeRng::new(45), 1.0);
        game.start();
        for _ in 0..5 {
            answer_one(&mut game, 1);
        }
        game.advance(TRANSITION);
        assert_eq!(game.engine().active_slot(), Some(PlayerSlot::B));

        for _ in 0..5 {
            answer_one(&mut game, 1);
        }
        assert_eq!(game.engine().outcome(), Some(Outcome::Tie));
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::B), 5);
    }
}
