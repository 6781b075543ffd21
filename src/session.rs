//! Generic turn-based session driver.
//!
//! Every mini-game shares the same lifecycle: ready, player A's turn,
//! an optional blocking transition, player B's turn, finished. This
//! module owns that lifecycle once — phase, scoreboard, countdowns and
//! finish side effects — so each game only supplies its rules and its
//! own board logic.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use std::time::Duration;
use tracing::debug;

/// One of the two fixed players in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    /// First player.
    A,
    /// Second player.
    B,
}

impl PlayerSlot {
    /// The other player.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::A => PlayerSlot::B,
            PlayerSlot::B => PlayerSlot::A,
        }
    }
}

/// Final outcome of a session. Set once, immutable until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player A won.
    PlayerA,
    /// Player B won.
    PlayerB,
    /// Equal standing.
    Tie,
}

impl Outcome {
    /// The winning slot, if any.
    pub fn winner(self) -> Option<PlayerSlot> {
        match self {
            Outcome::PlayerA => Some(PlayerSlot::A),
            Outcome::PlayerB => Some(PlayerSlot::B),
            Outcome::Tie => None,
        }
    }
}

/// Per-player running score. Tallies only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    a: u32,
    b: u32,
}

impl Scoreboard {
    /// Adds points to a player's tally.
    pub fn credit(&mut self, slot: PlayerSlot, points: u32) {
        match slot {
            PlayerSlot::A => self.a += points,
            PlayerSlot::B => self.b += points,
        }
    }

    /// Current tally for a player.
    pub fn get(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::A => self.a,
            PlayerSlot::B => self.b,
        }
    }

    /// Higher tally wins; equal tallies tie.
    pub fn outcome(&self) -> Outcome {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Outcome::PlayerA,
            std::cmp::Ordering::Less => Outcome::PlayerB,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// A saturating countdown. Never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    /// Starts a countdown at the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Subtracts elapsed time, stopping at zero.
    pub fn advance(&mut self, dt: Duration) {
        self.remaining = self.remaining.saturating_sub(dt);
    }

    /// True once the countdown reached zero.
    pub fn is_done(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Time left.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whole seconds left, rounded up for display.
    pub fn display_secs(&self) -> u64 {
        let secs = self.remaining.as_secs();
        if self.remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

/// Current state of a session's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Idle, awaiting explicit start.
    Ready,
    /// A player's active turn, with its countdown where the game uses one.
    Turn {
        /// Whose turn it is.
        slot: PlayerSlot,
        /// Turn countdown, for timer-ended turns.
        clock: Option<Countdown>,
    },
    /// Fixed countdown bridging turns; blocks input.
    Transition {
        /// The player about to play.
        next: PlayerSlot,
        /// Remaining bridge time.
        clock: Countdown,
    },
    /// Result computed; only restart is accepted.
    Finished(Outcome),
}

/// A queued side effect, applied by the UI layer after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Play a tone cue.
    Tone(ToneCue),
    /// Spawn a confetti burst.
    Confetti(BurstSpec),
}

/// Per-game lifecycle parameters.
#[derive(Debug, Clone, Copy)]
pub struct SessionRules {
    /// Turn length for timer-ended turns; `None` for board-ended turns.
    pub turn: Option<Duration>,
    /// Bridge length between turns, where the game uses one.
    pub transition: Option<Duration>,
    /// Cue played on start, if any.
    pub start_cue: Option<ToneCue>,
    /// Cue played exactly once on entering `Finished`.
    pub finish_cue: ToneCue,
    /// Burst spawned exactly once on entering `Finished`, if any.
    pub finish_burst: Option<BurstSpec>,
}

/// The shared turn-based state machine.
///
/// Transitions are one-directional (ready → A → [transition] → B →
/// finished) except `pass_turn`, used by board-ended games whose turn
/// alternates freely, and `restart`, which returns to a fresh start.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    rules: SessionRules,
    phase: Phase,
    scoreboard: Scoreboard,
    effects: Vec<Effect>,
}

impl TurnEngine {
    /// Creates an idle engine with the given rules.
    pub fn new(rules: SessionRules) -> Self {
        Self {
            rules,
            phase: Phase::Ready,
            scoreboard: Scoreboard::default(),
            effects: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current scores.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// The active player, if a turn is in progress.
    pub fn active_slot(&self) -> Option<PlayerSlot> {
        match self.phase {
            Phase::Turn { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// The computed result, once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True while a turn is accepting input.
    pub fn in_turn(&self) -> bool {
        matches!(self.phase, Phase::Turn { .. })
    }

    /// Begins player A's turn. No-op unless idle.
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        debug!("session start");
        if let Some(cue) = self.rules.start_cue {
            self.effects.push(Effect::Tone(cue));
        }
        self.phase = self.turn_phase(PlayerSlot::A);
    }

    /// Feeds elapsed time into the active countdowns.
    pub fn advance(&mut self, dt: Duration) {
        match &mut self.phase {
            Phase::Turn {
                clock: Some(clock), ..
            } => {
                clock.advance(dt);
                if clock.is_done() {
                    self.end_turn();
                }
            }
            Phase::Transition { next, clock } => {
                clock.advance(dt);
                if clock.is_done() {
                    let next = *next;
                    self.phase = self.turn_phase(next);
                }
            }
            _ => {}
        }
    }

    /// Adds points to a player's tally. Only counts during a turn.
    pub fn credit(&mut self, slot: PlayerSlot, points: u32) {
        if self.in_turn() {
            self.scoreboard.credit(slot, points);
        }
    }

    /// Ends the current turn: A moves on to B (through the transition
    /// where configured); B ends the session with the tally comparison.
    pub fn end_turn(&mut self) {
        let Phase::Turn { slot, .. } = self.phase else {
            return;
        };
        match slot {
            PlayerSlot::A => match self.rules.transition {
                Some(bridge) => {
                    self.phase = Phase::Transition {
                        next: PlayerSlot::B,
                        clock: Countdown::new(bridge),
                    };
                }
                None => self.phase = self.turn_phase(PlayerSlot::B),
            },
            PlayerSlot::B => self.finish(self.scoreboard.outcome()),
        }
    }

    /// Hands the turn to the other player without ending the session.
    /// Used by board-ended games (memory match).
    pub fn pass_turn(&mut self) {
        if let Phase::Turn { slot, clock } = self.phase {
            self.phase = Phase::Turn {
                slot: slot.other(),
                clock,
            };
        }
    }

    /// Enters `Finished` with the given outcome, emitting the finish cue
    /// and burst exactly once. No-op if already finished.
    pub fn finish(&mut self, outcome: Outcome) {
        if matches!(self.phase, Phase::Finished(_)) {
            return;
        }
        debug!(?outcome, "session finished");
        self.phase = Phase::Finished(outcome);
        self.effects.push(Effect::Tone(self.rules.finish_cue));
        if let Some(burst) = self.rules.finish_burst {
            self.effects.push(Effect::Confetti(burst));
        }
    }

    /// Resets every piece of session state back to idle.
    pub fn restart(&mut self) {
        debug!("session restart");
        self.phase = Phase::Ready;
        self.scoreboard = Scoreboard::default();
        self.effects.clear();
    }

    /// Queues an additional effect (a game-specific cue).
    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn turn_phase(&self, slot: PlayerSlot) -> Phase {
        Phase::Turn {
            slot,
            clock: self.rules.turn.map(Countdown::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(turn_secs: u64, transition_secs: Option<u64>) -> SessionRules {
        SessionRules {
            turn: Some(Duration::from_secs(turn_secs)),
            transition: transition_secs.map(Duration::from_secs),
            start_cue: Some(ToneCue::Start),
            finish_cue: ToneCue::End,
            finish_burst: Some(BurstSpec::sparkles(10, Duration::from_secs(2))),
        }
    }

    #[test]
    fn countdown_never_goes_negative() {
        let mut clock = Countdown::new(Duration::from_secs(1));
        clock.advance(Duration::from_secs(5));
        assert!(clock.is_done());
        assert_eq!(clock.remaining(), Duration::ZERO);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn lifecycle_runs_a_transition_b_finished() {
        let mut engine = TurnEngine::new(rules(10, Some(3)));
        assert_eq!(engine.phase(), Phase::Ready);

        engine.start();
        assert_eq!(engine.active_slot(), Some(PlayerSlot::A));

        engine.advance(Duration::from_secs(10));
        assert!(matches!(
            engine.phase(),
            Phase::Transition {
                next: PlayerSlot::B,
                ..
            }
        ));

        engine.advance(Duration::from_secs(3));
        assert_eq!(engine.active_slot(), Some(PlayerSlot::B));

        engine.advance(Duration::from_secs(10));
        assert_eq!(engine.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn credit_outside_a_turn_is_ignored() {
        let mut engine = TurnEngine::new(rules(10, None));
        engine.credit(PlayerSlot::A, 5);
        assert_eq!(engine.scoreboard().get(PlayerSlot::A), 0);

        engine.start();
        engine.credit(PlayerSlot::A, 5);
        assert_eq!(engine.scoreboard().get(PlayerSlot::A), 5);
    }

    #[test]
    fn finish_emits_exactly_one_burst_and_cue() {
        let mut engine = TurnEngine::new(rules(1, None));
        engine.start();
        engine.take_effects();

        engine.finish(Outcome::PlayerA);
        engine.finish(Outcome::PlayerB); // second finish must be a no-op

        assert_eq!(engine.outcome(), Some(Outcome::PlayerA));
        let effects = engine.take_effects();
        let bursts = effects
            .iter()
            .filter(|e| matches!(e, Effect::Confetti(_)))
            .count();
        let cues = effects
            .iter()
            .filter(|e| matches!(e, Effect::Tone(ToneCue::End)))
            .count();
        assert_eq!(bursts, 1);
        assert_eq!(cues, 1);
    }

    #[test]
    fn restart_clears_everything() {
        let mut engine = TurnEngine::new(rules(1, None));
        engine.start();
        engine.credit(PlayerSlot::B, 3);
        engine.finish(Outcome::PlayerB);

        engine.restart();
        assert_eq!(engine.phase(), Phase::Ready);
        assert_eq!(engine.scoreboard(), Scoreboard::default());
        assert!(engine.take_effects().is_empty());
    }

    #[test]
    fn higher_tally_wins_equal_ties() {
        let mut board = Scoreboard::default();
        board.credit(PlayerSlot::A, 2);
        board.credit(PlayerSlot::B, 2);
        assert_eq!(board.outcome(), Outcome::Tie);
        board.credit(PlayerSlot::B, 1);
        assert_eq!(board.outcome(), Outcome::PlayerB);
    }
}
