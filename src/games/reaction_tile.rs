//! Hit-the-lit-tile reaction rounds.
//!
//! Nine tiles, ten-second turns, a three-second bridge between them.
//! A tile lights 600ms after the previous one went dark and stays lit
//! for 300ms. Tapping the lit tile scores a point; tapping anything
//! else does nothing at all, not even a cue.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::rng::ArcadeRng;
use crate::session::{Countdown, Effect, SessionRules, TurnEngine};
use std::time::Duration;
use tracing::trace;

/// Number of tiles in the grid.
pub const TILES: usize = 9;

const TURN: Duration = Duration::from_secs(10);
const TRANSITION: Duration = Duration::from_secs(3);
const LIGHT_EVERY: Duration = Duration::from_millis(600);
const LIT_FOR: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
struct Lamp {
    tile: usize,
    off_in: Countdown,
}

/// One reaction tile session.
#[derive(Debug, Clone)]
pub struct ReactionTile {
    engine: TurnEngine,
    lamp: Option<Lamp>,
    next_light: Countdown,
    rng: ArcadeRng,
}

impl ReactionTile {
    fn rules() -> SessionRules {
        SessionRules {
            turn: Some(TURN),
            transition: Some(TRANSITION),
            start_cue: Some(ToneCue::Start),
            finish_cue: ToneCue::End,
            finish_burst: Some(BurstSpec::sparkles(50, Duration::from_millis(2500))),
        }
    }

    /// An idle session; call [`ReactionTile::start`] to begin.
    pub fn new(rng: ArcadeRng) -> Self {
        Self {
            engine: TurnEngine::new(Self::rules()),
            lamp: None,
            next_light: Countdown::new(LIGHT_EVERY),
            rng,
        }
    }

    /// The session driver, for phase and scores.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The currently lit tile, if any.
    pub fn lit_tile(&self) -> Option<usize> {
        self.lamp.map(|l| l.tile)
    }

    /// Begins player A's turn.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Taps a tile. Scores only when that exact tile is lit; every
    /// other tap is silently ignored.
    pub fn tap(&mut self, tile: usize) {
        let Some(slot) = self.engine.active_slot() else {
            return;
        };
        if self.lamp.map(|l| l.tile) != Some(tile) {
            return;
        }
        trace!(tile, "lit tile hit");
        self.engine.credit(slot, 1);
        self.engine.emit(Effect::Tone(ToneCue::Click));
    }

    /// Feeds elapsed time into the turn clock and the lighting cycle.
    pub fn advance(&mut self, dt: Duration) {
        let before = self.engine.active_slot();
        self.engine.advance(dt);

        if self.engine.active_slot() != before {
            // Fresh turn, fresh lighting cycle.
            self.lamp = None;
            self.next_light = Countdown::new(LIGHT_EVERY);
        }
        if !self.engine.in_turn() {
            self.lamp = None;
            return;
        }

        match &mut self.lamp {
            Some(lamp) => {
                lamp.off_in.advance(dt);
                if lamp.off_in.is_done() {
                    self.lamp = None;
                    self.next_light = Countdown::new(LIGHT_EVERY);
                }
            }
            None => {
                self.next_light.advance(dt);
                if self.next_light.is_done() {
                    let tile = self.rng.gen_range(0..TILES);
                    self.lamp = Some(Lamp {
                        tile,
                        off_in: Countdown::new(LIT_FOR),
                    });
                }
            }
        }
    }

    /// Resets the session back to idle.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.lamp = None;
        self.next_light = Countdown::new(LIGHT_EVERY);
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.engine.take_effects()
    }
}
