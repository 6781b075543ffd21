//! Timed target-catching rounds.
//!
//! Each player gets a ten-second turn. Targets spawn into one of nine
//! lanes every 400ms and despawn on their own after four seconds.
//! Golden targets (15% of spawns) are worth five points, the rest one.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::rng::ArcadeRng;
use crate::session::{Countdown, Effect, SessionRules, TurnEngine};
use std::time::Duration;
use tracing::trace;

/// Keyboard lanes a target can occupy (keys 1-9).
pub const LANES: usize = 9;

const TURN: Duration = Duration::from_secs(10);
const SPAWN_EVERY: Duration = Duration::from_millis(400);
const TARGET_TTL: Duration = Duration::from_secs(4);
const GOLDEN_CHANCE: f64 = 0.15;
const GOLDEN_POINTS: u32 = 5;

/// One live target.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    lane: usize,
    golden: bool,
    ttl: Countdown,
}

impl Target {
    /// The lane this target sits in.
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// True for the five-point golden variant.
    pub fn is_golden(&self) -> bool {
        self.golden
    }
}

/// One tap target session.
#[derive(Debug, Clone)]
pub struct TapTarget {
    engine: TurnEngine,
    targets: Vec<Target>,
    spawner: Countdown,
    rng: ArcadeRng,
}

impl TapTarget {
    fn rules() -> SessionRules {
        SessionRules {
            turn: Some(TURN),
            transition: None,
            start_cue: Some(ToneCue::Start),
            finish_cue: ToneCue::Win,
            finish_burst: Some(BurstSpec::hearts(50, Duration::from_millis(2500))),
        }
    }

    /// An idle session; call [`TapTarget::start`] to begin.
    pub fn new(rng: ArcadeRng) -> Self {
        Self {
            engine: TurnEngine::new(Self::rules()),
            targets: Vec::new(),
            spawner: Countdown::new(SPAWN_EVERY),
            rng,
        }
    }

    /// The session driver, for phase and scores.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Targets currently on screen.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Begins player A's turn.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Catches the target in a lane, if one is there. Empty lanes are
    /// a no-op.
    pub fn catch(&mut self, lane: usize) {
        let Some(slot) = self.engine.active_slot() else {
            return;
        };
        let Some(pos) = self.targets.iter().position(|t| t.lane == lane) else {
            return;
        };
        let target = self.targets.remove(pos);
        let points = if target.golden { GOLDEN_POINTS } else { 1 };
        trace!(lane, golden = target.golden, points, "target caught");
        self.engine.credit(slot, points);
        self.engine.emit(Effect::Tone(ToneCue::Click));
    }

    /// Feeds elapsed time into the turn clock, the spawner and every
    /// target's lifetime.
    pub fn advance(&mut self, dt: Duration) {
        let before = self.engine.active_slot();
        self.engine.advance(dt);

        // Leftover targets never carry across a turn boundary.
        if self.engine.active_slot() != before {
            self.targets.clear();
            self.spawner = Countdown::new(SPAWN_EVERY);
        }
        if !self.engine.in_turn() {
            return;
        }

        for target in &mut self.targets {
            target.ttl.advance(dt);
        }
        self.targets.retain(|t| !t.ttl.is_done());

        self.spawner.advance(dt);
        if self.spawner.is_done() {
            self.spawner = Countdown::new(SPAWN_EVERY);
            self.spawn();
        }
    }

    /// Resets the session back to idle.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.targets.clear();
        self.spawner = Countdown::new(SPAWN_EVERY);
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.engine.take_effects()
    }

    fn spawn(&mut self) {
        // Spawns land in a free lane; a saturated board skips the beat.
        let free: Vec<usize> = (0..LANES)
            .filter(|lane| !self.targets.iter().any(|t| t.lane == *lane))
            .collect();
        let Some(&lane) = self.rng.choose(&free) else {
            return;
        };
        let golden = self.rng.gen_bool(GOLDEN_CHANCE);
        self.targets.push(Target {
            lane,
            golden,
            ttl: Countdown::new(TARGET_TTL),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlayerSlot;

    fn tick(game: &mut TapTarget, millis: u64) {
        game.advance(Duration::from_millis(millis));
    }

    #[test]
    fn targets_spawn_on_the_cadence() {
        let mut game = TapTarget::new(ArcadeRng::new(21));
        game.start();
        assert!(game.targets().is_empty());
        tick(&mut game, 400);
        assert_eq!(game.targets().len(), 1);
        tick(&mut game, 400);
        tick(&mut game, 400);
        assert_eq!(game.targets().len(), 3);
    }

    #[test]
    fn catch_scores_and_removes_the_target() {
        let mut game = TapTarget::new(ArcadeRng::new(22));
        game.start();
        tick(&mut game, 400);
        let target = game.targets()[0];
        let expected = if target.is_golden() { GOLDEN_POINTS } else { 1 };

        game.catch(target.lane());
        assert!(game.targets().is_empty());
        assert_eq!(game.engine().scoreboard().get(PlayerSlot::A), expected);
    }

    #[test]
    fn catching_an_empty_lane_is_a_no_op() {
        let mut game = TapTarget::new(ArcadeRng::new(23));
        game.start();
        tick(&mut game, 400);
        let occupied = game.targets()[0].lane();
        let empty = (0..LANES).find(|&l| l != occupied).unwrap();
        game.take_effects();

        game.catch(empty);
        assert_eq!(game.targets().len(), 1);
        assert!(game.take_effects().is_empty());
    }

    #[test]
    fn targets_despawn_after_their_lifetime() {
        let mut game = TapTarget::new(ArcadeRng::new(24));
        game.start();
        tick(&mut game, 400);
        assert_eq!(game.targets().len(), 1);
        // 4s later the first target is gone, only younger ones remain.
        tick(&mut game, 4000);
        assert!(game.targets().iter().all(|t| !t.ttl.is_done()));
        assert!(game.targets().len() < 11);
    }

    #[test]
    fn turn_boundary_clears_leftover_targets() {
        let mut game = TapTarget::new(ArcadeRng::new(25));
        game.start();
        tick(&mut game, 9800);
        assert!(!game.targets().is_empty());
        tick(&mut game, 300);
        assert_eq!(game.engine().active_slot(), Some(PlayerSlot::B));
        assert!(game.targets().is_empty());
    }

    #[test]
    fn both_turns_elapsing_finishes_the_session() {
        let mut game = TapTarget::new(ArcadeRng::new(26));
        game.start();
        for _ in 0..2 {
            for _ in 0..101 {
                tick(&mut game, 100);
            }
        }
        assert!(game.engine().outcome().is_some());
    }
}
