//! Race to catch the one blue heart.
//!
//! Each player in turn watches hearts rain into nine lanes (a spawn
//! every 300ms, one in five is blue) and has to catch a blue one. Pink
//! hearts do nothing. The clock for the turn stops on the blue catch;
//! ten seconds without one records the ten-second cap. Lower time wins.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::rng::ArcadeRng;
use crate::session::{Countdown, Effect, Outcome, PlayerSlot};
use std::time::Duration;
use tracing::debug;

/// Keyboard lanes a heart can fall in (keys 1-9).
pub const LANES: usize = 9;

const SPAWN_EVERY: Duration = Duration::from_millis(300);
const HEART_TTL: Duration = Duration::from_secs(5);
const BLUE_CHANCE: f64 = 0.2;
const TIME_CAP: Duration = Duration::from_secs(10);

/// One falling heart.
#[derive(Debug, Clone, Copy)]
pub struct Heart {
    lane: usize,
    blue: bool,
    ttl: Countdown,
}

impl Heart {
    /// The lane this heart falls in.
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// True for the heart that counts.
    pub fn is_blue(&self) -> bool {
        self.blue
    }
}

/// Where a hunt stands. Unlike the scored games each turn runs until
/// its own stopwatch stops, so the hunt carries its own phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntPhase {
    /// Waiting for the named player to arm their turn.
    Ready {
        /// The player about to hunt.
        next: PlayerSlot,
    },
    /// A hunt in progress, stopwatch running.
    Running {
        /// The hunting player.
        slot: PlayerSlot,
    },
    /// Both times recorded.
    Finished(Outcome),
}

/// One heart hunt session.
#[derive(Debug, Clone)]
pub struct HeartHunt {
    phase: HuntPhase,
    elapsed: Duration,
    times: [Option<Duration>; 2],
    hearts: Vec<Heart>,
    spawner: Countdown,
    effects: Vec<Effect>,
    rng: ArcadeRng,
}

impl HeartHunt {
    /// A fresh hunt, player A up first.
    pub fn new(rng: ArcadeRng) -> Self {
        Self {
            phase: HuntPhase::Ready {
                next: PlayerSlot::A,
            },
            elapsed: Duration::ZERO,
            times: [None, None],
            hearts: Vec::new(),
            spawner: Countdown::new(SPAWN_EVERY),
            effects: Vec::new(),
            rng,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> HuntPhase {
        self.phase
    }

    /// Hearts currently falling.
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// A player's recorded time, once they hunted.
    pub fn time_for(&self, slot: PlayerSlot) -> Option<Duration> {
        self.times[Self::index(slot)]
    }

    /// Stopwatch reading of the running hunt.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Starts the pending player's hunt.
    pub fn arm(&mut self) {
        let HuntPhase::Ready { next } = self.phase else {
            return;
        };
        debug!(?next, "hunt armed");
        self.phase = HuntPhase::Running { slot: next };
        self.elapsed = Duration::ZERO;
        self.hearts.clear();
        self.spawner = Countdown::new(SPAWN_EVERY);
        self.effects.push(Effect::Tone(ToneCue::Start));
    }

    /// Tries to catch a heart in a lane. Only a blue heart stops the
    /// stopwatch; pink hearts and empty lanes are no-ops.
    pub fn catch(&mut self, lane: usize) {
        let HuntPhase::Running { slot } = self.phase else {
            return;
        };
        let caught_blue = self
            .hearts
            .iter()
            .any(|h| h.lane == lane && h.blue);
        if !caught_blue {
            return;
        }
        debug!(?slot, elapsed = ?self.elapsed, "blue heart caught");
        self.effects.push(Effect::Tone(ToneCue::Win));
        self.record(slot, self.elapsed);
    }

    /// Feeds elapsed time into the stopwatch, spawner and heart
    /// lifetimes.
    pub fn advance(&mut self, dt: Duration) {
        let HuntPhase::Running { slot } = self.phase else {
            return;
        };
        self.elapsed += dt;
        if self.elapsed >= TIME_CAP {
            // Never caught it; the cap goes on the books.
            self.record(slot, TIME_CAP);
            return;
        }

        for heart in &mut self.hearts {
            heart.ttl.advance(dt);
        }
        self.hearts.retain(|h| !h.ttl.is_done());

        self.spawner.advance(dt);
        if self.spawner.is_done() {
            self.spawner = Countdown::new(SPAWN_EVERY);
            self.hearts.push(Heart {
                lane: self.rng.gen_range(0..LANES),
                blue: self.rng.gen_bool(BLUE_CHANCE),
                ttl: Countdown::new(HEART_TTL),
            });
        }
    }

    /// Back to a fresh hunt, times wiped.
    pub fn restart(&mut self) {
        self.phase = HuntPhase::Ready {
            next: PlayerSlot::A,
        };
        self.elapsed = Duration::ZERO;
        self.times = [None, None];
        self.hearts.clear();
        self.spawner = Countdown::new(SPAWN_EVERY);
        self.effects.clear();
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn record(&mut self, slot: PlayerSlot, time: Duration) {
        self.times[Self::index(slot)] = Some(time);
        self.hearts.clear();
        match slot {
            PlayerSlot::A => {
                self.phase = HuntPhase::Ready {
                    next: PlayerSlot::B,
                };
            }
            PlayerSlot::B => {
                let outcome = self.outcome_from_times();
                debug!(?outcome, "hunt finished");
                self.phase = HuntPhase::Finished(outcome);
                self.effects.push(Effect::Tone(ToneCue::End));
                self.effects.push(Effect::Confetti(BurstSpec::hearts(
                    40,
                    Duration::from_millis(2500),
                )));
            }
        }
    }

    fn outcome_from_times(&self) -> Outcome {
        let a = self.times[0].unwrap_or(TIME_CAP);
        let b = self.times[1].unwrap_or(TIME_CAP);
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Outcome::PlayerA,
            std::cmp::Ordering::Greater => Outcome::PlayerB,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    fn index(slot: PlayerSlot) -> usize {
        match slot {
            PlayerSlot::A => 0,
            PlayerSlot::B => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_blue(game: &mut HeartHunt) -> (usize, Duration) {
        for _ in 0..400 {
            game.advance(Duration::from_millis(50));
            if let Some(heart) = game.hearts().iter().find(|h| h.is_blue()) {
                return (heart.lane(), game.elapsed());
            }
        }
        panic!("no blue heart spawned in 20 simulated seconds");
    }

    #[test]
    fn catching_blue_records_the_stopwatch_and_hands_over() {
        let mut game = HeartHunt::new(ArcadeRng::new(51));
        game.arm();
        let (lane, elapsed) = run_until_blue(&mut game);

        game.catch(lane);
        assert_eq!(game.time_for(PlayerSlot::A), Some(elapsed));
        assert_eq!(
            game.phase(),
            HuntPhase::Ready {
                next: PlayerSlot::B
            }
        );
    }

    #[test]
    fn pink_hearts_do_not_stop_the_clock() {
        let mut game = HeartHunt::new(ArcadeRng::new(52));
        game.arm();
        // Walk until some pink heart exists in a lane with no blue one.
        let mut lane = None;
        for _ in 0..150 {
            game.advance(Duration::from_millis(50));
            let pink = game.hearts().iter().find(|h| {
                !h.is_blue()
                    && !game
                        .hearts()
                        .iter()
                        .any(|o| o.lane() == h.lane() && o.is_blue())
            });
            if let Some(heart) = pink {
                lane = Some(heart.lane());
                break;
            }
        }
        let lane = lane.expect("no pink-only lane in 7.5 simulated seconds");
        game.catch(lane);
        assert!(matches!(game.phase(), HuntPhase::Running { .. }));
        assert_eq!(game.time_for(PlayerSlot::A), None);
    }

    #[test]
    fn a_timed_out_hunt_records_the_cap() {
        let mut game = HeartHunt::new(ArcadeRng::new(53));
        game.arm();
        for _ in 0..201 {
            game.advance(Duration::from_millis(50));
        }
        assert_eq!(game.time_for(PlayerSlot::A), Some(TIME_CAP));
        assert_eq!(
            game.phase(),
            HuntPhase::Ready {
                next: PlayerSlot::B
            }
        );
    }

    #[test]
    fn the_lower_time_wins() {
        let mut game = HeartHunt::new(ArcadeRng::new(54));
        game.arm();
        let (lane, _) = run_until_blue(&mut game);
        game.catch(lane);

        game.arm();
        for _ in 0..201 {
            game.advance(Duration::from_millis(50));
        }
        assert_eq!(game.phase(), HuntPhase::Finished(Outcome::PlayerA));
        let effects = game.take_effects();
        assert!(effects.iter().any(|e| matches!(e, Effect::Confetti(_))));
    }

    #[test]
    fn restart_wipes_both_times() {
        let mut game = HeartHunt::new(ArcadeRng::new(55));
        game.arm();
        for _ in 0..201 {
            game.advance(Duration::from_millis(50));
        }
        game.restart();
        assert_eq!(game.time_for(PlayerSlot::A), None);
        assert_eq!(
            game.phase(),
            HuntPhase::Ready {
                next: PlayerSlot::A
            }
        );
    }
}
