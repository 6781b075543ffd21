//! Falling-glyph particle overlay for game finishes.
//!
//! A burst spawns `count` pieces, each with a random horizontal start,
//! a random start delay within the given bound, and a slightly
//! randomized fall duration. The whole batch removes itself one second
//! after the nominal duration; no caller cleanup is needed. Spawning
//! again while a batch is live simply adds an independent batch.

use crate::rng::ArcadeRng;
use std::time::Duration;

/// Glyph family for a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    /// Falling hearts.
    Heart,
    /// Falling sparkles.
    Sparkle,
}

impl GlyphKind {
    /// The character drawn for one piece.
    pub fn symbol(self) -> &'static str {
        match self {
            GlyphKind::Heart => "♥",
            GlyphKind::Sparkle => "✦",
        }
    }
}

/// Parameters of one confetti burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    /// Number of pieces.
    pub count: usize,
    /// Nominal fall duration per piece.
    pub duration: Duration,
    /// Upper bound for each piece's random start delay.
    pub max_delay: Duration,
    /// Glyph family.
    pub glyph: GlyphKind,
}

impl BurstSpec {
    /// A heart burst with no start delay.
    pub fn hearts(count: usize, duration: Duration) -> Self {
        Self {
            count,
            duration,
            max_delay: Duration::ZERO,
            glyph: GlyphKind::Heart,
        }
    }

    /// A sparkle burst with no start delay.
    pub fn sparkles(count: usize, duration: Duration) -> Self {
        Self {
            count,
            duration,
            max_delay: Duration::ZERO,
            glyph: GlyphKind::Sparkle,
        }
    }
}

/// One animated piece.
#[derive(Debug, Clone, Copy)]
struct Piece {
    /// Horizontal start, percent of screen width.
    x_percent: u8,
    delay: Duration,
    duration: Duration,
}

/// One spawned batch; expires as a unit.
#[derive(Debug, Clone)]
struct Batch {
    glyph: GlyphKind,
    pieces: Vec<Piece>,
    elapsed: Duration,
    lifetime: Duration,
}

/// A visible piece, resolved for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisiblePiece {
    /// Horizontal position, percent of screen width.
    pub x_percent: u8,
    /// Fall progress in 0.0..1.0 (top to bottom).
    pub progress: f32,
    /// Glyph to draw.
    pub glyph: GlyphKind,
}

/// Full-screen decorative overlay. Owns every live batch.
#[derive(Debug, Default)]
pub struct ConfettiOverlay {
    batches: Vec<Batch>,
}

impl ConfettiOverlay {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a new independent batch.
    pub fn spawn(&mut self, spec: BurstSpec, rng: &mut ArcadeRng) {
        let pieces = (0..spec.count)
            .map(|_| Piece {
                x_percent: rng.gen_range(0..100) as u8,
                delay: fraction_of(spec.max_delay, rng),
                // Up to half a second of per-piece duration jitter.
                duration: spec.duration + Duration::from_millis(rng.gen_range(0..500) as u64),
            })
            .collect();
        self.batches.push(Batch {
            glyph: spec.glyph,
            pieces,
            elapsed: Duration::ZERO,
            lifetime: spec.duration + Duration::from_secs(1),
        });
    }

    /// Advances every batch and drops the expired ones.
    pub fn advance(&mut self, dt: Duration) {
        for batch in &mut self.batches {
            batch.elapsed += dt;
        }
        self.batches.retain(|b| b.elapsed < b.lifetime);
    }

    /// True when nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Pieces currently in flight, with their fall progress.
    pub fn visible(&self) -> Vec<VisiblePiece> {
        let mut out = Vec::new();
        for batch in &self.batches {
            for piece in &batch.pieces {
                if batch.elapsed < piece.delay {
                    continue;
                }
                let t = (batch.elapsed - piece.delay).as_secs_f32();
                let progress = t / piece.duration.as_secs_f32();
                if progress < 1.0 {
                    out.push(VisiblePiece {
                        x_percent: piece.x_percent,
                        progress,
                        glyph: batch.glyph,
                    });
                }
            }
        }
        out
    }
}

fn fraction_of(bound: Duration, rng: &mut ArcadeRng) -> Duration {
    if bound.is_zero() {
        return Duration::ZERO;
    }
    let millis = bound.as_millis() as usize;
    Duration::from_millis(rng.gen_range(0..millis.max(1)) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_expires_after_duration_plus_one_second() {
        let mut overlay = ConfettiOverlay::new();
        let mut rng = ArcadeRng::new(1);
        overlay.spawn(BurstSpec::hearts(10, Duration::from_secs(2)), &mut rng);
        assert!(!overlay.is_empty());

        overlay.advance(Duration::from_millis(2999));
        assert!(!overlay.is_empty());

        overlay.advance(Duration::from_millis(2));
        assert!(overlay.is_empty());
    }

    #[test]
    fn respawn_while_active_creates_independent_batch() {
        let mut overlay = ConfettiOverlay::new();
        let mut rng = ArcadeRng::new(2);
        overlay.spawn(BurstSpec::hearts(5, Duration::from_secs(2)), &mut rng);
        overlay.advance(Duration::from_secs(2));
        overlay.spawn(BurstSpec::sparkles(5, Duration::from_secs(2)), &mut rng);

        // First batch dies at 3s total; the second lives on until its own 3s.
        overlay.advance(Duration::from_millis(1100));
        assert!(!overlay.is_empty());
        overlay.advance(Duration::from_secs(2));
        assert!(overlay.is_empty());
    }

    #[test]
    fn pieces_progress_from_top_to_bottom() {
        let mut overlay = ConfettiOverlay::new();
        let mut rng = ArcadeRng::new(3);
        overlay.spawn(
            BurstSpec {
                count: 20,
                duration: Duration::from_secs(2),
                max_delay: Duration::ZERO,
                glyph: GlyphKind::Sparkle,
            },
            &mut rng,
        );
        overlay.advance(Duration::from_millis(500));
        let visible = overlay.visible();
        assert!(!visible.is_empty());
        for piece in visible {
            assert!(piece.progress > 0.0 && piece.progress < 1.0);
            assert!(piece.x_percent < 100);
        }
    }
}
