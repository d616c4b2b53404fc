//! Confetti shown after a win.

use emoji_tictactoe::Mark;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

const GLYPHS: [char; 5] = ['■', '●', '▲', '◆', '✦'];

/// One falling piece. Coordinates are fractions of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    x: f32,
    y: f32,
    /// Fraction of the area height fallen per second.
    speed: f32,
    glyph: char,
}

/// A burst of confetti tinted for the winning mark.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pieces: Vec<Piece>,
    mark: Option<Mark>,
    started: Option<Instant>,
    lifetime: Duration,
}

impl Confetti {
    /// Replaces any current burst with `count` new pieces.
    #[instrument(skip(self, rng))]
    pub fn burst(
        &mut self,
        mark: Mark,
        count: usize,
        lifetime: Duration,
        now: Instant,
        rng: &mut impl Rng,
    ) {
        self.pieces = (0..count)
            .map(|_| Piece {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.1..0.5),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            })
            .collect();
        self.mark = Some(mark);
        self.started = Some(now);
        self.lifetime = lifetime;
        debug!(pieces = self.pieces.len(), "Confetti burst");
    }

    /// Drops the burst once its lifetime has passed.
    pub fn update(&mut self, now: Instant) {
        if let Some(started) = self.started
            && now.saturating_duration_since(started) >= self.lifetime
        {
            self.clear();
        }
    }

    /// Removes all pieces.
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.mark = None;
        self.started = None;
    }

    /// Whether anything is on screen.
    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// Mark whose color tints the pieces.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Visible pieces at `now` as `(x, y, glyph)` fractions in `0.0..1.0`.
    /// Pieces that have fallen past the bottom are skipped.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (f32, f32, char)> + '_ {
        let elapsed = self
            .started
            .map(|s| now.saturating_duration_since(s).as_secs_f32())
            .unwrap_or(0.0);
        self.pieces.iter().filter_map(move |p| {
            let y = p.y + p.speed * elapsed;
            (y < 1.0).then_some((p.x, y, p.glyph))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn burst(count: usize, now: Instant) -> Confetti {
        let mut confetti = Confetti::default();
        let mut rng = StdRng::seed_from_u64(7);
        confetti.burst(Mark::O, count, Duration::from_secs(4), now, &mut rng);
        confetti
    }

    #[test]
    fn test_burst_spawns_pieces() {
        let now = Instant::now();
        let confetti = burst(50, now);
        assert!(confetti.is_active());
        assert_eq!(confetti.mark(), Some(Mark::O));
        assert_eq!(confetti.visible(now).count(), 50);
        for (x, y, _) in confetti.visible(now) {
            assert!((0.0..1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_pieces_fall_out_of_view() {
        let now = Instant::now();
        let confetti = burst(50, now);
        // Slowest piece falls 0.1 per second from below 1.0.
        assert_eq!(confetti.visible(now + Duration::from_secs(11)).count(), 0);
    }

    #[test]
    fn test_expires_after_lifetime() {
        let now = Instant::now();
        let mut confetti = burst(5, now);
        confetti.update(now + Duration::from_secs(3));
        assert!(confetti.is_active());
        confetti.update(now + Duration::from_secs(4));
        assert!(!confetti.is_active());
        assert_eq!(confetti.visible(now).count(), 0);
    }
}
