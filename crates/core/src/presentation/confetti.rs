use std::time::Duration;

use rand::Rng;

const PALETTE: [&str; 6] = ["#6366f1", "#3b82f6", "#06b6d4", "#a855f7", "#ec4899", "#facc15"];

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f32,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub rotation_deg: u16,
    pub size_px: u8,
    pub color: &'static str,
}

impl ConfettiPiece {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; width: {}px; height: {}px; background: {}; \
             transform: rotate({}deg); animation-delay: {}ms; animation-duration: {}ms;",
            self.left_pct,
            self.size_px,
            self.size_px / 2 + 2,
            self.color,
            self.rotation_deg,
            self.delay_ms,
            self.fall_ms,
        )
    }
}

/// One celebratory burst shown after a successful generation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiBurst {
    id: u64,
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiBurst {
    pub const PIECES: usize = 80;
    pub const LIFETIME: Duration = Duration::from_secs(3);

    /// Scatter `PIECES` particles. Every piece finishes falling within `LIFETIME`.
    pub fn scatter(id: u64, rng: &mut impl Rng) -> Self {
        let lifetime_ms = u32::try_from(Self::LIFETIME.as_millis()).unwrap_or(3_000);
        let pieces = (0..Self::PIECES)
            .map(|_| {
                let delay_ms = rng.random_range(0..lifetime_ms / 3);
                let fall_ms = rng.random_range(lifetime_ms / 3..=lifetime_ms - delay_ms);
                ConfettiPiece {
                    left_pct: rng.random_range(0.0..100.0),
                    delay_ms,
                    fall_ms,
                    rotation_deg: rng.random_range(0..360),
                    size_px: rng.random_range(6..=12),
                    color: PALETTE[rng.random_range(0..PALETTE.len())],
                }
            })
            .collect();
        Self { id, pieces }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_has_fixed_size_and_stays_within_lifetime() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = ConfettiBurst::scatter(1, &mut rng);
        assert_eq!(burst.pieces().len(), ConfettiBurst::PIECES);
        for piece in burst.pieces() {
            assert!(piece.delay_ms + piece.fall_ms <= 3_000);
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!(PALETTE.contains(&piece.color));
        }
    }

    #[test]
    fn style_carries_position_and_timing() {
        let piece = ConfettiPiece {
            left_pct: 12.5,
            delay_ms: 100,
            fall_ms: 2_000,
            rotation_deg: 45,
            size_px: 8,
            color: "#6366f1",
        };
        let style = piece.style();
        assert!(style.contains("left: 12.5%"));
        assert!(style.contains("animation-delay: 100ms"));
        assert!(style.contains("animation-duration: 2000ms"));
    }
}
