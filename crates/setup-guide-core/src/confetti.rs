use rand::Rng;
use serde::Serialize;

pub const CONFETTI_PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#43e97b", "#38f9d7",
];

pub const CONFETTI_ANIMATION_NAME: &str = "confetti-fall";

pub const CONFETTI_KEYFRAMES: &str = "@keyframes confetti-fall {
    0% {
        transform: translateY(-10px) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(100vh) rotate(720deg);
        opacity: 0;
    }
}";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiParticle {
    pub left_px: f64,
    pub color: &'static str,
}

impl ConfettiParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> Self {
        let width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        Self {
            left_px: rng.random::<f64>() * width,
            color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
        }
    }

    pub fn css_text(&self, lifetime_ms: u32) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; background: {color}; top: -10px; \
             left: {left:.2}px; z-index: 9999; border-radius: 50%; \
             animation: {CONFETTI_ANIMATION_NAME} {lifetime_ms}ms linear forwards;",
            color = self.color,
            left = self.left_px,
        )
    }
}

pub fn burst<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    viewport_width: f64,
) -> Vec<ConfettiParticle> {
    (0..count)
        .map(|_| ConfettiParticle::random(rng, viewport_width))
        .collect()
}
