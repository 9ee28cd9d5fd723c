//! Decorative looping effects. Every random parameter is drawn once, when the
//! owning component mounts, and then kept for the component's lifetime.

use std::f64::consts::{FRAC_PI_4, TAU};

use rand::Rng;

/// A background star pulsing between dim and bright.
#[derive(Clone, Debug, PartialEq)]
pub struct Twinkle {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    pub brightness: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Twinkle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; --glow: {:.3}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x_pct, self.y_pct, self.size_px, self.size_px, self.brightness, self.duration_s, self.delay_s
        )
    }
}

pub fn twinkles<R: Rng>(rng: &mut R, count: usize) -> Vec<Twinkle> {
    (0..count)
        .map(|_| Twinkle {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(1.0..4.0),
            brightness: rng.gen_range(0.2..1.0),
            duration_s: rng.gen_range(2.0..5.0),
            delay_s: rng.gen_range(0.0..3.0),
        })
        .collect()
}

/// A light streak radiating from the centre of the intro tunnel.
#[derive(Clone, Debug, PartialEq)]
pub struct StarStreak {
    pub angle_rad: f64,
    pub length_px: f64,
    pub brightness: f64,
    pub travel_px: f64,
    pub delay_s: f64,
}

impl StarStreak {
    pub fn style(&self) -> String {
        format!(
            "width: {:.1}px; transform: rotate({:.4}rad); --glow: {:.3}; --travel: {:.1}px; animation-delay: {:.2}s;",
            self.length_px, self.angle_rad, self.brightness, self.travel_px, self.delay_s
        )
    }
}

/// Streaks are spread evenly around the circle; only their length,
/// brightness, speed and phase vary.
pub fn star_streaks<R: Rng>(rng: &mut R, count: usize) -> Vec<StarStreak> {
    (0..count)
        .map(|i| StarStreak {
            angle_rad: i as f64 / count as f64 * TAU,
            length_px: rng.gen_range(50.0..150.0),
            brightness: rng.gen_range(0.3..1.0),
            travel_px: rng.gen_range(1.0..3.0) * 200.0,
            delay_s: rng.gen_range(0.0..2.0),
        })
        .collect()
}

/// A particle drifting from the edge of the screen into the vanishing point.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundParticle {
    pub start_x: f64,
    pub start_y: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl InboundParticle {
    pub fn style(&self) -> String {
        format!(
            "--from-x: {:.1}px; --from-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.start_x, self.start_y, self.duration_s, self.delay_s
        )
    }
}

pub fn inbound_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<InboundParticle> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = rng.gen_range(300.0..700.0);
            InboundParticle {
                start_x: angle.cos() * distance,
                start_y: angle.sin() * distance,
                duration_s: rng.gen_range(3.0..5.0),
                delay_s: rng.gen_range(0.0..3.0),
            }
        })
        .collect()
}

/// A star falling through the loading orb.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingStar {
    pub left_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FallingStar {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_px, self.duration_s, self.delay_s
        )
    }
}

pub fn falling_stars<R: Rng>(rng: &mut R, count: usize) -> Vec<FallingStar> {
    (0..count)
        .map(|_| FallingStar {
            left_px: rng.gen_range(-100.0..300.0),
            duration_s: rng.gen_range(3.0..5.0),
            delay_s: rng.gen_range(0.0..5.0),
        })
        .collect()
}

/// Particle circling the loading orb. Fully determined by its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbiter {
    pub origin_x: f64,
    pub origin_y: f64,
    pub duration_s: f64,
}

impl Orbiter {
    pub fn style(&self) -> String {
        format!(
            "transform-origin: {:.1}px {:.1}px; animation-duration: {:.2}s;",
            self.origin_x, self.origin_y, self.duration_s
        )
    }
}

pub fn orbiters(count: usize) -> Vec<Orbiter> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * FRAC_PI_4;
            Orbiter {
                origin_x: 60.0 + angle.cos() * 40.0,
                origin_y: angle.sin() * 40.0,
                duration_s: 4.0 + i as f64 * 0.3,
            }
        })
        .collect()
}

/// Sparks trailing behind the welcome candle, staggered along a sine wave.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailSpark {
    pub left_px: f64,
    pub top_px: f64,
    pub delay_s: f64,
}

impl TrailSpark {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; animation-delay: {:.2}s;",
            self.left_px, self.top_px, self.delay_s
        )
    }
}

pub fn trail(count: usize, base_delay_s: f64, step_s: f64) -> Vec<TrailSpark> {
    (0..count)
        .map(|i| TrailSpark {
            left_px: -(i as f64) * 8.0,
            top_px: (i as f64 * 0.3).sin() * 20.0,
            delay_s: base_delay_s + i as f64 * step_s,
        })
        .collect()
}

/// Offset the contact worm jumps to on each keystroke.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WormNudge {
    pub x: f64,
    pub y: f64,
}

impl WormNudge {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(-10.0..=10.0),
            y: rng.gen_range(-5.0..=5.0),
        }
    }

    pub fn style(&self) -> String {
        format!("transform: translate({:.1}px, {:.1}px);", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = twinkles(&mut StdRng::seed_from_u64(7), 50);
        let b = twinkles(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(a, b);
        let c = twinkles(&mut StdRng::seed_from_u64(8), 50);
        assert_ne!(a, c);
    }

    #[test]
    fn twinkles_stay_in_range() {
        let stars = twinkles(&mut StdRng::seed_from_u64(42), 200);
        assert_eq!(stars.len(), 200);
        for s in &stars {
            assert!((0.0..100.0).contains(&s.x_pct));
            assert!((0.0..100.0).contains(&s.y_pct));
            assert!((1.0..4.0).contains(&s.size_px));
            assert!((0.2..1.0).contains(&s.brightness));
            assert!((2.0..5.0).contains(&s.duration_s));
            assert!((0.0..3.0).contains(&s.delay_s));
        }
    }

    #[test]
    fn streaks_are_evenly_spread() {
        let streaks = star_streaks(&mut StdRng::seed_from_u64(1), 4);
        let expected = [0.0, TAU / 4.0, TAU / 2.0, TAU * 3.0 / 4.0];
        for (s, want) in streaks.iter().zip(expected) {
            assert!((s.angle_rad - want).abs() < 1e-12);
        }
        for s in &streaks {
            assert!((200.0..600.0).contains(&s.travel_px));
        }
    }

    #[test]
    fn inbound_particles_start_outside_inner_ring() {
        for p in inbound_particles(&mut StdRng::seed_from_u64(3), 50) {
            let r = (p.start_x * p.start_x + p.start_y * p.start_y).sqrt();
            assert!(r >= 300.0 - 1e-9 && r < 700.0 + 1e-9);
        }
    }

    #[test]
    fn orbiters_and_trail_are_fixed_by_slot() {
        let orbit = orbiters(8);
        assert!((orbit[0].origin_x - 100.0).abs() < 1e-9);
        assert!((orbit[2].origin_y - 40.0).abs() < 1e-9);
        assert!((orbit[7].duration_s - 6.1).abs() < 1e-9);

        let sparks = trail(20, 2.0, 0.1);
        assert_eq!(sparks[0].left_px, 0.0);
        assert_eq!(sparks[5].left_px, -40.0);
        assert!((sparks[10].delay_s - 3.0).abs() < 1e-9);
    }

    #[test]
    fn worm_nudge_is_bounded() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let n = WormNudge::random(&mut rng);
            assert!((-10.0..=10.0).contains(&n.x));
            assert!((-5.0..=5.0).contains(&n.y));
        }
    }

    #[test]
    fn styles_carry_generated_values() {
        let star = Twinkle {
            x_pct: 12.5,
            y_pct: 80.0,
            size_px: 2.0,
            brightness: 0.5,
            duration_s: 3.0,
            delay_s: 1.25,
        };
        let css = star.style();
        assert!(css.starts_with("left: 12.50%; top: 80.00%;"));
        assert!(css.contains("--glow: 0.500;"));
        assert!(css.ends_with("animation-delay: 1.25s;"));
    }
}
