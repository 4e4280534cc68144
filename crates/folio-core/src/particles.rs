//! Decorative background particles.

use crate::constants::*;
use rand::Rng;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    pub opacity: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub duration_s: f32,
    /// Always ≤ 0 so the particle starts part-way through its float cycle.
    pub delay_s: f32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f32>() * PARTICLE_SIZE_SPAN_PX,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            left_pct: rng.gen::<f32>() * 100.0,
            top_pct: rng.gen::<f32>() * 100.0,
            duration_s: PARTICLE_DURATION_MIN_S + rng.gen::<f32>() * PARTICLE_DURATION_SPAN_S,
            delay_s: -(rng.gen::<f32>() * PARTICLE_DELAY_MAX_S),
        }
    }

    /// Inline style for the particle element.
    pub fn css_text(&self) -> String {
        let [r, g, b] = PARTICLE_RGB;
        format!(
            "position: absolute; width: {s:.2}px; height: {s:.2}px; \
             background: rgba({r}, {g}, {b}, {o:.3}); border-radius: 50%; \
             left: {l:.2}%; top: {t:.2}%; \
             animation: floatParticle {d:.2}s linear infinite; animation-delay: {dl:.2}s;",
            s = self.size_px,
            o = self.opacity,
            l = self.left_pct,
            t = self.top_pct,
            d = self.duration_s,
            dl = self.delay_s,
        )
    }
}

/// The full set of particles, generated once at startup.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<ParticleSpec>,
    drift_px: f32,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count).map(|_| ParticleSpec::random(rng)).collect();
        let drift_px = rng.gen::<f32>() * 2.0 * PARTICLE_DRIFT_MAX_PX - PARTICLE_DRIFT_MAX_PX;
        Self {
            particles,
            drift_px,
        }
    }

    pub fn particles(&self) -> &[ParticleSpec] {
        &self.particles
    }

    /// Horizontal drift at the end of the float cycle, shared by every particle.
    pub fn drift_px(&self) -> f32 {
        self.drift_px
    }

    /// Keyframes for the float cycle and the gallery card fade-in.
    pub fn keyframes_css(&self) -> String {
        let mut css = String::new();
        _ = write!(
            css,
            "@keyframes floatParticle {{\n\
             \x20 0%, 100% {{ transform: translateY(0) translateX(0); opacity: 0; }}\n\
             \x20 10% {{ opacity: 1; }}\n\
             \x20 90% {{ opacity: 1; }}\n\
             \x20 100% {{ transform: translateY(-100vh) translateX({:.2}px); opacity: 0; }}\n\
             }}\n",
            self.drift_px
        );
        css.push_str(
            "@keyframes fadeIn {\n\
             \x20 from { opacity: 0; transform: translateY(20px); }\n\
             \x20 to { opacity: 1; transform: translateY(0); }\n\
             }\n",
        );
        css
    }
}
