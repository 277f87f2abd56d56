//! Decorative particle field
//!
//! Small blurred dots drifting behind the page. Purely cosmetic: generated
//! once per mount, never touched again, no link to the catalog.

use dioxus::prelude::*;
use rand::Rng;

/// Particle colours: purple, green, amber, red, blue
pub const PARTICLE_PALETTE: [&str; 5] = [
    "rgba(124, 58, 237, 0.7)",
    "rgba(16, 185, 129, 0.7)",
    "rgba(245, 158, 11, 0.7)",
    "rgba(239, 68, 68, 0.7)",
    "rgba(59, 130, 246, 0.7)",
];

/// One floating dot
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Diameter in px, 2..7
    pub size: f32,
    /// Horizontal position in %, 0..100
    pub left: f32,
    /// Vertical position in %, 0..100
    pub top: f32,
    /// Animation delay in s, 0..5
    pub delay: f32,
    /// Animation duration in s, 10..20
    pub duration: f32,
    pub color: &'static str,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(2.0..7.0),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..5.0),
            duration: rng.random_range(10.0..20.0),
            color: PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())],
        }
    }

    /// Inline style for the particle's div
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; top: {top:.2}%; \
             background-color: {color}; \
             animation: floatParticle {duration:.2}s ease-in-out {delay:.2}s infinite;",
            size = self.size,
            left = self.left,
            top = self.top,
            color = self.color,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Generate `count` particles
pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// `@keyframes floatParticle` with randomised waypoints
pub fn drift_keyframes<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut offset = |spread: f32| rng.random_range(-spread..spread);
    let (x1, y1) = (offset(10.0), offset(10.0));
    let (x2, y2) = (offset(15.0), offset(15.0));
    let (x3, y3) = (offset(10.0), offset(10.0));

    format!(
        "@keyframes floatParticle {{\n\
         0%, 100% {{ transform: translate(0, 0) rotate(0deg); }}\n\
         25% {{ transform: translate({x1:.1}px, {y1:.1}px) rotate(90deg); }}\n\
         50% {{ transform: translate({x2:.1}px, {y2:.1}px) rotate(180deg); }}\n\
         75% {{ transform: translate({x3:.1}px, {y3:.1}px) rotate(270deg); }}\n\
         }}"
    )
}

/// Full-page background layer of drifting particles
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParticleField { count: 50 }
///     main { /* content on top */ }
/// }
/// ```
#[component]
pub fn ParticleField(#[props(default = 50)] count: usize) -> Element {
    let (particles, keyframes) = use_hook(move || {
        let mut rng = rand::rng();
        (scatter(count, &mut rng), drift_keyframes(&mut rng))
    });

    rsx! {
        div {
            class: "particles-container",
            "aria-hidden": "true",
            style { {keyframes} }
            for (i, particle) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: particle.style(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scatter_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter(200, &mut rng);
        assert_eq!(particles.len(), 200);

        for p in &particles {
            assert!((2.0..7.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((10.0..20.0).contains(&p.duration));
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn scatter_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scatter(0, &mut rng).is_empty());
    }

    #[test]
    fn style_names_the_animation() {
        let mut rng = StdRng::seed_from_u64(3);
        let style = Particle::random(&mut rng).style();
        assert!(style.contains("animation: floatParticle"));
        assert!(style.contains("background-color: rgba("));
    }

    #[test]
    fn keyframes_cover_full_cycle() {
        let mut rng = StdRng::seed_from_u64(11);
        let css = drift_keyframes(&mut rng);
        assert!(css.starts_with("@keyframes floatParticle {"));
        for stop in ["0%, 100%", "25%", "50%", "75%"] {
            assert!(css.contains(stop));
        }
    }
}
