use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

const FIREFLY_COUNT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Firefly {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub drift_seconds: f64,
    pub glow_seconds: f64,
    pub delay_seconds: f64,
}

impl Firefly {
    fn random(rng: &mut impl Rng) -> Self {
        let max_opacity = rng.gen_range(0.3..=0.8);
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(3.0..=8.0),
            min_opacity: max_opacity * 0.3,
            max_opacity,
            drift_seconds: rng.gen_range(8.0..20.0),
            glow_seconds: rng.gen_range(2.0..5.0),
            delay_seconds: rng.gen_range(0.0..5.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
             --firefly-min-opacity: {:.2}; --firefly-max-opacity: {:.2}; \
             animation-duration: {:.1}s, {:.1}s; animation-delay: -{:.1}s, -{:.1}s;",
            self.left,
            self.top,
            self.size,
            self.size,
            self.min_opacity,
            self.max_opacity,
            self.drift_seconds,
            self.glow_seconds,
            self.delay_seconds,
            self.delay_seconds,
        )
    }
}

pub fn generate_fireflies(count: usize, rng: &mut impl Rng) -> Vec<Firefly> {
    (0..count).map(|_| Firefly::random(rng)).collect()
}

/// Decorative background particles. Purely visual.
#[function_component(FireflyParticles)]
pub fn firefly_particles() -> Html {
    let fireflies = use_memo((), |_| {
        let mut rng = SmallRng::from_entropy();
        generate_fireflies(FIREFLY_COUNT, &mut rng)
    });

    html! {
        <div class="pointer-events-none fixed inset-0 z-0 overflow-hidden" aria-hidden="true">
            { for fireflies.iter().map(|firefly| html! {
                <div class="firefly" style={firefly.style()}></div>
            }) }
        </div>
    }
}
