use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed policy for the service's random choices (facts, themes, animation data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl RandomSource {
    #[must_use]
    pub fn rng(self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_os_rng(),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}
