use impactcore::EnergyMix;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Whole-percent mix over `sources` that sums to exactly 100.
///
/// The same seed always yields the same mix.
pub fn random_mix(seed: u64, sources: &[&str]) -> EnergyMix {
    if sources.is_empty() {
        return EnergyMix::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cuts: Vec<u32> = (1..sources.len()).map(|_| rng.gen_range(0..=100)).collect();
    cuts.push(0);
    cuts.push(100);
    cuts.sort_unstable();

    sources
        .iter()
        .zip(cuts.windows(2))
        .map(|(name, bounds)| (*name, f64::from(bounds[1] - bounds[0])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use impactcore::validate_mix;

    const SOURCES: [&str; 6] = ["Coal", "Natural Gas", "Oil", "Hydropower", "Solar", "Nuclear"];

    #[test]
    fn random_mix_always_validates() {
        for seed in 0..64 {
            let mix = random_mix(seed, &SOURCES);
            assert_eq!(mix.len(), SOURCES.len());
            assert_eq!(validate_mix(&mix), Ok(100.0));
        }
    }

    #[test]
    fn random_mix_is_deterministic_per_seed() {
        assert_eq!(random_mix(7, &SOURCES), random_mix(7, &SOURCES));
    }

    #[test]
    fn single_source_takes_everything() {
        let mix = random_mix(3, &["Wind"]);
        assert_eq!(mix.share("Wind"), 100.0);
    }

    #[test]
    fn no_sources_yields_empty_mix() {
        assert!(random_mix(1, &[]).is_empty());
    }
}
