use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
///
/// Each generation run owns its own instance, so the same seed always yields the same maze.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub fn seeded(seed: u64) -> Random {
    Random::seed_from_u64(seed)
}

/// Seeds from `seed`, or from a fresh random seed if there is none.
///
/// Returns the seed that was actually used, so the run can be reproduced.
pub fn from_optional_seed(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| {
        let seed = thread_rng().gen();
        log::debug!("No seed given, using {}", seed);
        seed
    });

    (seeded(seed), seed)
}

/// Uniform index in `0..len`.
///
/// `gen_range` over `usize` draws 32 or 64 bits depending on the target, this samples `u32`
/// whenever `len` fits, so a seed gives the same maze everywhere.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn index(rng: &mut Random, len: usize) -> usize {
    match u32::try_from(len) {
        Ok(len) => rng.gen_range(0..len) as usize,
        Err(_) => rng.gen_range(0..len as u64) as usize,
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, RngCore as _};

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        assert!((0..16).all(|_| a.next_u64() == b.next_u64()));
    }

    #[test]
    fn optional_seed_is_reported() {
        let (mut rng, seed) = from_optional_seed(Some(99));
        assert_eq!(seed, 99);
        assert_eq!(rng.next_u64(), seeded(99).next_u64());

        let (mut rng, seed) = from_optional_seed(None);
        assert_eq!(rng.next_u64(), seeded(seed).next_u64());
    }

    #[test]
    fn index_draws_from_u32() {
        let mut rng = seeded(3);
        let mut reference = seeded(3);
        for len in [1usize, 2, 4, 7, 1000, u32::MAX as usize] {
            let idx = index(&mut rng, len);
            assert!(idx < len);
            assert_eq!(idx, reference.gen_range(0..len as u32) as usize);
        }
    }

    #[test]
    #[should_panic]
    fn index_of_nothing_panics() {
        index(&mut seeded(0), 0);
    }
}
