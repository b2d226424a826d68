use rand::Rng;

use crate::swap::swap_nonoverlapping;

/// Permutes the slice uniformly at random, in place, using the Fisher-Yates
/// (Knuth) shuffle.
///
/// For each position `i` from the front, an index is drawn uniformly from
/// the not-yet-shuffled suffix `[i, len)` and swapped with position `i`; the
/// already placed prefix never takes part in later draws. Given a uniform
/// generator this produces every one of the `len!` permutations with equal
/// probability.
///
/// The generator is an explicit collaborator rather than hidden process
/// state, so a seeded `StdRng` makes the permutation reproducible:
///
/// ```
/// use rand::SeedableRng;
///
/// let mut v = [1, 2, 3, 4, 5];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// slice_alg::shuffle(&mut v, &mut rng);
/// ```
pub fn shuffle<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for shuffled in 0..v.len() {
        let pick = rng.gen_range(shuffled..v.len());
        if pick != shuffled {
            let base = v.as_mut_ptr();
            // SAFETY: `pick != shuffled`, both in-bounds.
            unsafe { swap_nonoverlapping(base.add(shuffled), base.add(pick)) };
        }
    }
}
