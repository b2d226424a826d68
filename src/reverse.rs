use crate::swap::swap_nonoverlapping;

/// Reverses the slice in place with `len / 2` swaps and no allocation.
/// The middle element of an odd-length slice stays put.
pub fn reverse<T>(v: &mut [T]) {
    let len = v.len();
    for i in 0..len / 2 {
        let base = v.as_mut_ptr();
        // SAFETY: `i < len / 2`, so `i` and `len - i - 1` are distinct
        // in-bounds indices.
        unsafe { swap_nonoverlapping(base.add(i), base.add(len - i - 1)) };
    }
}
