use std::cmp::Ordering;
use std::mem;
use std::slice;

/// Compares two values by the raw bytes of their in-memory representation.
///
/// This is the comparison every plain (non-`_by`) entry point of this crate
/// falls back to, the moral equivalent of `memcmp` over `size_of::<T>()`
/// bytes. The resulting order is lexicographic over the representation: it
/// coincides with the numeric order for `u8` and for byte arrays, but not for
/// multi-byte integers on little-endian targets, and types with padding
/// compare by their padding bytes too. Equality, on the other hand, is exact
/// for any type whose representation has no padding. Reach for a `_by`
/// variant whenever the element type carries real ordering semantics.
///
/// # Panics
///
/// Panics if `T` is zero-sized. With no comparator and no bytes to compare
/// there is no order to speak of, and silently claiming equality would mask a
/// caller bug.
pub fn compare_bytes<T>(a: &T, b: &T) -> Ordering {
    assert!(
        mem::size_of::<T>() != 0,
        "byte-wise comparison of a zero-sized type"
    );

    // SAFETY: both references are valid for reads of `size_of::<T>()` bytes
    // and `u8` is alignment-free.
    let a_bytes =
        unsafe { slice::from_raw_parts(a as *const T as *const u8, mem::size_of::<T>()) };
    let b_bytes =
        unsafe { slice::from_raw_parts(b as *const T as *const u8, mem::size_of::<T>()) };

    a_bytes.cmp(b_bytes)
}

/// Returns a reference to whichever of `a` and `b` compares greater by its
/// bytes, see [`compare_bytes`].
///
/// Strict-inequality semantics: `a` is returned only when it compares
/// strictly greater, so a tie yields `b`. No value is copied, the result
/// always points into caller memory.
pub fn max<'a, T>(a: &'a T, b: &'a T) -> &'a T {
    max_by(a, b, compare_bytes)
}

/// [`max`] with a caller-supplied comparator.
pub fn max_by<'a, T, F>(a: &'a T, b: &'a T, mut compare: F) -> &'a T
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(a, b) == Ordering::Greater {
        a
    } else {
        b
    }
}

/// Returns a reference to whichever of `a` and `b` compares lesser by its
/// bytes. Ties yield `b`, mirroring [`max`].
pub fn min<'a, T>(a: &'a T, b: &'a T) -> &'a T {
    min_by(a, b, compare_bytes)
}

/// [`min`] with a caller-supplied comparator.
pub fn min_by<'a, T, F>(a: &'a T, b: &'a T, mut compare: F) -> &'a T
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(a, b) == Ordering::Less {
        a
    } else {
        b
    }
}

/// Clamps `i` to the inclusive range `[lo, hi]` under byte-wise comparison:
/// returns `lo` if `i` compares below it, `hi` if `i` compares above it, and
/// `i` itself otherwise.
///
/// The caller must ensure `lo` compares less than or equal to `hi`; the
/// result is unspecified otherwise.
pub fn clamp<'a, T>(i: &'a T, lo: &'a T, hi: &'a T) -> &'a T {
    clamp_by(i, lo, hi, compare_bytes)
}

/// [`clamp`] with a caller-supplied comparator.
pub fn clamp_by<'a, T, F>(i: &'a T, lo: &'a T, hi: &'a T, mut compare: F) -> &'a T
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(i, lo) == Ordering::Less {
        lo
    } else if compare(i, hi) == Ordering::Greater {
        hi
    } else {
        i
    }
}
