#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    v.sort();
    let sorted_original = v.clone();

    let mut expected = v.clone();
    expected.dedup();

    let new_len = slice_alg::unique(&mut v);

    assert_eq!(new_len, expected.len());
    assert_eq!(v[..new_len], expected[..]);

    // The displaced duplicates stay in the slice.
    v.sort();
    assert_eq!(v, sorted_original);
});
