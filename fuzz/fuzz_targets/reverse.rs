#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    let original = v.clone();

    slice_alg::reverse(&mut v);
    assert!(v.iter().eq(original.iter().rev()));

    slice_alg::reverse(&mut v);
    assert_eq!(v, original);
});
