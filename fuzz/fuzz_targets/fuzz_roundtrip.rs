#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = bmp24::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };

    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = bmp24::decode_with_limits(data, &limits) else {
        return;
    };

    let Ok(reencoded) = bmp24::encode(decoded.pixels(), decoded.width(), decoded.height()) else {
        return;
    };
    let Ok(decoded2) = bmp24::decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
});
