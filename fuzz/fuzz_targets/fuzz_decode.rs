#![no_main]
use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = bmp24::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };

    // Must never panic
    let _ = bmp24::decode_with_limits(data, &limits);

    // Same input through the stream reader
    let mut cursor = Cursor::new(data);
    if let Ok((fh, info)) = bmp24::bmp::read_headers(&mut cursor) {
        let _ = bmp24::bmp::read_pixels(&mut cursor, &fh, info.width, info.height, Some(&limits));
    }
});
