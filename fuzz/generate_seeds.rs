#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let header = |width: i32, height: i32, bpp: u16, offset: u32| {
        let mut bmp = vec![0u8; 54];
        bmp[0] = b'B'; bmp[1] = b'M';
        bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
        bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
        bmp[18..22].copy_from_slice(&width.to_le_bytes());
        bmp[22..26].copy_from_slice(&height.to_le_bytes());
        bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
        bmp
    };

    // 1x1: 3 pixel bytes + 1 padding
    let mut bmp = header(1, 1, 24, 54);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]);
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp).unwrap();

    // 3x2: 9 pixel bytes + 3 padding per row
    let mut bmp = header(3, 2, 24, 54);
    for row in 0..2u8 {
        bmp.extend((0..9).map(|i| row * 16 + i));
        bmp.extend_from_slice(&[0, 0, 0]);
    }
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp).unwrap();

    // Pixel data after a gap
    let mut bmp = header(2, 1, 24, 64);
    bmp.extend_from_slice(&[0u8; 10]);
    bmp.extend_from_slice(&[1, 2, 3, 4, 5, 6, 0, 0]);
    fs::write(format!("{dir}/bmp_gap.bmp"), bmp).unwrap();

    // Rejected variants
    fs::write(format!("{dir}/bmp_32bpp.bin"), header(1, 1, 32, 54)).unwrap();
    fs::write(format!("{dir}/bmp_topdown.bin"), header(1, -1, 24, 54)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
