use bmp24::*;
use tempfile::TempDir;

fn gradient(w: u32, h: u32) -> Vec<Bgr> {
    (0..h)
        .flat_map(|y| (0..w).map(move |x| Bgr::new(x as u8, y as u8, (x * 7 + y * 13) as u8)))
        .collect()
}

fn write_file(dir: &TempDir, name: &str, w: u32, h: u32, pixels: Vec<Bgr>) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut image = BmpImage::with_dimensions(&path, w, h);
    image.set_pixels(pixels);
    image.create().unwrap();
    image.write_header().unwrap();
    image.write_pixels().unwrap();
    image.close().unwrap();
    path
}

fn read_file(path: &std::path::Path) -> BmpImage {
    let mut image = BmpImage::new(path);
    image.open().unwrap();
    image.read_header().unwrap();
    image.read_pixels().unwrap();
    image
}

#[test]
fn file_roundtrip_non_square() {
    let dir = TempDir::new().unwrap();
    let pixels = gradient(7, 3);
    let path = write_file(&dir, "gradient.bmp", 7, 3, pixels.clone());

    let image = read_file(&path);
    assert_eq!(image.width(), 7);
    assert_eq!(image.height(), 3);
    assert_eq!(image.size(), 21);
    assert_eq!(image.pixels(), &pixels[..]);
    for y in 0..3 {
        for x in 0..7 {
            assert_eq!(*image.index(x, y).unwrap(), pixels[(y * 7 + x) as usize]);
        }
    }
}

#[test]
fn four_by_two_black_file_is_78_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "black.bmp", 4, 2, vec![Bgr::default(); 8]);
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 78);
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(&bytes[10..14], &54u32.to_le_bytes());
}

#[test]
fn three_by_one_keeps_padding_out_of_pixels() {
    let dir = TempDir::new().unwrap();
    let pixels = vec![Bgr::new(1, 2, 3), Bgr::new(4, 5, 6), Bgr::new(7, 8, 9)];
    let path = write_file(&dir, "narrow.bmp", 3, 1, pixels.clone());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 54 + 12);
    assert_eq!(&bytes[54..63], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(&bytes[63..], &[0, 0, 0]);

    let image = read_file(&path);
    assert_eq!(image.pixels(), &pixels[..]);
    assert_eq!(image.info_header().unwrap().image_size, 12);
}

#[test]
fn edit_then_save_as_new_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "in.bmp", 5, 4, vec![Bgr::BLACK; 20]);

    let mut image = read_file(&input);
    let px = image.index_mut(2, 2).unwrap();
    px[Channel::Red] = 255;
    px[Channel::Green] = 255;
    px[Channel::Blue] = 255;
    assert_eq!(image.index(2, 2).unwrap().to_rgb_u32(), 0xFFFFFF);

    let output = dir.path().join("out.bmp");
    image.set_file_name(&output);
    image.create().unwrap();
    image.write_header().unwrap();
    image.write_pixels().unwrap();
    image.close().unwrap();

    let back = read_file(&output);
    assert_eq!(back.index(2, 2).unwrap().to_rgb_u32(), 0xFFFFFF);
    assert_eq!(back.index(1, 2).unwrap().to_rgb_u32(), 0);
    assert_eq!(back.pixels().iter().filter(|p| **p == Bgr::WHITE).count(), 1);
}

#[test]
fn open_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut image = BmpImage::new(dir.path().join("missing.bmp"));
    match image.open() {
        Err(BmpError::FileOpen { path, .. }) => assert!(path.ends_with("missing.bmp")),
        other => panic!("expected FileOpen, got {other:?}"),
    }
    assert!(!image.is_open());
}

#[test]
fn create_in_missing_directory() {
    let dir = TempDir::new().unwrap();
    let mut image = BmpImage::new(dir.path().join("no/such/dir/out.bmp"));
    assert!(matches!(image.create(), Err(BmpError::FileCreate { .. })));
}

#[test]
fn non_bmp_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fake.bmp");
    let mut bytes = vec![0x42u8, 0x4E];
    bytes.extend_from_slice(&[0u8; 100]);
    std::fs::write(&path, bytes).unwrap();

    let mut image = BmpImage::new(&path);
    image.open().unwrap();
    assert!(matches!(
        image.read_header(),
        Err(BmpError::FileNotSupported(_))
    ));
}

#[test]
fn thirty_two_bit_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rgba.bmp");
    let mut bytes = encode(&[Bgr::WHITE], 1, 1).unwrap();
    bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
    std::fs::write(&path, bytes).unwrap();

    let mut image = BmpImage::new(&path);
    image.open().unwrap();
    assert!(matches!(
        image.read_header(),
        Err(BmpError::FileNotSupported(_))
    ));
}

#[test]
fn writing_to_a_read_handle_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ro.bmp", 1, 1, vec![Bgr::WHITE]);
    let mut image = read_file(&path);
    assert!(matches!(image.write_header(), Err(BmpError::Write(_))));
    assert!(matches!(image.write_pixels(), Err(BmpError::Write(_))));
}

#[test]
fn write_pixels_with_wrong_count_fails() {
    let dir = TempDir::new().unwrap();
    let mut image = BmpImage::with_dimensions(dir.path().join("short.bmp"), 3, 3);
    image.set_pixels(vec![Bgr::WHITE; 4]);
    image.create().unwrap();
    image.write_header().unwrap();
    assert!(matches!(
        image.write_pixels(),
        Err(BmpError::NotInitialized(_))
    ));
}

#[test]
fn image_limits_apply_to_file_reads() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "big.bmp", 16, 16, vec![Bgr::BLACK; 256]);

    let mut image = BmpImage::new(&path);
    image.set_limits(Limits {
        max_pixels: Some(100),
        ..Default::default()
    });
    image.open().unwrap();
    image.read_header().unwrap();
    assert!(matches!(
        image.read_pixels(),
        Err(BmpError::LimitExceeded(_))
    ));
}

#[test]
fn truncated_pixel_data_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cut.bmp");
    let mut bytes = encode(&gradient(4, 4), 4, 4).unwrap();
    bytes.truncate(54 + 20);
    std::fs::write(&path, bytes).unwrap();

    let mut image = BmpImage::new(&path);
    image.open().unwrap();
    image.read_header().unwrap();
    assert!(matches!(image.read_pixels(), Err(BmpError::Read(_))));
}

#[test]
fn header_claiming_more_rows_than_file_holds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tall.bmp");
    let mut bytes = encode(&gradient(5, 2), 5, 2).unwrap();
    bytes[22..26].copy_from_slice(&1_000_000i32.to_le_bytes());
    std::fs::write(&path, bytes).unwrap();

    let mut image = BmpImage::new(&path);
    image.open().unwrap();
    image.read_header().unwrap();
    assert_eq!(image.height(), 1_000_000);
    match image.read_pixels() {
        Err(BmpError::Read(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Read(UnexpectedEof), got {other:?}"),
    }
}

#[test]
fn padded_rows_read_through_buffered_file() {
    let dir = TempDir::new().unwrap();
    // width 5 pads each row by 1 byte; many rows cross buffer boundaries
    let pixels = gradient(5, 3000);
    let path = write_file(&dir, "long.bmp", 5, 3000, pixels.clone());
    let image = read_file(&path);
    assert_eq!(image.pixels(), &pixels[..]);
}
