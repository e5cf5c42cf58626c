//! Codebook persistence through the text exchange format

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;
use vq::*;

fn sample_vectors() -> Vec<Vec<f64>> {
    (0..200)
        .map(|i| {
            let base = (i * 37 % 251) as f64;
            vec![base, base + 1.5, base / 3.0, 255.0 - base]
        })
        .collect()
}

#[test]
fn test_trained_codebook_survives_text_roundtrip() {
    let mut rng = StdRng::seed_from_u64(2024);
    let codebook = cluster(&sample_vectors(), 16, &mut rng).unwrap();

    let mut text = Vec::new();
    codebook.write_text(&mut text).unwrap();
    let reloaded = Codebook::read_text(Cursor::new(&text)).unwrap();

    assert_eq!(reloaded, codebook);
    assert_eq!(String::from_utf8(text).unwrap().lines().count(), 16);
}

#[test]
fn test_reloaded_codebooks_code_identically() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    let y = cluster(&sample_vectors(), 32, &mut rng).unwrap();
    let uv = cluster(&sample_vectors(), 8, &mut rng).unwrap();

    for (name, codebook) in [("yCB.txt", &y), ("uCB.txt", &uv), ("vCB.txt", &uv)] {
        codebook.save(dir.path().join(name)).unwrap();
    }
    let loaded = YuvCodec::new(
        Codebook::load(dir.path().join("yCB.txt")).unwrap(),
        Codebook::load(dir.path().join("uCB.txt")).unwrap(),
        Codebook::load(dir.path().join("vCB.txt")).unwrap(),
    )
    .unwrap();
    let original = YuvCodec::new(y, uv.clone(), uv).unwrap();

    let image = RgbImage::from_fn(24, 24, |x, y| [(x * 10) as u8, (y * 10) as u8, 77]).unwrap();
    assert_eq!(
        loaded.process(&image).unwrap().reconstructed,
        original.process(&image).unwrap().reconstructed
    );
}

#[test]
fn test_line_order_is_index_order() {
    let text = "0\n128\n255\n";
    let codebook = Codebook::read_text(Cursor::new(text)).unwrap();
    let index = quantize_scalar(200, &codebook);
    assert_eq!(index, 2);
    assert_eq!(dequantize_scalar(index, &codebook).unwrap(), 255);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Codebook::load(dir.path().join("absent.txt")),
        Err(VqError::IoError(_))
    ));
}
