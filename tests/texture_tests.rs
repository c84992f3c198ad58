// Host-side tests for the raw pixel-buffer validation.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{PixelData, PixelDataError};

#[test]
fn well_formed_buffer_is_accepted() {
    let px = PixelData::new(2, 2, vec![0u8; 16]).expect("valid rgba buffer");
    assert_eq!(px.width, 2);
    assert_eq!(px.height, 2);
    assert_eq!(px.rgba.len(), 16);
}

#[test]
fn length_mismatch_is_rejected() {
    let err = PixelData::new(2, 2, vec![0u8; 15]).unwrap_err();
    match err {
        PixelDataError::LengthMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_sized_image_is_rejected() {
    assert!(matches!(
        PixelData::new(0, 4, vec![]),
        Err(PixelDataError::ZeroSized { .. })
    ));
    assert!(matches!(
        PixelData::new(4, 0, vec![]),
        Err(PixelDataError::ZeroSized { .. })
    ));
}

#[test]
fn placeholder_is_a_single_opaque_texel() {
    let px = PixelData::placeholder([255, 10, 20, 255]);
    assert_eq!((px.width, px.height), (1, 1));
    assert_eq!(px.rgba, vec![255, 10, 20, 255]);
}
