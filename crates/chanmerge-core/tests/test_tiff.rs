mod common;

use chanmerge_core::compose::{Compositor, SlotAssignment};
use chanmerge_core::error::ChanmergeError;
use chanmerge_core::io::tiff::TiffCompositor;

use common::{uniform_channel, write_channel_tiff};

#[test]
fn test_open_reads_16bit_grayscale() {
    let dir = tempfile::tempdir().unwrap();
    write_channel_tiff(dir.path(), "pos1_488.tif", 4, 3, 1000);

    let img = TiffCompositor.open(&dir.path().join("pos1_488.tif")).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(0, 0).0[0], 1000);
}

#[test]
fn test_composite_maps_slots_to_planes() {
    let green = uniform_channel(4, 4, 100);
    let red = uniform_channel(4, 4, 200);
    let slots = SlotAssignment {
        green_or_yellow: Some(&green),
        red: Some(&red),
        ..Default::default()
    };

    let composed = TiffCompositor.composite(&slots).unwrap();
    assert_eq!(composed.dimensions(), (4, 4));
    let pixel = composed.get_pixel(1, 2).0;
    assert_eq!(pixel, [200, 100, 0]);
}

#[test]
fn test_composite_adds_brightfield_to_all_planes() {
    let green = uniform_channel(2, 2, 100);
    let bf = uniform_channel(2, 2, 50);
    let slots = SlotAssignment {
        green_or_yellow: Some(&green),
        brightfield: Some(&bf),
        ..Default::default()
    };

    let composed = TiffCompositor.composite(&slots).unwrap();
    assert_eq!(composed.get_pixel(0, 0).0, [50, 150, 50]);
}

#[test]
fn test_composite_brightfield_saturates() {
    let red = uniform_channel(2, 2, u16::MAX - 10);
    let bf = uniform_channel(2, 2, 100);
    let slots = SlotAssignment {
        red: Some(&red),
        brightfield: Some(&bf),
        ..Default::default()
    };

    let composed = TiffCompositor.composite(&slots).unwrap();
    assert_eq!(composed.get_pixel(0, 0).0[0], u16::MAX);
}

#[test]
fn test_composite_rejects_dimension_mismatch() {
    let green = uniform_channel(4, 4, 100);
    let red = uniform_channel(2, 2, 200);
    let slots = SlotAssignment {
        green_or_yellow: Some(&green),
        red: Some(&red),
        ..Default::default()
    };

    let err = TiffCompositor.composite(&slots).unwrap_err();
    assert!(matches!(err, ChanmergeError::DimensionMismatch { .. }));
}

#[test]
fn test_composite_with_no_slots_is_error() {
    let slots = SlotAssignment::default();
    let err = TiffCompositor.composite(&slots).unwrap_err();
    assert!(matches!(err, ChanmergeError::Config(_)));
}

#[test]
fn test_save_load_roundtrip() {
    let green = uniform_channel(3, 3, 12345);
    let slots = SlotAssignment {
        green_or_yellow: Some(&green),
        ..Default::default()
    };
    let composed = TiffCompositor.composite(&slots).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pos1.tif");
    TiffCompositor.save(&composed, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgb16();
    assert_eq!(back.dimensions(), (3, 3));
    assert_eq!(back.get_pixel(2, 2).0, [0, 12345, 0]);
}
