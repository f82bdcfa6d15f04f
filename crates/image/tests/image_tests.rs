use base::Vec2;
use image::{Image, ImageError, PixelFormat, fourcc_to_string, validate_size};

#[test]
fn test_buffer_len_per_format() {
    let size = Vec2::new(640, 480);
    assert_eq!(PixelFormat::Rgb8.buffer_len(size).unwrap(), 640 * 480 * 3);
    assert_eq!(PixelFormat::Yuv420Sp.buffer_len(size).unwrap(), 640 * 480 * 3 / 2);
    assert_eq!(PixelFormat::Yuv420P.buffer_len(size).unwrap(), 640 * 480 * 3 / 2);
}

#[test]
fn test_buffer_len_overflow_is_an_error() {
    let size = Vec2::new(usize::MAX, 2);
    assert!(matches!(
        PixelFormat::Rgb8.buffer_len(size),
        Err(ImageError::Size(_))
    ));
}

#[test]
fn test_validate_size_rejects_zero_dimensions() {
    assert!(matches!(validate_size(Vec2::new(0, 480)), Err(ImageError::Size(_))));
    assert!(matches!(validate_size(Vec2::new(640, 0)), Err(ImageError::Size(_))));
}

#[test]
fn test_validate_size_rejects_odd_dimensions() {
    assert!(validate_size(Vec2::new(641, 480)).is_err());
    assert!(validate_size(Vec2::new(640, 481)).is_err());
    assert!(validate_size(Vec2::new(2, 2)).is_ok());
}

#[test]
fn test_fourcc_roundtrip() {
    for format in [PixelFormat::Rgb8, PixelFormat::Yuv420Sp, PixelFormat::Yuv420P] {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()).unwrap(), format);
    }
    assert_eq!(fourcc_to_string(PixelFormat::Yuv420Sp.as_fourcc()), "NV12");
    assert_eq!(fourcc_to_string(PixelFormat::Yuv420P.as_fourcc()), "YU12");
}

#[test]
fn test_from_fourcc_rejects_unknown() {
    let err = PixelFormat::from_fourcc(u32::from_le_bytes(*b"YUYV")).unwrap_err();
    assert!(err.to_string().contains("YUYV"));
}

#[test]
fn test_ensure_format() {
    assert!(PixelFormat::Yuv420P.ensure_format(PixelFormat::Yuv420P).is_ok());
    assert!(matches!(
        PixelFormat::Yuv420P.ensure_format(PixelFormat::Yuv420Sp),
        Err(ImageError::Format(_))
    ));
}

#[test]
fn test_image_from_data_checks_length() {
    let size = Vec2::new(2, 2);
    assert!(Image::from_data(size, vec![0; 6], PixelFormat::Yuv420Sp).is_ok());
    assert_eq!(
        Image::from_data(size, vec![0; 5], PixelFormat::Yuv420Sp).unwrap_err(),
        ImageError::BufferLength {
            expected: 6,
            got: 5
        }
    );
}

#[test]
fn test_image_zeroed_and_planes() {
    let image = Image::zeroed(Vec2::new(4, 2), PixelFormat::Yuv420P).unwrap();
    assert_eq!(image.data.len(), 12);
    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 2);
    assert_eq!(image.luma().unwrap().len(), 8);
    assert_eq!(image.chroma().unwrap().len(), 4);
}

#[test]
fn test_rgb_image_has_no_planes() {
    let image = Image::zeroed(Vec2::new(2, 2), PixelFormat::Rgb8).unwrap();
    assert!(image.luma().is_none());
    assert!(image.chroma().is_none());
}

#[test]
fn test_error_display() {
    let err = ImageError::BufferLength {
        expected: 12,
        got: 4,
    };
    assert!(err.to_string().contains("expected 12"));
    assert!(ImageError::Encode("bad".to_string()).to_string().contains("bad"));
}
