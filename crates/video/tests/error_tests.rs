use {image::ImageError, std::error::Error, video::VideoError};

#[test]
fn test_image_error_converts() {
    let error: VideoError = ImageError::Size("0x0 has a zero dimension".to_string()).into();
    assert!(matches!(error, VideoError::Image(ImageError::Size(_))));
    assert!(error.source().is_some());
}

#[test]
fn test_display_messages() {
    let error = VideoError::FrameLength {
        expected: 24,
        got: 12,
    };
    assert_eq!(error.to_string(), "camera frame has 12 bytes, expected 24");

    let error = VideoError::AcquisitionTimeout { attempts: 5 };
    assert_eq!(error.to_string(), "no frame after 5 grab attempts");
    assert!(error.source().is_none());
}

#[test]
fn test_io_error_converts_to_worker() {
    let io = std::io::Error::other("spawn failed");
    let error: VideoError = io.into();
    assert!(matches!(error, VideoError::Worker(msg) if msg.contains("spawn failed")));
}
