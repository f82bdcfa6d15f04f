use {crate::*, base::Vec2};

// fourcc codes
pub(crate) const FOURCC_RGB3: u32 = u32::from_le_bytes(*b"RGB3");
pub(crate) const FOURCC_NV12: u32 = u32::from_le_bytes(*b"NV12");
pub(crate) const FOURCC_YU12: u32 = u32::from_le_bytes(*b"YU12");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Interleaved R,G,B, 3 bytes per pixel.
    Rgb8,
    /// YUV 4:2:0, Y plane followed by interleaved U,V pairs (NV12).
    Yuv420Sp,
    /// YUV 4:2:0, Y plane followed by a U block and a V block (I420).
    Yuv420P,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_RGB3 => Ok(PixelFormat::Rgb8),
            FOURCC_NV12 => Ok(PixelFormat::Yuv420Sp),
            FOURCC_YU12 => Ok(PixelFormat::Yuv420P),
            _ => Err(ImageError::Format(format!(
                "unsupported fourcc: {}",
                fourcc_to_string(fourcc)
            ))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => FOURCC_RGB3,
            PixelFormat::Yuv420Sp => FOURCC_NV12,
            PixelFormat::Yuv420P => FOURCC_YU12,
        }
    }

    pub fn is_yuv420(&self) -> bool {
        matches!(self, PixelFormat::Yuv420Sp | PixelFormat::Yuv420P)
    }

    /// Number of bytes a frame of this format occupies at `size`.
    ///
    /// RGB is `3·W·H`; both YUV 4:2:0 layouts are `W·H + 2·(W/2·H/2)`.
    pub fn buffer_len(&self, size: Vec2<usize>) -> Result<usize, ImageError> {
        let overflow = || ImageError::Size(format!("{size} overflows buffer length"));
        let pixels = size.x.checked_mul(size.y).ok_or_else(overflow)?;
        match self {
            PixelFormat::Rgb8 => pixels.checked_mul(3).ok_or_else(overflow),
            PixelFormat::Yuv420Sp | PixelFormat::Yuv420P => pixels
                .checked_add(2 * chroma_plane_len(size))
                .ok_or_else(overflow),
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Format(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

/// Samples in one subsampled chroma plane (`W/2·H/2`).
pub fn chroma_plane_len(size: Vec2<usize>) -> usize {
    (size.x / 2) * (size.y / 2)
}

/// Check that `size` can hold a YUV 4:2:0 frame: both dimensions non-zero
/// and even, and the buffer length representable.
pub fn validate_size(size: Vec2<usize>) -> Result<(), ImageError> {
    if size.x == 0 || size.y == 0 {
        return Err(ImageError::Size(format!("{size} has a zero dimension")));
    }
    if size.x % 2 != 0 || size.y % 2 != 0 {
        return Err(ImageError::Size(format!(
            "{size} is not even in both dimensions"
        )));
    }
    PixelFormat::Rgb8.buffer_len(size)?;
    Ok(())
}
