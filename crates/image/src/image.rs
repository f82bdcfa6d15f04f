use {crate::*, base::Vec2};

/// A frame buffer: raw bytes in `format` at `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Like `new`, but rejects data whose length does not match the format.
    pub fn from_data(
        size: Vec2<usize>,
        data: Vec<u8>,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let expected = format.buffer_len(size)?;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data, format })
    }

    /// Allocate a zero-filled image of exactly the format's buffer length.
    pub fn zeroed(size: Vec2<usize>, format: PixelFormat) -> Result<Self, ImageError> {
        let len = format.buffer_len(size)?;
        Ok(Self {
            size,
            data: vec![0u8; len],
            format,
        })
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// The Y plane of a YUV 4:2:0 image.
    pub fn luma(&self) -> Option<&[u8]> {
        if !self.format.is_yuv420() {
            return None;
        }
        self.data.get(..self.size.area())
    }

    /// Everything after the Y plane of a YUV 4:2:0 image.
    pub fn chroma(&self) -> Option<&[u8]> {
        if !self.format.is_yuv420() {
            return None;
        }
        self.data.get(self.size.area()..)
    }
}
