use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    Size(String),
    BufferLength { expected: usize, got: usize },
    Format(String),
    Encode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Size(msg) => write!(f, "size error: {msg}"),
            ImageError::BufferLength { expected, got } => {
                write!(f, "buffer length mismatch: expected {expected} bytes, got {got}")
            }
            ImageError::Format(msg) => write!(f, "format error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Encode(err.to_string())
    }
}
