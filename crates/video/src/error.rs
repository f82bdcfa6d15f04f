use {image::ImageError, std::fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    Config(String),
    Image(ImageError),
    FrameLength { expected: usize, got: usize },
    AcquisitionTimeout { attempts: u32 },
    State(String),
    Worker(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Config(msg) => write!(f, "config error: {msg}"),
            VideoError::Image(err) => write!(f, "image error: {err}"),
            VideoError::FrameLength { expected, got } => {
                write!(f, "camera frame has {got} bytes, expected {expected}")
            }
            VideoError::AcquisitionTimeout { attempts } => {
                write!(f, "no frame after {attempts} grab attempts")
            }
            VideoError::State(msg) => write!(f, "state error: {msg}"),
            VideoError::Worker(msg) => write!(f, "worker error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VideoError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ImageError> for VideoError {
    fn from(err: ImageError) -> Self {
        VideoError::Image(err)
    }
}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Worker(err.to_string())
    }
}
