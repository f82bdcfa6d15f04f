use {
    crate::*,
    base::Vec2,
    image::{ChromaLayout, Overflow, PixelFormat, rgb_to_yuv420},
};

// 75% color bars: white, yellow, cyan, green, magenta, red, blue, black
const BARS: [[u8; 3]; 8] = [
    [191, 191, 191],
    [191, 191, 0],
    [0, 191, 191],
    [0, 191, 0],
    [191, 0, 191],
    [191, 0, 0],
    [0, 0, 191],
    [0, 0, 0],
];

/// Camera that renders scrolling color bars.
///
/// Every grab advances the pattern by one column, so consecutive frames
/// differ. `with_miss_every(n)` makes every n-th grab attempt fail, which
/// exercises the producer's retry path.
pub struct SyntheticCamera {
    size: Vec2<usize>,
    rgb: Vec<u8>,
    frame: Vec<u8>,
    attempts: u64,
    grabbed: u64,
    miss_every: Option<u64>,
}

impl std::fmt::Debug for SyntheticCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticCamera")
            .field("size", &self.size)
            .field("attempts", &self.attempts)
            .field("grabbed", &self.grabbed)
            .field("miss_every", &self.miss_every)
            .finish()
    }
}

impl SyntheticCamera {
    pub fn new(size: Vec2<usize>) -> Result<Self, VideoError> {
        image::validate_size(size)?;
        Ok(Self {
            size,
            rgb: vec![0u8; PixelFormat::Rgb8.buffer_len(size)?],
            frame: vec![0u8; PixelFormat::Yuv420Sp.buffer_len(size)?],
            attempts: 0,
            grabbed: 0,
            miss_every: None,
        })
    }

    /// Fail every `n`-th grab attempt. `n == 1` fails every attempt.
    pub fn with_miss_every(mut self, n: u64) -> Self {
        self.miss_every = if n == 0 { None } else { Some(n) };
        self
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    /// Number of successful grabs so far.
    pub fn grabbed(&self) -> u64 {
        self.grabbed
    }

    /// Number of grab attempts so far, including misses.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    fn render(&mut self) {
        let width = self.size.x;
        let bar_width = (width / BARS.len()).max(1);
        let shift = self.grabbed as usize;
        for (i, px) in self.rgb.chunks_exact_mut(3).enumerate() {
            let x = (i % width + shift) % width;
            let bar = (x / bar_width).min(BARS.len() - 1);
            px.copy_from_slice(&BARS[bar]);
        }
        rgb_to_yuv420(
            &self.rgb,
            &mut self.frame,
            self.size,
            ChromaLayout::Semiplanar,
            Overflow::Clamp,
        );
    }
}

impl CameraSource for SyntheticCamera {
    fn try_grab(&mut self) -> bool {
        self.attempts += 1;
        if self.miss_every.is_some_and(|n| self.attempts % n == 0) {
            return false;
        }
        self.render();
        self.grabbed += 1;
        true
    }

    fn retrieve_frame(&self) -> &[u8] {
        &self.frame
    }
}
