use {
    crate::*,
    base::Vec2,
    image::{Overflow, validate_size},
    std::time::Duration,
};

/// What the producer does when a grab yields no frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: Option<u32>,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl RetryPolicy {
    /// Retry immediately, forever.
    pub fn unbounded() -> Self {
        Self {
            max_attempts: None,
            backoff: Duration::ZERO,
        }
    }

    /// Give up once `max_attempts` consecutive grabs have missed.
    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff: Duration::ZERO,
        }
    }

    /// Sleep for `backoff` after every miss.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Whether `misses` consecutive misses exhaust this policy.
    pub fn is_exhausted(&self, misses: u32) -> bool {
        self.max_attempts.is_some_and(|max| misses >= max)
    }
}

/// Configuration for a `FrameProducer`.
#[derive(Clone, Debug)]
pub struct ProducerConfig {
    width: usize,
    height: usize,
    retry: RetryPolicy,
    overflow: Overflow,
    thread_name: String,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            retry: RetryPolicy::default(),
            overflow: Overflow::Clamp,
            thread_name: "frame-producer".to_string(),
        }
    }
}

impl ProducerConfig {
    /// Set the frame width in pixels.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the frame height in pixels.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set width and height together.
    pub fn with_size(self, size: Vec2<usize>) -> Self {
        self.with_width(size.x).with_height(size.y)
    }

    /// Set the policy for grabs that yield no frame.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set overflow handling for the RGB re-encode of processed frames.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the name of the worker thread.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    // Getters
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Vec2<usize> {
        Vec2::new(self.width, self.height)
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Reject sizes a YUV 4:2:0 pipeline cannot carry.
    pub fn validate(&self) -> Result<(), VideoError> {
        validate_size(self.size()).map_err(|e| VideoError::Config(e.to_string()))
    }
}
