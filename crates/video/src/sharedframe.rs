use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::{
        sync::{Arc, Condvar, Mutex, MutexGuard},
        time::Duration,
    },
};

struct Front {
    data: Vec<u8>,
    sequence: u64,
}

struct Inner {
    size: Vec2<usize>,
    format: PixelFormat,
    front: Mutex<Front>,
    published: Condvar,
}

/// A fixed-size frame target shared between the producer worker and readers.
///
/// The worker renders each frame into a private back buffer and swaps it
/// with the front buffer under a short lock, so a reader holding the lock
/// always sees one complete frame. The buffer length never changes after
/// construction.
#[derive(Clone)]
pub struct SharedFrame {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SharedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedFrame")
            .field("size", &self.inner.size)
            .field("format", &self.inner.format)
            .field("sequence", &self.sequence())
            .finish()
    }
}

impl SharedFrame {
    /// Allocate a zeroed target of `format` at `size`.
    pub fn new(size: Vec2<usize>, format: PixelFormat) -> Result<Self, VideoError> {
        image::validate_size(size)?;
        let len = format.buffer_len(size)?;
        Ok(Self {
            inner: Arc::new(Inner {
                size,
                format,
                front: Mutex::new(Front {
                    data: vec![0u8; len],
                    sequence: 0,
                }),
                published: Condvar::new(),
            }),
        })
    }

    /// Planar YUV 4:2:0 target for a presentation layer.
    pub fn display(size: Vec2<usize>) -> Result<Self, VideoError> {
        Self::new(size, PixelFormat::Yuv420P)
    }

    /// Semiplanar YUV 4:2:0 target for exporting raw camera frames.
    pub fn export(size: Vec2<usize>) -> Result<Self, VideoError> {
        Self::new(size, PixelFormat::Yuv420Sp)
    }

    pub fn size(&self) -> Vec2<usize> {
        self.inner.size
    }

    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.lock().data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sequence number of the published frame, 0 before the first one.
    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }

    /// Run `f` on the current frame while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.lock().data)
    }

    /// Copy of the current frame.
    pub fn snapshot(&self) -> Image {
        self.snapshot_with_sequence().1
    }

    /// Copy of the current frame together with its sequence number, taken
    /// under one lock.
    pub fn snapshot_with_sequence(&self) -> (u64, Image) {
        let front = self.lock();
        (
            front.sequence,
            Image::new(self.inner.size, front.data.clone(), self.inner.format),
        )
    }

    /// Block until a frame newer than `seen` is published or `timeout`
    /// elapses. Returns the newer sequence number, if any.
    pub fn wait_newer(&self, seen: u64, timeout: Duration) -> Option<u64> {
        let front = self.lock();
        let (front, _) = self
            .inner
            .published
            .wait_timeout_while(front, timeout, |front| front.sequence <= seen)
            .unwrap_or_else(|e| e.into_inner());
        (front.sequence > seen).then_some(front.sequence)
    }

    /// Allocate a back buffer matching the front buffer.
    pub(crate) fn back_buffer(&self) -> Vec<u8> {
        vec![0u8; self.len()]
    }

    /// Swap `back` in as the new front frame. `back` receives the previous
    /// front buffer for reuse.
    pub(crate) fn publish(&self, back: &mut Vec<u8>, sequence: u64) {
        debug_assert_eq!(back.len(), self.len());
        {
            let mut front = self.lock();
            std::mem::swap(&mut front.data, back);
            front.sequence = sequence;
        }
        self.inner.published.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, Front> {
        self.inner.front.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_swaps_buffers() {
        let frame = SharedFrame::export(Vec2::new(2, 2)).unwrap();
        let mut back = frame.back_buffer();
        back.fill(7);
        frame.publish(&mut back, 1);

        assert_eq!(frame.sequence(), 1);
        assert!(frame.read(|data| data.iter().all(|&b| b == 7)));
        // the old front comes back for reuse
        assert_eq!(back, vec![0u8; 6]);
    }

    #[test]
    fn test_wait_newer_wakes_on_publish() {
        let frame = SharedFrame::display(Vec2::new(2, 2)).unwrap();
        let writer = frame.clone();
        let handle = std::thread::spawn(move || {
            let mut back = writer.back_buffer();
            writer.publish(&mut back, 1);
        });
        assert_eq!(frame.wait_newer(0, Duration::from_secs(5)), Some(1));
        handle.join().unwrap();
    }
}
