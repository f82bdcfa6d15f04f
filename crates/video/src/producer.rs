use {
    crate::*,
    base::Vec2,
    image::{
        ChromaLayout, Overflow, PixelFormat, rgb_to_yuv420, yuv420sp_to_rgb, yuv420sp_to_yuv420p,
    },
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread::JoinHandle,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerState {
    Idle,
    Running,
    Stopped,
}

/// Totals reported by the worker when it exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerStats {
    /// Frames published.
    pub frames: u64,
    /// Grab attempts that yielded no frame.
    pub misses: u64,
}

/// Drives the acquisition loop on one dedicated worker thread.
///
/// Each grabbed frame is optionally run through a `FrameProcessor`, then
/// written to the display target as planar YUV 4:2:0 and to the export
/// target verbatim as semiplanar YUV 4:2:0. A `FrameReady` notification
/// follows every published frame. The stop flag is checked once per loop
/// iteration, never during a conversion.
pub struct FrameProducer<C: CameraSource + 'static> {
    config: ProducerConfig,
    state: ProducerState,
    camera: Option<C>,
    processor: Option<Box<dyn FrameProcessor>>,
    display: Option<SharedFrame>,
    export: Option<SharedFrame>,
    notifier: Option<FrameNotifier>,
    notifications: Option<FrameNotifications>,
    stop: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<Result<ProducerStats, VideoError>>>,
}

fn check_target(
    name: &str,
    target: Option<&SharedFrame>,
    size: Vec2<usize>,
    format: PixelFormat,
) -> Result<(), VideoError> {
    let Some(target) = target else {
        return Ok(());
    };
    if target.size() != size {
        return Err(VideoError::Config(format!(
            "{name} target is {}, producer is configured for {size}",
            target.size()
        )));
    }
    if target.format() != format {
        return Err(VideoError::Config(format!(
            "{name} target must be {format:?}, got {:?}",
            target.format()
        )));
    }
    Ok(())
}

impl<C: CameraSource + 'static> FrameProducer<C> {
    /// Create an idle producer. Either target may be omitted.
    pub fn new(
        camera: C,
        config: ProducerConfig,
        display: Option<SharedFrame>,
        export: Option<SharedFrame>,
    ) -> Result<Self, VideoError> {
        config.validate()?;
        let size = config.size();
        check_target("display", display.as_ref(), size, PixelFormat::Yuv420P)?;
        check_target("export", export.as_ref(), size, PixelFormat::Yuv420Sp)?;

        let (notifier, notifications) = notification_channel();
        Ok(Self {
            config,
            state: ProducerState::Idle,
            camera: Some(camera),
            processor: None,
            display,
            export,
            notifier: Some(notifier),
            notifications: Some(notifications),
            stop: Arc::new(AtomicBool::new(false)),
            join_handle: None,
        })
    }

    /// Run `processor` on every frame before it is published.
    pub fn with_processor(mut self, processor: impl FrameProcessor + 'static) -> Self {
        self.processor = Some(Box::new(processor));
        self
    }

    /// Take the frame-ready receiver. Returns `None` after the first call.
    ///
    /// Call this before `start`; a receiver still held at start is dropped.
    /// The channel is unbounded: a receiver that is held but never read
    /// grows by one `FrameReady` per published frame until it is dropped.
    pub fn notifications(&mut self) -> Option<FrameNotifications> {
        self.notifications.take()
    }

    pub fn config(&self) -> &ProducerConfig {
        &self.config
    }

    pub fn state(&self) -> ProducerState {
        self.state
    }

    pub fn display(&self) -> Option<&SharedFrame> {
        self.display.as_ref()
    }

    pub fn export(&self) -> Option<&SharedFrame> {
        self.export.as_ref()
    }

    /// Whether the worker has exited, on its own or after `stop`.
    pub fn is_finished(&self) -> bool {
        match &self.join_handle {
            Some(handle) => handle.is_finished(),
            None => self.state == ProducerState::Stopped,
        }
    }

    /// Spawn the worker and move to `Running`.
    pub fn start(&mut self) -> Result<(), VideoError> {
        match self.state {
            ProducerState::Idle => {}
            ProducerState::Running => {
                return Err(VideoError::State("producer already running".to_string()));
            }
            ProducerState::Stopped => {
                return Err(VideoError::State("producer already stopped".to_string()));
            }
        }
        let (Some(camera), Some(notifier)) = (self.camera.take(), self.notifier.take()) else {
            return Err(VideoError::State("producer has no camera".to_string()));
        };
        if self.notifications.take().is_some() {
            log::debug!("no listener took the frame-ready receiver");
        }

        let worker = Worker::new(
            camera,
            &self.config,
            self.processor.take(),
            self.display.clone(),
            self.export.clone(),
            notifier,
        );
        let stop = Arc::clone(&self.stop);

        // stopped either way, the camera has moved into the closure
        self.state = ProducerState::Stopped;
        let join_handle = std::thread::Builder::new()
            .name(self.config.thread_name().to_string())
            .spawn(move || worker.run(&stop))?;

        self.join_handle = Some(join_handle);
        self.state = ProducerState::Running;
        Ok(())
    }

    /// Request the worker to stop, wait for it and return its totals.
    ///
    /// An idle producer moves straight to `Stopped` with zero totals. Errors
    /// the worker exited with (retry exhaustion, bad frame length) are
    /// returned here.
    pub fn stop(&mut self) -> Result<ProducerStats, VideoError> {
        match self.state {
            ProducerState::Idle => {
                self.state = ProducerState::Stopped;
                return Ok(ProducerStats::default());
            }
            ProducerState::Stopped => {
                return Err(VideoError::State("producer already stopped".to_string()));
            }
            ProducerState::Running => {}
        }
        self.stop.store(true, Ordering::Relaxed);
        self.state = ProducerState::Stopped;
        let Some(join_handle) = self.join_handle.take() else {
            return Ok(ProducerStats::default());
        };
        join_handle
            .join()
            .map_err(|_| VideoError::Worker("frame producer worker panicked".to_string()))?
    }
}

impl<C: CameraSource + 'static> Drop for FrameProducer<C> {
    fn drop(&mut self) {
        if self.state == ProducerState::Running {
            if let Err(error) = self.stop() {
                log::error!("frame producer: {}", error);
            }
        }
    }
}

// target plus the worker's private back buffer
struct Target {
    shared: SharedFrame,
    back: Vec<u8>,
}

impl Target {
    fn new(shared: SharedFrame) -> Self {
        let back = shared.back_buffer();
        Self { shared, back }
    }
}

struct Worker<C: CameraSource> {
    camera: C,
    size: Vec2<usize>,
    frame_len: usize,
    retry: RetryPolicy,
    overflow: Overflow,
    processor: Option<Box<dyn FrameProcessor>>,
    rgb: Vec<u8>,
    working: Vec<u8>,
    display: Option<Target>,
    export: Option<Target>,
    notifier: FrameNotifier,
}

impl<C: CameraSource> Worker<C> {
    fn new(
        camera: C,
        config: &ProducerConfig,
        processor: Option<Box<dyn FrameProcessor>>,
        display: Option<SharedFrame>,
        export: Option<SharedFrame>,
        notifier: FrameNotifier,
    ) -> Self {
        let size = config.size();
        let pixels = size.area();
        let frame_len = pixels + 2 * image::chroma_plane_len(size);
        // scratch space is only needed for the processing path
        let (rgb, working) = if processor.is_some() {
            (vec![0u8; pixels * 3], vec![0u8; frame_len])
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            camera,
            size,
            frame_len,
            retry: config.retry(),
            overflow: config.overflow(),
            processor,
            rgb,
            working,
            display: display.map(Target::new),
            export: export.map(Target::new),
            notifier,
        }
    }

    fn run(mut self, stop: &AtomicBool) -> Result<ProducerStats, VideoError> {
        log::info!("frame producer: starting capture loop at {}", self.size);
        let mut stats = ProducerStats::default();
        let mut consecutive_misses = 0u32;
        let mut sequence = 0u64;

        while !stop.load(Ordering::Relaxed) {
            if !self.camera.try_grab() {
                stats.misses += 1;
                consecutive_misses = consecutive_misses.saturating_add(1);
                log::trace!("frame producer: grab missed ({consecutive_misses} in a row)");
                if self.retry.is_exhausted(consecutive_misses) {
                    log::warn!(
                        "frame producer: giving up after {} missed grabs",
                        consecutive_misses
                    );
                    return Err(VideoError::AcquisitionTimeout {
                        attempts: consecutive_misses,
                    });
                }
                if !self.retry.backoff().is_zero() {
                    std::thread::sleep(self.retry.backoff());
                }
                continue;
            }
            consecutive_misses = 0;

            sequence += 1;
            if let Err(error) = self.publish(sequence) {
                log::error!("frame producer: {}", error);
                return Err(error);
            }
            self.notifier.notify(sequence);
            stats.frames = sequence;
            log::debug!("frame producer: published frame {}", sequence);
        }

        log::info!(
            "frame producer: stopped after {} frames ({} missed grabs)",
            stats.frames,
            stats.misses
        );
        Ok(stats)
    }

    fn publish(&mut self, sequence: u64) -> Result<(), VideoError> {
        let raw = self.camera.retrieve_frame();
        if raw.len() != self.frame_len {
            return Err(VideoError::FrameLength {
                expected: self.frame_len,
                got: raw.len(),
            });
        }

        let frame: &[u8] = match self.processor.as_mut() {
            Some(processor) => {
                yuv420sp_to_rgb(raw, &mut self.rgb, self.size);
                processor.process(&mut self.rgb, self.size);
                rgb_to_yuv420(
                    &self.rgb,
                    &mut self.working,
                    self.size,
                    ChromaLayout::Semiplanar,
                    self.overflow,
                );
                &self.working
            }
            None => raw,
        };

        if let Some(display) = &mut self.display {
            yuv420sp_to_yuv420p(frame, &mut display.back, self.size);
            display.shared.publish(&mut display.back, sequence);
        }
        if let Some(export) = &mut self.export {
            export.back.copy_from_slice(frame);
            export.shared.publish(&mut export.back, sequence);
        }
        Ok(())
    }
}
