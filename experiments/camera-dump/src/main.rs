use {
    base::{Vec2, log},
    futures_util::StreamExt,
    image::{image_to_png, yuv420p_to_jpeg},
    video::{
        FrameProducer, ProducerConfig, RectangleOverlay, RetryPolicy, SharedFrame, SyntheticCamera,
    },
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const FRAMES: u64 = 60;
const JPEG_QUALITY: u8 = 85;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_stdout_logger();

    // Output directory from args or the current directory
    let out_dir = std::path::PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| ".".to_string()),
    );

    let size = Vec2::new(WIDTH, HEIGHT);
    log::info!("Camera Dump");
    log::info!("Resolution: {}", size);

    let camera = SyntheticCamera::new(size)?.with_miss_every(7);
    let display = SharedFrame::display(size)?;
    let export = SharedFrame::export(size)?;
    let config = ProducerConfig::default()
        .with_size(size)
        .with_retry(RetryPolicy::bounded(100));

    let mut producer =
        FrameProducer::new(camera, config, Some(display.clone()), Some(export.clone()))?
            .with_processor(RectangleOverlay::default());
    let mut notifications = producer
        .notifications()
        .ok_or("frame notifications already taken")?;
    producer.start()?;

    while let Some(ready) = notifications.next().await {
        if ready.sequence >= FRAMES {
            break;
        }
    }

    let stats = producer.stop()?;
    log::info!(
        "Produced {} frames, {} missed grabs",
        stats.frames,
        stats.misses
    );

    let jpeg = yuv420p_to_jpeg(&display.snapshot(), JPEG_QUALITY)?;
    let display_path = out_dir.join("display.jpg");
    std::fs::write(&display_path, jpeg)?;
    log::info!("Wrote {}", display_path.display());

    let png = image_to_png(&export.snapshot())?;
    let export_path = out_dir.join("export.png");
    std::fs::write(&export_path, png)?;
    log::info!("Wrote {}", export_path.display());

    Ok(())
}
