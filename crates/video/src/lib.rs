//! Frame production for camera capture.
//!
//! A `FrameProducer` runs one dedicated worker thread that polls a
//! `CameraSource` for semiplanar YUV 4:2:0 frames, publishes them into
//! double-buffered `SharedFrame` targets (planar for display, semiplanar for
//! export) and emits one `FrameReady` notification per published frame.

mod error;
pub use error::*;

mod config;
pub use config::*;

mod camera;
pub use camera::*;

mod synthetic;
pub use synthetic::*;

mod sharedframe;
pub use sharedframe::*;

mod notify;
pub use notify::*;

mod processor;
pub use processor::*;

mod producer;
pub use producer::*;
