//! Pixel formats and color conversion for camera frames.
//!
//! Frames are flat byte buffers in one of three layouts: interleaved RGB,
//! YUV 4:2:0 semiplanar (Y plane, then interleaved U,V) and YUV 4:2:0 planar
//! (Y plane, then a U block, then a V block). Sizes are `Vec2<usize>` with
//! `x` as width and `y` as height.

mod error;
pub use error::*;

mod pixelformat;
pub use pixelformat::*;

mod image;
pub use image::*;

mod yuv;
pub use yuv::*;

mod chroma;
pub use chroma::*;

mod yuv420;
pub use yuv420::*;

mod draw;
pub use draw::*;

mod jpeg;
pub use jpeg::*;
