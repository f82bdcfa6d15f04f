use {crate::*, base::Vec2};

/// Layout of the chroma samples that follow the Y plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaLayout {
    /// A block of all U samples, then a block of all V samples.
    Planar,
    /// U,V pairs interleaved per subsampled pixel.
    Semiplanar,
}

impl ChromaLayout {
    pub fn pixel_format(&self) -> PixelFormat {
        match self {
            ChromaLayout::Planar => PixelFormat::Yuv420P,
            ChromaLayout::Semiplanar => PixelFormat::Yuv420Sp,
        }
    }
}

/// Convert interleaved RGB to YUV 4:2:0.
///
/// Luma is computed for every pixel in raster order. Chroma is taken from
/// the single pixel at each even `(x, y)`, no averaging, and written after
/// the Y plane in raster order of the subsampled grid, laid out according to
/// `layout`.
///
/// # Panics
///
/// Panics if `size` has an odd or zero dimension, if `rgb` is shorter than
/// `3·W·H` bytes, or if `dst` is shorter than `1.5·W·H` bytes.
pub fn rgb_to_yuv420(
    rgb: &[u8],
    dst: &mut [u8],
    size: Vec2<usize>,
    layout: ChromaLayout,
    overflow: Overflow,
) {
    if let Err(error) = validate_size(size) {
        panic!("{error}");
    }
    let pixels = size.area();
    let chroma_len = chroma_plane_len(size);
    assert!(
        rgb.len() >= pixels * 3,
        "RGB buffer too short: {} < {}",
        rgb.len(),
        pixels * 3
    );
    assert!(
        dst.len() >= pixels + 2 * chroma_len,
        "YUV buffer too short: {} < {}",
        dst.len(),
        pixels + 2 * chroma_len
    );

    let (dst_y, dst_uv) = dst[..pixels + 2 * chroma_len].split_at_mut(pixels);

    // Y plane
    for (y, px) in dst_y.iter_mut().zip(rgb.chunks_exact(3)) {
        *y = overflow.narrow(bt601_luma(px[0] as i32, px[1] as i32, px[2] as i32));
    }

    // UV plane, one sample per 2x2 block
    let width = size.x;
    let mut k = 0;
    for row in (0..size.y).step_by(2) {
        for col in (0..width).step_by(2) {
            let i = (row * width + col) * 3;
            let (u, v) = bt601_chroma(rgb[i] as i32, rgb[i + 1] as i32, rgb[i + 2] as i32);
            let (u, v) = (overflow.narrow(u), overflow.narrow(v));
            match layout {
                ChromaLayout::Semiplanar => {
                    dst_uv[2 * k] = u;
                    dst_uv[2 * k + 1] = v;
                }
                ChromaLayout::Planar => {
                    dst_uv[k] = u;
                    dst_uv[chroma_len + k] = v;
                }
            }
            k += 1;
        }
    }
}

fn ensure_len(data: &[u8], format: PixelFormat, size: Vec2<usize>) -> Result<(), ImageError> {
    let expected = format.buffer_len(size)?;
    if data.len() != expected {
        return Err(ImageError::BufferLength {
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

/// Checked RGB to YUV 4:2:0 conversion into a newly allocated image.
pub fn convert_rgb_to_yuv420(
    image: &Image,
    layout: ChromaLayout,
    overflow: Overflow,
) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    validate_size(image.size)?;
    ensure_len(&image.data, PixelFormat::Rgb8, image.size)?;
    let mut yuv = Image::zeroed(image.size, layout.pixel_format())?;
    rgb_to_yuv420(&image.data, &mut yuv.data, image.size, layout, overflow);
    Ok(yuv)
}

fn yuv420_to_rgb(src: &[u8], dst: &mut [u8], size: Vec2<usize>, layout: ChromaLayout) {
    if let Err(error) = validate_size(size) {
        panic!("{error}");
    }
    let pixels = size.area();
    let chroma_len = chroma_plane_len(size);
    assert!(
        src.len() >= pixels + 2 * chroma_len,
        "YUV buffer too short: {} < {}",
        src.len(),
        pixels + 2 * chroma_len
    );
    assert!(
        dst.len() >= pixels * 3,
        "RGB buffer too short: {} < {}",
        dst.len(),
        pixels * 3
    );

    let (src_y, src_uv) = src.split_at(pixels);
    let width = size.x;
    let uv_w = width / 2;

    for row in 0..size.y {
        for col in 0..width {
            let k = (row / 2) * uv_w + col / 2;
            let (u, v) = match layout {
                ChromaLayout::Semiplanar => (src_uv[2 * k], src_uv[2 * k + 1]),
                ChromaLayout::Planar => (src_uv[k], src_uv[chroma_len + k]),
            };
            let i = row * width + col;
            let (r, g, b) = yuv_to_rgb(src_y[i], u, v);
            dst[3 * i] = r;
            dst[3 * i + 1] = g;
            dst[3 * i + 2] = b;
        }
    }
}

/// Decode semiplanar YUV 4:2:0 to interleaved RGB; each chroma sample
/// covers a 2x2 block.
///
/// # Panics
///
/// Panics on odd or zero `size`, or if either buffer is too short.
pub fn yuv420sp_to_rgb(src: &[u8], dst: &mut [u8], size: Vec2<usize>) {
    yuv420_to_rgb(src, dst, size, ChromaLayout::Semiplanar);
}

/// Decode planar YUV 4:2:0 to interleaved RGB.
///
/// # Panics
///
/// Panics on odd or zero `size`, or if either buffer is too short.
pub fn yuv420p_to_rgb(src: &[u8], dst: &mut [u8], size: Vec2<usize>) {
    yuv420_to_rgb(src, dst, size, ChromaLayout::Planar);
}

/// Checked YUV 4:2:0 (either layout) to RGB conversion.
pub fn convert_yuv420_to_rgb(image: &Image) -> Result<Image, ImageError> {
    let layout = match image.format {
        PixelFormat::Yuv420Sp => ChromaLayout::Semiplanar,
        PixelFormat::Yuv420P => ChromaLayout::Planar,
        PixelFormat::Rgb8 => {
            return Err(ImageError::Format(
                "expected a YUV 4:2:0 format, got Rgb8".to_string(),
            ));
        }
    };
    validate_size(image.size)?;
    ensure_len(&image.data, image.format, image.size)?;
    let mut rgb = Image::zeroed(image.size, PixelFormat::Rgb8)?;
    yuv420_to_rgb(&image.data, &mut rgb.data, image.size, layout);
    Ok(rgb)
}
