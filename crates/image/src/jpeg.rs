use {
    crate::*,
    base::Vec2,
    crates_image::{
        ExtendedColorType, ImageEncoder,
        codecs::{jpeg::JpegEncoder, png::PngEncoder},
    },
};

fn to_u32(value: usize) -> Result<u32, ImageError> {
    u32::try_from(value)
        .map_err(|_| ImageError::Size(format!("{value} does not fit an encoder dimension")))
}

pub fn rgb_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    ensure_rgb_len(size, data)?;
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
        data,
        to_u32(size.x)?,
        to_u32(size.y)?,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

pub fn rgb_to_png(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    ensure_rgb_len(size, data)?;
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        data,
        to_u32(size.x)?,
        to_u32(size.y)?,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

fn ensure_rgb_len(size: Vec2<usize>, data: &[u8]) -> Result<(), ImageError> {
    let expected = PixelFormat::Rgb8.buffer_len(size)?;
    if data.len() != expected {
        return Err(ImageError::BufferLength {
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

pub fn yuv420sp_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.format.ensure_format(PixelFormat::Yuv420Sp)?;
    let rgb = convert_yuv420_to_rgb(image)?;
    rgb_to_jpeg(rgb.size, &rgb.data, quality)
}

pub fn yuv420p_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.format.ensure_format(PixelFormat::Yuv420P)?;
    let rgb = convert_yuv420_to_rgb(image)?;
    rgb_to_jpeg(rgb.size, &rgb.data, quality)
}

/// Encode any supported image as PNG, decoding YUV to RGB first.
pub fn image_to_png(image: &Image) -> Result<Vec<u8>, ImageError> {
    match image.format {
        PixelFormat::Rgb8 => rgb_to_png(image.size, &image.data),
        PixelFormat::Yuv420Sp | PixelFormat::Yuv420P => {
            let rgb = convert_yuv420_to_rgb(image)?;
            rgb_to_png(rgb.size, &rgb.data)
        }
    }
}
