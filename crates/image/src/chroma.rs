use {crate::*, base::Vec2};

/// Split a semiplanar chroma region into planar U and V blocks.
///
/// `src` holds `stride` interleaved pairs `U0 V0 U1 V1 ...`. Afterwards
/// `dst[..stride]` holds every U sample and `dst[stride..2 * stride]` every V
/// sample, both in their original order. Bytes of `dst` past `2 * stride`
/// are left untouched.
///
/// # Panics
///
/// Panics if `src` or `dst` is shorter than `2 * stride` bytes.
pub fn deinterleave_uv(src: &[u8], dst: &mut [u8], stride: usize) {
    assert!(
        src.len() >= 2 * stride,
        "source chroma too short: {} < {}",
        src.len(),
        2 * stride
    );
    assert!(
        dst.len() >= 2 * stride,
        "destination chroma too short: {} < {}",
        dst.len(),
        2 * stride
    );

    let (dst_u, dst_v) = dst[..2 * stride].split_at_mut(stride);
    for ((pair, u), v) in src[..2 * stride]
        .chunks_exact(2)
        .zip(dst_u.iter_mut())
        .zip(dst_v.iter_mut())
    {
        *u = pair[0];
        *v = pair[1];
    }
}

/// Inverse of `deinterleave_uv`: merge a U block and a V block of `stride`
/// samples each into interleaved pairs.
///
/// # Panics
///
/// Panics if `src` or `dst` is shorter than `2 * stride` bytes.
pub fn interleave_uv(src: &[u8], dst: &mut [u8], stride: usize) {
    assert!(
        src.len() >= 2 * stride,
        "source chroma too short: {} < {}",
        src.len(),
        2 * stride
    );
    assert!(
        dst.len() >= 2 * stride,
        "destination chroma too short: {} < {}",
        dst.len(),
        2 * stride
    );

    let (src_u, src_v) = src[..2 * stride].split_at(stride);
    for ((pair, &u), &v) in dst[..2 * stride]
        .chunks_exact_mut(2)
        .zip(src_u.iter())
        .zip(src_v.iter())
    {
        pair[0] = u;
        pair[1] = v;
    }
}

fn check_yuv420_buffers(size: Vec2<usize>, src: &[u8], dst: &[u8]) -> usize {
    let len = PixelFormat::Yuv420Sp
        .buffer_len(size)
        .unwrap_or(usize::MAX);
    assert!(src.len() >= len, "source frame too short: {} < {len}", src.len());
    assert!(dst.len() >= len, "destination frame too short: {} < {len}", dst.len());
    size.area()
}

/// Semiplanar to planar YUV 4:2:0: copy the Y plane, then deinterleave the
/// chroma plane with a stride of `W/2·H/2`.
///
/// # Panics
///
/// Panics if either buffer is shorter than a YUV 4:2:0 frame at `size`.
pub fn yuv420sp_to_yuv420p(src: &[u8], dst: &mut [u8], size: Vec2<usize>) {
    let luma_len = check_yuv420_buffers(size, src, dst);
    dst[..luma_len].copy_from_slice(&src[..luma_len]);
    deinterleave_uv(&src[luma_len..], &mut dst[luma_len..], chroma_plane_len(size));
}

/// Planar to semiplanar YUV 4:2:0.
///
/// # Panics
///
/// Panics if either buffer is shorter than a YUV 4:2:0 frame at `size`.
pub fn yuv420p_to_yuv420sp(src: &[u8], dst: &mut [u8], size: Vec2<usize>) {
    let luma_len = check_yuv420_buffers(size, src, dst);
    dst[..luma_len].copy_from_slice(&src[..luma_len]);
    interleave_uv(&src[luma_len..], &mut dst[luma_len..], chroma_plane_len(size));
}

/// Checked conversion of a semiplanar image into a new planar one.
pub fn convert_yuv420sp_to_yuv420p(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Yuv420Sp)?;
    validate_size(image.size)?;
    let mut planar = Image::zeroed(image.size, PixelFormat::Yuv420P)?;
    let expected = planar.data.len();
    if image.data.len() != expected {
        return Err(ImageError::BufferLength {
            expected,
            got: image.data.len(),
        });
    }
    yuv420sp_to_yuv420p(&image.data, &mut planar.data, image.size);
    Ok(planar)
}
