/// How color math results outside [0, 255] are narrowed to a byte.
///
/// For 8-bit RGB input the BT.601 integer formulas stay within [16, 235]
/// (luma) and [16, 239] (chroma), so both modes agree on every valid pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Saturate to [0, 255].
    #[default]
    Clamp,
    /// Keep the low 8 bits.
    Wrap,
}

impl Overflow {
    #[inline]
    pub fn narrow(self, value: i32) -> u8 {
        match self {
            Overflow::Clamp => value.clamp(0, 255) as u8,
            Overflow::Wrap => value as u8,
        }
    }
}

#[inline]
pub(crate) fn bt601_luma(r: i32, g: i32, b: i32) -> i32 {
    ((66 * r + 129 * g + 25 * b) >> 8) + 16
}

#[inline]
pub(crate) fn bt601_chroma(r: i32, g: i32, b: i32) -> (i32, i32) {
    let u = ((-38 * r - 74 * g + 112 * b) >> 8) + 128;
    let v = ((112 * r - 94 * g - 18 * b) >> 8) + 128;
    (u, v)
}

/// BT.601 studio-range RGB to YUV for a single pixel (fixed-point, shift 8).
///
/// `>>` on `i32` is an arithmetic shift, so negative intermediates round
/// toward negative infinity.
pub fn rgb_to_yuv(r: u8, g: u8, b: u8, overflow: Overflow) -> (u8, u8, u8) {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let (u, v) = bt601_chroma(r, g, b);
    (
        overflow.narrow(bt601_luma(r, g, b)),
        overflow.narrow(u),
        overflow.narrow(v),
    )
}

/// BT.601 studio-range YUV to RGB for a single pixel, the inverse of
/// `rgb_to_yuv` (fixed-point, shift 8, rounded, clamped).
///
/// `rgb_to_yuv` truncates, so a round trip is not exact. Grays come back
/// within 1, the primaries except blue within 2. Saturated blues are the
/// worst case, up to 4 per channel (e.g. (0, 0, 235)).
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let c = y as i32 - 16;
    let d = u as i32 - 128;
    let e = v as i32 - 128;
    let r = (298 * c + 409 * e + 128) >> 8;
    let g = (298 * c - 100 * d - 208 * e + 128) >> 8;
    let b = (298 * c + 516 * d + 128) >> 8;
    (
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
}
