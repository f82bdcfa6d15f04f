use base::Vec2;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Vec2<usize>,
    pub size: Vec2<usize>,
}

impl Rect {
    pub fn new(origin: Vec2<usize>, size: Vec2<usize>) -> Self {
        Self { origin, size }
    }

    /// Exclusive bottom-right corner, saturated at `usize::MAX`.
    pub fn max(&self) -> Vec2<usize> {
        Vec2::new(
            self.origin.x.saturating_add(self.size.x),
            self.origin.y.saturating_add(self.size.y),
        )
    }

    pub fn contains_point(&self, point: Vec2<usize>) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }

    /// The part of `self` inside an image of `size`, if any.
    pub fn clip(&self, size: Vec2<usize>) -> Option<Rect> {
        let max = self.max();
        let max = Vec2::new(max.x.min(size.x), max.y.min(size.y));
        if self.origin.x >= max.x || self.origin.y >= max.y {
            return None;
        }
        Some(Rect::from_min_max(self.origin, max))
    }

    pub fn from_min_max(min: Vec2<usize>, max: Vec2<usize>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }
}

/// Draw the outline of `rect` into an interleaved RGB buffer.
///
/// The outline is `thickness` pixels wide and lies inside the rectangle's
/// bounds. Pixels outside the image are skipped. A thickness of at least half
/// the shorter side fills the rectangle.
///
/// # Panics
///
/// Panics if `rgb` is shorter than `3·W·H` bytes.
pub fn draw_rectangle(
    rgb: &mut [u8],
    size: Vec2<usize>,
    rect: Rect,
    color: [u8; 3],
    thickness: usize,
) {
    assert!(
        rgb.len() >= size.area() * 3,
        "RGB buffer too short: {} < {}",
        rgb.len(),
        size.area() * 3
    );
    if thickness == 0 {
        return;
    }
    let full = rect.max();
    let Some(visible) = rect.clip(size) else {
        return;
    };
    let visible_max = visible.max();

    for y in visible.origin.y..visible_max.y {
        let on_horizontal_edge = y < rect.origin.y.saturating_add(thickness)
            || y.saturating_add(thickness) >= full.y;
        for x in visible.origin.x..visible_max.x {
            let on_vertical_edge = x < rect.origin.x.saturating_add(thickness)
                || x.saturating_add(thickness) >= full.x;
            if on_horizontal_edge || on_vertical_edge {
                let i = (y * size.x + x) * 3;
                rgb[i..i + 3].copy_from_slice(&color);
            }
        }
    }
}
