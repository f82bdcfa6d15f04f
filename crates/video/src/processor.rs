use {
    base::Vec2,
    image::{Rect, draw_rectangle},
};

/// A stage that edits each frame in RGB before it is published.
pub trait FrameProcessor: Send {
    /// Modify `rgb` (interleaved, `3·W·H` bytes) in place.
    fn process(&mut self, rgb: &mut [u8], size: Vec2<usize>);
}

impl<P: FrameProcessor + ?Sized> FrameProcessor for Box<P> {
    fn process(&mut self, rgb: &mut [u8], size: Vec2<usize>) {
        (**self).process(rgb, size)
    }
}

/// Draws a rectangle outline onto every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleOverlay {
    pub rect: Rect,
    pub color: [u8; 3],
    pub thickness: usize,
}

impl Default for RectangleOverlay {
    /// 2 pixel magenta outline at (50, 50), 255x255.
    fn default() -> Self {
        Self {
            rect: Rect::new(Vec2::new(50, 50), Vec2::new(255, 255)),
            color: [255, 0, 255],
            thickness: 2,
        }
    }
}

impl RectangleOverlay {
    pub fn new(rect: Rect, color: [u8; 3], thickness: usize) -> Self {
        Self {
            rect,
            color,
            thickness,
        }
    }
}

impl FrameProcessor for RectangleOverlay {
    fn process(&mut self, rgb: &mut [u8], size: Vec2<usize>) {
        draw_rectangle(rgb, size, self.rect, self.color, self.thickness);
    }
}
