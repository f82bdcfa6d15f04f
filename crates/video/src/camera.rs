/// A source of raw camera frames.
///
/// Frames are semiplanar YUV 4:2:0 (Y plane, then interleaved U,V) at the
/// size the producer was configured with. The producer calls `try_grab`
/// until it returns `true`, then reads the frame with `retrieve_frame`
/// before grabbing again.
pub trait CameraSource: Send {
    /// Capture a new frame into internal state. `false` means no frame was
    /// available yet; it is not an error.
    fn try_grab(&mut self) -> bool;

    /// The most recently grabbed frame. Only valid until the next `try_grab`.
    fn retrieve_frame(&self) -> &[u8];
}

impl<C: CameraSource + ?Sized> CameraSource for Box<C> {
    fn try_grab(&mut self) -> bool {
        (**self).try_grab()
    }

    fn retrieve_frame(&self) -> &[u8] {
        (**self).retrieve_frame()
    }
}
