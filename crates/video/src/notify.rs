use {
    futures_core::Stream,
    std::{
        pin::Pin,
        task::{Context, Poll},
    },
    tokio::sync::mpsc,
};

/// Emitted once per published frame, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReady {
    /// 1 for the first frame, then increasing by one.
    pub sequence: u64,
}

/// Receiving end of a producer's frame-ready notifications.
///
/// Ends (returns `None`) once the worker has exited and every queued
/// notification has been received.
#[derive(Debug)]
pub struct FrameNotifications {
    receiver: mpsc::UnboundedReceiver<FrameReady>,
}

impl FrameNotifications {
    pub async fn recv(&mut self) -> Option<FrameReady> {
        self.receiver.recv().await
    }

    /// Blocking receive for non-async consumers. Must not be called from
    /// inside an async runtime.
    pub fn blocking_recv(&mut self) -> Option<FrameReady> {
        self.receiver.blocking_recv()
    }

    /// Next queued notification, if one is ready.
    pub fn try_recv(&mut self) -> Option<FrameReady> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for FrameNotifications {
    type Item = FrameReady;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

/// Sending end, owned by the worker.
#[derive(Debug)]
pub(crate) struct FrameNotifier {
    sender: mpsc::UnboundedSender<FrameReady>,
    listener_gone: bool,
}

impl FrameNotifier {
    pub(crate) fn notify(&mut self, sequence: u64) {
        if self.sender.send(FrameReady { sequence }).is_err() && !self.listener_gone {
            // keep producing, the shared frames are still being read
            log::debug!("frame-ready listener dropped at frame {sequence}");
            self.listener_gone = true;
        }
    }
}

pub(crate) fn notification_channel() -> (FrameNotifier, FrameNotifications) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        FrameNotifier {
            sender,
            listener_gone: false,
        },
        FrameNotifications { receiver },
    )
}
