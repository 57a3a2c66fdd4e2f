//! Touch input collaborator
//!
//! The render loop polls for at most one touch point per tick. Touch
//! controllers that report from their own task push points into
//! [`TOUCH_CHANNEL`]; the loop drains it through the receiver's
//! [`TouchInput`] impl, so console state is still mutated only by the loop.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::{Channel, Receiver};

use crate::ui::core::TouchPoint;

/// Channel capacity for pending touch points
pub const TOUCH_CHANNEL_CAPACITY: usize = 4;

/// Global channel from the touch-controller task to the render loop
pub static TOUCH_CHANNEL: Channel<CriticalSectionRawMutex, TouchPoint, TOUCH_CHANNEL_CAPACITY> =
    Channel::new();

pub trait TouchInput {
    /// `None` when the panel is not being touched.
    fn poll(&mut self) -> Option<TouchPoint>;
}

/// Yields the most recent queued point, discarding older ones.
impl<M: RawMutex, const N: usize> TouchInput for Receiver<'_, M, TouchPoint, N> {
    fn poll(&mut self) -> Option<TouchPoint> {
        let mut latest = None;
        while let Ok(point) = self.try_receive() {
            latest = Some(point);
        }
        latest
    }
}

/// Touch source for builds without a touch panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTouch;

impl TouchInput for NoTouch {
    fn poll(&mut self) -> Option<TouchPoint> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiver_yields_latest_point() {
        let channel: Channel<CriticalSectionRawMutex, TouchPoint, 4> = Channel::new();
        let mut receiver = channel.receiver();

        assert_eq!(receiver.poll(), None);

        channel.try_send(TouchPoint::new(1, 2)).unwrap();
        channel.try_send(TouchPoint::new(150, 210)).unwrap();
        assert_eq!(receiver.poll(), Some(TouchPoint::new(150, 210)));
        assert_eq!(receiver.poll(), None);
    }
}
