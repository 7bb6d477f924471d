/// Broadcast hub - fans video signals out to every connected client
use kiosk_core::VideoSignal;
use tokio::sync::broadcast;

/// Shared fan-out point for real-time clients
///
/// Each connected client holds one receiver; the set of receivers is the set
/// of connected clients. Publishing never waits on clients and keeps no
/// history, so a client subscribing after a signal was sent never sees it.
#[derive(Debug)]
pub struct BroadcastHub {
    sender: broadcast::Sender<VideoSignal>,
}

impl BroadcastHub {
    /// `capacity` bounds how many signals a slow client may fall behind
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Join the active set
    ///
    /// Dropping the receiver leaves it.
    pub fn subscribe(&self) -> broadcast::Receiver<VideoSignal> {
        self.sender.subscribe()
    }

    /// Relay a signal to every subscriber, including the one that sent it
    ///
    /// Returns how many clients the signal was queued for.
    pub fn publish(&self, signal: VideoSignal) -> usize {
        let event = signal.event();
        match self.sender.send(signal) {
            Ok(receivers) => {
                tracing::debug!(event, receivers, "Signal relayed");
                receivers
            }
            Err(_) => {
                tracing::debug!(event, "Signal dropped, no clients connected");
                0
            }
        }
    }

    /// Number of currently connected clients
    pub fn connected(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_publish_reaches_every_subscriber() {
        let hub = BroadcastHub::new(8);
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();

        assert_eq!(hub.publish(VideoSignal::play(7)), 2);

        assert_eq!(a.try_recv().unwrap(), VideoSignal::play(7));
        assert_eq!(b.try_recv().unwrap(), VideoSignal::play(7));
    }

    #[test]
    fn test_signals_keep_publish_order() {
        let hub = BroadcastHub::new(8);
        let mut rx = hub.subscribe();

        hub.publish(VideoSignal::play(1));
        hub.publish(VideoSignal::StopVideo);
        hub.publish(VideoSignal::play(2));

        assert_eq!(rx.try_recv().unwrap(), VideoSignal::play(1));
        assert_eq!(rx.try_recv().unwrap(), VideoSignal::StopVideo);
        assert_eq!(rx.try_recv().unwrap(), VideoSignal::play(2));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_late_subscriber_gets_no_history() {
        let hub = BroadcastHub::new(8);
        let _early = hub.subscribe();

        hub.publish(VideoSignal::play(3));

        let mut late = hub.subscribe();
        assert_eq!(late.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_publish_without_clients_is_dropped() {
        let hub = BroadcastHub::new(8);
        assert_eq!(hub.publish(VideoSignal::StopVideo), 0);
    }

    #[test]
    fn test_connected_tracks_subscribers() {
        let hub = BroadcastHub::new(8);
        assert_eq!(hub.connected(), 0);

        let a = hub.subscribe();
        let b = hub.subscribe();
        assert_eq!(hub.connected(), 2);

        drop(a);
        assert_eq!(hub.connected(), 1);
        drop(b);
        assert_eq!(hub.connected(), 0);
    }

    #[test]
    fn test_slow_subscriber_skips_instead_of_blocking() {
        let hub = BroadcastHub::new(2);
        let mut slow = hub.subscribe();

        for n in 0..5 {
            hub.publish(VideoSignal::play(n));
        }

        assert!(matches!(slow.try_recv(), Err(TryRecvError::Lagged(3))));
        assert_eq!(slow.try_recv().unwrap(), VideoSignal::play(3));
        assert_eq!(slow.try_recv().unwrap(), VideoSignal::play(4));
    }
}
