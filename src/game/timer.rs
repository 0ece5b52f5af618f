//! Cancellable scheduling primitives.
//!
//! Timers are spawned tasks that deliver events into the engine's channel.
//! Every schedule call returns a [`CancelToken`]; the engine keeps all live
//! tokens and cancels them during teardown, so a discarded session can never
//! fire a timer into its successor.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a scheduled timer.
///
/// Cancelling (or dropping) the token aborts the underlying task; an aborted
/// timer delivers nothing.
#[derive(Debug)]
pub struct CancelToken {
    task: JoinHandle<()>,
}

impl CancelToken {
    /// Stops the timer. Safe to call after the timer has already fired.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for CancelToken {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Delivers `event` once after `delay`.
pub fn schedule_once<E: Send + 'static>(
    delay: Duration,
    tx: UnboundedSender<E>,
    event: E,
) -> CancelToken {
    debug!(?delay, "scheduling one-shot timer");
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(event);
    });
    CancelToken { task }
}

/// Delivers `make_event()` every `interval` until cancelled.
///
/// The first delivery happens one full interval after scheduling, not
/// immediately. Delivery stops on its own if the receiving side is gone.
pub fn schedule_repeating<E, F>(
    interval: Duration,
    tx: UnboundedSender<E>,
    mut make_event: F,
) -> CancelToken
where
    E: Send + 'static,
    F: FnMut() -> E + Send + 'static,
{
    debug!(?interval, "scheduling repeating timer");
    let task = tokio::spawn(async move {
        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        loop {
            ticker.tick().await;
            if tx.send(make_event()).is_err() {
                break;
            }
        }
    });
    CancelToken { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn one_shot_fires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _token = schedule_once(Duration::from_millis(5), tx, 42u32);
        assert_eq!(rx.recv().await, Some(42));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn repeating_fires_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = schedule_repeating(Duration::from_millis(5), tx, || ());
        rx.recv().await.unwrap();
        rx.recv().await.unwrap();
        token.cancel();
        // Drain anything already in flight, then confirm silence.
        tokio::time::sleep(Duration::from_millis(25)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancelled_one_shot_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let token = schedule_once(Duration::from_millis(10), tx, 7);
        token.cancel();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropping_token_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        drop(schedule_once(Duration::from_millis(10), tx, 7));
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(rx.try_recv().is_err());
    }
}
