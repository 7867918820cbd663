use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use aws_sdk_sqs::types::Message;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::transport::QueueTransport;

/// One polling loop of the consumer pool.
///
/// Every receiver of a consumer shares the batch sender, the poll-delay
/// cell and the shutdown signal.
pub(crate) struct Receiver<T> {
    pub(crate) queue_url: String,
    pub(crate) transport: T,
    pub(crate) batches: mpsc::Sender<Vec<Message>>,
    pub(crate) max_number_of_messages: i32,
    pub(crate) visibility_timeout_seconds: i32,
    pub(crate) poll_delay: Arc<AtomicU64>,
    pub(crate) shutdown: watch::Receiver<bool>,
}

impl<T> Receiver<T>
where
    T: QueueTransport,
{
    /// Polls the queue until shut down.
    ///
    /// A failed receive is logged and the loop keeps polling after the
    /// usual delay; an empty batch is never published. The poll delay is
    /// re-read on every cycle so changes apply without a restart.
    pub(crate) async fn run(mut self) {
        loop {
            if *self.shutdown.borrow() {
                return;
            }

            let received = self
                .transport
                .receive_messages(
                    &self.queue_url,
                    self.max_number_of_messages,
                    Some(self.visibility_timeout_seconds),
                )
                .await;

            match received {
                Ok(messages) if messages.is_empty() => {}
                Ok(messages) => {
                    debug!(
                        queue_url = %self.queue_url,
                        count = messages.len(),
                        "received batch"
                    );

                    tokio::select! {
                        sent = self.batches.send(messages) => {
                            if sent.is_err() {
                                // Dispatch side is gone; nothing left to feed.
                                return;
                            }
                        }
                        _ = self.shutdown.changed() => return,
                    }
                }
                Err(err) => {
                    warn!(queue_url = %self.queue_url, %err, "failed to receive messages");
                }
            }

            let delay = Duration::from_millis(self.poll_delay.load(Ordering::Relaxed));

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = self.shutdown.changed() => return,
            }
        }
    }
}
