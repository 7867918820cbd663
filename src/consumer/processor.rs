use std::future::Future;

use aws_sdk_sqs::types::Message;
use tokio::sync::mpsc;
use tracing::warn;

use crate::errors::SqsConsumerError;

/// The dispatch loop: drains the batch channel and starts one task per
/// batch.
pub(crate) struct Processor<F, Fut>
where
    F: Fn(Message) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), SqsConsumerError>> + Send + 'static,
{
    pub(crate) queue_url: String,
    pub(crate) handler: F,
}

impl<F, Fut> Processor<F, Fut>
where
    F: Fn(Message) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), SqsConsumerError>> + Send + 'static,
{
    /// Runs until every batch sender is dropped and the channel drains.
    ///
    /// Batches are processed concurrently with respect to each other;
    /// messages within one batch are handled sequentially, in received
    /// order. A handler error is logged and the rest of the batch still
    /// runs; the message is not retried or deleted.
    pub(crate) async fn run(self, mut batches: mpsc::Receiver<Vec<Message>>) {
        while let Some(batch) = batches.recv().await {
            let handler = self.handler.clone();
            let queue_url = self.queue_url.clone();

            tokio::spawn(async move {
                for message in batch {
                    if let Err(err) = (handler)(message).await {
                        warn!(queue_url = %queue_url, %err, "message handler failed");
                    }
                }
            });
        }
    }
}
