use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use aws_sdk_sqs::types::Message;
use futures::future;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

pub mod config;
mod processor;
mod receiver;

pub use self::config::ConsumerConfig;

use self::processor::Processor;
use self::receiver::Receiver;
use crate::errors::SqsConsumerError;
use crate::transport::QueueTransport;

/// An SQS queue consumer.
///
/// Owns the queue URL, the transport, the handler and the configuration.
/// [`SqsConsumer::start`] spawns `config.receivers` polling loops feeding a
/// shared channel of batches, plus a single dispatch loop that starts one
/// task per batch and invokes the handler once per message.
///
/// No configuration value is validated at construction; out-of-range
/// values surface as transport errors, which the polling loops tolerate
/// and log.
pub struct SqsConsumer<T, F, Fut>
where
    T: QueueTransport + Clone + 'static,
    F: Fn(Message) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), SqsConsumerError>> + Send + 'static,
{
    queue_url: String,
    transport: T,
    handler: F,
    config: ConsumerConfig,
    poll_delay: Arc<AtomicU64>,
}

impl<T, F, Fut> SqsConsumer<T, F, Fut>
where
    T: QueueTransport + Clone + 'static,
    F: Fn(Message) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), SqsConsumerError>> + Send + 'static,
{
    /// Creates a new consumer for `queue_url`.
    ///
    /// The transport is an explicit argument; receivers get their own
    /// clones of it. The handler is invoked once per received message and
    /// its error return is logged but not acted upon.
    pub fn new(queue_url: &str, transport: T, handler: F, config: ConsumerConfig) -> Self {
        let poll_delay = Arc::new(AtomicU64::new(config.poll_delay_milliseconds));

        SqsConsumer {
            queue_url: queue_url.to_string(),
            transport,
            handler,
            config,
            poll_delay,
        }
    }

    /// Updates the pause between polls before the consumer is started.
    ///
    /// After [`SqsConsumer::start`], use [`ConsumerHandle::set_poll_delay`].
    pub fn set_poll_delay(&self, delay_milliseconds: u64) {
        self.poll_delay.store(delay_milliseconds, Ordering::Relaxed);
    }

    /// Starts the consumer and returns immediately.
    ///
    /// Spawns one polling loop per configured receiver and exactly one
    /// dispatch loop. Consuming `self` makes a second start a compile
    /// error rather than a pool of duplicate loops.
    ///
    /// The returned [`ConsumerHandle`] adjusts the poll delay, signals
    /// shutdown and awaits termination. A receiver count of zero consumes
    /// nothing and the dispatch loop ends immediately.
    pub fn start(self) -> ConsumerHandle {
        info!(
            queue_url = %self.queue_url,
            receivers = self.config.receivers,
            "starting queue consumer"
        );

        // Capacity 1 keeps the publish rendezvous-like: a receiver with a
        // full batch waits until the dispatch side takes the previous one.
        let (batches_tx, batches_rx) = mpsc::channel::<Vec<Message>>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut receiver_tasks = Vec::with_capacity(self.config.receivers);

        for _ in 0..self.config.receivers {
            let receiver = Receiver {
                queue_url: self.queue_url.clone(),
                transport: self.transport.clone(),
                batches: batches_tx.clone(),
                max_number_of_messages: self.config.max_number_of_messages,
                visibility_timeout_seconds: self.config.visibility_timeout_seconds,
                poll_delay: Arc::clone(&self.poll_delay),
                shutdown: shutdown_rx.clone(),
            };

            receiver_tasks.push(tokio::spawn(receiver.run()));
        }

        // The dispatch loop ends once every receiver has dropped its sender.
        drop(batches_tx);

        let processor = Processor {
            queue_url: self.queue_url,
            handler: self.handler,
        };

        let processor_task = tokio::spawn(processor.run(batches_rx));

        ConsumerHandle {
            poll_delay: self.poll_delay,
            shutdown: shutdown_tx,
            receiver_tasks,
            processor_task,
        }
    }
}

/// Handle to a started consumer.
pub struct ConsumerHandle {
    poll_delay: Arc<AtomicU64>,
    shutdown: watch::Sender<bool>,
    receiver_tasks: Vec<JoinHandle<()>>,
    processor_task: JoinHandle<()>,
}

impl ConsumerHandle {
    /// Updates the pause between polls for every receiver of this consumer.
    ///
    /// Takes effect on each receiver's next polling cycle; running loops
    /// are not restarted.
    pub fn set_poll_delay(&self, delay_milliseconds: u64) {
        self.poll_delay.store(delay_milliseconds, Ordering::Relaxed);
    }

    /// Signals every loop to stop.
    ///
    /// Receivers exit at their next iteration boundary; an in-flight
    /// transport call or an already-spawned batch task is not aborted.
    /// Once the receivers are gone the dispatch loop drains and ends.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Waits for every spawned loop to finish.
    ///
    /// Without a prior [`ConsumerHandle::shutdown`] this pends for the
    /// lifetime of the process.
    pub async fn wait(self) {
        future::join_all(self.receiver_tasks).await;
        let _ = self.processor_task.await;
    }
}
