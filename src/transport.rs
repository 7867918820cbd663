use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sqs::operation::create_queue::CreateQueueOutput;
use aws_sdk_sqs::types::{Message, QueueAttributeName};

use crate::errors::SqsConsumerError;

/// Capability trait over the queue service.
///
/// The consumer core and the queue-management helpers only ever talk to the
/// queue through this trait, which keeps the surface narrow (receive,
/// delete, create) and lets tests substitute an in-memory fake for the real
/// SQS client.
///
/// Implementations must be safe for concurrent use: a single transport
/// value is cloned into every receiver of a consumer pool.
#[async_trait]
pub trait QueueTransport: Send + Sync {
    /// Receives up to `max_number_of_messages` from the queue.
    ///
    /// When `visibility_timeout_seconds` is `None` the queue's default
    /// visibility timeout applies. An empty `Vec` means the poll returned
    /// no messages.
    async fn receive_messages(
        &self,
        queue_url: &str,
        max_number_of_messages: i32,
        visibility_timeout_seconds: Option<i32>,
    ) -> Result<Vec<Message>, SqsConsumerError>;

    /// Deletes one message by its receipt handle.
    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), SqsConsumerError>;

    /// Creates a queue with the given attributes and returns the service's
    /// creation result.
    async fn create_queue(
        &self,
        queue_name: &str,
        attributes: HashMap<QueueAttributeName, String>,
    ) -> Result<CreateQueueOutput, SqsConsumerError>;
}

#[async_trait]
impl QueueTransport for aws_sdk_sqs::Client {
    async fn receive_messages(
        &self,
        queue_url: &str,
        max_number_of_messages: i32,
        visibility_timeout_seconds: Option<i32>,
    ) -> Result<Vec<Message>, SqsConsumerError> {
        let mut request = self
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_number_of_messages);

        if let Some(timeout) = visibility_timeout_seconds {
            request = request.visibility_timeout(timeout);
        }

        let output = request
            .send()
            .await
            .map_err(|err| SqsConsumerError::transport(err.to_string()))?;

        Ok(output.messages.unwrap_or_default())
    }

    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), SqsConsumerError> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|err| SqsConsumerError::transport(err.to_string()))?;

        Ok(())
    }

    async fn create_queue(
        &self,
        queue_name: &str,
        attributes: HashMap<QueueAttributeName, String>,
    ) -> Result<CreateQueueOutput, SqsConsumerError> {
        let mut request = self.create_queue().queue_name(queue_name);

        for (name, value) in attributes {
            request = request.attributes(name, value);
        }

        request
            .send()
            .await
            .map_err(|err| SqsConsumerError::transport(err.to_string()))
    }
}
