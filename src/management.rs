//! Stateless queue-management helpers.
//!
//! Thin passthroughs over a [`QueueTransport`]: no retries, no validation,
//! errors are returned to the caller unchanged.

use std::collections::HashMap;

use aws_sdk_sqs::operation::create_queue::CreateQueueOutput;
use aws_sdk_sqs::types::{Message, QueueAttributeName};

use crate::errors::SqsConsumerError;
use crate::transport::QueueTransport;

/// Creates a queue with default attributes (no delivery delay, 60 second
/// visibility timeout) and returns the transport's creation result.
pub async fn create_queue<T>(
    transport: &T,
    queue_name: &str,
) -> Result<CreateQueueOutput, SqsConsumerError>
where
    T: QueueTransport,
{
    let attributes = HashMap::from([
        (QueueAttributeName::DelaySeconds, "0".to_string()),
        (QueueAttributeName::VisibilityTimeout, "60".to_string()),
    ]);

    transport.create_queue(queue_name, attributes).await
}

/// Fetches a batch of messages from the queue, using the queue's default
/// visibility timeout.
///
/// `max_messages` is accepted for interface compatibility but not forwarded:
/// every request is currently issued with a cap of one message per call.
pub async fn get_messages<T>(
    transport: &T,
    queue_url: &str,
    _max_messages: i32,
) -> Result<Vec<Message>, SqsConsumerError>
where
    T: QueueTransport,
{
    transport.receive_messages(queue_url, 1, None).await
}

/// Deletes a message by its receipt handle.
pub async fn delete_message<T>(
    transport: &T,
    queue_url: &str,
    receipt_handle: &str,
) -> Result<(), SqsConsumerError>
where
    T: QueueTransport,
{
    transport.delete_message(queue_url, receipt_handle).await
}
