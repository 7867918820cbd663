#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_sdk_sqs::operation::create_queue::CreateQueueOutput;
use aws_sdk_sqs::types::{Message, QueueAttributeName};
use rs_sqs_consumer::errors::SqsConsumerError;
use rs_sqs_consumer::transport::QueueTransport;

/// Builds a message with a body and a matching receipt handle.
pub fn message(body: &str) -> Message {
    Message::builder()
        .message_id(body)
        .body(body)
        .receipt_handle(format!("{body}-handle"))
        .build()
}

/// Parameters of one recorded receive call.
#[derive(Clone, Debug)]
pub struct ReceiveRequest {
    pub queue_url: String,
    pub max_number_of_messages: i32,
    pub visibility_timeout_seconds: Option<i32>,
}

/// Scripted in-memory queue transport.
///
/// Receive outcomes are served from a script, each exactly once across all
/// clones; once the script runs dry every poll returns an empty batch.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    receive_script: Mutex<VecDeque<Result<Vec<Message>, SqsConsumerError>>>,
    receive_calls: AtomicUsize,
    receive_requests: Mutex<Vec<ReceiveRequest>>,
    created_queues: Mutex<Vec<(String, HashMap<QueueAttributeName, String>)>>,
    deleted: Mutex<Vec<(String, String)>>,
    delete_error: Mutex<Option<SqsConsumerError>>,
    queue_url: Mutex<String>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport::default()
    }

    /// A fake whose `create_queue` responds with the given queue URL.
    pub fn with_queue_url(queue_url: &str) -> Self {
        let fake = FakeTransport::default();
        *fake.inner.queue_url.lock().unwrap() = queue_url.to_string();
        fake
    }

    /// Queues one successful receive returning messages with these bodies.
    pub fn push_batch(&self, bodies: &[&str]) {
        let batch = bodies.iter().map(|body| message(body)).collect();
        self.inner
            .receive_script
            .lock()
            .unwrap()
            .push_back(Ok(batch));
    }

    /// Queues one failing receive.
    pub fn push_receive_error(&self, text: &str) {
        self.inner
            .receive_script
            .lock()
            .unwrap()
            .push_back(Err(SqsConsumerError::transport(text)));
    }

    /// Makes every subsequent delete fail with this error.
    pub fn set_delete_error(&self, error: SqsConsumerError) {
        *self.inner.delete_error.lock().unwrap() = Some(error);
    }

    pub fn receive_calls(&self) -> usize {
        self.inner.receive_calls.load(Ordering::SeqCst)
    }

    pub fn receive_requests(&self) -> Vec<ReceiveRequest> {
        self.inner.receive_requests.lock().unwrap().clone()
    }

    pub fn created_queues(&self) -> Vec<(String, HashMap<QueueAttributeName, String>)> {
        self.inner.created_queues.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<(String, String)> {
        self.inner.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueueTransport for FakeTransport {
    async fn receive_messages(
        &self,
        queue_url: &str,
        max_number_of_messages: i32,
        visibility_timeout_seconds: Option<i32>,
    ) -> Result<Vec<Message>, SqsConsumerError> {
        self.inner.receive_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .receive_requests
            .lock()
            .unwrap()
            .push(ReceiveRequest {
                queue_url: queue_url.to_string(),
                max_number_of_messages,
                visibility_timeout_seconds,
            });

        match self.inner.receive_script.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(Vec::new()),
        }
    }

    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), SqsConsumerError> {
        if let Some(error) = self.inner.delete_error.lock().unwrap().clone() {
            return Err(error);
        }

        self.inner
            .deleted
            .lock()
            .unwrap()
            .push((queue_url.to_string(), receipt_handle.to_string()));

        Ok(())
    }

    async fn create_queue(
        &self,
        queue_name: &str,
        attributes: HashMap<QueueAttributeName, String>,
    ) -> Result<CreateQueueOutput, SqsConsumerError> {
        self.inner
            .created_queues
            .lock()
            .unwrap()
            .push((queue_name.to_string(), attributes));

        let queue_url = self.inner.queue_url.lock().unwrap().clone();

        Ok(CreateQueueOutput::builder().queue_url(queue_url).build())
    }
}
