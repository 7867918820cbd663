//! # AWS SQS Consumer
//!
//! An asynchronous AWS SQS queue consumer that pools polling tasks behind a
//! single dispatch loop and hands every received message to a user-supplied
//! handler.
//!
//! ## Features
//!
//! - Asynchronous SQS polling with tokio, with a configurable receiver pool
//! - One dispatch task per received batch; messages within a batch are
//!   handled sequentially, batches concurrently
//! - Continue-on-error semantics: a failing poll or a failing handler never
//!   stops the consumer
//! - Live-adjustable poll delay across the whole receiver pool
//! - Cooperative shutdown that drains the dispatch channel
//! - Pluggable [`transport::QueueTransport`] so tests can run against an
//!   in-memory queue
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_sqs_consumer::client::create_sqs_client_from_env;
//! use rs_sqs_consumer::consumer::{ConsumerConfig, SqsConsumer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = create_sqs_client_from_env().await;
//!     let queue_url = "https://sqs.us-east-1.amazonaws.com/123456789012/orders";
//!
//!     let consumer = SqsConsumer::new(
//!         queue_url,
//!         client,
//!         |message| async move {
//!             println!("received: {:?}", message.body());
//!             Ok(())
//!         },
//!         ConsumerConfig::default(),
//!     );
//!
//!     let handle = consumer.start();
//!     handle.wait().await;
//! }
//! ```

pub mod client;
pub mod consumer;
pub mod errors;
pub mod management;
pub mod transport;
