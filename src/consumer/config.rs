/// Configuration for the SQS consumer.
///
/// # Fields
/// - `max_number_of_messages`: messages fetched per poll request.
/// - `visibility_timeout_seconds`: how long received messages stay hidden.
/// - `receivers`: number of concurrent polling loops.
/// - `poll_delay_milliseconds`: pause between polls of a single receiver.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// The maximum number of messages to fetch in a single poll. SQS caps
    /// this at 10.
    pub max_number_of_messages: i32,

    /// The visibility timeout requested for received messages, in seconds.
    pub visibility_timeout_seconds: i32,

    /// The number of concurrent polling loops started by the consumer.
    pub receivers: usize,

    /// The pause between successive polls of a single receiver, in
    /// milliseconds. Adjustable while the consumer runs.
    pub poll_delay_milliseconds: u64,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        ConsumerConfig {
            max_number_of_messages: 10,
            visibility_timeout_seconds: 60,
            receivers: 1,
            poll_delay_milliseconds: 100,
        }
    }
}
