use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Per-user FIFO queues of asset commands awaiting the next plugin poll.
///
/// Commands are delivered at most once: `drain_all` removes what it
/// returns in the same step, and there is no acknowledgement or
/// redelivery. Queues are unbounded — if a plugin stops polling while
/// prompts keep arriving, that user's queue grows for the life of the
/// process. Callers get no backpressure signal.
#[derive(Clone, Default)]
pub struct CommandQueues {
    queues: Arc<DashMap<String, Vec<Value>>>,
}

impl CommandQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the end of `user`'s queue, creating the
    /// queue if absent. Always succeeds.
    pub fn enqueue(&self, user: &str, command: Value) {
        self.queues.entry(user.to_string()).or_default().push(command);
    }

    /// Atomically take every queued command for `user`, oldest first.
    ///
    /// The whole map entry is removed in one call under the shard lock,
    /// so a concurrent `enqueue` either lands before the drain and is
    /// returned here, or lands after it and survives to the next drain.
    /// A command is never observable as returned-but-still-present or
    /// removed-but-unreturned. An unknown user drains to empty.
    pub fn drain_all(&self, user: &str) -> Vec<Value> {
        self.queues
            .remove(user)
            .map(|(_, commands)| commands)
            .unwrap_or_default()
    }

    /// Number of commands currently waiting for `user`.
    pub fn pending(&self, user: &str) -> usize {
        self.queues.get(user).map(|queue| queue.len()).unwrap_or(0)
    }
}
