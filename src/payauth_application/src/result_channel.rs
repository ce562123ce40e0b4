use std::sync::Arc;

use arc_swap::ArcSwapOption;
use payauth_core::{PaymentFlowResult, ResultCallback, ResultCaller};

/// The host's launcher paired with the callback its results come back through.
pub struct ResultChannel {
    pub caller: Arc<dyn ResultCaller>,
    pub callback: ResultCallback,
}

/// Detachable holder of the host's result channel.
///
/// Attach, detach and delivery can race freely; a delivery sees either the old
/// channel, the new one, or none, never a torn pair.
#[derive(Default)]
pub struct ResultChannelSlot {
    channel: ArcSwapOption<ResultChannel>,
}

impl ResultChannelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback) {
        self.channel
            .store(Some(Arc::new(ResultChannel { caller, callback })));
    }

    pub fn detach(&self) {
        self.channel.store(None);
    }

    pub fn is_attached(&self) -> bool {
        self.channel.load().is_some()
    }

    pub fn caller(&self) -> Option<Arc<dyn ResultCaller>> {
        self.channel
            .load_full()
            .map(|channel| Arc::clone(&channel.caller))
    }

    /// Hand `result` to the attached callback. Returns `false` when the result was
    /// dropped because no channel is attached.
    pub fn deliver(&self, result: PaymentFlowResult) -> bool {
        match self.channel.load_full() {
            Some(channel) => {
                (channel.callback)(result);
                true
            }
            None => {
                tracing::debug!(
                    outcome = result.outcome.as_str(),
                    "Result channel invalidated, dropping challenge result"
                );
                false
            }
        }
    }
}
