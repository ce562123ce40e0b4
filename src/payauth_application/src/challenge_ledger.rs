use dashmap::DashMap;
use payauth_core::{CorrelationToken, PaymentFlowResult};
use tokio::sync::oneshot;

/// In-flight challenges of one registry, keyed by correlation token.
///
/// An authenticator opens an entry before launching and awaits its receiver; the
/// returning surface resolves the entry by token.
#[derive(Debug, Default)]
pub struct ChallengeLedger {
    pending: DashMap<CorrelationToken, oneshot::Sender<PaymentFlowResult>>,
}

impl ChallengeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, token: CorrelationToken) -> oneshot::Receiver<PaymentFlowResult> {
        let (sender, receiver) = oneshot::channel();
        if self.pending.insert(token.clone(), sender).is_some() {
            tracing::warn!(%token, "Replaced a pending challenge with the same correlation token");
        }
        receiver
    }

    /// Wake the authenticator waiting on `token`.
    ///
    /// Returns `false` if nothing is waiting, either because the token is unknown or
    /// because the waiting side has gone away.
    pub fn resolve(&self, token: &CorrelationToken, result: PaymentFlowResult) -> bool {
        match self.pending.remove(token) {
            Some((_, sender)) => sender.send(result).is_ok(),
            None => false,
        }
    }

    /// Forget a pending challenge. Its waiter observes a closed channel.
    pub fn abandon(&self, token: &CorrelationToken) -> bool {
        self.pending.remove(token).is_some()
    }

    pub fn is_pending(&self, token: &CorrelationToken) -> bool {
        self.pending.contains_key(token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
