use crate::config::CartConfig;
use crate::domain::action::CartAction;
use crate::domain::state::CartState;
use crate::domain::summary::CartSummary;
use std::sync::Arc;
use tokio::sync::watch;

/// The single owner of a session's cart.
///
/// `CartEngine` applies dispatched actions one at a time and publishes every
/// resulting snapshot to its subscribers. Dispatching needs `&mut self`, so
/// there is exactly one writer, while any number of readers can hold a
/// `watch::Receiver` or an `Arc<CartState>` snapshot.
pub struct CartEngine {
    config: CartConfig,
    state: watch::Sender<Arc<CartState>>,
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CartEngine {
    /// Creates an engine holding an empty cart and the default configuration.
    pub fn new() -> Self {
        Self::with_config(CartConfig::default())
    }

    pub fn with_config(config: CartConfig) -> Self {
        let (state, _) = watch::channel(Arc::new(CartState::new()));
        Self { config, state }
    }

    /// Applies `action` to the current cart and publishes the result.
    ///
    /// Readers observe either the previous snapshot or the new one.
    pub fn dispatch(&mut self, action: CartAction) -> Arc<CartState> {
        let kind = action.kind();
        let id = action.id().to_string();

        let next = Arc::new(self.state.borrow().apply(action));
        self.state.send_replace(Arc::clone(&next));

        tracing::debug!(
            action = kind,
            id = %id,
            items = next.distinct_item_count(),
            total = %next.total(),
            "cart action applied"
        );
        next
    }

    /// Applies each action in order and returns the final snapshot.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Arc<CartState>
    where
        I: IntoIterator<Item = CartAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
        self.state()
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state.borrow())
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::new(&self.state(), &self.config)
    }

    /// Returns a receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.state.subscribe()
    }

    /// Consumes the engine and returns the final cart.
    pub fn into_state(self) -> Arc<CartState> {
        self.state()
    }
}
