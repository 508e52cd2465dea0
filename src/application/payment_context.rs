use crate::domain::money::Amount;
use crate::domain::ports::{EventSink, PaymentBehaviorRef};
use crate::error::Result;
use tracing::{debug, trace};

/// Delegates payments to whichever `PaymentBehavior` is currently selected.
///
/// A behavior is required at construction, so there is no state in which
/// `pay` has nothing to delegate to.
pub struct PaymentContext {
    behavior: PaymentBehaviorRef,
}

impl PaymentContext {
    pub fn new(behavior: PaymentBehaviorRef) -> Self {
        debug!(method = behavior.method().label(), "payment context created");
        Self { behavior }
    }

    /// Replaces the active behavior unconditionally.
    pub fn set_behavior(&mut self, behavior: PaymentBehaviorRef) {
        debug!(
            from = self.behavior.method().label(),
            to = behavior.method().label(),
            "switching payment behavior"
        );
        self.behavior = behavior;
    }

    pub fn behavior(&self) -> &PaymentBehaviorRef {
        &self.behavior
    }

    /// Pays `amount` with the active behavior and reports the result to `sink`.
    ///
    /// Exactly one event is emitted per call. Only the sink can fail.
    pub fn pay(&self, amount: Amount, sink: &mut dyn EventSink) -> Result<()> {
        let event = self.behavior.pay(amount);
        trace!(%event, "payment made");
        sink.emit(&event)
    }
}
