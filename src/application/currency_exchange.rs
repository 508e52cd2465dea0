use crate::domain::money::Rate;
use crate::domain::ports::{EventSink, Subject, SubscriberRef};
use crate::error::Result;
use std::rc::Rc;
use tracing::{debug, trace};

/// Publishes exchange rate changes to its subscribers.
///
/// Subscribers are notified in attachment order. Attaching the same handle
/// twice is allowed and the handle is then notified twice per broadcast;
/// `detach` removes every occurrence. Identity is the `Rc` allocation, so two
/// subscribers of the same kind are never confused with each other.
///
/// `notify` only borrows the exchange and subscribers receive nothing but the
/// rate, so the subscriber list cannot change while a broadcast is running.
#[derive(Default)]
pub struct CurrencyExchange {
    subscribers: Vec<SubscriberRef>,
    rate: Option<Rate>,
}

impl CurrencyExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `rate` and broadcasts it to every attached subscriber.
    pub fn set_rate(&mut self, rate: Rate, sink: &mut dyn EventSink) -> Result<()> {
        debug!(%rate, subscribers = self.subscribers.len(), "exchange rate changed");
        self.rate = Some(rate);
        self.notify(sink)
    }

    /// The last rate set, if any.
    pub fn rate(&self) -> Option<Rate> {
        self.rate
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn is_attached(&self, subscriber: &SubscriberRef) -> bool {
        self.subscribers.iter().any(|s| Rc::ptr_eq(s, subscriber))
    }
}

impl Subject for CurrencyExchange {
    fn attach(&mut self, subscriber: SubscriberRef) {
        debug!(kind = subscriber.kind().label(), "subscriber attached");
        self.subscribers.push(subscriber);
    }

    fn detach(&mut self, subscriber: &SubscriberRef) {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| !Rc::ptr_eq(s, subscriber));
        debug!(
            kind = subscriber.kind().label(),
            removed = before - self.subscribers.len(),
            "subscriber detached"
        );
    }

    /// Sends the current rate to every subscriber.
    ///
    /// Does nothing while no rate has been set. Stops at the first sink error.
    fn notify(&self, sink: &mut dyn EventSink) -> Result<()> {
        let Some(rate) = self.rate else {
            debug!("notify skipped, no rate set yet");
            return Ok(());
        };

        for subscriber in &self.subscribers {
            let event = subscriber.update(rate);
            trace!(%event, "subscriber notified");
            sink.emit(&event)?;
        }
        Ok(())
    }
}
