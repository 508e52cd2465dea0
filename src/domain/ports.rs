use super::event::{Event, PaymentMethod, SubscriberKind};
use super::money::{Amount, Rate};
use crate::error::Result;
use std::rc::Rc;

/// An interchangeable way of paying.
pub trait PaymentBehavior {
    fn method(&self) -> PaymentMethod;
    fn pay(&self, amount: Amount) -> Event;
}

/// Something that wants to hear about exchange rate changes.
pub trait ExchangeSubscriber {
    fn kind(&self) -> SubscriberKind;
    fn update(&self, rate: Rate) -> Event;
}

/// Destination for events produced by payments and rate broadcasts.
pub trait EventSink {
    fn emit(&mut self, event: &Event) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The observed side of the observer pairing.
pub trait Subject {
    fn attach(&mut self, subscriber: SubscriberRef);
    fn detach(&mut self, subscriber: &SubscriberRef);
    fn notify(&self, sink: &mut dyn EventSink) -> Result<()>;
}

pub type PaymentBehaviorRef = Rc<dyn PaymentBehavior>;
pub type SubscriberRef = Rc<dyn ExchangeSubscriber>;
