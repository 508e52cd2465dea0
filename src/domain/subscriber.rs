use super::event::{Event, SubscriberKind};
use super::money::Rate;
use super::ports::{ExchangeSubscriber, SubscriberRef};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct BankSubscriber;

#[derive(Debug, Default)]
pub struct StockMarketSubscriber;

#[derive(Debug, Default)]
pub struct ForexSubscriber;

impl ExchangeSubscriber for BankSubscriber {
    fn kind(&self) -> SubscriberKind {
        SubscriberKind::Bank
    }

    fn update(&self, rate: Rate) -> Event {
        Event::RateUpdate {
            subscriber: self.kind(),
            rate,
        }
    }
}

impl ExchangeSubscriber for StockMarketSubscriber {
    fn kind(&self) -> SubscriberKind {
        SubscriberKind::StockMarket
    }

    fn update(&self, rate: Rate) -> Event {
        Event::RateUpdate {
            subscriber: self.kind(),
            rate,
        }
    }
}

impl ExchangeSubscriber for ForexSubscriber {
    fn kind(&self) -> SubscriberKind {
        SubscriberKind::Forex
    }

    fn update(&self, rate: Rate) -> Event {
        Event::RateUpdate {
            subscriber: self.kind(),
            rate,
        }
    }
}

impl SubscriberKind {
    /// Creates a new subscriber of this kind.
    ///
    /// Every call yields a distinct subscriber, even for the same kind.
    pub fn subscriber(self) -> SubscriberRef {
        match self {
            SubscriberKind::Bank => Rc::new(BankSubscriber),
            SubscriberKind::StockMarket => Rc::new(StockMarketSubscriber),
            SubscriberKind::Forex => Rc::new(ForexSubscriber),
        }
    }
}
