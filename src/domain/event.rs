use super::money::{Amount, Rate};
use serde::Serialize;
use std::fmt;

/// Identifies which payment behavior produced a payment event.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    PayPal,
    Crypto,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Crypto => "crypto",
        }
    }
}

/// Identifies which kind of subscriber reacted to a rate change.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberKind {
    Bank,
    StockMarket,
    Forex,
}

impl SubscriberKind {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriberKind::Bank => "bank",
            SubscriberKind::StockMarket => "stock_market",
            SubscriberKind::Forex => "forex",
        }
    }
}

/// Observable output of the payment context and the currency exchange.
///
/// `Display` gives the human-readable line written by the text writer;
/// the structured writers use the `Serialize` form.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Payment {
        method: PaymentMethod,
        amount: Amount,
    },
    RateUpdate {
        subscriber: SubscriberKind,
        rate: Rate,
    },
}

impl Event {
    /// Label of whatever produced the event.
    pub fn source(&self) -> &'static str {
        match self {
            Event::Payment { method, .. } => method.label(),
            Event::RateUpdate { subscriber, .. } => subscriber.label(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Payment { .. } => "payment",
            Event::RateUpdate { .. } => "rate_update",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Payment { method, amount } => match method {
                PaymentMethod::Card => write!(f, "Paid {amount} by card."),
                PaymentMethod::PayPal => write!(f, "Paid {amount} via PayPal."),
                PaymentMethod::Crypto => write!(f, "Paid {amount} in cryptocurrency."),
            },
            Event::RateUpdate { subscriber, rate } => match subscriber {
                SubscriberKind::Bank => write!(f, "Bank received rate update: {rate}"),
                SubscriberKind::StockMarket => {
                    write!(f, "Stock market received rate update: {rate}")
                }
                SubscriberKind::Forex => write!(f, "Forex received rate update: {rate}"),
            },
        }
    }
}
