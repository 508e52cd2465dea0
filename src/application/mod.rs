//! Application layer containing the two pattern components.
//!
//! `PaymentContext` swaps payment behaviors at runtime and `CurrencyExchange`
//! broadcasts rate changes to a dynamic list of subscribers. Both report
//! through an `EventSink` supplied by the caller and run fully synchronously
//! on the caller's thread.

pub mod currency_exchange;
pub mod demo;
pub mod payment_context;
