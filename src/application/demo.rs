use super::currency_exchange::CurrencyExchange;
use super::payment_context::PaymentContext;
use crate::domain::event::{PaymentMethod, SubscriberKind};
use crate::domain::money::{Amount, Rate};
use crate::domain::ports::{EventSink, Subject};
use crate::error::Result;
use rust_decimal_macros::dec;
use tracing::info;

/// Runs the fixed demonstration and writes every event to `sink`.
///
/// Pays 100 by card, 200 via PayPal and 300 in crypto, then attaches a bank,
/// a stock market and a forex subscriber, broadcasts 1.2 and 1.3, detaches
/// the stock market and broadcasts 1.4.
pub fn run(sink: &mut dyn EventSink) -> Result<()> {
    info!("running payment demonstration");
    let card = PaymentMethod::Card.behavior();
    let paypal = PaymentMethod::PayPal.behavior();
    let crypto = PaymentMethod::Crypto.behavior();

    let mut context = PaymentContext::new(card);
    context.pay(Amount::new(dec!(100)), sink)?;

    context.set_behavior(paypal);
    context.pay(Amount::new(dec!(200)), sink)?;

    context.set_behavior(crypto);
    context.pay(Amount::new(dec!(300)), sink)?;

    info!("running exchange rate demonstration");
    let mut exchange = CurrencyExchange::new();
    let bank = SubscriberKind::Bank.subscriber();
    let stock_market = SubscriberKind::StockMarket.subscriber();
    let forex = SubscriberKind::Forex.subscriber();

    exchange.attach(bank);
    exchange.attach(stock_market.clone());
    exchange.attach(forex);

    exchange.set_rate(Rate::new(dec!(1.2)), sink)?;
    exchange.set_rate(Rate::new(dec!(1.3)), sink)?;

    exchange.detach(&stock_market);

    exchange.set_rate(Rate::new(dec!(1.4)), sink)?;

    sink.flush()
}
