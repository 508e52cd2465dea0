use crate::domain::event::Event;
use crate::domain::ports::EventSink;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct EventRecord {
    event: &'static str,
    source: &'static str,
    value: Decimal,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        let value = match event {
            Event::Payment { amount, .. } => amount.value(),
            Event::RateUpdate { rate, .. } => rate.value(),
        };
        Self {
            event: event.kind(),
            source: event.source(),
            value,
        }
    }
}

/// Writes events to a CSV destination.
///
/// Produces an `event,source,value` header followed by one row per event.
/// The header is written together with the first row.
pub struct CsvEventWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvEventWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(destination);
        Self { writer }
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let destination = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok(destination)
    }
}

impl<W: Write> EventSink for CsvEventWriter<W> {
    fn emit(&mut self, event: &Event) -> Result<()> {
        self.writer.serialize(EventRecord::from(event))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{PaymentMethod, SubscriberKind};
    use crate::domain::money::{Amount, Rate};
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_writer_output() {
        let mut writer = CsvEventWriter::new(Vec::new());
        writer
            .emit(&Event::Payment {
                method: PaymentMethod::PayPal,
                amount: Amount::new(dec!(200)),
            })
            .unwrap();
        writer
            .emit(&Event::RateUpdate {
                subscriber: SubscriberKind::StockMarket,
                rate: Rate::new(dec!(1.30)),
            })
            .unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "event,source,value\npayment,paypal,200\nrate_update,stock_market,1.3\n"
        );
    }

    #[test]
    fn test_csv_writer_without_events_is_empty() {
        let writer = CsvEventWriter::new(Vec::new());
        let output = writer.into_inner().unwrap();
        assert!(output.is_empty());
    }
}
