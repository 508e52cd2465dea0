use crate::domain::event::Event;
use crate::domain::ports::EventSink;
use crate::error::Result;
use std::io::Write;

/// Writes one human-readable line per event.
pub struct TextEventWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextEventWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for TextEventWriter<W> {
    fn emit(&mut self, event: &Event) -> Result<()> {
        writeln!(self.writer, "{event}")?;
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
    use crate::domain::event::SubscriberKind;
    use crate::domain::money::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_text_writer_writes_lines() {
        let mut writer = TextEventWriter::new(Vec::new());
        writer
            .emit(&Event::RateUpdate {
                subscriber: SubscriberKind::Forex,
                rate: Rate::new(dec!(1.4)),
            })
            .unwrap();
        writer.flush().unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "Forex received rate update: 1.4\n");
    }
}
