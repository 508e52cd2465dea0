use crate::domain::event::Event;
use crate::domain::ports::EventSink;
use crate::error::Result;
use std::io::Write;

/// Writes events as newline-delimited JSON objects.
pub struct JsonEventWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEventWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonEventWriter<W> {
    fn emit(&mut self, event: &Event) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
