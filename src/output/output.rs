use std::io::Write;

use super::writer::Writer;
use crate::error::Result;
use crate::format::{Entry, Formatter};

pub struct Output<W> {
    writer: Box<dyn Writer<W>>,
    formatter: Box<dyn Formatter>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: Box<dyn Writer<W>>, formatter: Box<dyn Formatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn write(&mut self, entry: &Entry) -> Result<()> {
        let buf = self.formatter.format(entry)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| ("writer failed", e).into())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
