use std::io::{self, Write};

pub trait Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    fn into_inner(self: Box<Self>) -> W;
}

pub struct LineWriter<W> {
    inner: W,
    delim: u8,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }
}

impl<W: Write> Writer<W> for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.inner.write_all(&[self.delim])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn into_inner(self: Box<Self>) -> W {
        self.inner
    }
}
