use std::io::{self, BufRead};

pub trait LineReader {
    /// Reads one line into `buf`, without the delimiter. Returns the number of
    /// bytes consumed from the underlying reader, 0 at EOF.
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

pub struct DelimReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> DelimReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> LineReader for DelimReader<R> {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let n = self.inner.read_until(self.delim, buf)?;
        if buf.last() == Some(&self.delim) {
            buf.pop();
        }
        if self.delim == b'\n' && buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(n)
    }
}
