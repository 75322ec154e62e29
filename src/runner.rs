use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::cliopt::{CliOpt, Encoding};
use crate::error::Result;
use crate::format::{Entry, Formatter, HumanReadableFormatter, JSONFormatter};
use crate::input::{DelimReader, Decoder, HexDecoder, LineReader, TextDecoder};
use crate::output::{LineWriter, Output};

// LineReader -> Decoder -> Formatter -> Writer
//
// stdin
//   -> line (text literal or hex)
//     -> Option<DateRange> (None is the null value)
//       -> Entry(line_no, range)
//         -> formatted line
//           -> stdout

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub failed: usize,
}

pub struct Runner<W> {
    reader: Box<dyn LineReader>,
    decoder: Box<dyn Decoder>,
    output: Output<W>,
}

impl<W: Write> Runner<W> {
    pub fn new(reader: Box<dyn LineReader>, decoder: Box<dyn Decoder>, output: Output<W>) -> Self {
        Self {
            reader,
            decoder,
            output,
        }
    }

    pub fn from_opt<R: BufRead + 'static>(opt: &CliOpt, input: R, output: W) -> Self
    where
        W: 'static,
    {
        let decoder: Box<dyn Decoder> = if opt.decode {
            Box::new(HexDecoder::new())
        } else {
            Box::new(TextDecoder::new())
        };

        let formatter: Box<dyn Formatter> = match opt.encode {
            Encoding::HumanReadable => Box::new(HumanReadableFormatter::new(opt.verbose)),
            Encoding::JSON => Box::new(JSONFormatter::new(opt.verbose)),
        };

        Self::new(
            Box::new(DelimReader::new(input)),
            decoder,
            Output::new(Box::new(LineWriter::new(output)), formatter),
        )
    }

    /// Processes every input line. Lines that fail to decode are logged and
    /// skipped; reader and writer failures abort the run.
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();

        loop {
            let mut buf = Vec::new();
            match self.reader.read(&mut buf) {
                Err(e) => return Err(("reader failed", e).into()),
                Ok(0) => break, // EOF
                Ok(_) => (),
            };

            summary.lines += 1;

            let range = match self.decoder.decode(&buf) {
                Ok(range) => range,
                Err(err) => {
                    summary.failed += 1;
                    warn!(
                        "line {} decoding failed: {} (line: {})",
                        summary.lines,
                        err,
                        String::from_utf8_lossy(&buf)
                    );
                    continue;
                }
            };

            debug!("line {} decoded as {:?}", summary.lines, range);

            self.output.write(&Entry {
                line_no: summary.lines,
                range,
            })?;
        }

        self.output.flush()?;
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }
}
