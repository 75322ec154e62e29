pub mod decoder;
mod line;

pub use decoder::{Decoder, HexDecoder, TextDecoder};
pub use line::{DelimReader, LineReader};
