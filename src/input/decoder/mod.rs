mod decoder;
mod hex;
mod text;

pub use decoder::Decoder;
pub use hex::HexDecoder;
pub use text::TextDecoder;
