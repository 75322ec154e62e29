mod bound;
mod precision;
mod range;
mod timestamp;

pub use bound::*;
pub use precision::*;
pub use range::*;
pub use timestamp::*;
