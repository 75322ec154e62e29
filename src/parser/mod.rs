mod date;
mod range;
mod result;

pub use date::parse_datetime;
pub use range::parse_date_range;
