mod formatter;
mod humanreadable;
mod json;

pub use formatter::{Entry, Formatter};
pub use humanreadable::HumanReadableFormatter;
pub use json::JSONFormatter;
