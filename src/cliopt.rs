use std::str::FromStr;

use structopt::StructOpt;

use crate::error::{Error, Result};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "daterange",
    about = "Parse, encode and decode date ranges, one per input line"
)]
pub struct CliOpt {
    /// Input lines are hex-encoded binary date ranges instead of text literals.
    #[structopt(long = "decode", short = "d")]
    pub decode: bool,

    /// Output encoding: `human` or `json`.
    #[structopt(long = "encode", short = "e", default_value = "human")]
    pub encode: Encoding,

    /// Prefix output with line numbers and log debug messages.
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    HumanReadable,
    JSON,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h" | "human" => Ok(Encoding::HumanReadable),
            "j" | "json" => Ok(Encoding::JSON),
            _ => Err(Error::from(format!("unknown output encoding '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let opt = CliOpt::from_iter(&["daterange"]);
        assert!(!opt.decode);
        assert!(!opt.verbose);
        assert_eq!(opt.encode, Encoding::HumanReadable);

        let opt = CliOpt::from_iter(&["daterange", "-d", "-e", "json", "--verbose"]);
        assert!(opt.decode);
        assert!(opt.verbose);
        assert_eq!(opt.encode, Encoding::JSON);

        assert!(CliOpt::from_iter_safe(&["daterange", "-e", "xml"]).is_err());
    }
}
