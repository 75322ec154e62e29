use std::io::{self, BufReader};

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use daterange::cliopt::CliOpt;
use daterange::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().add_filter_allow_str("daterange").build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut runner = Runner::from_opt(&opt, BufReader::new(io::stdin()), io::stdout());
    let summary = runner.run()?;

    if summary.failed > 0 {
        return Err(format!("{} of {} lines failed", summary.failed, summary.lines).into());
    }
    Ok(())
}
