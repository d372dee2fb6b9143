use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::process;

use exesizecmp::cmd;
use exesizecmp::config::{self, Config, InputPair, DEFAULT_OBJDUMP};
use exesizecmp::error::{ErrorFormatter, EXIT_USAGE};

/// Compare per-section sizes of two object files
///
/// Runs an objdump-compatible tool with `-h --wide` on both files and prints,
/// for every section of the first file whose size changed, the old size, the
/// new size, the delta and the delta as a percentage of the old size.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "exesizecmp [flags] -i=X,Y")]
pub struct Cli {
    /// Comma-separated pair of input files (baseline,candidate)
    #[arg(
        short = 'i',
        long = "inputs",
        value_name = "X,Y",
        value_parser = OsStringValueParser::new().try_map(|value: OsString| config::parse_input_pair(value))
    )]
    inputs: InputPair,

    /// Name of objdump program to invoke
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OBJDUMP)]
    objdump: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.inputs).with_objdump(cli.objdump)
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let args = config::normalize_args(std::env::args_os());
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            process::exit(EXIT_USAGE);
        }
    };

    let config = Config::from(cli);
    log::debug!("comparing {} with {}", config.inputs, config.objdump);

    if let Err(e) = cmd::cmd_compare(&config) {
        eprint!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
