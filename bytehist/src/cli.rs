//! Command-line surface for bytehist.
//!
//! Flags follow the classic `histogram` tool: `-l NUM`, `-s`, `-t`, `-g`,
//! with `-h`/`-?` for usage. Exit codes distinguish argument errors from
//! I/O errors so scripts can tell failures apart.

use std::ffi::OsString;
use std::path::PathBuf;

use bytehistlib::{HistogramOptions, Views, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Exit code when the input file argument is missing.
pub const EXIT_MISSING_INPUT: u8 = 1;

/// Exit code for help requests and invalid options.
pub const EXIT_USAGE: u8 = 2;

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("bytehist")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Show the frequency distribution of byte values in a file")
        .override_usage("bytehist [options] input")
        .disable_help_flag(true)
        .arg(
            Arg::new("input")
                .help("File to analyze")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_name("NUM")
                .value_parser(value_parser!(i64).range(..=MAX_WIDTH as i64))
                .allow_negative_numbers(true)
                .help(format!(
                    "Limit graph line length to NUM, between {MIN_WIDTH} and {MAX_WIDTH} [default: {DEFAULT_WIDTH}]"
                )),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Sort the data descending"),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .action(ArgAction::SetTrue)
                .help("Show table view only"),
        )
        .arg(
            Arg::new("graph")
                .short('g')
                .long("graph")
                .action(ArgAction::SetTrue)
                .help("Show graph view only"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .short_alias('?')
                .long("help")
                .action(ArgAction::Help)
                .help("Print help"),
        )
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineArgs {
    /// Input file
    pub input: PathBuf,
    /// Histogram options built from the flags
    pub options: HistogramOptions,
}

/// Outcome of parsing that ends the run before any file is touched.
#[derive(Debug)]
pub struct EarlyExit {
    /// Text to print
    pub message: String,
    /// Whether the text goes to stdout (version) rather than stderr
    pub to_stdout: bool,
    /// Process exit code
    pub code: u8,
}

impl CommandLineArgs {
    /// Parse arguments, mapping clap's outcomes to the tool's exit codes.
    pub fn parse_from<I, T>(itr: I) -> Result<Self, EarlyExit>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command()
            .try_get_matches_from(itr)
            .map_err(early_exit)?;
        Ok(Self::from_matches(&matches))
    }

    /// Extract arguments from already validated matches.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        // `input` is required, so clap has rejected the run if it is absent.
        let input = matches
            .get_one::<PathBuf>("input")
            .cloned()
            .unwrap_or_default();

        let mut views = Views::both();
        if matches.get_flag("table") {
            views = views.without_graph();
        }
        if matches.get_flag("graph") {
            views = views.without_table();
        }

        let mut options = HistogramOptions::new()
            .sort(matches.get_flag("sort"))
            .views(views);
        if let Some(&length) = matches.get_one::<i64>("length") {
            options = options.width(length);
        }

        Self { input, options }
    }
}

fn early_exit(err: clap::Error) -> EarlyExit {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::DisplayVersion => EarlyExit {
            message,
            to_stdout: true,
            code: 0,
        },
        ErrorKind::MissingRequiredArgument => EarlyExit {
            message,
            to_stdout: false,
            code: EXIT_MISSING_INPUT,
        },
        _ => EarlyExit {
            message,
            to_stdout: false,
            code: EXIT_USAGE,
        },
    }
}
