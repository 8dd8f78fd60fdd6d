use std::path::Path;
use std::{fmt::Display, fmt::Formatter};

use clap::{Parser, Subcommand};

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Build a code table, Encode with one, Decode with one
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Build,
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman code tables: build them, encode with them, decode with them",
    long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Sets verbosity. -v is info, -vv debug, -vvv trace
    #[clap(short = 'v', long = "verbose", parse(from_occurrences), global = true)]
    verbose: u8,

    /// Only report errors
    #[clap(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force", global = true)]
    force: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count byte frequencies of a file and save its code table
    Build {
        /// File to count
        input: String,
        /// Where to save the code table (default <input name>.code)
        #[clap(short = 't', long = "table")]
        table: Option<String>,
    },
    /// Encode a file as 0/1 text using a saved code table
    Encode {
        /// File to encode
        input: String,
        /// Code table to use (default <input name>.code)
        #[clap(short = 't', long = "table")]
        table: Option<String>,
        /// Where to write the tokens (default <input name>.short)
        #[clap(short = 'o', long = "output")]
        output: Option<String>,
        /// Break the token text into lines of this many tokens (0 for one line)
        #[clap(short = 'w', long = "width", default_value_t = 0)]
        width: usize,
    },
    /// Decode 0/1 text back into bytes using a saved code table
    Decode {
        /// Token file to decode
        input: String,
        /// Code table to use (default <input name>.code)
        #[clap(short = 't', long = "table")]
        table: Option<String>,
        /// Where to write the bytes (default <input name>.new)
        #[clap(short = 'o', long = "output")]
        output: Option<String>,
        /// Stop after this many symbols. Required for single-symbol tables
        #[clap(short = 'n', long = "count")]
        count: Option<usize>,
    },
}

/// All settings that control one run of the program.
#[derive(Debug)]
pub struct HcOpts {
    /// Build / Encode / Decode
    pub op_mode: Mode,
    /// File to read for input
    pub input: String,
    /// Code table file, written by Build and read by Encode/Decode
    pub table: String,
    /// Output file for Encode/Decode (same as the table for Build)
    pub output: String,
    /// Number of symbols to decode, if known
    pub count: Option<usize>,
    /// Tokens per line when encoding, 0 for no line breaks
    pub line_width: usize,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

/// Same file name with another extension, e.g. hamlet.txt -> hamlet.code
fn sibling(input: &str, ext: &str) -> String {
    Path::new(input).with_extension(ext).to_string_lossy().into_owned()
}

impl From<Args> for HcOpts {
    fn from(args: Args) -> Self {
        let verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        let force_overwrite = args.force;
        match args.command {
            Command::Build { input, table } => {
                let table = table.unwrap_or_else(|| sibling(&input, "code"));
                HcOpts {
                    op_mode: Mode::Build,
                    output: table.clone(),
                    table,
                    input,
                    count: None,
                    line_width: 0,
                    force_overwrite,
                    verbose,
                }
            }
            Command::Encode {
                input,
                table,
                output,
                width,
            } => HcOpts {
                op_mode: Mode::Encode,
                table: table.unwrap_or_else(|| sibling(&input, "code")),
                output: output.unwrap_or_else(|| sibling(&input, "short")),
                input,
                count: None,
                line_width: width,
                force_overwrite,
                verbose,
            },
            Command::Decode {
                input,
                table,
                output,
                count,
            } => HcOpts {
                op_mode: Mode::Decode,
                table: table.unwrap_or_else(|| sibling(&input, "code")),
                output: output.unwrap_or_else(|| sibling(&input, "new")),
                input,
                count,
                line_width: 0,
                force_overwrite,
                verbose,
            },
        }
    }
}

/// Read the command line into HcOpts and set the log level.
pub fn hcopts_init() -> HcOpts {
    let opts = HcOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());
    opts
}
