use crate::constants::MAX_CHUNK_SIZE;
use clap::{Args, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.charstrip.toml):
  Searched for in the target file's directory and its parents.

  [charstrip]
  chunk_size = 4096          # Bytes per read/write call
  scratch_dir = \"/var/tmp\"   # Where the unnamed scratch file lives
  verbose = false            # Same as --verbose
  summary = false            # Same as --summary
  progress = false           # Same as --progress

NOTES:
  Every byte of <CHARS> is a member of the deletion set; no escapes or
  ranges are interpreted. The argument after <FILE> is always <CHARS>,
  even when it looks like an option. Use `--` before <FILE> if its name
  matches an option.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
pub struct OutputOptions {
    /// Output the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (config, stage byte counts).
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a table of removed characters and file sizes.
    #[arg(long)]
    pub summary: bool,

    /// Show a byte progress bar while filtering and rewriting.
    #[arg(long)]
    pub progress: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    name = crate::constants::PROGRAM_NAME,
    author,
    version,
    about = "Delete every occurrence of a set of characters from a file, in place",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Existing, writable file to rewrite in place.
    pub file: PathBuf,

    /// Characters to delete; each byte is one member of the set.
    pub chars: OsString,

    /// Show what would be removed without modifying the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Bytes per read/write call (overrides config, at most 64 MiB).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIZE as u64))]
    pub chunk_size: Option<u64>,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

/// Reorders raw arguments so clap never reads `<FILE>` or `<CHARS>` as options.
///
/// Before `<FILE>`, a token is an option only if it names one of [`Cli`]'s
/// flags; it takes the following token along when the flag expects a value.
/// The token right after `<FILE>` is `<CHARS>` verbatim. Tokens after that
/// are options again if they name one. Everything else is positional, and
/// all positionals are emitted after a single `--`.
#[must_use]
pub fn separate_positionals(args: Vec<OsString>) -> Vec<OsString> {
    let mut command = Cli::command();
    command.build();

    let mut options = Vec::new();
    let mut positionals: Vec<OsString> = Vec::new();
    let mut only_positionals = false;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if only_positionals || positionals.len() == 1 {
            positionals.push(arg);
            continue;
        }
        if arg == "--" {
            only_positionals = true;
            continue;
        }
        match option_takes_value(&command, &arg) {
            Some(takes_value) => {
                options.push(arg);
                if takes_value {
                    options.extend(iter.next());
                }
            }
            None => positionals.push(arg),
        }
    }

    options.push(OsString::from("--"));
    options.extend(positionals);
    options
}

/// `Some(takes_value)` if `arg` names a flag of `command`, `None` otherwise.
fn option_takes_value(command: &clap::Command, arg: &OsString) -> Option<bool> {
    let text = arg.to_str()?;
    let (long, short) = if let Some(rest) = text.strip_prefix("--") {
        (rest.split_once('=').map_or(rest, |(name, _)| name), None)
    } else {
        let mut chars = text.strip_prefix('-')?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ("", Some(c)),
            _ => return None,
        }
    };

    command
        .get_arguments()
        .filter(|a| !a.is_positional())
        .find(|a| match short {
            Some(c) => a.get_short() == Some(c),
            None => !long.is_empty() && a.get_long() == Some(long),
        })
        .map(|a| a.get_action().takes_values() && !text.contains('='))
}
