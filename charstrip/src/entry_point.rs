use crate::cli::{separate_positionals, Cli};
use crate::commands::{run_strip, StripOptions};
use crate::config::Config;
use crate::constants::{EXIT_FAILURE, MAX_CHUNK_SIZE, PROGRAM_NAME};
use crate::strip::StripError;
use crate::utils::{normalize_display_path, os_arg_bytes};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;

/// Runs charstrip with the given arguments (program name excluded).
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error only if writing help or version text fails.
pub fn run_with_args(args: Vec<OsString>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run charstrip with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Diagnostics always go to stderr.
///
/// # Errors
///
/// Returns an error only if writing help or version text fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<OsString>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec![OsString::from(PROGRAM_NAME)];
    program_args.extend(separate_positionals(args));
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    // Usage errors: no file has been touched yet
                    eprint!("{e}");
                    return Ok(EXIT_FAILURE);
                }
            }
        }
    };

    let config = Config::load_from_path(&cli_var.file);
    let settings = &config.charstrip;

    let verbose =
        (cli_var.output.verbose || settings.verbose.unwrap_or(false)) && !cli_var.output.json;
    let chunk_size = cli_var.chunk_size.map_or_else(
        || settings.effective_chunk_size(),
        |n| usize::try_from(n).map_or(MAX_CHUNK_SIZE, |n| n.min(MAX_CHUNK_SIZE)),
    );

    let options = StripOptions {
        file: cli_var.file,
        chars: os_arg_bytes(cli_var.chars),
        dry_run: cli_var.dry_run,
        chunk_size,
        scratch_dir: settings.scratch_dir.clone(),
        json: cli_var.output.json,
        summary: cli_var.output.summary || settings.summary.unwrap_or(false),
        verbose,
        progress: cli_var.output.progress || settings.progress.unwrap_or(false),
    };

    if verbose {
        eprintln!("[VERBOSE] {PROGRAM_NAME} v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", normalize_display_path(path)),
            None => eprintln!("[VERBOSE] Config: defaults"),
        }
        eprintln!("[VERBOSE] Target: {}", normalize_display_path(&options.file));
        eprintln!();
    }

    match run_strip(&options, &mut *writer) {
        Ok(_) => Ok(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), diagnostic(&e, &options.file));
            Ok(EXIT_FAILURE)
        }
    }
}

/// One-line failure message; notes a possibly half-rewritten target.
fn diagnostic(error: &anyhow::Error, file: &Path) -> String {
    if error
        .downcast_ref::<StripError>()
        .is_some_and(StripError::target_may_be_modified)
    {
        format!(
            "{error} ('{}' may be partially overwritten)",
            normalize_display_path(file)
        )
    } else {
        error.to_string()
    }
}
