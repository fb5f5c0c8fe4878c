//! CLI entry point for dirtree

use std::env;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};
use dirtree::{DirtreeError, OutputConfig, OutputMode, RenderRequest, WalkerConfig, validate_root};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory as a tree, to the console, a file, or both")]
#[command(version)]
#[command(override_usage = "dirtree <folder-path> [flags]")]
#[command(disable_help_flag = true)]
#[command(args_override_self = true)]
#[command(after_help = "Examples:\n  \
    dirtree /path/to/folder\n  \
    dirtree /path/to/folder -c -h\n  \
    dirtree /path/to/folder -f -h\n  \
    dirtree /path/to/folder -b -h")]
struct Args {
    /// Directory to display
    path: Option<PathBuf>,

    /// Print to console only (default)
    #[arg(short = 'c')]
    console: bool,

    /// Print to file only (<folder>_tree.txt in the current directory)
    #[arg(short = 'f')]
    file: bool,

    /// Print to both console and file
    #[arg(short = 'b')]
    both: bool,

    /// Show hidden files and directories (starting with '.')
    #[arg(short = 'h')]
    hidden: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// The derived command plus a long-only `--help`, since `-h` means hidden.
fn cli() -> Command {
    Args::command().arg(
        Arg::new("help")
            .long("help")
            .help("Print help")
            .action(ArgAction::Help),
    )
}

/// The output mode flag given last wins; none means console only.
fn get_output_mode(args: &Args, matches: &ArgMatches) -> OutputMode {
    [
        ("console", args.console, OutputMode::ConsoleOnly),
        ("file", args.file, OutputMode::FileOnly),
        ("both", args.both, OutputMode::Both),
    ]
    .into_iter()
    .filter(|(_, given, _)| *given)
    .filter_map(|(id, _, mode)| {
        matches
            .indices_of(id)
            .and_then(|indices| indices.max())
            .map(|index| (index, mode))
    })
    .max_by_key(|(index, _)| *index)
    .map(|(_, mode)| mode)
    .unwrap_or_default()
}

/// Write one line to stdout. A closed stdout is a console failure.
fn print_line(line: impl Display) -> Result<(), DirtreeError> {
    writeln!(io::stdout().lock(), "{}", line).map_err(DirtreeError::Console)
}

fn print_usage() -> Result<(), DirtreeError> {
    print_line(cli().render_help())
}

/// Unknown flags get the short message plus usage; everything else is
/// clap's own report (help, version, bad values).
fn handle_parse_error(err: clap::Error) -> Result<(), DirtreeError> {
    if err.kind() != ErrorKind::UnknownArgument {
        err.exit()
    }

    // The folder path is checked before any flag
    let first = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .filter(|p| !p.to_string_lossy().starts_with('-'));
    if let Some(Err(e)) = first.as_deref().map(validate_root) {
        return print_line(e);
    }

    let flag = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(flag)) => flag.clone(),
        _ => String::from("?"),
    };
    print_line(format!("Invalid flag: {}", flag))?;
    print_usage()
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<(), DirtreeError> {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => return handle_parse_error(err),
    };
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(args.verbose);

    let mode = get_output_mode(&args, &matches);
    let Some(path) = args.path else {
        return print_usage();
    };

    if let Err(e) = validate_root(&path) {
        return print_line(e);
    }

    let request = RenderRequest::new(
        path,
        mode,
        WalkerConfig::with_hidden(args.hidden),
        OutputConfig {
            use_color: should_use_color(args.color),
        },
    );
    log::debug!(
        "rendering {} ({:?}, hidden = {})",
        request.root.display(),
        request.mode,
        request.walker.show_hidden
    );

    let outcome = dirtree::run(&request);

    let failed_file = outcome
        .file
        .as_ref()
        .and_then(|result| result.as_ref().err())
        .and_then(DirtreeError::output_path);
    if let Some(path) = failed_file {
        log::debug!("file output failed at {}", path.display());
    }

    if let Some(message) = outcome.file_message() {
        print_line(message)?;
    }

    match outcome.console {
        Some(Err(e)) => Err(e),
        _ => Ok(()),
    }
}

fn main() {
    if let Err(e) = run() {
        let _ = writeln!(io::stderr(), "dirtree: {}", e);
        process::exit(1);
    }
}
