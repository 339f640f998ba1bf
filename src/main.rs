//! CLI entry point for etree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use etree::{
    OutputConfig, PercentMode, Report, ReportOptions, SizeMetric, TreeFormatter, UnitMode,
    ViewConfig, WalkerConfig,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ETREE_LOG=debug`.
const LOG_ENV: &str = "ETREE_LOG";

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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "etree")]
#[command(about = "Recursively calculate relative disk usage, shown as a tree")]
#[command(version)]
struct Args {
    /// Directory to summarize
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print sizes in bytes
    #[arg(short = 'b', long = "bytes")]
    bytes: bool,

    /// Print directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print output as JSON with INDENT spaces per level (negative for compact)
    #[arg(
        short = 'j',
        long = "json",
        value_name = "INDENT",
        allow_hyphen_values = true,
        value_parser = parse_indent
    )]
    json: Option<i32>,

    /// Exclude files or directories with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Descend only N levels deep, 0 for no limit (sizes still include everything below)
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Percentages relative to the root instead of the parent directory
    #[arg(short = 'a', long = "absolute")]
    absolute: bool,

    /// Measure allocated disk space instead of apparent file size
    #[arg(long = "disk-usage")]
    disk_usage: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Parse a JSON indent, tolerating surrounding whitespace ("-j -1" passed as one word).
fn parse_indent(s: &str) -> Result<i32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid indent: {}", s.trim()))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn write_stdout(output: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("etree: error writing output: {}", e);
        process::exit(1);
    }
}

fn main() {
    init_logging();
    let args = Args::parse();

    let options = ReportOptions {
        walker: WalkerConfig {
            exclude: args.exclude.clone(),
            metric: if args.disk_usage {
                SizeMetric::Allocated
            } else {
                SizeMetric::Apparent
            },
        },
        view: ViewConfig {
            // -L 0 means no limit
            max_depth: args.level.filter(|&n| n > 0),
            dirs_only: args.dirs_only,
        },
        percent_mode: if args.absolute {
            PercentMode::Absolute
        } else {
            PercentMode::Relative
        },
        output: OutputConfig {
            // JSON output is never colored
            use_color: args.json.is_none() && should_use_color(args.color),
            units: if args.bytes {
                UnitMode::RawBytes
            } else {
                UnitMode::HumanReadable
            },
        },
        json_indent: args.json,
    };

    if !options.output.use_color {
        let (output, code) = etree::run(&args.path, &options);
        if code != 0 {
            eprint!("{}", output);
            process::exit(code);
        }
        write_stdout(&output);
        return;
    }

    let report = match Report::build(&args.path, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };
    let formatter = TreeFormatter::new(options.output);
    if let Err(e) = formatter.print(&report.display, Some(&report.summary())) {
        eprintln!("etree: error writing output: {}", e);
        process::exit(1);
    }
}
