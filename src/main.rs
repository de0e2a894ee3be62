//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use twig::tree::depth_from_signed;
use twig::{DisplayMode, OutputConfig, RenderConfig, StreamingFormatter, TreeRenderer};

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
#[command(name = "twig")]
#[command(about = "Display a directory tree with file sizes")]
#[command(version)]
struct Args {
    /// The directory to list
    directory: PathBuf,

    /// List all files, including hidden ones
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only", conflicts_with = "files_only")]
    dirs_only: bool,

    /// List files only
    #[arg(short = 'f', long = "files-only")]
    files_only: bool,

    /// Max display depth of the directory tree
    #[arg(
        short = 's',
        long = "max-depth",
        value_name = "N",
        allow_hyphen_values = true,
        value_parser = parse_depth
    )]
    max_depth: Option<usize>,

    /// Print the full path prefix for each file
    #[arg(short = 't', long = "full-path")]
    full_path: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Parse a depth limit, rejecting negative numbers with a readable message.
fn parse_depth(s: &str) -> Result<usize, String> {
    let depth: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    depth_from_signed(depth).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mode = DisplayMode::from_flags(args.dirs_only, args.files_only).unwrap_or_else(|e| {
        eprintln!("twig: {}", e);
        process::exit(2);
    });

    let config = RenderConfig {
        max_depth: args.max_depth,
        include_hidden: args.all,
        mode,
        show_full_path: args.full_path,
    };

    let mut formatter = StreamingFormatter::new(OutputConfig::new(should_use_color(args.color)));

    if let Err(e) = TreeRenderer::new(config).render(&args.directory, &mut formatter) {
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}
