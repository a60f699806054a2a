//! CLI entry point for rove

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rove::{Explorer, Shell, WalkerConfig};
use termcolor::{ColorChoice, StandardStream};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rove")]
#[command(about = "An interactive file explorer for the terminal")]
#[command(version)]
struct Args {
    /// Directory to start in
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Descend at most N levels during recursive search
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Follow directory symlinks during recursive search
    #[arg(long = "follow-links")]
    follow_links: bool,
}

fn main() {
    let args = Args::parse();

    let config = WalkerConfig {
        max_depth: args.level,
        follow_links: args.follow_links,
    };

    let explorer = match Explorer::with_config(&args.path, config) {
        Ok(explorer) => explorer,
        Err(e) => {
            eprintln!("rove: {}", e);
            process::exit(1);
        }
    };

    let choice = if should_use_color(args.color) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let stdout = StandardStream::stdout(choice);

    let stdin = io::stdin();
    let mut shell = Shell::new(explorer, stdin.lock(), stdout);
    if let Err(e) = shell.run() {
        eprintln!("rove: {}", e);
        process::exit(1);
    }
}
