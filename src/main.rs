//! Photosynth -- a decision engine for the hex-grid tree-growth game.
//!
//! This binary reads the board topology and then one snapshot per turn from
//! stdin, and writes exactly one action line per turn to stdout. It runs
//! until the input ends.
//!
//! Usage:
//!   photosynth [OPTIONS] < game-input
//!
//! Options:
//!   --config FILE    JSON configuration file
//!   --strict         Reject unreadable legal-action lines instead of treating them as WAIT
//!   --trace          Write one JSON trace record per turn to stderr
//!   --message TEXT   Text appended to every action line
//!   --help           Print this help

use std::env;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use photosynth::config::{load_config, EngineConfig};
use photosynth::engine::Engine;
use photosynth::protocol::{InputError, InputReader, ParseMode};

fn main() {
    let config = parse_args();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = InputReader::new(stdin.lock());
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run(&mut input, &mut out, config) {
        eprintln!("fatal: {}", e);
        process::exit(1);
    }
}

/// Reads the board, then plays turns until the input is exhausted.
fn run<R, W>(input: &mut InputReader<R>, out: &mut W, config: EngineConfig) -> Result<(), InputError>
where
    R: io::BufRead,
    W: io::Write,
{
    let board = input.read_board()?;
    let mode = config.parse_mode;
    let mut engine = Engine::new(board, config);

    while let Some(state) = input.read_turn(mode)? {
        engine.play_turn(&state, out)?;
    }
    Ok(())
}

/// Builds the configuration from the command line, exiting on bad usage.
fn parse_args() -> EngineConfig {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<String> = None;
    let mut strict = false;
    let mut trace = false;
    let mut message: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(required_value(&args, i, "--config"));
            }
            "--strict" => {
                strict = true;
            }
            "--trace" => {
                trace = true;
            }
            "--message" => {
                i += 1;
                message = Some(required_value(&args, i, "--message"));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(2);
            }
        },
        None => EngineConfig::default(),
    };

    if strict {
        config.parse_mode = ParseMode::Strict;
    }
    if trace {
        config.trace = true;
    }
    if message.is_some() {
        config.message = message;
    }
    config
}

/// Returns the value following a flag, exiting if it is missing.
fn required_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("{} requires a value", flag);
            print_usage();
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: photosynth [OPTIONS] < game-input");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    JSON configuration file");
    eprintln!("  --strict         Reject unreadable legal-action lines");
    eprintln!("  --trace          Write one JSON trace record per turn to stderr");
    eprintln!("  --message TEXT   Text appended to every action line");
    eprintln!("  --help           Print this help");
}
