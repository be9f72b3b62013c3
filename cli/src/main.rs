//! Command-line driver for the lottery simulator
//!
//! ```text
//! lottery-simulator-cli [config.json] [ticks] [n1,n2,...[+bonus]]
//! ```
//!
//! Any argument may be `-` to keep its default: the built-in 6/49 config,
//! 52 ticks (one year of weekly draws) and the ticket `1..=N` without bonus.
//! Prints the final session snapshot as JSON.

use std::process::ExitCode;

use lottery_simulator_core_rs::{LotterySession, SessionConfig, Ticket};

const DEFAULT_TICKS: u64 = 52;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("usage: lottery-simulator-cli [config.json] [ticks] [n1,n2,...[+bonus]]");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    if args.len() > 3 {
        return Err(format!("expected at most 3 arguments, got {}", args.len()));
    }

    let config = match given(args, 0) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path, e))?;
            SessionConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => SessionConfig::default(),
    };

    let ticks = match given(args, 1) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| format!("invalid tick count '{}': {}", raw, e))?,
        None => DEFAULT_TICKS,
    };

    let ticket = match given(args, 2) {
        Some(raw) => parse_ticket(raw)?,
        None => {
            let count = config.draw.numbers_per_draw as u32;
            Ticket::new(1..=count, None).map_err(|e| e.to_string())?
        }
    };

    let mut session = LotterySession::new(config, ticket).map_err(|e| e.to_string())?;

    // A halted session is still worth reporting; the snapshot says so.
    if let Err(e) = session.run(ticks) {
        eprintln!("warning: stopped after {} ticks: {}", session.ticks(), e);
    }

    session
        .snapshot()
        .and_then(|snapshot| snapshot.to_json())
        .map_err(|e| e.to_string())
}

/// Positional argument, treating `-` as absent
fn given(args: &[String], index: usize) -> Option<&str> {
    args.get(index)
        .map(String::as_str)
        .filter(|arg| *arg != "-")
}

/// Parse `1,2,3,4,5,6` or `1,2,3,4,5,6+7`
fn parse_ticket(raw: &str) -> Result<Ticket, String> {
    let (numbers, bonus) = match raw.split_once('+') {
        Some((numbers, bonus)) => (numbers, Some(parse_number(bonus)?)),
        None => (raw, None),
    };

    let numbers = numbers
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<u32>, String>>()?;

    Ticket::new(numbers, bonus).map_err(|e| e.to_string())
}

fn parse_number(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid number '{}': {}", raw.trim(), e))
}
