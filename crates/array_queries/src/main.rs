use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command, value_parser};
use log::debug;
use treap::XorShift64;

use array_queries::{parse_input, solve};

fn make_cli() -> Command {
    Command::new("array_queries")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Moves subarrays to the front or back of an array and prints the result")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the problem from FILE instead of stdin")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for treap node priorities")
                .value_parser(value_parser!(u64)),
        )
}

fn read_problem_text(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let matches = make_cli().get_matches();
    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or(XorShift64::DEFAULT_SEED);
    let text = read_problem_text(matches.get_one::<PathBuf>("input"))?;

    let problem = parse_input(&text).context("malformed input")?;
    debug!(
        "parsed {} values and {} queries, seed {seed:#x}",
        problem.values.len(),
        problem.queries.len()
    );
    let solution = solve(&problem, seed)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{solution}")?;
    stdout.flush()?;
    Ok(())
}
