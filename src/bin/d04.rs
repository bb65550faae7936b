use lib::cli::{self, Mode, OutputEq};
use lib::prelude::*;

use aoc2023::cards;

/// Known answers for the sample card table.
const SAMPLE_EXPECTED: (u64, u64) = (13, 30);

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    let (sample, sample_path) = lib::input!("d04-sample.txt");

    let value = solve(sample).map_err(|error| cli::error_context(sample_path, sample, error))?;

    ensure!(
        value.output_eq(&SAMPLE_EXPECTED),
        "self-check failed: {value:?} (value) != {SAMPLE_EXPECTED:?} (expected)"
    );

    log::info!("{sample_path}: self-check ok");

    let (input, path) = lib::input!("d04.txt");

    match opts.mode {
        Mode::Default => {
            let (o1, o2) = solve(input).map_err(|error| cli::error_context(path, input, error))?;
            println!("Part 1 Answer: {o1}");
            println!("Part 2 Answer: {o2}");
        }
        Mode::Bench => {
            let mut b = cli::Bencher::new();
            b.iter(&opts, Some(SAMPLE_EXPECTED), || solve(input))?;
        }
    }

    Ok(())
}

fn solve(input: IStr) -> Result<(u64, u64)> {
    let cards = cards::parse(input)?;
    Ok((cards::total_points(&cards), cards::total_cards(&cards)))
}
