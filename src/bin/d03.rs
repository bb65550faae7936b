use lib::cli::{self, Mode, OutputEq};
use lib::prelude::*;

use aoc2023::schematic::Schematic;

/// Known answers for the sample schematic.
const SAMPLE_EXPECTED: (u64, u64) = (4361, 467835);

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    let (sample, sample_path) = lib::input!("d03-sample.txt");

    let value = solve(sample).map_err(|error| cli::error_context(sample_path, sample, error))?;

    ensure!(
        value.output_eq(&SAMPLE_EXPECTED),
        "self-check failed: {value:?} (value) != {SAMPLE_EXPECTED:?} (expected)"
    );

    log::info!("{sample_path}: self-check ok");

    let (input, path) = lib::input!("d03.txt");

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
    let schematic = Schematic::parse(input)?;
    Ok((schematic.part_numbers_sum(), schematic.gear_ratios_sum()))
}
