use lib::prelude::*;
use lib::Size;

use crate::schematic::{Cell, Schematic};

const SCHEMATIC: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

#[test]
fn sample_sums() -> Result<()> {
    let schematic = Schematic::parse(input(SCHEMATIC))?;
    assert_eq!(schematic.part_numbers_sum(), 4361);
    assert_eq!(schematic.gear_ratios_sum(), 467835);
    Ok(())
}

#[test]
fn aggregation_is_idempotent() -> Result<()> {
    let schematic = Schematic::parse(input(SCHEMATIC))?;
    assert_eq!(schematic.part_numbers_sum(), schematic.part_numbers_sum());
    assert_eq!(schematic.gear_ratios_sum(), schematic.gear_ratios_sum());
    Ok(())
}

#[test]
fn tokens_round_trip() -> Result<()> {
    let schematic = Schematic::parse(input(SCHEMATIC))?;

    // Every part occupies exactly the digit cells it was read from.
    for (n, part) in schematic.parts().iter().enumerate() {
        let line = SCHEMATIC.lines().nth(part.row()).unwrap();
        let digits = &line[part.columns()];
        assert_eq!(digits.parse::<u32>().unwrap(), part.value());

        for x in part.columns() {
            let Cell::Part(id) = schematic.cell(part.row(), x) else {
                panic!("expected part cell at {}:{x}", part.row());
            };

            assert_eq!(id.0, n);
        }
    }

    Ok(())
}

#[test]
fn touched_union_ignores_scan_order() -> Result<()> {
    let schematic = Schematic::parse(input(SCHEMATIC))?;

    let mut forward = vec![false; schematic.parts().len()];
    let mut backward = vec![false; schematic.parts().len()];

    for symbol in schematic.symbols() {
        for id in schematic.adjacent_parts(symbol) {
            forward[id.0] = true;
        }
    }

    for symbol in schematic.symbols().iter().rev() {
        for id in schematic.adjacent_parts(symbol) {
            backward[id.0] = true;
        }
    }

    assert_eq!(forward, backward);
    Ok(())
}

#[test]
fn corner_symbols_scan_in_bounds() -> Result<()> {
    let schematic = Schematic::parse(input("*12\n...\n34#\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 12 + 34);
    Ok(())
}

#[test]
fn jagged_rows() -> Result<()> {
    // The short middle row leaves the 999 out of any symbol's reach.
    let schematic = Schematic::parse(input("12*\n.\n.....999\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 12);
    Ok(())
}

#[test]
fn untouched_parts_do_not_count() -> Result<()> {
    let schematic = Schematic::parse(input("12.34\n.....\n..*56\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 56);
    Ok(())
}

#[test]
fn non_gear_symbols_have_no_ratio() -> Result<()> {
    let schematic = Schematic::parse(input("12.\n..#\n.34\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 12 + 34);
    assert_eq!(schematic.gear_ratios_sum(), 0);
    Ok(())
}

#[test]
fn gear_needs_exactly_two_parts() -> Result<()> {
    // One neighbor, two neighbors, three neighbors.
    let schematic = Schematic::parse(input("2*.\n...\n...\n"))?;
    assert_eq!(schematic.gear_ratios_sum(), 0);

    let schematic = Schematic::parse(input("2*3\n...\n...\n"))?;
    assert_eq!(schematic.gear_ratios_sum(), 6);

    let schematic = Schematic::parse(input("2*3\n.5.\n...\n"))?;
    assert_eq!(schematic.gear_ratios_sum(), 0);
    Ok(())
}

#[test]
fn equal_values_are_distinct_parts() -> Result<()> {
    // Two separate 20s around the same `*` count twice for the sum and
    // still make a valid gear.
    let schematic = Schematic::parse(input("20.\n.*.\n.20\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 40);
    assert_eq!(schematic.gear_ratios_sum(), 400);
    Ok(())
}

#[test]
fn multi_digit_part_counts_once() -> Result<()> {
    // The symbol touches two digits of the same part.
    let schematic = Schematic::parse(input("467\n.*.\n...\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 467);
    Ok(())
}

#[test]
fn gear_ratio_wider_than_token() -> Result<()> {
    // Two valid six-digit parts flank a gear; their product does not fit
    // the token width.
    let schematic = Schematic::parse(input("999999.999999\n......*......\n"))?;
    assert_eq!(schematic.gear_ratios_sum(), 999_998_000_001);
    Ok(())
}

#[test]
fn part_sum_wider_than_token() -> Result<()> {
    let schematic = Schematic::parse(input("4000000000\n....*.....\n4000000000\n"))?;
    assert_eq!(schematic.part_numbers_sum(), 8_000_000_000);
    Ok(())
}

#[test]
fn out_of_range_cells_are_empty() -> Result<()> {
    let schematic = Schematic::parse(input("1.\n"))?;
    assert_eq!(schematic.cell(0, 100), Cell::Empty);
    assert_eq!(schematic.cell(100, 0), Cell::Empty);
    Ok(())
}
