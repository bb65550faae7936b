//! Engine schematic analysis.
//!
//! A schematic is a grid of cells holding part numbers and symbols. A part
//! number counts when any of its digits touches a symbol, including
//! diagonally. A `*` symbol touching exactly two distinct part numbers is a
//! gear.

use core::ops::Range;

use lib::prelude::*;

#[cfg(test)]
mod tests;

/// Handle to a part number stored in a [Schematic].
///
/// Every cell occupied by the same part number carries the same handle, so
/// adjacency scans can tell two equal-valued neighbors apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartId(usize);

/// A single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No part or symbol. Out-of-range lookups also resolve to this.
    #[default]
    Empty,
    /// A symbol cell.
    Symbol,
    /// A digit belonging to the given part number.
    Part(PartId),
}

/// A symbol and where it sits.
#[derive(Debug)]
pub struct Symbol {
    row: usize,
    column: usize,
    maybe_gear: bool,
}

impl Symbol {
    /// The row the symbol is on.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column the symbol is at.
    pub fn column(&self) -> usize {
        self.column
    }
}

/// A part number and the span of cells it occupies.
#[derive(Debug)]
pub struct Part {
    value: u32,
    row: usize,
    columns: Range<usize>,
}

impl Part {
    /// The numeric value of the part number.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The row the part number is on.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The columns the part number occupies.
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }
}

/// A parsed engine schematic.
pub struct Schematic {
    rows: Vec<Vec<Cell>>,
    symbols: Vec<Symbol>,
    parts: Vec<Part>,
}

impl Schematic {
    /// Parse a schematic out of line-oriented input.
    ///
    /// Rows may differ in length. Digits are accumulated numerically as rows
    /// are scanned, so a part number is complete the moment its last digit
    /// lands in the grid.
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut schematic = Self {
            rows: Vec::new(),
            symbols: Vec::new(),
            parts: Vec::new(),
        };

        while !input.is_empty() {
            let line = input.line::<&BStr>()?;
            schematic.push_row(line)?;
        }

        Ok(schematic)
    }

    fn push_row(&mut self, line: &BStr) -> Result<()> {
        let y = self.rows.len();
        let mut row = Vec::with_capacity(line.len());

        for (x, &b) in line.iter().enumerate() {
            let cell = match b {
                b'.' => Cell::Empty,
                b'0'..=b'9' => {
                    let d = u32::from(b - b'0');

                    // A digit immediately after another digit extends the
                    // part ending there; anything else starts a new part.
                    let id = match row.last() {
                        Some(Cell::Part(id @ PartId(n))) => {
                            let part = &mut self.parts[*n];

                            part.value = part
                                .value
                                .checked_mul(10)
                                .and_then(|v| v.checked_add(d))
                                .with_context(|| anyhow!("part number overflow at {y}:{x}"))?;

                            part.columns.end = x + 1;
                            *id
                        }
                        _ => {
                            let id = PartId(self.parts.len());

                            self.parts.push(Part {
                                value: d,
                                row: y,
                                columns: x..x + 1,
                            });

                            id
                        }
                    };

                    Cell::Part(id)
                }
                b => {
                    self.symbols.push(Symbol {
                        row: y,
                        column: x,
                        maybe_gear: b == b'*',
                    });

                    Cell::Symbol
                }
            };

            row.push(cell);
        }

        self.rows.push(row);
        Ok(())
    }

    /// The cell at the given position, [Cell::Empty] when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.rows
            .get(row)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or_default()
    }

    /// All part numbers in the schematic.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// All symbols in the schematic.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Distinct part numbers adjacent to the given symbol.
    ///
    /// A part can touch a symbol through at most the 8 surrounding cells, so
    /// the collection never overflows.
    fn adjacent_parts(&self, symbol: &Symbol) -> ArrayVec<PartId, 8> {
        let mut out = ArrayVec::new();

        for y in symbol.row.saturating_sub(1)..=symbol.row + 1 {
            for x in symbol.column.saturating_sub(1)..=symbol.column + 1 {
                if y == symbol.row && x == symbol.column {
                    continue;
                }

                let Cell::Part(id) = self.cell(y, x) else {
                    continue;
                };

                if !out.contains(&id) {
                    out.push(id);
                }
            }
        }

        out
    }

    /// Sum of all part numbers adjacent to at least one symbol.
    ///
    /// Individual part numbers fit `u32`, their sum does not have to.
    pub fn part_numbers_sum(&self) -> u64 {
        let mut touched = vec![false; self.parts.len()];

        for symbol in &self.symbols {
            for PartId(n) in self.adjacent_parts(symbol) {
                touched[n] = true;
            }
        }

        self.parts
            .iter()
            .zip(&touched)
            .filter(|&(_, touched)| *touched)
            .map(|(part, _)| u64::from(part.value))
            .sum()
    }

    /// Sum of gear ratios, the products over `*` symbols touching exactly
    /// two distinct part numbers.
    ///
    /// The product of two `u32` part numbers needs the full `u64` width.
    pub fn gear_ratios_sum(&self) -> u64 {
        let mut total = 0;

        for symbol in &self.symbols {
            if !symbol.maybe_gear {
                continue;
            }

            if let [PartId(a), PartId(b)] = self.adjacent_parts(symbol)[..] {
                total += u64::from(self.parts[a].value) * u64::from(self.parts[b].value);
            }
        }

        total
    }
}
