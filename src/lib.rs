//! Solvers for the engine schematic and scratchcard puzzles.

pub mod cards;
pub mod schematic;
