//! Transition engine: computes the next generation of a grid.
//!
//! The input grid is only read; the next state of every cell is computed
//! from current-generation values and written into a fresh buffer.

use rand::RngCore;
use rayon::prelude::*;

use super::{Grid, Parameters, Rule, SimError};

/// Deterministic rules switch to the parallel path at this many cells
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Compute the next grid under `rule`.
///
/// Cells are visited in row-major order and every probabilistic decision
/// consumes exactly one draw from `rng`, so a deterministic random source
/// makes the result fully reproducible.
pub fn step<R: Rule + ?Sized>(
    grid: &Grid<R::Cell>,
    rule: &R,
    params: &Parameters,
    rng: &mut dyn RngCore,
) -> Result<Grid<R::Cell>, SimError> {
    let (rows, cols) = grid.dimensions();
    if !rule.is_stochastic() && rows * cols >= PARALLEL_THRESHOLD {
        return step_parallel(grid, rule, params);
    }

    let mut cells = Grid::<R::Cell>::reserve(rows, cols)?;
    for (row, col, current) in grid.iter_cells() {
        let neighbors = grid.count_neighbors(row, col, |cell| rule.is_counted(cell));
        cells.push(rule.evolve(current, neighbors, params, rng));
    }
    Ok(Grid::from_cells(rows, cols, cells))
}

/// Parallel evolution using rayon, one task per row.
/// Only valid for rules that never draw, which makes it bit-identical to
/// the serial path.
fn step_parallel<R: Rule + ?Sized>(
    grid: &Grid<R::Cell>,
    rule: &R,
    params: &Parameters,
) -> Result<Grid<R::Cell>, SimError> {
    let (rows, cols) = grid.dimensions();
    let mut cells = Grid::<R::Cell>::reserve(rows, cols)?;
    cells.extend_from_slice(grid.cells());

    cells
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out)| {
            let mut rng = rand::rng();
            for (col, slot) in out.iter_mut().enumerate() {
                let neighbors = grid.count_neighbors(row, col, |cell| rule.is_counted(cell));
                *slot = rule.evolve(*slot, neighbors, params, &mut rng);
            }
        });

    Ok(Grid::from_cells(rows, cols, cells))
}

/// Build a randomized root grid with `rule`'s seeding pass, row-major
pub fn seed<R: Rule + ?Sized>(
    rows: usize,
    cols: usize,
    rule: &R,
    params: &Parameters,
    rng: &mut dyn RngCore,
) -> Result<Grid<R::Cell>, SimError> {
    Grid::create(rows, cols, |_, _| rule.seed(params, rng))
}
