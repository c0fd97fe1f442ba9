//! The built-in showcase: a blinker on a 10x10 torus, passed around between
//! copies of the simulation.

use std::io::{self, Write};

use tracing::info;

use crate::{pos, view, Cell, Grid, Sim};

pub const DEMO_EXTENT: usize = 10;

pub fn blinker() -> Grid<DEMO_EXTENT> {
    let mut grid = Grid::new();
    for pos in [pos!(2, 5), pos!(3, 5), pos!(4, 5)] {
        grid[pos] = Cell::Alive;
    }
    grid
}

/// Prints three generations back to back:
/// - `a` after one step,
/// - `b`, a copy of `a`, after one more step,
/// - `c`, a copy of `b` that then gets `a` assigned to it.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let mut a = Sim::new(blinker());
    a.evolve();
    view::print_generation(out, a.snapshot())?;

    let mut b = a.clone();
    b.evolve();
    view::print_generation(out, b.snapshot())?;

    let mut c = b.clone();
    c.clone_from(&a);
    view::print_generation(out, c.snapshot())?;

    info!(generation = c.generation(), "demo done");
    Ok(())
}
