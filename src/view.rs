use std::io::{self, Write};

use crate::Grid;

/// Writes the text snapshot of `grid`, one line per row.
pub fn print_generation<const N: usize>(out: &mut impl Write, grid: &Grid<N>) -> io::Result<()> {
    write!(out, "{grid}")?;
    out.flush()
}

/// Redraws the whole terminal with `grid` at the top left and a status line
/// below it.
pub fn draw_frame<const N: usize>(
    out: &mut impl Write,
    grid: &Grid<N>,
    generation: u64,
) -> io::Result<()> {
    let clear = termion::clear::All;
    write!(out, "{clear}")?;
    for (index, row) in grid.rows().enumerate() {
        let goto = termion::cursor::Goto(1, line_number(index));
        let line: String = row.iter().map(|cell| cell.glyph()).collect();
        write!(out, "{goto}{line}")?;
    }
    let goto = termion::cursor::Goto(1, line_number(N));
    let population = grid.population();
    writeln!(out, "{goto}generation {generation}, population {population}")?;
    out.flush()
}

fn line_number(index: usize) -> u16 {
    u16::try_from(index + 1).unwrap_or(u16::MAX)
}
