use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{pos, Cell, Error, Pos, Result};

/// A square `N`x`N` universe of cells, stored row-major.
///
/// Every `(row, col)` with both components below `N` is addressable. Checked
/// access goes through [`Grid::get`] and [`Grid::set`]; indexing with a
/// [`Pos`] panics on out-of-range coordinates instead of spilling into the
/// next row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    cells: Vec<Cell>,
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self {
            cells: vec![Cell::Dead; N * N],
        }
    }
}

impl<const N: usize> Grid<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        let cells = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self { cells }
    }

    /// Builds a grid where exactly the given positions are alive.
    pub fn with_alive(actives: impl IntoIterator<Item = Pos>) -> Result<Self> {
        let mut grid = Self::new();
        for active in actives {
            grid.set(active, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Whether `pos` lies inside an `N`x`N` grid.
    pub fn contains(pos: Pos) -> bool {
        pos.row < N && pos.col < N
    }

    pub fn get(&self, pos: Pos) -> Result<Cell> {
        Self::check(pos)?;
        Ok(self.cells[Self::index_of(pos)])
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<()> {
        Self::check(pos)?;
        self.cells[Self::index_of(pos)] = cell;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics, and a 0x0 grid has no rows anyway
        self.cells.chunks(N.max(1)).take(N)
    }

    /// Every position of the grid, in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..N).flat_map(|row| (0..N).map(move |col| pos!(row, col)))
    }

    pub fn actives(&self) -> Vec<Pos> {
        Self::positions()
            .filter(|&pos| self[pos].is_alive())
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn check(pos: Pos) -> Result<()> {
        if Self::contains(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { pos, extent: N })
        }
    }

    fn index_of(pos: Pos) -> usize {
        pos.row * N + pos.col
    }
}

impl<const N: usize> From<[[Cell; N]; N]> for Grid<N> {
    fn from(rows: [[Cell; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const N: usize> Index<Pos> for Grid<N> {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        assert!(
            Self::contains(pos),
            "position {pos} is outside of a {N}x{N} grid"
        );
        &self.cells[Self::index_of(pos)]
    }
}

impl<const N: usize> IndexMut<Pos> for Grid<N> {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        assert!(
            Self::contains(pos),
            "position {pos} is outside of a {N}x{N} grid"
        );
        &mut self.cells[Self::index_of(pos)]
    }
}

/// One line per row, `#` for alive and a space for dead cells.
impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Reads the text snapshot back. Anything but `#` is a dead cell, missing
/// trailing cells and rows are dead too.
impl<const N: usize> FromStr for Grid<N> {
    type Err = Error;

    fn from_str(str: &str) -> Result<Self> {
        let mut grid = Self::new();
        let mut pos = pos!(0, 0);
        for c in str.chars() {
            match c {
                '#' => {
                    if !Self::contains(pos) {
                        return Err(Error::PatternTooLarge { pos, extent: N });
                    }
                    grid[pos] = Cell::Alive;
                    pos.col += 1
                }
                '\n' => pos = pos!(pos.row + 1, 0),
                '\r' => (),
                _ => pos.col += 1,
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::<4>::new();
        assert_eq!(grid.population(), 0);
        assert!(grid.actives().is_empty());
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let mut rows = [[Cell::Dead; 3]; 3];
        rows[0][2] = Cell::Alive;
        rows[2][1] = Cell::Alive;
        let grid = Grid::from(rows);
        assert_eq!(grid.actives(), vec![pos!(0, 2), pos!(2, 1)]);
        assert_eq!(grid.get(pos!(0, 2)), Ok(Cell::Alive));
        assert_eq!(grid.get(pos!(2, 0)), Ok(Cell::Dead));
    }

    #[test]
    fn test_out_of_range_access_is_reported() {
        let mut grid = Grid::<3>::new();
        let err = Error::OutOfBounds {
            pos: pos!(0, 3),
            extent: 3,
        };
        // (0, 3) would be (1, 0) in flat storage, it must not alias
        assert_eq!(grid.get(pos!(0, 3)), Err(err.clone()));
        assert_eq!(grid.set(pos!(0, 3), Cell::Alive), Err(err));
        assert_eq!(grid.get(pos!(1, 0)), Ok(Cell::Dead));
        assert!(Grid::<3>::with_alive([pos!(3, 0)]).is_err());
    }

    #[test]
    #[should_panic(expected = "outside of a 3x3 grid")]
    fn test_out_of_range_index_panics() {
        let grid = Grid::<3>::new();
        let _ = grid[pos!(0, 3)];
    }

    #[test]
    fn test_display() {
        let grid = Grid::<3>::with_alive([pos!(0, 0), pos!(1, 1), pos!(1, 2)]).unwrap();
        assert_eq!(grid.to_string(), "#  \n ##\n   \n");
    }

    #[test]
    fn test_parse() {
        let grid: Grid<4> = ".#\n\r\n##.#\n".parse().unwrap();
        assert_eq!(grid.actives(), vec![pos!(0, 1), pos!(2, 0), pos!(2, 1), pos!(2, 3)]);
    }

    #[test]
    fn test_parse_rejects_oversized_pattern() {
        let result: Result<Grid<2>> = "..#".parse();
        assert_eq!(
            result,
            Err(Error::PatternTooLarge {
                pos: pos!(0, 2),
                extent: 2
            })
        );
        let result: Result<Grid<2>> = "\n\n#".parse();
        assert!(result.is_err());
        // dead cells past the edge are harmless
        let result: Result<Grid<2>> = "#....\n\n\n".parse();
        assert!(result.is_ok());
    }

    proptest! {
        #[test]
        fn test_snapshot_parses_back(cells in prop::collection::vec(any::<bool>(), 36)) {
            let mut grid = Grid::<6>::new();
            for (pos, alive) in Grid::<6>::positions().zip(cells) {
                grid[pos] = Cell::from(alive);
            }
            let parsed: Grid<6> = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
