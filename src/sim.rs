use std::fmt;

use tracing::{debug, trace};

use crate::{Cell, Grid, Pos, NEIGHBOR_OFFSETS};

/// The rule of the game, evaluated for one cell.
///
/// Fewer than two or more than three live neighbors kill the cell, exactly
/// three bring it to life and exactly two keep it as it is.
pub fn next_state(cell: Cell, alive_neighbors: usize) -> Cell {
    match (cell, alive_neighbors) {
        (_, 3) => Cell::Alive, // birth or survival
        (cell, 2) => cell,     // stays as it is
        _ => Cell::Dead,       // under or overpopulation
    }
}

/// A game of life on an `N`x`N` torus.
///
/// Two grids are owned: the current generation, which is the only one
/// visible from outside, and the future one, which `evolve` fills from the
/// current one before the two trade roles. Trading roles flips an index, no
/// cell data moves.
#[derive(Debug)]
pub struct Sim<const N: usize> {
    generations: [Grid<N>; 2],
    current: usize,
    generation: u64,
}

impl<const N: usize> Sim<N> {
    /// Starts a simulation whose current generation is `initial`. The future
    /// generation starts out dead.
    pub fn new(initial: Grid<N>) -> Self {
        debug!(
            extent = N,
            population = initial.population(),
            "new simulation"
        );
        Self {
            generations: [initial, Grid::new()],
            current: 0,
            generation: 0,
        }
    }

    /// The current generation.
    pub fn snapshot(&self) -> &Grid<N> {
        &self.generations[self.current]
    }

    /// Number of completed `evolve` calls.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cell_alive(&self, pos: Pos) -> bool {
        self.snapshot()[pos].is_alive()
    }

    /// The eight toroidal neighbors of `pos`.
    ///
    /// Panics when `pos` itself is outside of the grid, only neighbors wrap.
    pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
        assert!(
            Grid::<N>::contains(pos),
            "position {pos} is outside of a {N}x{N} grid"
        );
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(drow, dcol)| pos.wrapping_offset(drow, dcol, N))
    }

    pub fn neighbor_count(&self, pos: Pos) -> usize {
        Self::neighbors(pos)
            .filter(|&neighbor| self.is_cell_alive(neighbor))
            .count()
    }

    /// Advances every cell by one generation.
    ///
    /// All reads hit the current grid and all writes the future one, so no
    /// cell ever sees an already updated neighbor.
    pub fn evolve(&mut self) {
        let future = 1 - self.current;
        let [first, second] = &mut self.generations;
        let (current, next) = if future == 1 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for pos in Grid::<N>::positions() {
            let count = Self::neighbors(pos)
                .filter(|&neighbor| current[neighbor].is_alive())
                .count();
            next[pos] = next_state(current[pos], count);
        }

        self.current = future;
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.snapshot().population(),
            "evolved"
        );
    }

    pub fn evolve_n(&mut self, steps: u64) {
        for _ in 0..steps {
            self.evolve();
        }
    }

    fn future_mut(&mut self) -> &mut Grid<N> {
        &mut self.generations[1 - self.current]
    }
}

impl<const N: usize> From<Grid<N>> for Sim<N> {
    fn from(initial: Grid<N>) -> Self {
        Self::new(initial)
    }
}

/// Copies only the current generation and the generation counter. The
/// future grid is scratch space, the copy gets a dead one since the next
/// `evolve` overwrites it completely.
impl<const N: usize> Clone for Sim<N> {
    fn clone(&self) -> Self {
        Self {
            generations: [self.snapshot().clone(), Grid::new()],
            current: 0,
            generation: self.generation,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let current = self.current;
        self.generations[current].clone_from(source.snapshot());
        *self.future_mut() = Grid::new();
        self.generation = source.generation;
    }
}

impl<const N: usize> fmt::Display for Sim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.snapshot(), f)
    }
}
