use std::collections::{HashMap, VecDeque};

use metrohash::MetroBuildHasher;
use tracing::debug;

use crate::Grid;

/// A repeated generation: the grid at `first_seen` came back `period`
/// generations later and will keep doing so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub first_seen: u64,
    pub period: u64,
}

impl Cycle {
    pub fn is_still(&self) -> bool {
        self.period == 1
    }
}

/// Remembers the last `window` generations to spot when a simulation starts
/// repeating itself.
#[derive(Debug, Clone)]
pub struct History<const N: usize> {
    seen: HashMap<Grid<N>, u64, MetroBuildHasher>,
    order: VecDeque<Grid<N>>,
    window: usize,
}

impl<const N: usize> History<N> {
    pub const DEFAULT_WINDOW: usize = 256;

    pub fn new(window: usize) -> Self {
        Self {
            seen: HashMap::default(),
            order: VecDeque::with_capacity(window),
            window: window.max(1),
        }
    }

    /// Records `grid` as the state at `generation`. Returns the cycle it
    /// closes when the same grid was recorded before.
    ///
    /// An entry recorded at a later generation than `generation`, left over
    /// from a simulation whose counter was reset, is restamped instead.
    pub fn record(&mut self, generation: u64, grid: &Grid<N>) -> Option<Cycle> {
        if let Some(first_seen) = self.seen.get_mut(grid) {
            let Some(period) = generation.checked_sub(*first_seen).filter(|&p| p > 0) else {
                debug!(stale = *first_seen, generation, "restamping generation");
                *first_seen = generation;
                return None;
            };
            let cycle = Cycle {
                first_seen: *first_seen,
                period,
            };
            debug!(first_seen = cycle.first_seen, period, "cycle detected");
            return Some(cycle);
        }

        if self.order.len() == self.window {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.seen.insert(grid.clone(), generation);
        self.order.push_back(grid.clone());
        None
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, Sim};

    fn run_until_cycle<const N: usize>(sim: &mut Sim<N>, history: &mut History<N>) -> Cycle {
        loop {
            if let Some(cycle) = history.record(sim.generation(), sim.snapshot()) {
                return cycle;
            }
            sim.evolve();
            assert!(sim.generation() < 1_000, "no cycle found");
        }
    }

    #[test]
    fn test_empty_grid_is_still() {
        let mut sim = Sim::new(Grid::<5>::new());
        let cycle = run_until_cycle(&mut sim, &mut History::default());
        assert_eq!(
            cycle,
            Cycle {
                first_seen: 0,
                period: 1
            }
        );
        assert!(cycle.is_still());
    }

    #[test]
    fn test_blinker_has_period_two() {
        let grid = Grid::<10>::with_alive([pos!(2, 5), pos!(3, 5), pos!(4, 5)]).unwrap();
        let mut sim = Sim::new(grid);
        let cycle = run_until_cycle(&mut sim, &mut History::default());
        assert_eq!(cycle.first_seen, 0);
        assert_eq!(cycle.period, 2);
    }

    #[test]
    fn test_dying_pattern_settles() {
        // a lone pair dies out after one step, then stays empty
        let grid = Grid::<6>::with_alive([pos!(1, 1), pos!(1, 2)]).unwrap();
        let mut sim = Sim::new(grid);
        let cycle = run_until_cycle(&mut sim, &mut History::default());
        assert_eq!(
            cycle,
            Cycle {
                first_seen: 1,
                period: 1
            }
        );
    }

    #[test]
    fn test_counter_reset_restamps_instead_of_underflowing() {
        let grid = Grid::<10>::with_alive([pos!(2, 5), pos!(3, 5), pos!(4, 5)]).unwrap();
        let mut history = History::default();
        assert_eq!(history.record(5, &grid), None);
        assert_eq!(history.record(2, &grid), None);
        assert_eq!(history.record(2, &grid), None);
        assert_eq!(
            history.record(4, &grid),
            Some(Cycle {
                first_seen: 2,
                period: 2
            })
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_window_forgets_old_generations() {
        let grid = Grid::<10>::with_alive([pos!(2, 5), pos!(3, 5), pos!(4, 5)]).unwrap();
        let mut sim = Sim::new(grid);
        let mut history = History::new(1);
        for _ in 0..6 {
            assert_eq!(history.record(sim.generation(), sim.snapshot()), None);
            sim.evolve();
        }
        assert_eq!(history.len(), 1);
    }
}
