//! Conway's game of life on a fixed-size torus.
//!
//! A [`Sim`] owns two [`Grid`]s of the same extent `N`. Each call to
//! [`Sim::evolve`] computes the next generation from the current grid into
//! the other one, then swaps which of the two is current. The extent is a
//! const generic, so grids of mismatched sizes do not type check.
//!
//! ```
//! use toruslife::{pos, Grid, Sim};
//!
//! let blinker = Grid::<10>::with_alive([pos!(2, 5), pos!(3, 5), pos!(4, 5)])?;
//! let mut sim = Sim::new(blinker);
//! sim.evolve();
//! assert_eq!(sim.snapshot().actives(), vec![pos!(3, 4), pos!(3, 5), pos!(3, 6)]);
//! # Ok::<(), toruslife::Error>(())
//! ```

pub use utils::{Pos, NEIGHBOR_OFFSETS};
mod utils;

pub use error::{Error, Result};
mod error;

pub use world::{Cell, Grid};
pub mod world;

pub use sim::{next_state, Sim};
mod sim;

pub use history::{Cycle, History};
mod history;

pub mod config;
pub mod demo;
pub mod view;
