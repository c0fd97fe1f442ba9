//! Error types for grid access and pattern loading.

use thiserror::Error;

use crate::Pos;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("position {pos} is outside of a {extent}x{extent} grid")]
    OutOfBounds { pos: Pos, extent: usize },

    #[error("pattern has a live cell at {pos}, which does not fit in a {extent}x{extent} grid")]
    PatternTooLarge { pos: Pos, extent: usize },
}
