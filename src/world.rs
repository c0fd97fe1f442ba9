/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Character used by the text snapshot.
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => ' ',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

pub use grid::Grid;
mod grid;
