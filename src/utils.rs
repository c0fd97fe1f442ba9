use std::fmt;

/// A row-major coordinate inside a grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

/// The eight neighbors of a cell, as `(row, col)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Pos {
    /// Moves by a signed offset on a torus of side `extent`.
    ///
    /// Each axis wraps on its own, so `(0, 0)` moved by `(-1, -1)` lands on
    /// `(extent - 1, extent - 1)`.
    pub fn wrapping_offset(self, drow: isize, dcol: isize, extent: usize) -> Pos {
        pos!(wrap(self.row, drow, extent), wrap(self.col, dcol, extent))
    }
}

fn wrap(n: usize, delta: isize, extent: usize) -> usize {
    let extent = extent as isize;
    (n as isize + delta).rem_euclid(extent) as usize
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0, -1, 10), 9);
    assert_eq!(wrap(9, 1, 10), 0);
    assert_eq!(wrap(5, 1, 10), 6);
    assert_eq!(wrap(0, 1, 1), 0);
    assert_eq!(wrap(0, -1, 1), 0);
}

#[test]
fn test_corner_wraps_to_opposite_corner() {
    assert_eq!(pos!(0, 0).wrapping_offset(-1, -1, 10), pos!(9, 9));
    assert_eq!(pos!(9, 9).wrapping_offset(1, 1, 10), pos!(0, 0));
    assert_eq!(pos!(0, 9).wrapping_offset(-1, 1, 10), pos!(9, 0));
    assert_eq!(pos!(9, 0).wrapping_offset(1, -1, 10), pos!(0, 9));
}

#[test]
fn test_offsets_exclude_center() {
    assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
    let mut sorted = NEIGHBOR_OFFSETS.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 8);
}
