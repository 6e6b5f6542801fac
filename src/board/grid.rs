//! Board topology.
//!
//! The board is built once from the startup topology dump and never mutated.
//! Cells are stored in index order so `cells[i].index == i`. The adjacency
//! relation is symmetric: if A lists B as a neighbor then B lists A.
//!
//! The game is played on a fixed 37-cell board: the center (index 0) and
//! three rings spiralling outward. `Board::standard()` regenerates that
//! layout from cube coordinates.

use thiserror::Error;

use super::cell::{Cell, Richness, DIRECTION_COUNT};

/// Index of the center cell.
pub const CENTER: usize = 0;

/// The six outermost cells at maximum distance from the center.
pub const CORNERS: [usize; 6] = [19, 22, 25, 28, 31, 34];

/// Number of rings around the center on the standard board.
const RING_COUNT: i32 = 3;

/// Number of cells on the standard board.
pub const STANDARD_CELL_COUNT: usize = 37;

/// Cube-coordinate offsets, one per neighbor direction.
const DIRECTIONS: [(i32, i32, i32); DIRECTION_COUNT] = [
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 1),
];

/// Errors raised when a topology does not describe a consistent board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell at position {position} has index {index}")]
    IndexMismatch { position: usize, index: usize },

    #[error("cell {cell} lists neighbor {neighbor} outside a board of {len} cells")]
    NeighborOutOfRange {
        cell: usize,
        neighbor: usize,
        len: usize,
    },

    #[error("cell {from} lists {to} as a neighbor but {to} does not list {from}")]
    AsymmetricAdjacency { from: usize, to: usize },
}

/// Static board topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board from cells in any order, validating the topology.
    ///
    /// Indices must cover `0..len` exactly once.
    pub fn new(mut cells: Vec<Cell>) -> Result<Self, BoardError> {
        cells.sort_by_key(|c| c.index);
        let len = cells.len();
        for (position, cell) in cells.iter().enumerate() {
            if cell.index != position {
                return Err(BoardError::IndexMismatch {
                    position,
                    index: cell.index,
                });
            }
            for neighbor in cell.neighbor_indices() {
                if neighbor >= len {
                    return Err(BoardError::NeighborOutOfRange {
                        cell: cell.index,
                        neighbor,
                        len,
                    });
                }
            }
        }

        for cell in &cells {
            for neighbor in cell.neighbor_indices() {
                if !cells[neighbor].touches(cell.index) {
                    return Err(BoardError::AsymmetricAdjacency {
                        from: cell.index,
                        to: neighbor,
                    });
                }
            }
        }

        Ok(Board { cells })
    }

    /// Generates the standard 37-cell board.
    ///
    /// Cell 0 is the center; each ring starts `distance` steps in direction 0
    /// and walks the six sides turning by two directions each time, which
    /// puts the ring-3 corners at 19, 22, 25, 28, 31 and 34. Richness is High
    /// on rings 0-1, Medium on ring 2 and Low on ring 3.
    pub fn standard() -> Self {
        let coords = spiral_coords(RING_COUNT);
        let cells = coords
            .iter()
            .enumerate()
            .map(|(index, &(x, y, z))| {
                let ring = (x.abs() + y.abs() + z.abs()) / 2;
                let richness = match ring {
                    0 | 1 => Richness::High,
                    2 => Richness::Medium,
                    _ => Richness::Low,
                };
                let mut neighbors = [None; DIRECTION_COUNT];
                for (slot, &(dx, dy, dz)) in neighbors.iter_mut().zip(DIRECTIONS.iter()) {
                    let target = (x + dx, y + dy, z + dz);
                    *slot = coords.iter().position(|&c| c == target);
                }
                Cell {
                    index,
                    richness,
                    neighbors,
                }
            })
            .collect();
        Board { cells }
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the board has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`, if it exists.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns the six neighbor slots of a cell. Unknown cells have none.
    pub fn neighbors_of(&self, index: usize) -> [Option<usize>; DIRECTION_COUNT] {
        self.cells
            .get(index)
            .map(|c| c.neighbors)
            .unwrap_or([None; DIRECTION_COUNT])
    }

    /// Returns true if `b` appears in the neighbor list of `a`.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.cells.get(a).is_some_and(|c| c.touches(b))
    }
}

/// Returns true if `index` is one of the six outermost corner cells.
pub fn is_corner(index: usize) -> bool {
    CORNERS.contains(&index)
}

/// Lists cube coordinates in spiral index order.
fn spiral_coords(rings: i32) -> Vec<(i32, i32, i32)> {
    let mut coords = vec![(0, 0, 0)];
    for distance in 1..=rings {
        let (sx, sy, sz) = DIRECTIONS[0];
        let mut coord = (sx * distance, sy * distance, sz * distance);
        for orientation in 0..DIRECTION_COUNT {
            let (dx, dy, dz) = DIRECTIONS[(orientation + 2) % DIRECTION_COUNT];
            for _ in 0..distance {
                coords.push(coord);
                coord = (coord.0 + dx, coord.1 + dy, coord.2 + dz);
            }
        }
    }
    coords
}
