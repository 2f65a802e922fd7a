//! Grid module - the 8x8 tile matrix and its slide/merge transform
//!
//! The grid is an 8x8 matrix where each cell is empty (`0`) or holds a
//! power-of-two tile. Uses a flat array for better cache locality and
//! zero-allocation.
//! Coordinates: (row, col), both 0..7; row 0 is the top edge, col 0 the left edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Axis, Direction, MoveResult, Tile, CELL_COUNT, GRID_SIZE};

/// Coordinates of empty cells, (row, col) in row-major order.
pub type EmptyCells = ArrayVec<(usize, usize), CELL_COUNT>;

/// The game grid - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * GRID_SIZE + col)
    cells: [Tile; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from row arrays (row 0 first)
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(values);
        }
        Self { cells }
    }

    /// Copy out as row arrays (row 0 first)
    pub fn rows(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, out) in rows.iter_mut().enumerate() {
            out.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        rows
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if (row, col) is within bounds and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Collect the coordinates of every empty cell (no allocation)
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check if any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Check if any two horizontally or vertically adjacent tiles are equal.
    ///
    /// Only right and down neighbours are compared; adjacency is symmetric so
    /// that covers every pair. Empty cells never count as a pair.
    pub fn has_mergeable_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row * GRID_SIZE + col];
                if value == 0 {
                    continue;
                }
                if col + 1 < GRID_SIZE && self.cells[row * GRID_SIZE + col + 1] == value {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[(row + 1) * GRID_SIZE + col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Slide and merge every line toward the edge named by `direction`.
    ///
    /// Each row (Left/Right) or column (Up/Down) is compacted independently.
    /// Returns whether anything moved and how many merges happened.
    pub fn slide(&mut self, direction: Direction) -> MoveResult {
        let mut result = MoveResult::default();
        for line in 0..GRID_SIZE {
            let slots = Self::line_slots(direction, line);
            let line_result = self.compact_line(&slots);
            result.moved |= line_result.moved;
            result.merges += line_result.merges;
        }
        result
    }

    /// Flat indices of one line, ordered from the destination edge inward.
    ///
    /// Up: rows 0..7 of column `line`. Down: rows 7..0. Left: columns 0..7 of
    /// row `line`. Right: columns 7..0.
    fn line_slots(direction: Direction, line: usize) -> [usize; GRID_SIZE] {
        let mut slots = [0; GRID_SIZE];
        for (k, slot) in slots.iter_mut().enumerate() {
            let along = if direction.is_reverse() {
                GRID_SIZE - 1 - k
            } else {
                k
            };
            *slot = match direction.axis() {
                Axis::Row => line * GRID_SIZE + along,
                Axis::Column => along * GRID_SIZE + line,
            };
        }
        slots
    }

    /// Two-pointer compaction of one line toward `slots[0]`.
    ///
    /// `write` is the next free slot. The tile just behind it may absorb one
    /// equal tile, after which it is closed for the rest of the move.
    fn compact_line(&mut self, slots: &[usize; GRID_SIZE]) -> MoveResult {
        let mut result = MoveResult::default();
        let mut write = 0;
        let mut open = false;

        for read in 0..GRID_SIZE {
            let value = self.cells[slots[read]];
            if value == 0 {
                continue;
            }

            if open && self.cells[slots[write - 1]] == value {
                self.cells[slots[write - 1]] = value << 1;
                self.cells[slots[read]] = 0;
                open = false;
                result.moved = true;
                result.merges += 1;
                continue;
            }

            if read != write {
                self.cells[slots[write]] = value;
                self.cells[slots[read]] = 0;
                result.moved = true;
            }
            write += 1;
            open = true;
        }

        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.cells[row * GRID_SIZE + col] {
                    0 => write!(f, "    .")?,
                    v => write!(f, "{:5}", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
