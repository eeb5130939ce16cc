//! Playfield: the bordered stage grid.
//!
//! The stage is a 12x22 grid of cells stored as a flat row-major array.
//! The outermost ring is a permanent border: always occupied, never active,
//! never cleared. Interior coordinates run 1..=PLAY_WIDTH / 1..=PLAY_HEIGHT.
//! Out-of-bounds queries answer "not occupied" so callers can probe past the
//! border with uniform code.

use crate::host::Renderer;
use crate::types::{Color, Coor, STAGE_HEIGHT, STAGE_SIZE, STAGE_WIDTH};

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Free,
    Occupied,
}

/// One stage cell.
///
/// `active` marks cells that belong to the piece currently in motion. Those
/// cells read as "not occupied" from `is_occupied` so a piece never collides
/// with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub status: CellStatus,
    pub color: Color,
    pub active: bool,
}

impl Cell {
    const FREE: Cell = Cell {
        status: CellStatus::Free,
        color: Color::TRANSPARENT,
        active: false,
    };

    const BORDER: Cell = Cell {
        status: CellStatus::Occupied,
        color: Color::BORDER,
        active: false,
    };

    pub fn is_occupied(&self) -> bool {
        self.status == CellStatus::Occupied
    }
}

/// The bordered stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    cells: [Cell; STAGE_SIZE],
}

impl Playfield {
    /// Build the stage, announcing every cell to the host. Border cells are
    /// created occupied and stay that way for the life of the field.
    pub fn new(r: &mut impl Renderer) -> Self {
        let mut cells = [Cell::FREE; STAGE_SIZE];
        for y in 0..STAGE_HEIGHT {
            for x in 0..STAGE_WIDTH {
                let coor = (x, y);
                let border = Self::border_coor(coor);
                if border {
                    // index is in range for every loop coordinate
                    if let Some(idx) = Self::index(coor) {
                        cells[idx] = Cell::BORDER;
                    }
                }
                r.create_cell(coor, border);
            }
        }
        Self { cells }
    }

    /// Flat index for a coordinate, or None when out of bounds.
    #[inline(always)]
    fn index((x, y): Coor) -> Option<usize> {
        if x < 0 || x >= STAGE_WIDTH || y < 0 || y >= STAGE_HEIGHT {
            return None;
        }
        Some((y as usize) * (STAGE_WIDTH as usize) + (x as usize))
    }

    #[inline(always)]
    fn border_coor((x, y): Coor) -> bool {
        x == 0 || x == STAGE_WIDTH - 1 || y == 0 || y == STAGE_HEIGHT - 1
    }

    /// Whether the coordinate lies on the stage at all (border included).
    pub fn contains(&self, coor: Coor) -> bool {
        Self::index(coor).is_some()
    }

    /// Whether the coordinate is part of the permanent border ring.
    pub fn is_border(&self, coor: Coor) -> bool {
        Self::border_coor(coor)
    }

    /// Cell at `coor`, or None when out of bounds.
    pub fn cell_at(&self, coor: Coor) -> Option<Cell> {
        Self::index(coor).map(|idx| self.cells[idx])
    }

    /// Collision predicate: occupied AND not part of the piece in motion.
    /// Out-of-bounds coordinates report false.
    pub fn is_occupied(&self, coor: Coor) -> bool {
        match self.cell_at(coor) {
            Some(cell) => cell.is_occupied() && !cell.active,
            None => false,
        }
    }

    /// Occupy a cell with a color, mirroring the change to the host.
    pub fn set_occupied(&mut self, r: &mut impl Renderer, coor: Coor, color: Color, active: bool) {
        if let Some(idx) = Self::index(coor) {
            self.cells[idx] = Cell {
                status: CellStatus::Occupied,
                color,
                active,
            };
            r.paint_cell(coor, color, true, active);
        }
    }

    /// Flip the active flag of an occupied cell (lock-time deactivation).
    pub fn set_active(&mut self, r: &mut impl Renderer, coor: Coor, active: bool) {
        if let Some(idx) = Self::index(coor) {
            let cell = &mut self.cells[idx];
            if cell.is_occupied() {
                cell.active = active;
                r.paint_cell(coor, cell.color, true, active);
            }
        }
    }

    /// Reset a cell to free/transparent/inactive. Border cells are immutable
    /// and silently keep their state.
    pub fn clear(&mut self, r: &mut impl Renderer, coor: Coor) {
        if Self::border_coor(coor) {
            return;
        }
        if let Some(idx) = Self::index(coor) {
            self.cells[idx] = Cell::FREE;
            r.clear_cell(coor);
        }
    }

    /// A row is full when every interior column is occupied. The two border
    /// columns do not count; a border-only row is never full.
    pub fn is_row_full(&self, y: i8) -> bool {
        if y <= 0 || y >= STAGE_HEIGHT - 1 {
            return false;
        }
        (1..STAGE_WIDTH - 1).all(|x| {
            self.cell_at((x, y))
                .map(|cell| cell.is_occupied())
                .unwrap_or(false)
        })
    }
}
