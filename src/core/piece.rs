//! Piece: tetromino shapes and the transforms that move them.
//!
//! A `Tetromino` carries its absolute cell set once spawned. Movement and
//! rotation follow the destroy-then-respawn model: compute the candidate
//! cells, check them against the collision predicate, and only then clear
//! the old cells and paint the new ones. A failed check mutates nothing.

use crate::core::collision::can_place;
use crate::core::playfield::Playfield;
use crate::host::Renderer;
use crate::types::{Color, Coor, PieceKind, RotationDir};

/// Canonical shape: four relative offsets (all non-negative) plus the
/// piece's color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub offsets: [Coor; 4],
    pub color: Color,
}

/// Shape table for the seven kinds.
pub fn shape_def(kind: PieceKind) -> ShapeDef {
    match kind {
        PieceKind::I => ShapeDef {
            offsets: [(0, 0), (0, 1), (0, 2), (0, 3)],
            color: Color::CYAN,
        },
        PieceKind::J => ShapeDef {
            offsets: [(0, 0), (0, 1), (1, 1), (2, 1)],
            color: Color::BLUE,
        },
        PieceKind::L => ShapeDef {
            offsets: [(2, 0), (0, 1), (1, 1), (2, 1)],
            color: Color::ORANGE,
        },
        PieceKind::O => ShapeDef {
            offsets: [(0, 0), (1, 0), (0, 1), (1, 1)],
            color: Color::YELLOW,
        },
        PieceKind::S => ShapeDef {
            offsets: [(1, 0), (2, 0), (0, 1), (1, 1)],
            color: Color::GREEN,
        },
        PieceKind::T => ShapeDef {
            offsets: [(1, 0), (0, 1), (1, 1), (2, 1)],
            color: Color::PURPLE,
        },
        PieceKind::Z => ShapeDef {
            offsets: [(0, 0), (1, 0), (1, 1), (1, 2)],
            color: Color::RED,
        },
    }
}

/// Pure translation of a cell set.
pub fn translated(cells: &[Coor; 4], (dx, dy): Coor) -> [Coor; 4] {
    cells.map(|(x, y)| (x + dx, y + dy))
}

/// Pure quarter turn about the integer-floored centroid of the cell set.
pub fn rotated(cells: &[Coor; 4], dir: RotationDir) -> [Coor; 4] {
    let (sum_x, sum_y) = cells
        .iter()
        .fold((0i16, 0i16), |(ax, ay), &(x, y)| (ax + x as i16, ay + y as i16));
    let px = (sum_x / 4) as i8;
    let py = (sum_y / 4) as i8;
    let sign = dir.sign();
    cells.map(|(x, y)| (px - (y - py) * sign, py + (x - px) * sign))
}

/// The one piece in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    cells: [Coor; 4],
    color: Color,
    spawned: bool,
}

impl Tetromino {
    /// A piece not yet on the stage; `cells` hold the raw shape offsets
    /// until `spawn` anchors them.
    pub fn new(kind: PieceKind) -> Self {
        let def = shape_def(kind);
        Self {
            kind,
            cells: def.offsets,
            color: def.color,
            spawned: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Absolute cells (meaningful once spawned).
    pub fn cells(&self) -> &[Coor; 4] {
        &self.cells
    }

    /// Place the piece with its shape anchored at `origin`.
    ///
    /// All-or-nothing: if any target cell is blocked, nothing is painted and
    /// the caller treats the failure as the game-over condition.
    pub fn spawn(&mut self, field: &mut Playfield, r: &mut impl Renderer, origin: Coor) -> bool {
        let target = translated(&shape_def(self.kind).offsets, origin);
        if !can_place(field, &target, &[]) {
            return false;
        }
        self.adopt(field, r, target);
        true
    }

    /// Remove the piece's cells from the stage. Idempotent; a no-op on an
    /// unspawned piece.
    pub fn destroy(&mut self, field: &mut Playfield, r: &mut impl Renderer) {
        if !self.spawned {
            return;
        }
        for &coor in &self.cells {
            field.clear(r, coor);
        }
        self.spawned = false;
    }

    /// Legality probe for a translation; no mutation.
    pub fn try_shift(&self, field: &Playfield, offset: Coor) -> bool {
        self.spawned && can_place(field, &translated(&self.cells, offset), &self.cells)
    }

    /// Legality probe for a quarter turn; no mutation. The O piece rotates
    /// onto itself and is always legal.
    pub fn try_rotate(&self, field: &Playfield, dir: RotationDir) -> bool {
        if !self.spawned {
            return false;
        }
        if self.kind == PieceKind::O {
            return true;
        }
        can_place(field, &rotated(&self.cells, dir), &self.cells)
    }

    /// Translate by one step if legal. Returns false and leaves the piece
    /// untouched otherwise.
    pub fn shift(&mut self, field: &mut Playfield, r: &mut impl Renderer, offset: Coor) -> bool {
        if !self.try_shift(field, offset) {
            return false;
        }
        let target = translated(&self.cells, offset);
        self.destroy(field, r);
        self.adopt(field, r, target);
        true
    }

    /// Quarter turn about the shape centroid if legal.
    pub fn rotate(&mut self, field: &mut Playfield, r: &mut impl Renderer, dir: RotationDir) -> bool {
        if !self.try_rotate(field, dir) {
            return false;
        }
        if self.kind == PieceKind::O {
            // Rotation-invariant; occupancy is already identical.
            return true;
        }
        let target = rotated(&self.cells, dir);
        self.destroy(field, r);
        self.adopt(field, r, target);
        true
    }

    /// Settle the piece: its cells stop being active and become permanent
    /// board state.
    pub fn lock(self, field: &mut Playfield, r: &mut impl Renderer) {
        for &coor in &self.cells {
            field.set_active(r, coor, false);
        }
    }

    fn adopt(&mut self, field: &mut Playfield, r: &mut impl Renderer, target: [Coor; 4]) {
        for &coor in &target {
            field.set_occupied(r, coor, self.color, true);
        }
        self.cells = target;
        self.spawned = true;
    }
}
