//! Core types shared across the crate.
//! This module contains pure data types with no external dependencies.

/// Interior play area, in cells.
pub const PLAY_WIDTH: i8 = 10;
pub const PLAY_HEIGHT: i8 = 20;

/// Full stage including the 1-cell permanent border on all sides.
pub const STAGE_WIDTH: i8 = PLAY_WIDTH + 2;
pub const STAGE_HEIGHT: i8 = PLAY_HEIGHT + 2;

/// Total number of cells on the stage.
pub const STAGE_SIZE: usize = (STAGE_WIDTH as usize) * (STAGE_HEIGHT as usize);

/// Where new pieces enter the stage (top interior, roughly centered).
pub const SPAWN_ORIGIN: Coor = (4, 1);

/// Gravity timing (milliseconds).
pub const GRAVITY_START_MS: u32 = 500;
pub const GRAVITY_FLOOR_MS: u32 = 80;

/// Line clear scoring (classic rules), indexed by lines cleared per lock.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Cumulative lines needed per level step (level-up at `level * LINES_PER_LEVEL`).
pub const LINES_PER_LEVEL: u32 = 10;

/// Stage coordinate (x, y): x grows rightward, y grows downward.
pub type Coor = (i8, i8);

/// Unit offsets for piece movement.
pub const LEFT: Coor = (-1, 0);
pub const RIGHT: Coor = (1, 0);
pub const DOWN: Coor = (0, 1);

/// Opaque color token. The core never interprets it; hosts map it to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0);
    pub const CYAN: Color = Color(1);
    pub const BLUE: Color = Color(2);
    pub const ORANGE: Color = Color(3);
    pub const YELLOW: Color = Color(4);
    pub const GREEN: Color = Color(5);
    pub const PURPLE: Color = Color(6);
    pub const RED: Color = Color(7);
    pub const BORDER: Color = Color(8);
}

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in a fixed order used by the uniform draw.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Rotation sense for a quarter turn.
///
/// With y growing downward, the positive pivot transform maps "right of
/// pivot" to "below pivot", which reads as clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Cw,
    Ccw,
}

impl RotationDir {
    pub fn sign(self) -> i8 {
        match self {
            RotationDir::Cw => 1,
            RotationDir::Ccw => -1,
        }
    }
}

/// Player actions delivered by the input boundary, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
}
