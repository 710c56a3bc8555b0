//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal view and the input adapter alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Visible rows**: 20
//! - **Hidden rows**: 1 vanish row above the visible area (row 0)
//! - **Total rows**: 21 (indexed 0-20, top to bottom)
//!
//! Engine row coordinates always include the hidden row. Row 0 is never drawn.
//!
//! # Timing And Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_INTERVAL_MS` | 400 | Gravity interval at level 1 |
//! | `FALL_INTERVAL_DAMPING` | 0.8 | Interval multiplier per level gained |
//! | `LINES_PER_LEVEL` | 5 | Cleared lines per level |
//! | `LOCK_DELAY_MAX_MOVES` | 5 | Grace-window move allowance per piece |
//! | `FRAME_MS` | 16 | Host frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{Intent, PieceColor, PieceKind, BOARD_COLUMNS, TOTAL_ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(PieceKind::T.color(), PieceColor::Purple);
//!
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(TOTAL_ROWS, 21);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u8 = 10;

/// Rows drawn by a view (20 rows)
pub const VISIBLE_ROWS: u8 = 20;

/// Vanish rows above the visible area. Cells committed here end the game.
pub const HIDDEN_ROWS: u8 = 1;

/// Rows in the engine grid, hidden rows included
pub const TOTAL_ROWS: u8 = VISIBLE_ROWS + HIDDEN_ROWS;

/// Gravity interval at level 1, in milliseconds
pub const BASE_FALL_INTERVAL_MS: f64 = 400.0;

/// Applied to the fall interval once per level gained
pub const FALL_INTERVAL_DAMPING: f64 = 0.8;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 5;

/// Grace-window move allowance per piece
pub const LOCK_DELAY_MAX_MOVES: u8 = 5;

/// Number of distinct piece kinds (one bag)
pub const BAG_SIZE: usize = 7;

/// Default number of upcoming kinds exposed for preview
pub const PREVIEW_LEN: usize = 5;

/// Upper bound for the preview length; the queue never holds fewer entries.
pub const MAX_PREVIEW_LEN: usize = BAG_SIZE;

/// Host frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// The seven tetromino piece kinds
///
/// Kinds differ only in static shape and color data looked up by kind.
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
    /// All kinds, in canonical bag order.
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Display color of the kind
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::Z => PieceColor::Red,
        }
    }
}

/// Named display colors, one per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl PieceColor {
    /// 24-bit RGB triple for the color
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 255, 255),
            PieceColor::Blue => (0, 0, 255),
            PieceColor::Orange => (255, 165, 0),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Green => (0, 128, 0),
            PieceColor::Purple => (128, 0, 128),
            PieceColor::Red => (255, 0, 0),
        }
    }
}

/// Discrete intents forwarded by an input adapter
///
/// The engine applies each intent synchronously between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop piece to its lowest legal row and mark it committed
    HardDrop,
    /// Swap the active piece with the hold slot
    Hold,
    /// Toggle pause
    Pause,
    /// Reinitialize board, queue, hold and progression
    Reset,
}

impl Intent {
    /// Parse intent from a camelCase or lowercase name, as written in event logs
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("rotatecw"), Some(Intent::RotateCw));
    /// assert_eq!(Intent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotatecw" => Some(Intent::RotateCw),
            "harddrop" => Some(Intent::HardDrop),
            "hold" => Some(Intent::Hold),
            "pause" => Some(Intent::Pause),
            "reset" => Some(Intent::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::RotateCw => "rotateCw",
            Intent::HardDrop => "hardDrop",
            Intent::Hold => "hold",
            Intent::Pause => "pause",
            Intent::Reset => "reset",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a committed piece of that kind
pub type Cell = Option<PieceKind>;
