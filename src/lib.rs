//! Worm - A grid-based arcade snake game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, contacts, game state)
//! - `settings`: Playfield configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell, in playfield units
    pub const CELL_SIZE: i32 = 10;
    /// Time between movement ticks (strictly exceeded before a tick fires)
    pub const MOVE_INTERVAL: f64 = 0.2;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 320;
    pub const PLAYFIELD_HEIGHT: i32 = 480;

    /// Segments in a freshly spawned worm
    pub const INITIAL_WORM_LENGTH: usize = 3;
    /// Food is kept this many cells away from the far edges
    pub const FOOD_MARGIN_CELLS: i32 = 3;
    /// Grown segments are created this many cells beyond the top-right corner
    pub const GROWTH_OFFSET_CELLS: i32 = 100;

    /// Largest accepted playfield width or height
    pub const MAX_PLAYFIELD_EXTENT: i32 = 1 << 24;
}

/// Center of a `width` x `height` playfield in grid units (integer division)
#[inline]
pub fn playfield_mid(width: i32, height: i32) -> IVec2 {
    IVec2::new(width / 2, height / 2)
}

/// Center of a `width` x `height` playfield in input coordinates
#[inline]
pub fn playfield_center(width: i32, height: i32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}
