//! Pointer input to movement direction
//!
//! A touch is mapped to one of four 45° quadrants around the playfield center.
//! Exact diagonals and the center itself are ambiguous and never change the
//! current heading.

use std::sync::atomic::{AtomicU8, Ordering};

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Cardinal heading of the worm (+y is up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Per-tick displacement for a grid with `cell_size` cells
    pub fn step(self, cell_size: i32) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, cell_size),
            Direction::Down => IVec2::new(0, -cell_size),
            Direction::Left => IVec2::new(-cell_size, 0),
            Direction::Right => IVec2::new(cell_size, 0),
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Classify an offset from the playfield center.
///
/// Checked in order: up, down, right, left. Returns `None` when no rule
/// applies (center point, exact diagonal, NaN).
pub fn direction_for_offset(offset: Vec2) -> Option<Direction> {
    let Vec2 { x, y } = offset;
    if y > 0.0 && y > x.abs() {
        Some(Direction::Up)
    } else if y < 0.0 && y.abs() > x.abs() {
        Some(Direction::Down)
    } else if x > 0.0 && x > y.abs() {
        Some(Direction::Right)
    } else if x < 0.0 && x.abs() > y.abs() {
        Some(Direction::Left)
    } else {
        None
    }
}

/// Apply one touch to `current`, keeping it on ambiguous input
pub fn steer(current: &mut Direction, offset: Vec2) {
    match direction_for_offset(offset) {
        Some(dir) => *current = dir,
        None => log::debug!("Ambiguous input at offset {:?}, keeping {:?}", offset, current),
    }
}

/// Single-writer, single-reader direction handoff for hosts that deliver
/// input on a different thread than the frame callback.
///
/// The input thread calls `publish`; the simulation calls `take` once per frame.
#[derive(Debug)]
pub struct SharedDirection {
    pending: AtomicU8,
}

impl Default for SharedDirection {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedDirection {
    const EMPTY: u8 = u8::MAX;

    pub fn new() -> Self {
        Self {
            pending: AtomicU8::new(Self::EMPTY),
        }
    }

    /// Classify `offset` and publish the result; ambiguous input publishes nothing
    pub fn publish(&self, offset: Vec2) {
        if let Some(dir) = direction_for_offset(offset) {
            self.pending.store(dir.to_u8(), Ordering::Release);
        }
    }

    /// Latest published direction since the previous call, if any
    pub fn take(&self) -> Option<Direction> {
        Direction::from_u8(self.pending.swap(Self::EMPTY, Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        assert_eq!(direction_for_offset(Vec2::new(5.0, 6.0)), Some(Direction::Up));
        assert_eq!(direction_for_offset(Vec2::new(1.0, -9.0)), Some(Direction::Down));
        assert_eq!(direction_for_offset(Vec2::new(9.0, 1.0)), Some(Direction::Right));
        assert_eq!(direction_for_offset(Vec2::new(-6.0, 5.0)), Some(Direction::Left));
    }

    #[test]
    fn test_ties_keep_direction() {
        for offset in [
            Vec2::ZERO,
            Vec2::new(7.0, 7.0),
            Vec2::new(-7.0, 7.0),
            Vec2::new(7.0, -7.0),
            Vec2::new(-7.0, -7.0),
            Vec2::new(f32::NAN, 1.0),
        ] {
            let mut dir = Direction::Left;
            steer(&mut dir, offset);
            assert_eq!(dir, Direction::Left, "offset {:?}", offset);
        }
    }

    #[test]
    fn test_reversal_is_allowed() {
        let mut dir = Direction::Right;
        steer(&mut dir, Vec2::new(-20.0, 0.0));
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn test_step_vectors() {
        assert_eq!(Direction::default().step(10), IVec2::new(10, 0));
        assert_eq!(Direction::Up.step(10), IVec2::new(0, 10));
        assert_eq!(Direction::Down.step(10), IVec2::new(0, -10));
        assert_eq!(Direction::Left.step(10), IVec2::new(-10, 0));
    }

    #[test]
    fn test_shared_direction_handoff() {
        let shared = SharedDirection::new();
        assert_eq!(shared.take(), None);

        shared.publish(Vec2::new(0.0, 50.0));
        shared.publish(Vec2::new(3.0, 3.0)); // ambiguous, ignored
        assert_eq!(shared.take(), Some(Direction::Up));
        assert_eq!(shared.take(), None);

        // Later writes overwrite earlier unread ones
        shared.publish(Vec2::new(-50.0, 0.0));
        shared.publish(Vec2::new(0.0, -50.0));
        assert_eq!(shared.take(), Some(Direction::Down));
    }
}
