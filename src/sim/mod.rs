//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed movement cadence only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod cell;
pub mod collision;
pub mod contact;
pub mod direction;
pub mod layout;
pub mod scheduler;
pub mod spawn;
pub mod state;
pub mod tick;

pub use cell::{Category, Cell, CellArena, EntityId, Owner};
pub use collision::{Contact, ContactEvent, classify, classify_bits, resolve, resolve_bits};
pub use contact::{ContactDetector, ContactProfile};
pub use direction::{Direction, SharedDirection, direction_for_offset};
pub use layout::frame_points;
pub use scheduler::{MovementScheduler, follow};
pub use state::{GameState, Playfield, Stats};
pub use tick::{FrameInput, StepReport, step};
