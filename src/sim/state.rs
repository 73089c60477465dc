//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by one `GameState`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellArena, EntityId};
use super::contact::ContactDetector;
use super::direction::Direction;
use super::scheduler::MovementScheduler;
use crate::consts::{FOOD_MARGIN_CELLS, GROWTH_OFFSET_CELLS};
use crate::settings::Settings;

/// Playfield dimensions in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Exclusive upper bounds of the food spawn area
    pub fn food_bounds(&self) -> IVec2 {
        let margin = FOOD_MARGIN_CELLS.saturating_mul(self.cell_size);
        IVec2::new(
            self.width.saturating_sub(margin),
            self.height.saturating_sub(margin),
        )
    }

    /// Off-field position for the `index`-th worm segment created by growth.
    ///
    /// Lies beyond the top-right corner of the frame; successive indices are
    /// two cells apart so segments grown before the next tick never touch.
    pub fn growth_spawn(&self, index: usize) -> IVec2 {
        let offset = GROWTH_OFFSET_CELLS.saturating_mul(self.cell_size);
        let spacing = (index as i32).saturating_mul(self.cell_size.saturating_mul(2));
        IVec2::new(
            self.width.saturating_add(offset).saturating_add(spacing),
            self.height.saturating_add(offset),
        )
    }
}

/// Running counters, not used by the simulation itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub foods_eaten: u32,
    pub resets: u32,
    pub ticks: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub playfield: Playfield,
    /// Current heading
    pub direction: Direction,
    pub scheduler: MovementScheduler,
    pub stats: Stats,
    /// Every live cell
    pub(crate) arena: CellArena,
    /// Worm segment ids, head first
    pub(crate) worm: Vec<EntityId>,
    pub(crate) frame: Vec<EntityId>,
    pub(crate) food: Option<EntityId>,
    pub(crate) contacts: ContactDetector,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state and lay out the initial scene
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        let mut state = Self {
            seed,
            playfield,
            direction: Direction::default(),
            scheduler: MovementScheduler::default(),
            stats: Stats::default(),
            arena: CellArena::new(),
            worm: Vec::new(),
            frame: Vec::new(),
            food: None,
            contacts: ContactDetector::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.layout_scene();

        state
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new(
            Playfield::new(settings.width, settings.height, settings.cell_size),
            settings.seed,
        );
        state.scheduler = MovementScheduler::new(settings.move_interval);
        state
    }

    /// All live cells, sorted by id
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.arena.iter()
    }

    pub fn cell(&self, id: EntityId) -> Option<&Cell> {
        self.arena.get(id)
    }

    pub fn worm_ids(&self) -> &[EntityId] {
        &self.worm
    }

    pub fn worm_len(&self) -> usize {
        self.worm.len()
    }

    /// Worm segment positions, head first
    pub fn worm_positions(&self) -> Vec<IVec2> {
        self.worm
            .iter()
            .filter_map(|&id| self.arena.get(id))
            .map(|c| c.pos)
            .collect()
    }

    pub fn head_position(&self) -> Option<IVec2> {
        self.worm.first().and_then(|&id| self.arena.get(id)).map(|c| c.pos)
    }

    pub fn food_id(&self) -> Option<EntityId> {
        self.food
    }

    pub fn food_position(&self) -> Option<IVec2> {
        self.food.and_then(|id| self.arena.get(id)).map(|c| c.pos)
    }

    pub fn frame_positions(&self) -> Vec<IVec2> {
        self.frame
            .iter()
            .filter_map(|&id| self.arena.get(id))
            .map(|c| c.pos)
            .collect()
    }

    /// Overwrite worm positions, head first. Extra positions are ignored.
    pub fn set_worm_positions(&mut self, positions: &[IVec2]) {
        for (&id, &pos) in self.worm.iter().zip(positions) {
            if let Some(cell) = self.arena.get_mut(id) {
                cell.pos = pos;
            }
        }
    }

    /// Place the food at a fixed position (hosts and scripted scenarios)
    pub fn place_food(&mut self, pos: IVec2) {
        if let Some(cell) = self.food.and_then(|id| self.arena.get_mut(id)) {
            cell.pos = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_bounds_keep_margin() {
        let pf = Playfield::new(100, 80, 10);
        assert_eq!(pf.food_bounds(), IVec2::new(70, 50));
    }

    #[test]
    fn test_extreme_playfield_does_not_overflow() {
        let pf = Playfield::new(2_000_000_000, 2_000_000_000, 1_000_000_000);
        assert!(pf.food_bounds().x <= 0);
        assert_eq!(pf.growth_spawn(5), IVec2::new(i32::MAX, i32::MAX));

        // Building the scene on it must not panic either
        let state = GameState::new(pf, 1);
        assert_eq!(state.food_position(), Some(IVec2::ZERO));
        assert_eq!(state.worm_len(), 3);
    }

    #[test]
    fn test_growth_spawn_outside_frame() {
        let pf = Playfield::new(320, 480, 10);
        let first = pf.growth_spawn(3);
        assert!(first.x > pf.width && first.y > pf.height);
        assert_eq!(pf.growth_spawn(4) - first, IVec2::new(20, 0));
    }
}
