//! Entity spawning and scene layout
//!
//! Food, frame and worm are always rebuilt from scratch: old cells are removed
//! from the arena and fresh ones (with fresh ids) take their place.

use glam::IVec2;
use rand::Rng;

use super::cell::Owner;
use super::direction::Direction;
use super::layout::frame_points;
use super::state::GameState;
use crate::consts::INITIAL_WORM_LENGTH;
use crate::playfield_mid;

impl GameState {
    /// Replace the food with a new one at a random position.
    ///
    /// The position is drawn from `[0, W - 3s) x [0, H - 3s)` with no check
    /// against the worm or the frame.
    pub fn spawn_food(&mut self) {
        if let Some(id) = self.food.take() {
            self.arena.remove(id);
        }

        let bounds = self.playfield.food_bounds();
        let x = random_below(&mut self.rng, bounds.x);
        let y = random_below(&mut self.rng, bounds.y);
        let pos = IVec2::new(x, y);

        self.food = Some(self.arena.insert(pos, Owner::Food));
        log::debug!("Food spawned at {:?}", pos);
    }

    /// Rebuild the wall cells around the playfield
    pub fn spawn_frame(&mut self) {
        self.arena.remove_owned(Owner::Frame);
        self.frame.clear();

        let pf = self.playfield;
        for pos in frame_points(pf.width, pf.height, pf.cell_size) {
            let id = self.arena.insert(pos, Owner::Frame);
            self.frame.push(id);
        }
    }

    /// Rebuild the worm as a short chain laid out leftward from the center
    pub fn spawn_worm(&mut self) {
        self.arena.remove_owned(Owner::Worm);
        self.worm.clear();

        let mid = playfield_mid(self.playfield.width, self.playfield.height);
        let step = Direction::Left.step(self.playfield.cell_size);
        for i in 0..INITIAL_WORM_LENGTH as i32 {
            let id = self.arena.insert(mid + step * i, Owner::Worm);
            self.worm.push(id);
        }
    }

    /// Append one segment outside the playfield. Follow ticks pull it into
    /// the chain.
    pub fn grow_worm(&mut self) {
        let pos = self.playfield.growth_spawn(self.worm.len());
        let id = self.arena.insert(pos, Owner::Worm);
        self.worm.push(id);
    }

    /// Reset to the initial configuration: direction, food, frame, worm
    pub fn layout_scene(&mut self) {
        self.direction = Direction::default();
        self.spawn_food();
        self.spawn_frame();
        self.spawn_worm();
        log::info!(
            "Scene laid out: {}x{} playfield, {} wall cells, worm length {}",
            self.playfield.width,
            self.playfield.height,
            self.frame.len(),
            self.worm.len()
        );
    }
}

/// Uniform draw from `[0, bound)`, or 0 when the range is empty
fn random_below(rng: &mut impl Rng, bound: i32) -> i32 {
    if bound > 0 {
        rng.random_range(0..bound)
    } else {
        0
    }
}
