//! Per-frame simulation step
//!
//! Core game loop: input, scheduled movement, contact handling.

use glam::Vec2;

use super::cell::EntityId;
use super::collision::{ContactEvent, resolve, resolve_bits};
use super::direction::steer;
use super::scheduler::follow;
use super::state::GameState;
use crate::playfield_center;

/// Input delivered with a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Touch/pointer positions in playfield coordinates, applied in order
    pub touches: Vec<Vec2>,
}

impl FrameInput {
    pub fn touch(pos: Vec2) -> Self {
        Self {
            touches: vec![pos],
        }
    }
}

/// What happened during one `step`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Whether the worm moved this frame
    pub moved: bool,
    /// Events handled, in order
    pub events: Vec<ContactEvent>,
}

/// Advance the game by one rendered frame at host time `now`
pub fn step(state: &mut GameState, input: &FrameInput, now: f64) -> StepReport {
    for &pos in &input.touches {
        state.touch_down(pos);
    }

    let mut report = StepReport::default();
    if state.scheduler.advance(now) {
        state.move_worm();
        report.moved = true;
    }

    let cell_size = state.playfield.cell_size;
    let began = state.contacts.detect(state.arena.iter(), cell_size);
    for (a, b) in began {
        if let Some(event) = state.handle_contact(a, b) {
            report.events.push(event);
        }
    }

    report
}

impl GameState {
    /// Steer from a pointer position given in playfield coordinates
    pub fn touch_down(&mut self, pos: Vec2) {
        let offset = pos - playfield_center(self.playfield.width, self.playfield.height);
        steer(&mut self.direction, offset);
    }

    /// One movement tick: head moves by the direction, body follows
    pub fn move_worm(&mut self) {
        let mut positions = self.worm_positions();
        follow(&mut positions, self.direction.step(self.playfield.cell_size));
        self.set_worm_positions(&positions);
        self.stats.ticks += 1;
        log::trace!("Tick {}: head at {:?}", self.stats.ticks, positions.first());
    }

    /// Handle a contact reported between two cells.
    ///
    /// Contacts naming a cell that no longer exists (removed earlier in the
    /// same frame by growth or reset) are skipped.
    pub fn handle_contact(&mut self, a: EntityId, b: EntityId) -> Option<ContactEvent> {
        let (Some(ca), Some(cb)) = (self.arena.get(a), self.arena.get(b)) else {
            log::debug!("Skipping stale contact {} / {}", a, b);
            return None;
        };
        let event = resolve(ca.category(), cb.category())?;
        self.handle_event(event);
        Some(event)
    }

    /// Handle a contact reported as two raw category bitmasks
    pub fn handle_contact_bits(&mut self, a: u32, b: u32) -> Option<ContactEvent> {
        let event = resolve_bits(a, b)?;
        self.handle_event(event);
        Some(event)
    }

    /// Apply a classified contact event
    pub fn handle_event(&mut self, event: ContactEvent) {
        if event.is_fatal() {
            log::info!("{:?} at length {}, resetting", event, self.worm_len());
            self.layout_scene();
            self.contacts.clear();
            self.stats.resets += 1;
        } else {
            self.grow_worm();
            self.spawn_food();
            self.stats.foods_eaten += 1;
            log::info!("Food consumed, worm length {}", self.worm_len());
        }
    }
}
