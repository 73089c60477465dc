//! Headless contact detection
//!
//! Stand-in for a host physics engine. Each cell is a square body slightly
//! smaller than the grid cell; two bodies touching report a begin-contact once,
//! and again only after they have separated.

use std::collections::BTreeSet;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::cell::{Category, Cell, EntityId};

/// Per-body physics configuration.
///
/// `is_dynamic` only decides whether a pair is checked for contact; the
/// detector never moves a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub category: Category,
    /// Bitmask of categories this body reports contacts with
    pub contact_test_mask: u32,
    /// A pair is reported only if at least one body is dynamic
    pub is_dynamic: bool,
}

impl ContactProfile {
    pub fn for_category(category: Category) -> Self {
        let worm = Category::WormSegment.bits();
        match category {
            Category::Food => Self {
                category,
                contact_test_mask: worm,
                is_dynamic: false,
            },
            Category::Wall => Self {
                category,
                contact_test_mask: worm,
                is_dynamic: false,
            },
            Category::WormSegment => Self {
                category,
                contact_test_mask: Category::Food.bits() | Category::Wall.bits() | worm,
                is_dynamic: true,
            },
        }
    }

    /// Whether a contact between bodies with these profiles is reported
    pub fn reports_with(&self, other: &ContactProfile) -> bool {
        (self.is_dynamic || other.is_dynamic)
            && (self.contact_test_mask & other.category.bits() != 0
                || other.contact_test_mask & self.category.bits() != 0)
    }
}

/// Whether two square bodies of side `cell_size - 1` centred on `a` and `b` overlap
#[inline]
pub fn bodies_overlap(a: IVec2, b: IVec2, cell_size: i32) -> bool {
    let extent = cell_size - 1;
    let d = (a - b).abs();
    d.x < extent && d.y < extent
}

/// Tracks touching pairs between frames to report begin-contacts only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetector {
    touching: BTreeSet<(EntityId, EntityId)>,
}

impl ContactDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `cells` and return pairs that started touching since the last scan,
    /// in ascending id order. Pairs are `(lower id, higher id)`.
    pub fn detect<'a>(
        &mut self,
        cells: impl IntoIterator<Item = &'a Cell>,
        cell_size: i32,
    ) -> Vec<(EntityId, EntityId)> {
        let bodies: Vec<(&Cell, ContactProfile)> = cells
            .into_iter()
            .map(|c| (c, ContactProfile::for_category(c.category())))
            .collect();

        let mut now_touching = BTreeSet::new();
        for (i, (a, pa)) in bodies.iter().enumerate() {
            for (b, pb) in &bodies[i + 1..] {
                if pa.reports_with(pb) && bodies_overlap(a.pos, b.pos, cell_size) {
                    now_touching.insert((a.id.min(b.id), a.id.max(b.id)));
                }
            }
        }

        let began = now_touching.difference(&self.touching).copied().collect();
        self.touching = now_touching;
        began
    }

    /// Forget all remembered contacts
    pub fn clear(&mut self) {
        self.touching.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::cell::{CellArena, Owner};

    #[test]
    fn test_profiles_match_masks() {
        let food = ContactProfile::for_category(Category::Food);
        let wall = ContactProfile::for_category(Category::Wall);
        let worm = ContactProfile::for_category(Category::WormSegment);

        assert!(worm.reports_with(&food));
        assert!(worm.reports_with(&wall));
        assert!(worm.reports_with(&worm));
        assert!(!food.reports_with(&wall));
        assert!(!wall.reports_with(&wall));
    }

    #[test]
    fn test_overlap_extent() {
        assert!(bodies_overlap(IVec2::new(0, 0), IVec2::new(0, 0), 10));
        assert!(bodies_overlap(IVec2::new(0, 0), IVec2::new(8, -8), 10));
        assert!(!bodies_overlap(IVec2::new(0, 0), IVec2::new(9, 0), 10));
        // Adjacent segments never touch
        assert!(!bodies_overlap(IVec2::new(0, 0), IVec2::new(10, 0), 10));
    }

    #[test]
    fn test_begin_contact_reported_once() {
        let mut arena = CellArena::new();
        let wall = arena.insert(IVec2::new(0, 0), Owner::Frame);
        let head = arena.insert(IVec2::new(0, 0), Owner::Worm);
        arena.insert(IVec2::new(50, 50), Owner::Food);

        let mut detector = ContactDetector::new();
        assert_eq!(detector.detect(arena.iter(), 10), vec![(wall, head)]);
        assert!(detector.detect(arena.iter(), 10).is_empty());

        // Separate, then touch again
        if let Some(cell) = arena.get_mut(head) {
            cell.pos = IVec2::new(30, 30);
        }
        assert!(detector.detect(arena.iter(), 10).is_empty());
        if let Some(cell) = arena.get_mut(head) {
            cell.pos = IVec2::new(0, 0);
        }
        assert_eq!(detector.detect(arena.iter(), 10), vec![(wall, head)]);
    }

    #[test]
    fn test_static_pairs_ignored() {
        let mut arena = CellArena::new();
        arena.insert(IVec2::new(0, 0), Owner::Frame);
        arena.insert(IVec2::new(0, 0), Owner::Food);

        let mut detector = ContactDetector::new();
        assert!(detector.detect(arena.iter(), 10).is_empty());
    }
}
