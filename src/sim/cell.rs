//! Grid cells and the entity arena that owns them
//!
//! Every body on the playfield is a `Cell`. Cells live in a flat arena keyed by
//! a stable `EntityId`; the worm, the frame and the food slot hold id lists into it.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Stable identifier of a cell in the arena
pub type EntityId = u32;

/// Collision category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Wall,
    WormSegment,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Wall, Category::WormSegment];

    /// Disjoint flag value used by bitmask-based physics hosts
    pub fn bits(self) -> u32 {
        match self {
            Category::Food => 0x1,
            Category::Wall => 0x1 << 1,
            Category::WormSegment => 0x1 << 2,
        }
    }

    /// Decode a single-category bitmask
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.bits() == bits)
    }
}

/// Which collection owns a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Worm,
    Frame,
    Food,
}

impl Owner {
    /// Category every cell of this owner carries
    pub fn category(self) -> Category {
        match self {
            Owner::Worm => Category::WormSegment,
            Owner::Frame => Category::Wall,
            Owner::Food => Category::Food,
        }
    }
}

/// One grid-aligned body on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: EntityId,
    pub pos: IVec2,
    pub owner: Owner,
}

impl Cell {
    #[inline]
    pub fn category(&self) -> Category {
        self.owner.category()
    }
}

/// Flat list of live cells, kept sorted by id for deterministic iteration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellArena {
    cells: Vec<Cell>,
    next_id: EntityId,
}

impl CellArena {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a cell and return its id
    pub fn insert(&mut self, pos: IVec2, owner: Owner) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        // Ids are monotonic, so pushing keeps the list sorted
        self.cells.push(Cell { id, pos, owner });
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Cell> {
        let index = self.index_of(id)?;
        Some(self.cells.remove(index))
    }

    /// Remove every cell belonging to `owner`
    pub fn remove_owned(&mut self, owner: Owner) {
        self.cells.retain(|c| c.owner != owner);
    }

    pub fn get(&self, id: EntityId) -> Option<&Cell> {
        self.index_of(id).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Cell> {
        let index = self.index_of(id)?;
        Some(&mut self.cells[index])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.cells.binary_search_by_key(&id, |c| c.id).ok()
    }
}
