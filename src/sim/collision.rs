//! Contact classification
//!
//! The physics layer only knows that two bodies touched. This module turns the
//! pair of categories into the game event it means, or marks it unclassified.

use serde::{Deserialize, Serialize};

use super::cell::Category;

/// Game events produced by contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactEvent {
    /// Worm head reached the food
    FoodConsumed,
    /// Worm hit the frame
    BoundaryStruck,
    /// Two worm segments touched
    SelfStruck,
}

impl ContactEvent {
    /// Whether handling this event rebuilds the whole scene
    pub fn is_fatal(self) -> bool {
        matches!(self, ContactEvent::BoundaryStruck | ContactEvent::SelfStruck)
    }
}

/// Outcome of classifying a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Event(ContactEvent),
    Unclassified(Category, Category),
    /// Raw bitmasks that are not exactly one known category each
    UnknownBits(u32, u32),
}

/// Classify an unordered pair of contacting categories
pub fn classify(a: Category, b: Category) -> Contact {
    use Category::*;
    match (a, b) {
        (Food, WormSegment) | (WormSegment, Food) => Contact::Event(ContactEvent::FoodConsumed),
        (Wall, WormSegment) | (WormSegment, Wall) => Contact::Event(ContactEvent::BoundaryStruck),
        (WormSegment, WormSegment) => Contact::Event(ContactEvent::SelfStruck),
        (Food, Food) | (Food, Wall) | (Wall, Food) | (Wall, Wall) => Contact::Unclassified(a, b),
    }
}

/// Classify raw category bitmasks as reported by a bitmask-based physics host
pub fn classify_bits(a: u32, b: u32) -> Contact {
    match (Category::from_bits(a), Category::from_bits(b)) {
        (Some(ca), Some(cb)) => classify(ca, cb),
        _ => Contact::UnknownBits(a, b),
    }
}

/// Classify and log; returns the event to act on, if any
pub fn resolve(a: Category, b: Category) -> Option<ContactEvent> {
    settle(classify(a, b))
}

/// Bitmask counterpart of `resolve`
pub fn resolve_bits(a: u32, b: u32) -> Option<ContactEvent> {
    settle(classify_bits(a, b))
}

fn settle(contact: Contact) -> Option<ContactEvent> {
    match contact {
        Contact::Event(event) => Some(event),
        Contact::Unclassified(a, b) => {
            log::warn!("Unclassified contact between {:?} and {:?}", a, b);
            None
        }
        Contact::UnknownBits(a, b) => {
            log::warn!("Unclassified contact with category bits {:#x} / {:#x}", a, b);
            None
        }
    }
}
