//! Treasure-hunt dataset: a character picks what to carry in a 10 kg backpack.

use super::{Challenge, Item};

pub const REFERENCE_CAPACITY: f64 = 10.0;

const REFERENCE_ITEMS: [(&str, f64, u64); 10] = [
    ("ancient_coin", 1.0, 300),
    ("diamond", 2.0, 1500),
    ("gold_bar", 5.0, 2500),
    ("silver_necklace", 1.5, 800),
    ("magic_potion", 3.0, 1200),
    ("ancient_book", 2.5, 500),
    ("crown", 4.0, 2200),
    ("jade_statue", 6.0, 2800),
    ("sapphire_ring", 0.5, 900),
    ("treasure_map", 1.0, 1100),
];

pub fn reference_items() -> Vec<Item> {
    REFERENCE_ITEMS
        .iter()
        .map(|&(name, weight, value)| Item::new(name, weight, value))
        .collect()
}

pub fn reference_challenge() -> Challenge {
    Challenge {
        items: reference_items(),
        capacity: REFERENCE_CAPACITY,
    }
}
