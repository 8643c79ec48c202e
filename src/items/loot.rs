//! Loot generation helpers
//!
//! Rarity rolls, stat rolls and name/description templating shared by the
//! building and ground loot passes.

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::{ItemStats, ItemType, Rarity};
use crate::data::loot_tables::{rarity_prefixes, type_nouns, RarityWeights};

/// Weighted rarity roll.
///
/// Buckets are walked common to legendary; a zero-weight bucket can never be
/// picked. An empty table always yields common.
pub fn roll_rarity(weights: &RarityWeights, rng: &mut impl Rng) -> Rarity {
    let total = weights.total();
    if total <= 0.0 {
        return Rarity::Common;
    }

    let mut roll = rng.gen::<f64>() * total;
    for rarity in Rarity::ALL {
        let weight = weights.get(rarity);
        if weight <= 0.0 {
            continue;
        }
        roll -= weight;
        if roll <= 0.0 {
            return rarity;
        }
    }
    Rarity::Common
}

/// Roll the stat line for an item. `multiplier` is the rarity multiplier,
/// already combined with any location bonus.
pub fn roll_stats(item_type: ItemType, multiplier: f64, rng: &mut impl Rng) -> ItemStats {
    let mut jitter =
        |base: f64, spread: f64| (base * multiplier + rng.gen::<f64>() * spread).floor() as i32;

    match item_type {
        ItemType::Weapon => ItemStats {
            attack: Some(jitter(5.0, 3.0)),
            ..Default::default()
        },
        ItemType::Armor => ItemStats {
            defense: Some(jitter(3.0, 2.0)),
            ..Default::default()
        },
        ItemType::Consumable => ItemStats {
            hp: Some(jitter(20.0, 10.0)),
            ..Default::default()
        },
        ItemType::Utility => ItemStats {
            speed: Some(jitter(1.0, 2.0)),
            ..Default::default()
        },
    }
}

/// "{prefix} [{flavour}] {noun}"
pub fn item_name(
    rarity: Rarity,
    item_type: ItemType,
    flavour_words: &[&str],
    rng: &mut impl Rng,
) -> String {
    let prefix = rarity_prefixes(rarity).choose(rng).copied().unwrap_or("Plain");
    let flavour = flavour_words.choose(rng).copied();
    let noun = type_nouns(item_type).choose(rng).copied().unwrap_or("Item");

    match flavour {
        Some(word) => format!("{prefix} {word} {noun}"),
        None => format!("{prefix} {noun}"),
    }
}

/// "A {rarity} {type} {clause}."
pub fn item_description(rarity: Rarity, item_type: ItemType, clause: &str) -> String {
    format!("A {} {} {}.", rarity.tag(), item_type.tag(), clause)
}
