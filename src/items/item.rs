//! Item definitions and data structures

use serde::{Deserialize, Serialize};

use crate::world::Position;

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Roulette order used by every weighted rarity draw
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Lowercase tag, as used on the wire and in item descriptions
    pub fn tag(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Stat multiplier applied to generated items
    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.5,
            Rarity::Epic => 4.0,
            Rarity::Legendary => 6.0,
        }
    }

    /// Time in milliseconds a hidden item of this rarity takes to uncover
    pub fn reveal_duration_ms(&self) -> u64 {
        match self {
            Rarity::Common => 2_000,
            Rarity::Uncommon => 4_000,
            Rarity::Rare => 8_000,
            Rarity::Epic => 15_000,
            Rarity::Legendary => 30_000,
        }
    }
}

/// Main item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Utility,
}

impl ItemType {
    pub fn tag(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Consumable => "consumable",
            ItemType::Utility => "utility",
        }
    }
}

/// Stat bonuses carried by an item. Absent stats are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_resistance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_healing: Option<bool>,
}

/// How far a hidden item has been uncovered.
///
/// Generation only ever creates the hidden state. Progress is advanced by the
/// looting interaction that owns the item afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealState {
    pub is_hidden: bool,
    pub reveal_duration: u64,
    pub reveal_progress: f64,
    pub can_be_looted: bool,
}

impl RevealState {
    pub fn hidden(rarity: Rarity) -> Self {
        Self {
            is_hidden: true,
            reveal_duration: rarity.reveal_duration_ms(),
            reveal_progress: 0.0,
            can_be_looted: false,
        }
    }

    /// Already visible and lootable, as for hand-placed starting items
    pub fn revealed(rarity: Rarity) -> Self {
        Self {
            is_hidden: false,
            reveal_duration: rarity.reveal_duration_ms(),
            reveal_progress: 1.0,
            can_be_looted: true,
        }
    }
}

/// A generated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub description: String,
    /// Set for items lying in the world
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Set for items held in an inventory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub stats: ItemStats,
    #[serde(flatten)]
    pub reveal: RevealState,
}

impl Item {
    /// A hidden ground item at `position`
    pub fn hidden(
        id: String,
        name: String,
        item_type: ItemType,
        rarity: Rarity,
        description: String,
        position: Position,
        stats: ItemStats,
    ) -> Self {
        Self {
            id,
            name,
            item_type,
            rarity,
            description,
            position: Some(position),
            owner_id: None,
            stats,
            reveal: RevealState::hidden(rarity),
        }
    }

    pub fn can_be_looted(&self) -> bool {
        self.reveal.can_be_looted
    }

    /// Advance the reveal by `elapsed_ms`. Once progress reaches 1 the item
    /// stops being hidden and becomes lootable.
    pub fn advance_reveal(&mut self, elapsed_ms: u64) {
        if self.reveal.can_be_looted {
            return;
        }
        let duration = self.reveal.reveal_duration.max(1) as f64;
        let progress = self.reveal.reveal_progress + elapsed_ms as f64 / duration;
        self.reveal.reveal_progress = progress.min(1.0);

        if self.reveal.reveal_progress >= 1.0 {
            self.reveal.is_hidden = false;
            self.reveal.can_be_looted = true;
        }
    }
}
