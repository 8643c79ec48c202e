//! Authoritative world state
//!
//! Holds the current snapshot and swaps in a brand-new one on regeneration.
//! Snapshots are never edited in place by the generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::WorldSettings;
use crate::entities::Player;
use crate::world::{WorldAssembler, WorldSnapshot};

/// Owner of the live world
#[derive(Debug)]
pub struct WorldState {
    snapshot: WorldSnapshot,
    current_player_id: String,
    settings: WorldSettings,
    /// Random number generator (seeded for reproducibility)
    rng: StdRng,
    /// Number of worlds generated by this state, including the first
    generation: u32,
}

impl WorldState {
    /// Create the state and assemble the first world
    pub fn new(settings: WorldSettings) -> Self {
        let mut rng = match settings.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let snapshot = WorldAssembler::with_settings(&settings).assemble(
            settings.width,
            settings.height,
            &mut rng,
        );
        let current_player_id = first_player_id(&snapshot);

        Self {
            snapshot,
            current_player_id,
            settings,
            rng,
            generation: 1,
        }
    }

    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.snapshot
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The designated current player, always one of the snapshot's players
    pub fn current_player(&self) -> Option<&Player> {
        self.snapshot.player(&self.current_player_id)
    }

    /// Replace the world with a new one of the configured size
    pub fn regenerate(&mut self) -> &WorldSnapshot {
        self.regenerate_with(self.settings.width, self.settings.height)
    }

    /// Replace the world with a new one of the given size
    pub fn regenerate_with(&mut self, width: i32, height: i32) -> &WorldSnapshot {
        let fresh = WorldAssembler::with_settings(&self.settings).assemble(width, height, &mut self.rng);
        self.current_player_id = first_player_id(&fresh);
        self.snapshot = fresh;
        self.generation += 1;

        log::info!(
            "Regenerated world #{} ({}x{})",
            self.generation,
            width,
            height
        );
        &self.snapshot
    }
}

fn first_player_id(snapshot: &WorldSnapshot) -> String {
    snapshot
        .players
        .first()
        .map(|p| p.id.clone())
        .unwrap_or_default()
}
