//! Worldforge - Entry Point
//!
//! Command line front end: generate a world and print it as an ASCII preview
//! or as snapshot JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use worldforge::data::{settings_path, WorldSettings};
use worldforge::world::{Position, WorldAssembler, WorldSnapshot};
use worldforge::WorldState;

#[derive(Parser)]
#[command(name = "worldforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (RON); defaults to the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world and print it
    Regenerate {
        #[arg(long)]
        width: Option<i32>,

        #[arg(long)]
        height: Option<i32>,

        /// Fixed seed for buildings and loot
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also scatter ground loot across open terrain
        #[arg(long)]
        ground_loot: bool,

        /// Print the snapshot as JSON instead of a preview
        #[arg(long)]
        json: bool,
    },

    /// Assemble several candidate worlds from consecutive seeds
    Preview {
        #[arg(short = 'n', long, default_value = "4")]
        count: u64,

        /// First seed of the run
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Write the default settings file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(settings_path);

    match cli.command {
        Commands::Regenerate {
            width,
            height,
            seed,
            ground_loot,
            json,
        } => {
            let mut settings = WorldSettings::load_or_default(&config_path);
            if let Some(w) = width {
                settings.width = w;
            }
            if let Some(h) = height {
                settings.height = h;
            }
            settings.seed = seed.or(settings.seed);
            settings.ground_loot |= ground_loot;
            settings.validate().context("invalid world settings")?;

            let state = WorldState::new(settings);
            if json {
                println!("{}", state.snapshot().to_json_pretty()?);
            } else {
                print!("{}", render_preview(state.snapshot()));
                println!("{}", summary(state.snapshot()));
            }
        }

        Commands::Preview { count, seed } => {
            let settings = WorldSettings::load_or_default(&config_path);
            settings.validate().context("invalid world settings")?;
            let assembler = WorldAssembler::with_settings(&settings);

            let worlds = assembler.assemble_candidates(
                settings.width,
                settings.height,
                seed..seed.saturating_add(count),
            );

            for (s, world) in &worlds {
                println!("seed {:>6}: {}", s, summary(world));
            }
        }

        Commands::InitConfig => {
            WorldSettings::export_default(&config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

/// One line per map row, with actors and buildings drawn over the terrain
fn render_preview(world: &WorldSnapshot) -> String {
    let mut out = String::new();
    for (y, row) in world.grid.rows().iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let glyph = if world.players.iter().any(|p| p.position == pos) {
                '@'
            } else if let Some(npc) = world.npcs.iter().find(|n| n.position == pos) {
                npc.npc_type.glyph()
            } else if world.building_at(pos.x, pos.y).is_some() {
                'B'
            } else if world.items_at(pos).next().is_some() {
                '!'
            } else {
                tile.glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn summary(world: &WorldSnapshot) -> String {
    let terrain: Vec<String> = world
        .grid
        .terrain_counts()
        .iter()
        .map(|(t, n)| format!("{}={}", t.tag(), n))
        .collect();
    format!(
        "{} {}x{} | {} buildings, {} items | {}",
        world.id,
        world.width(),
        world.height(),
        world.buildings.len(),
        world.items.len(),
        terrain.join(" ")
    )
}
