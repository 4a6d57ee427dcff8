//! Bleed Sim - Entry Point
//!
//! Hits one creature once and runs bleed ticks until it dies or the tick
//! limit is reached.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use wound_sim::combat::{DamageEvent, DamageTables, SeededRolls};
use wound_sim::core::error::{Result, WoundError};
use wound_sim::core::types::{ResourceKind, GLOBAL_ZONE};
use wound_sim::entity::HealthHost;
use wound_sim::simulation::Herd;

const DEFAULT_TABLES: &str = include_str!("../data/damage_tables.toml");

/// Bleed Sim - single hit wound and bleed run
#[derive(Parser, Debug)]
#[command(name = "bleed_sim")]
#[command(about = "Apply one hit to a creature and simulate the resulting bleed")]
struct Args {
    /// Damage tables TOML (defaults to the bundled data/damage_tables.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Creature type to spawn
    #[arg(long, default_value = "Animal_CervusElaphus")]
    creature: String,

    /// Zone the hit lands in (empty for no zone)
    #[arg(long, default_value = "Neck")]
    zone: String,

    /// Ammo identifier
    #[arg(long, default_value = "Bullet_308Win")]
    ammo: String,

    /// Health damage dealt to the zone
    #[arg(long, default_value_t = 20.0)]
    damage: f32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 600)]
    max_ticks: u64,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    creature: String,
    zone: String,
    ammo: String,
    seed: u64,
    bleed_started: bool,
    wound_intensity: Option<f32>,
    ticks: u64,
    alive: bool,
    health: f32,
    blood: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wound_sim=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let tables = match &args.config {
        Some(path) => DamageTables::load(path)?,
        None => DamageTables::from_toml_str(DEFAULT_TABLES)?,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rolls = SeededRolls::new(seed);

    let mut herd = Herd::new(tables.tuning().clone());
    let id = herd.spawn(tables.spawn(&args.creature)?);

    let damage = DamageEvent::new().with(args.zone.clone(), ResourceKind::Health, args.damage);
    let report = herd
        .hit(id, &damage, &args.zone, &args.ammo, &tables, &mut rolls)
        .ok_or_else(|| WoundError::UnknownCreature(args.creature.clone()))?;

    while herd.current_tick < args.max_ticks && herd.is_bleeding(id) {
        herd.tick();
    }

    let creature = herd
        .get(id)
        .ok_or_else(|| WoundError::UnknownCreature(args.creature.clone()))?;

    let summary = RunSummary {
        creature: args.creature.clone(),
        zone: args.zone.clone(),
        ammo: args.ammo.clone(),
        seed,
        bleed_started: report.bleed_started,
        wound_intensity: report.wound_intensity,
        ticks: herd.current_tick,
        alive: creature.is_alive(),
        health: creature.health(GLOBAL_ZONE, ResourceKind::Health),
        blood: creature.health(GLOBAL_ZONE, ResourceKind::Blood),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("=== BLEED SIM ===");
        println!("{} hit in {:?} by {} (seed {})", summary.creature, summary.zone, summary.ammo, seed);
        match summary.wound_intensity {
            Some(intensity) => println!("Bleeding at intensity {:.2}", intensity),
            None => println!("No bleed"),
        }
        println!(
            "After {} ticks: {} (health {:.1}, blood {:.1})",
            summary.ticks,
            if summary.alive { "alive" } else { "dead" },
            summary.health,
            summary.blood
        );
    }

    Ok(())
}
