//! Wound and bleed integration tests
//!
//! End-to-end runs of hits through the wound processor, the tick scheduler
//! and the herd driver.

use std::io::Write;

use wound_sim::combat::{
    CreatureTemplate, DamageEvent, DamageTables, ScriptedRolls, SeededRolls, WoundEnv,
    WoundProcessor,
};
use wound_sim::core::types::{ResourceKind, GLOBAL_ZONE};
use wound_sim::core::WoundError;
use wound_sim::entity::{Creature, HealthHost};
use wound_sim::simulation::{Herd, Scheduler, TickScheduler};

const DEER: &str = "Animal_CervusElaphus";

fn tables() -> DamageTables {
    DamageTables::new()
        .with_creature(
            DEER,
            CreatureTemplate::default()
                .with_zone("Neck", 50.0, true)
                .with_zone("Legs", 80.0, false),
        )
        .with_ammo("Bullet_9x19", 0.5)
        .with_ammo("Bullet_308Win", 1.0)
}

fn neck_hit(amount: f32) -> DamageEvent {
    DamageEvent::new().with("Neck", ResourceKind::Health, amount)
}

fn blood(host: &Creature) -> f32 {
    host.health(GLOBAL_ZONE, ResourceKind::Blood)
}

/// threshold 0.5, zone bleeds, roll 0.3: intensity 1.0, 250 blood per tick
#[test]
fn test_half_threshold_low_roll_bleeds_250_per_tick() {
    let tables = tables();
    let mut deer = tables.spawn(DEER).unwrap();
    let mut rolls = ScriptedRolls::new([0.3]);
    let mut scheduler = TickScheduler::new();
    let mut processor = WoundProcessor::new(tables.tuning().clone());

    let report = {
        let mut env = WoundEnv {
            config: &tables,
            rolls: &mut rolls,
            scheduler: &mut scheduler,
        };
        processor.create_wound(&mut deer, &mut env, &neck_hit(10.0), "Neck", "Bullet_9x19")
    };
    assert_eq!(report.wound_intensity, Some(1.0));

    for expected in [4750.0, 4500.0, 4250.0] {
        scheduler.advance(&mut deer);
        assert_eq!(blood(&deer), expected);
    }
}

/// threshold 0.5, roll 0.9: zone damage only
#[test]
fn test_half_threshold_high_roll_only_zone_damage() {
    let tables = tables();
    let mut deer = tables.spawn(DEER).unwrap();
    let mut rolls = ScriptedRolls::new([0.9]);
    let mut scheduler = TickScheduler::new();
    let mut processor = WoundProcessor::new(tables.tuning().clone());

    let report = {
        let mut env = WoundEnv {
            config: &tables,
            rolls: &mut rolls,
            scheduler: &mut scheduler,
        };
        processor.create_wound(&mut deer, &mut env, &neck_hit(10.0), "Neck", "Bullet_9x19")
    };

    assert!(!report.bleed_started);
    assert_eq!(deer.health(GLOBAL_ZONE, ResourceKind::Health), 90.0);
    assert_eq!(deer.health("Neck", ResourceKind::Health), 40.0);

    for _ in 0..5 {
        scheduler.advance(&mut deer);
    }
    assert_eq!(blood(&deer), 5000.0);
}

/// blood 400, intensity 1.0: drained by 250 and killed in the same tick
#[test]
fn test_low_blood_tick_drains_and_kills() {
    let tables = tables();
    let mut deer = tables.spawn(DEER).unwrap();
    deer.set_health(GLOBAL_ZONE, ResourceKind::Blood, 400.0);
    let mut rolls = ScriptedRolls::new([0.1]);
    let mut scheduler = TickScheduler::new();
    let mut processor = WoundProcessor::new(tables.tuning().clone());

    {
        let mut env = WoundEnv {
            config: &tables,
            rolls: &mut rolls,
            scheduler: &mut scheduler,
        };
        processor.create_wound(&mut deer, &mut env, &neck_hit(0.0), "Neck", "Bullet_9x19");
    }

    scheduler.advance(&mut deer);
    assert_eq!(blood(&deer), 150.0);
    assert_eq!(deer.health(GLOBAL_ZONE, ResourceKind::Health), 0.0);
}

#[test]
fn test_dead_entity_stops_bleed_for_good() {
    let tables = tables();
    let mut deer = tables.spawn(DEER).unwrap();
    let mut rolls = ScriptedRolls::new([0.1]);
    let mut scheduler = TickScheduler::new();
    let mut processor = WoundProcessor::new(tables.tuning().clone());

    {
        let mut env = WoundEnv {
            config: &tables,
            rolls: &mut rolls,
            scheduler: &mut scheduler,
        };
        processor.create_wound(&mut deer, &mut env, &neck_hit(0.0), "Neck", "Bullet_308Win");
    }
    let handle = processor.bleed_handle().unwrap();

    scheduler.advance(&mut deer);
    assert_eq!(blood(&deer), 4500.0);

    deer.set_health(GLOBAL_ZONE, ResourceKind::Health, 0.0);
    scheduler.advance(&mut deer);
    assert_eq!(blood(&deer), 4500.0);
    assert!(!scheduler.is_scheduled(handle));

    // Reviving the host does not restart the old bleed
    deer.set_health(GLOBAL_ZONE, ResourceKind::Health, 100.0);
    for _ in 0..3 {
        scheduler.advance(&mut deer);
    }
    assert_eq!(blood(&deer), 4500.0);
}

#[test]
fn test_instant_lethal_hit_still_rolls_for_bleed() {
    let tables = tables().with_ammo("MeleeWolf", 1.0);
    let mut herd = Herd::new(tables.tuning().clone());
    let deer = herd.spawn(tables.spawn(DEER).unwrap());
    let mut rolls = ScriptedRolls::new([0.5]);

    let report = herd
        .hit(deer, &neck_hit(5.0), "Neck", "MeleeWolf", &tables, &mut rolls)
        .unwrap();
    assert!(!herd.get(deer).unwrap().is_alive());
    assert!(report.bleed_started);

    // First tick sees a dead host and stops
    herd.tick();
    assert!(!herd.is_bleeding(deer));
    assert_eq!(blood(herd.get(deer).unwrap()), 5000.0);
}

#[test]
fn test_full_threshold_deer_bleeds_out() {
    let tables = tables();
    let mut herd = Herd::new(tables.tuning().clone());
    let deer = herd.spawn(tables.spawn(DEER).unwrap());
    let mut rolls = SeededRolls::new(1234);

    let report = herd
        .hit(deer, &neck_hit(10.0), "Neck", "Bullet_308Win", &tables, &mut rolls)
        .unwrap();
    assert!(report.bleed_started);

    let mut ticks = 0;
    while herd.is_bleeding(deer) && ticks < 100 {
        herd.tick();
        ticks += 1;
    }

    // 500 per tick: pre-tick level first drops below 500 on tick 11,
    // the bleed notices the death on tick 12
    assert_eq!(ticks, 12);
    assert!(!herd.get(deer).unwrap().is_alive());
}

#[test]
fn test_non_bleeding_zone_never_bleeds() {
    let tables = tables();
    let mut herd = Herd::new(tables.tuning().clone());
    let deer = herd.spawn(tables.spawn(DEER).unwrap());
    let mut rolls = SeededRolls::new(99);

    for _ in 0..50 {
        let hit = DamageEvent::new().with("Legs", ResourceKind::Health, 0.0);
        let report = herd
            .hit(deer, &hit, "Legs", "Bullet_308Win", &tables, &mut rolls)
            .unwrap();
        assert!(!report.bleed_started);
    }
    assert!(!herd.is_bleeding(deer));
}

#[test]
fn test_load_tables_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[creatures.Animal_CanisLupus.zones.Torso]
can_bleed = true

[ammo.Arrow]
bleed_threshold = 0.75
"#
    )
    .unwrap();

    let tables = DamageTables::load(file.path()).unwrap();
    let wolf = tables.spawn("Animal_CanisLupus").unwrap();
    assert_eq!(wolf.health("Torso", ResourceKind::Health), 100.0);
    assert_eq!(blood(&wolf), 5000.0);

    use wound_sim::combat::BleedConfig;
    assert!(tables.can_bleed("Animal_CanisLupus", "Torso"));
    assert_eq!(tables.bleed_threshold("Arrow"), 0.75);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = DamageTables::load(std::path::Path::new("/nonexistent/damage.toml")).unwrap_err();
    assert!(matches!(err, WoundError::IoError(_)));
}

#[test]
fn test_bundled_tables_parse() {
    let tables = DamageTables::from_toml_str(include_str!("../data/damage_tables.toml")).unwrap();
    assert!(tables.spawn(DEER).is_ok());
    assert!(tables.spawn("Animal_SusScrofa").is_ok());
}
